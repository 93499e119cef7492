// src/console.rs
//
// Thin logging macros. In the browser they go to the devtools console via
// `web_sys::console`; on host targets (unit tests, benches) they go to stderr,
// since imported JS functions cannot be called there.

#[cfg(target_arch = "wasm32")]
pub fn log(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(target_arch = "wasm32")]
pub fn error(msg: &str) {
    web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(msg: &str) {
    eprintln!("[log] {}", msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(msg: &str) {
    eprintln!("[warn] {}", msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(msg: &str) {
    eprintln!("[error] {}", msg);
}

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => { $crate::console::log(&format!($($arg)*)) };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => { $crate::console::warn(&format!($($arg)*)) };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => { $crate::console::error(&format!($($arg)*)) };
}
