// src/web/fetch.rs

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCache, RequestInit, Response};

use crate::error::{DictionaryError, Result};

/// One GET of `url`, bypassing caches so the origin always revalidates.
pub async fn fetch_text(url: &str) -> Result<String> {
    let window = web_sys::window().ok_or_else(|| DictionaryError::Dom("no window".to_string()))?;

    let headers = Headers::new().map_err(DictionaryError::network)?;
    headers.set("Cache-Control", "no-cache").map_err(DictionaryError::network)?;
    headers.set("Pragma", "no-cache").map_err(DictionaryError::network)?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_cache(RequestCache::Reload);
    init.set_headers(&headers);

    let request = Request::new_with_str_and_init(url, &init).map_err(DictionaryError::network)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(DictionaryError::network)?
        .dyn_into()
        .map_err(DictionaryError::network)?;

    if !response.ok() {
        return Err(DictionaryError::HttpStatus(response.status()));
    }

    let body = JsFuture::from(response.text().map_err(DictionaryError::network)?)
        .await
        .map_err(DictionaryError::network)?;
    body.as_string()
        .ok_or_else(|| DictionaryError::Network("response body is not text".to_string()))
}
