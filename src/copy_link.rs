// src/copy_link.rs
//
// "Copy link" buttons: write the share URL to the clipboard, show "Copied"
// for a while, then go back. A new copy cancels the pending revert of the
// previous one so the label never flips back early.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{DictionaryError, Result};
use crate::{console_error, console_log, console_warn};

#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// The visible side of a copy action.
pub trait CopyLinkView {
    fn set_copied(&self, copied: bool);
    fn set_label(&self, label: &str);
}

pub trait RevertTimer {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Result<Self::Handle>;
    fn cancel(&self, handle: Self::Handle);
}

#[derive(Debug, Clone, PartialEq)]
pub struct CopyLabels {
    pub idle: String,
    pub copied: String,
}

impl Default for CopyLabels {
    fn default() -> Self {
        CopyLabels {
            idle: "Copy link".to_string(),
            copied: "Copied".to_string(),
        }
    }
}

pub struct CopyLinkAction<V, T: RevertTimer> {
    url: Option<String>,
    labels: CopyLabels,
    revert_after_ms: u32,
    view: V,
    timer: T,
    pending: Option<T::Handle>,
}

impl<V, T> CopyLinkAction<V, T>
where
    V: CopyLinkView + 'static,
    T: RevertTimer + 'static,
{
    pub fn new(
        url: Option<String>,
        labels: CopyLabels,
        revert_after_ms: u32,
        view: V,
        timer: T,
    ) -> Self {
        CopyLinkAction {
            url: url.filter(|u| !u.is_empty()),
            labels,
            revert_after_ms,
            view,
            timer,
            pending: None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Copies this action's URL. On failure nothing visible changes.
    pub async fn activate<C: Clipboard>(this: &Rc<RefCell<Self>>, clipboard: &C) -> Result<()> {
        let url = match this.borrow().url.clone() {
            Some(url) => url,
            None => {
                console_warn!("{}", DictionaryError::MissingUrl);
                return Err(DictionaryError::MissingUrl);
            }
        };

        if let Err(e) = clipboard.write_text(&url).await {
            console_error!("Failed to copy URL: {}", e);
            return Err(e);
        }

        if let Err(e) = Self::mark_copied(this) {
            console_error!("Failed to schedule copy label revert: {}", e);
            return Err(e);
        }
        console_log!("URL copied to clipboard: {}", url);
        Ok(())
    }

    /// Schedules the revert before touching the view, so a timer failure
    /// leaves the button (and any earlier pending revert) as it was.
    fn mark_copied(this: &Rc<RefCell<Self>>) -> Result<()> {
        let mut action = this.borrow_mut();

        let weak = Rc::downgrade(this);
        let handle = action.timer.schedule(
            action.revert_after_ms,
            Box::new(move || {
                if let Some(action) = weak.upgrade() {
                    action.borrow_mut().revert();
                }
            }),
        )?;

        if let Some(previous) = action.pending.replace(handle) {
            action.timer.cancel(previous);
        }
        action.view.set_copied(true);
        action.view.set_label(&action.labels.copied);
        Ok(())
    }

    fn revert(&mut self) {
        self.pending = None;
        self.view.set_copied(false);
        self.view.set_label(&self.labels.idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeClipboard {
        written: RefCell<Vec<String>>,
        reject: bool,
    }

    impl Clipboard for FakeClipboard {
        async fn write_text(&self, text: &str) -> Result<()> {
            if self.reject {
                return Err(DictionaryError::Clipboard("NotAllowedError".to_string()));
            }
            self.written.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    #[derive(Clone)]
    struct FakeButton(Rc<RefCell<(bool, String)>>);

    impl FakeButton {
        fn new() -> Self {
            FakeButton(Rc::new(RefCell::new((false, "Copy link".to_string()))))
        }

        fn copied(&self) -> bool {
            self.0.borrow().0
        }

        fn label(&self) -> String {
            self.0.borrow().1.clone()
        }
    }

    impl CopyLinkView for FakeButton {
        fn set_copied(&self, copied: bool) {
            self.0.borrow_mut().0 = copied;
        }

        fn set_label(&self, label: &str) {
            self.0.borrow_mut().1 = label.to_string();
        }
    }

    type Scheduled = Vec<(u32, u32, Box<dyn FnOnce()>)>;

    /// Timer whose callbacks only run when the test says so.
    #[derive(Clone, Default)]
    struct ManualTimer {
        scheduled: Rc<RefCell<Scheduled>>,
        next_id: Rc<RefCell<u32>>,
        failing: Rc<std::cell::Cell<bool>>,
    }

    impl ManualTimer {
        /// Makes every later `schedule` fail, like a throwing `setTimeout`.
        fn fail_from_now(&self) {
            self.failing.set(true);
        }

        fn pending(&self) -> Vec<u32> {
            self.scheduled.borrow().iter().map(|(_, delay, _)| *delay).collect()
        }

        fn fire_all(&self) {
            let due: Scheduled = self.scheduled.borrow_mut().drain(..).collect();
            for (_, _, callback) in due {
                callback();
            }
        }
    }

    impl RevertTimer for ManualTimer {
        type Handle = u32;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Result<u32> {
            if self.failing.get() {
                return Err(DictionaryError::Dom("setTimeout failed".to_string()));
            }
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            self.scheduled.borrow_mut().push((*next, delay_ms, callback));
            Ok(*next)
        }

        fn cancel(&self, handle: u32) {
            self.scheduled.borrow_mut().retain(|(id, _, _)| *id != handle);
        }
    }

    type TestAction = Rc<RefCell<CopyLinkAction<FakeButton, ManualTimer>>>;

    fn action(url: Option<&str>, button: &FakeButton, timer: &ManualTimer) -> TestAction {
        Rc::new(RefCell::new(CopyLinkAction::new(
            url.map(str::to_string),
            CopyLabels::default(),
            2000,
            button.clone(),
            timer.clone(),
        )))
    }

    #[tokio::test]
    async fn copies_url_and_reverts_after_delay() {
        let button = FakeButton::new();
        let timer = ManualTimer::default();
        let clipboard = FakeClipboard::default();
        let action = action(Some("https://theclimatedictionary.com/#albedo"), &button, &timer);

        CopyLinkAction::activate(&action, &clipboard).await.unwrap();
        assert_eq!(
            *clipboard.written.borrow(),
            vec!["https://theclimatedictionary.com/#albedo".to_string()]
        );
        assert!(button.copied());
        assert_eq!(button.label(), "Copied");
        assert_eq!(timer.pending(), vec![2000]);

        timer.fire_all();
        assert!(!button.copied());
        assert_eq!(button.label(), "Copy link");
        assert!(!action.borrow().is_pending());
    }

    #[tokio::test]
    async fn missing_url_is_a_no_op() {
        let button = FakeButton::new();
        let timer = ManualTimer::default();
        let clipboard = FakeClipboard::default();
        let action = action(None, &button, &timer);

        let err = CopyLinkAction::activate(&action, &clipboard).await.unwrap_err();
        assert_eq!(err, DictionaryError::MissingUrl);
        assert!(clipboard.written.borrow().is_empty());
        assert_eq!(button.label(), "Copy link");
        assert!(timer.pending().is_empty());
    }

    #[tokio::test]
    async fn empty_url_counts_as_missing() {
        let button = FakeButton::new();
        let timer = ManualTimer::default();
        let action = action(Some(""), &button, &timer);

        let result = CopyLinkAction::activate(&action, &FakeClipboard::default()).await;
        assert_eq!(result, Err(DictionaryError::MissingUrl));
    }

    #[tokio::test]
    async fn rejected_write_leaves_button_untouched() {
        let button = FakeButton::new();
        let timer = ManualTimer::default();
        let clipboard = FakeClipboard {
            reject: true,
            ..Default::default()
        };
        let action = action(Some("https://theclimatedictionary.com/#x"), &button, &timer);

        let err = CopyLinkAction::activate(&action, &clipboard).await.unwrap_err();
        assert!(matches!(err, DictionaryError::Clipboard(_)));
        assert!(!button.copied());
        assert_eq!(button.label(), "Copy link");
        assert!(timer.pending().is_empty());
    }

    #[tokio::test]
    async fn repeated_copy_replaces_pending_revert() {
        let button = FakeButton::new();
        let timer = ManualTimer::default();
        let clipboard = FakeClipboard::default();
        let action = action(Some("https://theclimatedictionary.com/#x"), &button, &timer);

        CopyLinkAction::activate(&action, &clipboard).await.unwrap();
        CopyLinkAction::activate(&action, &clipboard).await.unwrap();
        assert_eq!(clipboard.written.borrow().len(), 2);
        assert_eq!(timer.pending().len(), 1);
        assert_eq!(button.label(), "Copied");

        timer.fire_all();
        assert_eq!(button.label(), "Copy link");
        assert!(!button.copied());
    }

    #[tokio::test]
    async fn timer_failure_leaves_button_idle() {
        let button = FakeButton::new();
        let timer = ManualTimer::default();
        timer.fail_from_now();
        let clipboard = FakeClipboard::default();
        let action = action(Some("https://theclimatedictionary.com/#x"), &button, &timer);

        let err = CopyLinkAction::activate(&action, &clipboard).await.unwrap_err();
        assert_eq!(err, DictionaryError::Dom("setTimeout failed".to_string()));
        assert!(!button.copied());
        assert_eq!(button.label(), "Copy link");
        assert!(!action.borrow().is_pending());
    }

    #[tokio::test]
    async fn timer_failure_keeps_earlier_revert() {
        let button = FakeButton::new();
        let timer = ManualTimer::default();
        let clipboard = FakeClipboard::default();
        let action = action(Some("https://theclimatedictionary.com/#x"), &button, &timer);

        CopyLinkAction::activate(&action, &clipboard).await.unwrap();
        timer.fail_from_now();
        assert!(CopyLinkAction::activate(&action, &clipboard).await.is_err());
        assert_eq!(button.label(), "Copied");
        assert_eq!(timer.pending(), vec![2000]);

        timer.fire_all();
        assert!(!button.copied());
        assert_eq!(button.label(), "Copy link");
    }
}
