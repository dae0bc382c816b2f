//! Transient notifications.
//!
//! A toast is a `div.toast.<kind>` appended to `<body>`. Its lifecycle is
//! driven by three timers started together, measured from creation:
//!
//! ```text
//!   0ms       created (no `show`)
//!   10ms      `show` added          -> fades in
//!   3000ms    `show` removed        -> fades out
//!   3300ms    element removed
//! ```
//!
//! Showing a new toast removes any existing one first, so at most one toast
//! element exists at a time.

use crate::config::{MessagesConfig, ToastConfig};
use crate::dom::DomBackend;
use std::time::Duration;

const TOAST: &str = "toast";
const SHOW: &str = "show";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// Delays of the lifecycle steps, all relative to creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastSchedule {
    pub reveal: Duration,
    pub dismiss: Duration,
    pub remove: Duration,
}

pub struct Toaster<D: DomBackend> {
    body: D::Element,
    schedule: ToastSchedule,
    copy_success: String,
    copy_failure: String,
}

impl<D: DomBackend> Toaster<D> {
    pub fn bind(dom: &D, config: &ToastConfig, messages: &MessagesConfig) -> Option<Self> {
        let ms = |v: u32| Duration::from_millis(v.into());
        Some(Self {
            body: dom.body()?,
            schedule: ToastSchedule {
                reveal: ms(config.show_delay_ms),
                dismiss: ms(config.duration_ms),
                remove: ms(config.duration_ms) + ms(config.fade_ms),
            },
            copy_success: messages.copy_success.clone(),
            copy_failure: messages.copy_failure.clone(),
        })
    }

    pub fn schedule(&self) -> ToastSchedule {
        self.schedule
    }

    /// Replace any current toast with a new one. The caller schedules the
    /// lifecycle steps.
    pub fn show(&self, dom: &D, message: &str, kind: ToastKind) -> Option<D::Element> {
        for existing in dom.query_all(None, ".toast") {
            dom.remove(&existing);
        }
        let toast = dom.create_element("div")?;
        dom.set_attribute(&toast, "class", &format!("{TOAST} {}", kind.class()));
        dom.set_text(&toast, message);
        dom.append_child(&self.body, &toast);
        Some(toast)
    }

    /// Toast reporting the outcome of a clipboard write.
    pub fn copy_result(&self, dom: &D, copied: bool) -> Option<D::Element> {
        if copied {
            self.show(dom, &self.copy_success, ToastKind::Success)
        } else {
            self.show(dom, &self.copy_failure, ToastKind::Error)
        }
    }

    pub fn reveal(&self, dom: &D, toast: &D::Element) {
        dom.add_class(toast, SHOW);
    }

    pub fn dismiss(&self, dom: &D, toast: &D::Element) {
        dom.remove_class(toast, SHOW);
    }

    pub fn discard(&self, dom: &D, toast: &D::Element) {
        dom.remove(toast);
    }
}
