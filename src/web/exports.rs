//! JavaScript entry points.
//!
//! ```js
//! import init, { start_blog, copy_link } from "./pkg/pagewire.js";
//! await init();
//! const handle = start_blog();
//! document.getElementById("copy-link").onclick = () => copy_link();
//! // later, before swapping the page body out:
//! handle.teardown();
//! ```

use super::runtime::{Bindings, Timeout, TimerSlot};
use super::{WebDom, blog, configure, resume};
use crate::components::toast::Toaster;
use crate::config::{BehaviorConfig, Bundle};
use crate::dom::DomBackend;
use crate::share::{self, Provider};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Element;

thread_local! {
    // Lifecycle timers of the toast on screen. Replacing them cancels the
    // previous toast's pending steps.
    static TOASTS: TimerSlot = TimerSlot::default();
}

/// A running bundle. Dropping it or calling [`teardown`](Self::teardown)
/// removes every listener, observer and timer it installed.
#[wasm_bindgen]
pub struct BundleHandle {
    bundle: Bundle,
    bindings: Option<Bindings>,
}

#[wasm_bindgen]
impl BundleHandle {
    #[wasm_bindgen(getter)]
    pub fn bundle(&self) -> String {
        self.bundle.name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.bindings.is_some()
    }

    pub fn teardown(&mut self) {
        if self.bindings.take().is_some() {
            log::info!("{} bundle torn down", self.bundle.name());
        }
    }
}

fn browser() -> Result<Rc<WebDom>, JsValue> {
    WebDom::new()
        .map(Rc::new)
        .ok_or_else(|| JsValue::from_str("pagewire needs a window with a document"))
}

type BindFn = fn(&Rc<WebDom>, &BehaviorConfig) -> Result<Bindings, JsValue>;

fn start(bundle: Bundle, bind: BindFn) -> Result<BundleHandle, JsValue> {
    let dom = browser()?;
    let config = configure(bundle, &dom);
    log::info!(
        "pagewire {} starting {} bundle",
        crate::version_string(),
        bundle.name()
    );
    let bindings = bind(&dom, &config)?;
    log::debug!(
        "{} bundle bound {} listeners",
        bundle.name(),
        bindings.listener_count()
    );
    Ok(BundleHandle {
        bundle,
        bindings: Some(bindings),
    })
}

#[wasm_bindgen]
pub fn start_blog() -> Result<BundleHandle, JsValue> {
    start(Bundle::Blog, blog::bind)
}

#[wasm_bindgen]
pub fn start_resume() -> Result<BundleHandle, JsValue> {
    start(Bundle::Resume, resume::bind)
}

fn share_page(provider: Provider) -> Result<(), JsValue> {
    let dom = browser()?;
    let config = configure(Bundle::Blog, &dom);
    let title = dom.document().title();
    share::share(&*dom, provider, &title, &config.share);
    Ok(())
}

#[wasm_bindgen]
pub fn share_to_twitter() -> Result<(), JsValue> {
    share_page(Provider::Twitter)
}

#[wasm_bindgen]
pub fn share_to_facebook() -> Result<(), JsValue> {
    share_page(Provider::Facebook)
}

/// Copy the page URL and report the outcome with a toast. A refused
/// clipboard write resolves normally; only the toast differs.
#[wasm_bindgen]
pub async fn copy_link() -> Result<(), JsValue> {
    let dom = browser()?;
    let config = configure(Bundle::Blog, &dom);
    let href = dom.location_href();
    let write = dom.window().navigator().clipboard().write_text(&href);
    let copied = match JsFuture::from(write).await {
        Ok(_) => true,
        Err(err) => {
            log::warn!("clipboard write failed: {err:?}");
            false
        }
    };
    let Some(toaster) = Toaster::bind(&*dom, &config.toast, &config.messages) else {
        return Ok(());
    };
    let Some(toast) = toaster.copy_result(&*dom, copied) else {
        return Ok(());
    };
    schedule_toast(&dom, Rc::new(toaster), toast)
}

type ToastStep = fn(&Toaster<WebDom>, &WebDom, &Element);

fn schedule_toast(
    dom: &Rc<WebDom>,
    toaster: Rc<Toaster<WebDom>>,
    toast: Element,
) -> Result<(), JsValue> {
    let schedule = toaster.schedule();
    let step = |delay: Duration, run: ToastStep| {
        let window = dom.window().clone();
        let (dom, toaster, toast) = (dom.clone(), toaster.clone(), toast.clone());
        Timeout::new(&window, delay, move || run(&toaster, &dom, &toast))
    };
    let timers = vec![
        step(schedule.reveal, Toaster::reveal)?,
        step(schedule.dismiss, Toaster::dismiss)?,
        step(schedule.remove, Toaster::discard)?,
    ];
    TOASTS.with(|slot| slot.replace(timers));
    Ok(())
}
