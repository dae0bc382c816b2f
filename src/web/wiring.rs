//! Chrome shared by both bundles.
//!
//! Each function binds one component, attaches its listeners to `bindings`
//! and returns. A component whose elements are missing is skipped silently.

use super::WebDom;
use super::runtime::{Bindings, Observer, Timeout};
use crate::components::menu::{MenuEffect, MobileMenu};
use crate::components::navbar::NavbarScroll;
use crate::components::reveal::{Observe, ScrollAnimation};
use crate::components::smooth_scroll::SmoothScroll;
use crate::components::theme::ThemeManager;
use crate::config::BehaviorConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event};

const PREFERS_DARK: &str = "(prefers-color-scheme: dark)";

/// The element an event was dispatched to, if it is one.
pub(super) fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

pub(super) fn theme(
    dom: &Rc<WebDom>,
    config: &BehaviorConfig,
    bindings: &mut Bindings,
) -> Result<(), JsValue> {
    let Some(theme) = ThemeManager::bind(&**dom, &config.theme) else {
        return Ok(());
    };
    let theme = Rc::new(theme);
    for toggle in theme.toggles() {
        let (dom, theme) = (dom.clone(), theme.clone());
        bindings.listen(toggle.as_ref(), "click", move |_| {
            theme.toggle(&dom);
        })?;
    }
    if let Some(query) = dom.window().match_media(PREFERS_DARK)? {
        let (dom, theme) = (dom.clone(), theme.clone());
        let watched = query.clone();
        bindings.listen(query.as_ref(), "change", move |_| {
            theme.on_system_change(&dom, watched.matches());
        })?;
    }
    Ok(())
}

pub(super) fn menu(
    dom: &Rc<WebDom>,
    config: &BehaviorConfig,
    bindings: &mut Bindings,
) -> Result<(), JsValue> {
    let Some(menu) = MobileMenu::bind(&**dom, &config.menu) else {
        return Ok(());
    };
    let menu = Rc::new(menu);
    let pending = bindings.timer_slot();
    let apply: Rc<dyn Fn(MenuEffect)> = {
        let (dom, menu) = (dom.clone(), menu.clone());
        Rc::new(move |effect: MenuEffect| match effect {
            MenuEffect::Nothing => {}
            MenuEffect::CancelHide => pending.clear(),
            MenuEffect::HideAfter(delay) => {
                let window = dom.window().clone();
                let (dom, menu) = (dom.clone(), menu.clone());
                match Timeout::new(&window, delay, move || menu.finish_close(&dom)) {
                    Ok(timer) => pending.replace(vec![timer]),
                    Err(err) => log::error!("failed to schedule menu hide: {err:?}"),
                }
            }
        })
    };

    {
        let button = menu.button().clone();
        let (dom, menu, apply) = (dom.clone(), menu.clone(), apply.clone());
        bindings.listen(button.as_ref(), "click", move |_| {
            apply(menu.toggle(&dom));
        })?;
    }
    for link in menu.links() {
        let (dom, menu, apply) = (dom.clone(), menu.clone(), apply.clone());
        bindings.listen(link.as_ref(), "click", move |_| {
            apply(menu.close(&dom));
        })?;
    }
    Ok(())
}

pub(super) fn navbar(
    dom: &Rc<WebDom>,
    config: &BehaviorConfig,
    bindings: &mut Bindings,
) -> Result<(), JsValue> {
    let Some(navbar) = NavbarScroll::bind(&**dom, &config.navbar) else {
        return Ok(());
    };
    let navbar = RefCell::new(navbar);
    let window = dom.window().clone();
    let dom = dom.clone();
    bindings.listen(window.as_ref(), "scroll", move |_| {
        navbar.borrow_mut().on_scroll(&dom);
    })
}

pub(super) fn reveal(
    dom: &Rc<WebDom>,
    config: &BehaviorConfig,
    bindings: &mut Bindings,
) -> Result<(), JsValue> {
    let Some(reveal) = ScrollAnimation::bind(&**dom, &config.reveal) else {
        return Ok(());
    };
    let reveal = Rc::new(reveal);
    let observer = {
        let (dom, reveal) = (dom.clone(), reveal.clone());
        Observer::new(
            &config.reveal.root_margin,
            config.reveal.threshold,
            move |entry, observer| {
                let target = entry.target();
                if reveal.on_intersection(&dom, &target, entry.is_intersecting()) == Observe::Stop {
                    observer.unobserve(&target);
                }
            },
        )?
    };
    for target in reveal.targets() {
        observer.observe(target);
    }
    bindings.keep_observer(observer);
    Ok(())
}

pub(super) fn smooth_scroll(
    dom: &Rc<WebDom>,
    config: &BehaviorConfig,
    bindings: &mut Bindings,
) -> Result<(), JsValue> {
    let Some(scroll) = SmoothScroll::bind(&**dom, &config.smooth_scroll) else {
        return Ok(());
    };
    let scroll = Rc::new(scroll);
    for anchor in scroll.anchors() {
        let (dom, scroll, target) = (dom.clone(), scroll.clone(), anchor.clone());
        bindings.listen(anchor.as_ref(), "click", move |event| {
            if scroll.on_click(&dom, &target) {
                event.prevent_default();
            }
        })?;
    }
    Ok(())
}
