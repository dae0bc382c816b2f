//! Résumé bundle: a single page of sections with an animated mobile menu, a
//! navbar that highlights the section in view and a scroll-to-top button.

use super::WebDom;
use super::runtime::{Bindings, Observer};
use super::wiring;
use crate::components::active_nav::ActiveNavLink;
use crate::components::scroll_top::ScrollToTop;
use crate::config::BehaviorConfig;
use std::rc::Rc;
use wasm_bindgen::JsValue;

pub(super) fn bind(dom: &Rc<WebDom>, config: &BehaviorConfig) -> Result<Bindings, JsValue> {
    let mut bindings = Bindings::new();
    wiring::menu(dom, config, &mut bindings)?;
    wiring::smooth_scroll(dom, config, &mut bindings)?;
    wiring::navbar(dom, config, &mut bindings)?;
    wiring::reveal(dom, config, &mut bindings)?;
    scroll_top(dom, config, &mut bindings)?;
    active_nav(dom, config, &mut bindings)?;
    Ok(bindings)
}

fn scroll_top(
    dom: &Rc<WebDom>,
    config: &BehaviorConfig,
    bindings: &mut Bindings,
) -> Result<(), JsValue> {
    let Some(button) = ScrollToTop::bind(&**dom, &config.scroll_top) else {
        return Ok(());
    };
    let button = Rc::new(button);
    {
        let window = dom.window().clone();
        let (dom, button) = (dom.clone(), button.clone());
        bindings.listen(window.as_ref(), "scroll", move |_| button.on_scroll(&dom))?;
    }
    let target = button.button().clone();
    let dom = dom.clone();
    bindings.listen(target.as_ref(), "click", move |_| button.on_click(&dom))
}

fn active_nav(
    dom: &Rc<WebDom>,
    config: &BehaviorConfig,
    bindings: &mut Bindings,
) -> Result<(), JsValue> {
    let Some(nav) = ActiveNavLink::bind(&**dom) else {
        return Ok(());
    };
    let nav = Rc::new(nav);
    let observer = {
        let (dom, nav) = (dom.clone(), nav.clone());
        Observer::new(&config.active_nav.root_margin, 0.0, move |entry, _| {
            nav.on_intersection(&dom, &entry.target(), entry.is_intersecting());
        })?
    };
    for section in nav.sections() {
        observer.observe(section);
    }
    bindings.keep_observer(observer);
    Ok(())
}
