//! Blog bundle.
//!
//! Every page gets the shared chrome. The page-specific part is picked from
//! the URL path:
//!
//! ```text
//! index.html, */     typing banner + post list
//! post.html          single post (fetch, render, prev/next, related)
//! contact.html       contact form
//! ```

use super::WebDom;
use super::runtime::{Bindings, Ticker, fetch_posts, sleep};
use super::wiring::{self, event_element};
use crate::components::contact::{ContactForm, SubmitOutcome};
use crate::components::post_list::PostManager;
use crate::components::post_page::PostPage;
use crate::components::typing::TypingView;
use crate::config::BehaviorConfig;
use crate::route::BlogPage;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::Event;

pub(super) fn bind(dom: &Rc<WebDom>, config: &BehaviorConfig) -> Result<Bindings, JsValue> {
    let mut bindings = Bindings::new();
    wiring::theme(dom, config, &mut bindings)?;
    wiring::menu(dom, config, &mut bindings)?;
    wiring::navbar(dom, config, &mut bindings)?;
    wiring::reveal(dom, config, &mut bindings)?;
    wiring::smooth_scroll(dom, config, &mut bindings)?;

    let page = BlogPage::from_path(&dom.pathname());
    log::debug!("blog page: {page:?}");
    match page {
        BlogPage::Index => {
            typing(dom, config, &mut bindings)?;
            post_list(dom, config, &mut bindings)?;
        }
        BlogPage::Post => post_page(dom, config, &bindings),
        BlogPage::Contact => contact(dom, config, &mut bindings)?,
        BlogPage::Other => {}
    }
    Ok(bindings)
}

fn typing(dom: &Rc<WebDom>, config: &BehaviorConfig, bindings: &mut Bindings) -> Result<(), JsValue> {
    let Some(mut view) = TypingView::bind(&**dom, &config.typing) else {
        return Ok(());
    };
    let first = view.tick(dom);
    let window = dom.window().clone();
    let dom = dom.clone();
    let ticker = Ticker::start(&window, first, move || Some(view.tick(&dom)))?;
    bindings.keep_ticker(ticker);
    Ok(())
}

fn post_list(
    dom: &Rc<WebDom>,
    config: &BehaviorConfig,
    bindings: &mut Bindings,
) -> Result<(), JsValue> {
    let Some(manager) = PostManager::bind(&**dom, config) else {
        return Ok(());
    };
    let url = manager.data_url().to_string();
    let filter = manager.filter().cloned();
    let manager = Rc::new(RefCell::new(manager));

    if let Some(filter) = filter {
        let (dom, manager) = (dom.clone(), manager.clone());
        bindings.listen(filter.as_ref(), "click", move |event| {
            if let Some(target) = event_element(&event) {
                manager.borrow_mut().on_filter_click(&dom, &target);
            }
        })?;
    }

    let alive = bindings.alive();
    let dom = dom.clone();
    spawn_local(async move {
        let result = fetch_posts(dom.window(), &url).await;
        if !alive.get() {
            log::debug!("posts loaded after teardown, dropping");
            return;
        }
        manager.borrow_mut().finish_load(&dom, result);
    });
    Ok(())
}

fn post_page(dom: &Rc<WebDom>, config: &BehaviorConfig, bindings: &Bindings) {
    let Some(page) = PostPage::bind(&**dom, &config.posts) else {
        return;
    };
    let Some(id) = page.requested_id(dom) else {
        return;
    };
    let alive = bindings.alive();
    let dom = dom.clone();
    spawn_local(async move {
        let result = fetch_posts(dom.window(), page.data_url()).await;
        if alive.get() {
            page.finish_load(&dom, id, result);
        }
    });
}

fn contact(dom: &Rc<WebDom>, config: &BehaviorConfig, bindings: &mut Bindings) -> Result<(), JsValue> {
    let Some(form) = ContactForm::bind(&**dom, &config.contact) else {
        return Ok(());
    };
    let fields = form.fields().to_vec();
    let form_element = form.form().clone();
    let modal = form.modal().cloned();
    let close = form.close_button().cloned();
    let form = Rc::new(RefCell::new(form));

    for field in &fields {
        let validate = {
            let (dom, form, field) = (dom.clone(), form.clone(), field.clone());
            move |_: Event| {
                form.borrow().validate_field(&dom, &field);
            }
        };
        let clear = {
            let (dom, form, field) = (dom.clone(), form.clone(), field.clone());
            move |_: Event| form.borrow().clear_error(&dom, &field)
        };
        bindings.listen(field.as_ref(), "blur", validate)?;
        bindings.listen(field.as_ref(), "input", clear)?;
    }

    {
        let alive = bindings.alive();
        let (dom, form) = (dom.clone(), form.clone());
        bindings.listen(form_element.as_ref(), "submit", move |event| {
            event.prevent_default();
            let outcome = form.borrow_mut().begin_submit(&dom);
            let SubmitOutcome::Accepted(delay) = outcome else {
                return;
            };
            let (dom, form, alive) = (dom.clone(), form.clone(), alive.clone());
            spawn_local(async move {
                if let Err(err) = sleep(dom.window(), delay).await {
                    log::error!("submission delay failed: {err:?}");
                }
                if alive.get() {
                    form.borrow_mut().finish_submit(&dom);
                }
            });
        })?;
    }

    if let Some(close) = close {
        let (dom, form) = (dom.clone(), form.clone());
        bindings.listen(close.as_ref(), "click", move |_| {
            form.borrow().close_modal(&dom);
        })?;
    }
    if let Some(modal) = modal {
        let (dom, form) = (dom.clone(), form.clone());
        bindings.listen(modal.as_ref(), "click", move |event| {
            if let Some(target) = event_element(&event) {
                form.borrow().on_modal_click(&dom, &target);
            }
        })?;
    }
    Ok(())
}
