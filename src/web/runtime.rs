//! Owned browser resources.
//!
//! Every listener, observer and timer a bundle creates is wrapped in a type
//! that releases it on drop:
//!
//! | Type | Acquire | Release on drop |
//! |------|---------|-----------------|
//! | [`Listener`] | `addEventListener` | `removeEventListener` |
//! | [`Timeout`] | `setTimeout` (one shot) | `clearTimeout` |
//! | [`Ticker`] | `setTimeout` chain | `clearTimeout` of the pending tick |
//! | [`Observer`] | `new IntersectionObserver` | `disconnect()` |
//!
//! A [`Bindings`] collects them for one bundle. Dropping it tears the bundle
//! down completely.
//!
//! A timer must never be dropped from inside its own callback: the closure
//! would be freed while running. Slots that are refilled from event handlers
//! ([`TimerSlot`]) satisfy this as long as a timer's callback does not touch
//! its own slot.

use crate::posts::LoadError;
use crate::types::PostsDocument;
use js_sys::{Array, Function, Promise};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Response, Window,
};

fn millis(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}

// =============================================================================
// Event listeners
// =============================================================================

pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

// =============================================================================
// Timers
// =============================================================================

/// One-shot timer.
pub struct Timeout {
    window: Window,
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new<F>(window: &Window, delay: Duration, f: F) -> Result<Self, JsValue>
    where
        F: FnOnce() + 'static,
    {
        let callback = Closure::once(f);
        let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            millis(delay),
        )?;
        Ok(Self {
            window: window.clone(),
            handle,
            _callback: callback,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.window.clear_timeout_with_handle(self.handle);
    }
}

/// Shared holder for timers started from event handlers. Replacing the
/// contents cancels whatever was pending.
#[derive(Clone, Default)]
pub struct TimerSlot(Rc<RefCell<Vec<Timeout>>>);

impl TimerSlot {
    pub fn replace(&self, timers: Vec<Timeout>) {
        let previous = std::mem::replace(&mut *self.0.borrow_mut(), timers);
        drop(previous);
    }

    pub fn clear(&self) {
        self.replace(Vec::new());
    }
}

struct TickerInner {
    window: Window,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
    handle: Cell<Option<i32>>,
}

impl TickerInner {
    fn schedule(&self, delay: Duration) -> Result<(), JsValue> {
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return Ok(());
        };
        let handle = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis(delay),
            )?;
        self.handle.set(Some(handle));
        Ok(())
    }
}

/// Self-rescheduling timer. The step returns the delay before the next run,
/// or `None` to stop.
pub struct Ticker {
    inner: Rc<TickerInner>,
}

impl Ticker {
    pub fn start<F>(window: &Window, first: Duration, mut step: F) -> Result<Self, JsValue>
    where
        F: FnMut() -> Option<Duration> + 'static,
    {
        let inner = Rc::new(TickerInner {
            window: window.clone(),
            callback: RefCell::new(None),
            handle: Cell::new(None),
        });
        let weak: Weak<TickerInner> = Rc::downgrade(&inner);
        let callback = Closure::<dyn FnMut()>::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.handle.set(None);
            let Some(delay) = step() else {
                return;
            };
            if let Err(err) = inner.schedule(delay) {
                log::error!("failed to reschedule ticker: {err:?}");
            }
        });
        *inner.callback.borrow_mut() = Some(callback);
        inner.schedule(first)?;
        Ok(Self { inner })
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Some(handle) = self.inner.handle.take() {
            self.inner.window.clear_timeout_with_handle(handle);
        }
        self.inner.callback.borrow_mut().take();
    }
}

/// Resolve after `delay`.
pub async fn sleep(window: &Window, delay: Duration) -> Result<(), JsValue> {
    let mut schedule = |resolve: Function, _reject: Function| {
        if let Err(err) =
            window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis(delay))
        {
            log::error!("setTimeout failed: {err:?}");
        }
    };
    JsFuture::from(Promise::new(&mut schedule)).await.map(|_| ())
}

// =============================================================================
// Intersection observers
// =============================================================================

pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    /// `on_entry` receives every entry of every batch.
    pub fn new<F>(root_margin: &str, threshold: f64, mut on_entry: F) -> Result<Self, JsValue>
    where
        F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_entry(&entry, &observer);
                    }
                }
            },
        );
        let init = IntersectionObserverInit::new();
        init.set_root_margin(root_margin);
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

// =============================================================================
// Fetch
// =============================================================================

fn network(err: JsValue) -> LoadError {
    LoadError::Network(
        err.as_string()
            .unwrap_or_else(|| format!("{err:?}")),
    )
}

pub async fn fetch_text(window: &Window, url: &str) -> Result<String, LoadError> {
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(network)?;
    let response: Response = response.dyn_into().map_err(network)?;
    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }
    let body = JsFuture::from(response.text().map_err(network)?)
        .await
        .map_err(network)?;
    body.as_string()
        .ok_or_else(|| LoadError::Network("response body is not text".to_string()))
}

pub async fn fetch_posts(window: &Window, url: &str) -> Result<PostsDocument, LoadError> {
    let text = fetch_text(window, url).await?;
    Ok(PostsDocument::from_json(&text)?)
}

// =============================================================================
// Bundle ownership
// =============================================================================

/// Everything one bundle keeps alive.
#[derive(Default)]
pub struct Bindings {
    listeners: Vec<Listener>,
    observers: Vec<Observer>,
    slots: Vec<TimerSlot>,
    tickers: Vec<Ticker>,
    alive: Rc<Cell<bool>>,
}

impl Bindings {
    pub fn new() -> Self {
        let bindings = Self::default();
        bindings.alive.set(true);
        bindings
    }

    pub fn listen<F>(&mut self, target: &EventTarget, event: &'static str, handler: F) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        self.listeners.push(Listener::new(target, event, handler)?);
        Ok(())
    }

    pub fn keep_observer(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    /// A timer slot released together with the bundle.
    pub fn timer_slot(&mut self) -> TimerSlot {
        let slot = TimerSlot::default();
        self.slots.push(slot.clone());
        slot
    }

    pub fn keep_ticker(&mut self, ticker: Ticker) {
        self.tickers.push(ticker);
    }

    /// Flag cleared on teardown. Async tasks check it after every await.
    pub fn alive(&self) -> Rc<Cell<bool>> {
        self.alive.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Drop for Bindings {
    fn drop(&mut self) {
        self.alive.set(false);
        self.tickers.clear();
        for slot in &self.slots {
            slot.clear();
        }
        self.observers.clear();
        self.listeners.clear();
    }
}
