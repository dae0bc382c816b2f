//! Typewriter headline bound to `#typing-text`.

use crate::config::TypingConfig;
use crate::dom::DomBackend;
use crate::typing::TypingEffect;
use std::time::Duration;

pub struct TypingView<D: DomBackend> {
    element: D::Element,
    effect: TypingEffect,
}

impl<D: DomBackend> TypingView<D> {
    pub fn bind(dom: &D, config: &TypingConfig) -> Option<Self> {
        let element = dom.element_by_id("typing-text")?;
        let effect = TypingEffect::new(config)?;
        Some(Self { element, effect })
    }

    /// Render one frame and return the delay before the next one.
    pub fn tick(&mut self, dom: &D) -> Duration {
        let frame = self.effect.tick();
        dom.set_text(&self.element, &frame.text);
        frame.next_tick
    }
}
