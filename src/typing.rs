//! Typewriter state machine.
//!
//! ```text
//!   Typing ──full──▶ Pausing ──▶ Deleting ──empty──▶ Advancing ──▶ Typing
//!     ▲ +1 char/tick              -1 char/tick        index += 1
//! ```
//!
//! [`TypingEffect::tick`] performs one step and returns the text to display
//! together with the delay before the next tick. The caller owns the timer,
//! so the loop is cancellable by simply not scheduling the next tick.
//!
//! Lengths are counted in `char`s, so multi-byte text never splits a code
//! point.

use crate::config::TypingConfig;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Pausing,
    Deleting,
    Advancing,
}

/// Output of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub next_tick: Duration,
}

#[derive(Debug, Clone)]
pub struct TypingEffect {
    texts: Vec<String>,
    index: usize,
    /// Number of chars of the current target on display.
    shown: usize,
    phase: Phase,
    typing_speed: Duration,
    deleting_speed: Duration,
    pause: Duration,
    advance_delay: Duration,
}

impl TypingEffect {
    /// Returns `None` when there is nothing to type.
    pub fn new(config: &TypingConfig) -> Option<Self> {
        if config.texts.is_empty() {
            return None;
        }
        let ms = |v: u32| Duration::from_millis(v.into());
        Some(Self {
            texts: config.texts.clone(),
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            typing_speed: ms(config.typing_speed_ms),
            deleting_speed: ms(config.deleting_speed_ms),
            pause: ms(config.pause_ms),
            advance_delay: ms(config.advance_delay_ms),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn target(&self) -> &str {
        &self.texts[self.index]
    }

    /// The text currently on display.
    pub fn displayed(&self) -> String {
        self.target().chars().take(self.shown).collect()
    }

    fn target_len(&self) -> usize {
        self.target().chars().count()
    }

    /// Advance one step.
    pub fn tick(&mut self) -> Frame {
        let next_tick = match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(self.target_len());
                if self.shown == self.target_len() {
                    self.phase = Phase::Pausing;
                    self.pause
                } else {
                    self.typing_speed
                }
            }
            Phase::Pausing | Phase::Deleting => {
                self.phase = Phase::Deleting;
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phase = Phase::Advancing;
                    self.advance_delay
                } else {
                    self.deleting_speed
                }
            }
            Phase::Advancing => {
                self.index = (self.index + 1) % self.texts.len();
                self.phase = Phase::Typing;
                self.shown = 1.min(self.target_len());
                if self.shown == self.target_len() {
                    self.phase = Phase::Pausing;
                    self.pause
                } else {
                    self.typing_speed
                }
            }
        };
        Frame {
            text: self.displayed(),
            next_tick,
        }
    }
}
