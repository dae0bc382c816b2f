//! Scroll-triggered reveal.
//!
//! Targets matching the configured selector get `visible` once they
//! intersect the viewport. The intersection observer itself lives in the
//! `web` module; this side decides what an intersection means.

use super::VISIBLE;
use crate::config::RevealConfig;
use crate::dom::DomBackend;

/// Whether the observer should keep watching a target after an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observe {
    Keep,
    Stop,
}

pub struct ScrollAnimation<D: DomBackend> {
    targets: Vec<D::Element>,
    once: bool,
}

impl<D: DomBackend> ScrollAnimation<D> {
    /// `None` when nothing on the page matches the selector.
    pub fn bind(dom: &D, config: &RevealConfig) -> Option<Self> {
        let targets = dom.query_all(None, &config.selector);
        if targets.is_empty() {
            return None;
        }
        Some(Self {
            targets,
            once: config.once,
        })
    }

    pub fn targets(&self) -> &[D::Element] {
        &self.targets
    }

    pub fn on_intersection(&self, dom: &D, target: &D::Element, intersecting: bool) -> Observe {
        if !intersecting {
            return Observe::Keep;
        }
        dom.add_class(target, VISIBLE);
        if self.once { Observe::Stop } else { Observe::Keep }
    }
}
