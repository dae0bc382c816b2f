//! Highlights the navigation link of the section in the middle of the
//! viewport. At most one link carries `active`: when a section is linked
//! more than once (desktop bar and mobile menu), the first link in document
//! order wins.

use super::ACTIVE;
use crate::dom::DomBackend;

const SECTIONS: &str = "section[id]";
const NAV_LINKS: &str = r##"nav a[href^="#"]"##;

pub struct ActiveNavLink<D: DomBackend> {
    sections: Vec<D::Element>,
    links: Vec<D::Element>,
}

impl<D: DomBackend> ActiveNavLink<D> {
    pub fn bind(dom: &D) -> Option<Self> {
        let sections = dom.query_all(None, SECTIONS);
        let links = dom.query_all(None, NAV_LINKS);
        if sections.is_empty() || links.is_empty() {
            return None;
        }
        Some(Self { sections, links })
    }

    pub fn sections(&self) -> &[D::Element] {
        &self.sections
    }

    pub fn on_intersection(&self, dom: &D, section: &D::Element, intersecting: bool) {
        if !intersecting {
            return;
        }
        let Some(id) = dom.attribute(section, "id") else {
            return;
        };
        let wanted = format!("#{id}");
        for link in &self.links {
            dom.remove_class(link, ACTIVE);
        }
        let target = self
            .links
            .iter()
            .find(|link| dom.attribute(link, "href").as_deref() == Some(wanted.as_str()));
        if let Some(link) = target {
            dom.add_class(link, ACTIVE);
        }
    }
}
