//! Contact form with local validation and a simulated submission.
//!
//! Field errors are shown by adding `error` to the control and un-hiding
//! `#<control id>-error`. Submission runs in two halves around a fixed delay:
//! [`ContactForm::begin_submit`] validates and enters the loading state,
//! [`ContactForm::finish_submit`] restores the form and opens the success
//! modal. Only one submission can be in flight.

use super::HIDDEN;
use crate::config::ContactConfig;
use crate::dom::DomBackend;
use crate::validation::{FieldInput, check_field};
use std::time::Duration;

const ERROR: &str = "error";
const BACKDROP: &str = "modal-backdrop";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed; error markers are visible.
    Invalid,
    /// A previous submission has not finished yet.
    AlreadyPending,
    /// Call [`ContactForm::finish_submit`] after the delay.
    Accepted(Duration),
}

pub struct ContactForm<D: DomBackend> {
    form: D::Element,
    fields: Vec<D::Element>,
    submit_button: Option<D::Element>,
    submit_text: Option<D::Element>,
    spinner: Option<D::Element>,
    modal: Option<D::Element>,
    close_button: Option<D::Element>,
    body: Option<D::Element>,
    pending: bool,
    config: ContactConfig,
}

impl<D: DomBackend> ContactForm<D> {
    pub fn bind(dom: &D, config: &ContactConfig) -> Option<Self> {
        let form = dom.element_by_id("contact-form")?;
        let fields = dom.query_all(Some(&form), "input, textarea");
        Some(Self {
            fields,
            submit_button: dom.element_by_id("submit-btn"),
            submit_text: dom.element_by_id("submit-text"),
            spinner: dom.element_by_id("submit-spinner"),
            modal: dom.element_by_id("success-modal"),
            close_button: dom.element_by_id("close-modal"),
            body: dom.body(),
            form,
            pending: false,
            config: config.clone(),
        })
    }

    pub fn form(&self) -> &D::Element {
        &self.form
    }

    pub fn fields(&self) -> &[D::Element] {
        &self.fields
    }

    pub fn modal(&self) -> Option<&D::Element> {
        self.modal.as_ref()
    }

    pub fn close_button(&self) -> Option<&D::Element> {
        self.close_button.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    fn error_slot(&self, dom: &D, field: &D::Element) -> Option<D::Element> {
        let id = dom.attribute(field, "id")?;
        dom.element_by_id(&format!("{id}-error"))
    }

    /// Validate one control and update its error marker.
    pub fn validate_field(&self, dom: &D, field: &D::Element) -> bool {
        let value = dom.value(field);
        let kind = dom.input_type(field);
        let input = FieldInput {
            required: dom.attribute(field, "required").is_some(),
            kind: &kind,
            value: &value,
        };
        match check_field(input) {
            None => {
                self.clear_error(dom, field);
                true
            }
            Some(error) => {
                log::debug!("field {:?} invalid: {error:?}", dom.attribute(field, "id"));
                dom.add_class(field, ERROR);
                if let Some(slot) = self.error_slot(dom, field) {
                    dom.remove_class(&slot, HIDDEN);
                }
                false
            }
        }
    }

    pub fn clear_error(&self, dom: &D, field: &D::Element) {
        dom.remove_class(field, ERROR);
        if let Some(slot) = self.error_slot(dom, field) {
            dom.add_class(&slot, HIDDEN);
        }
    }

    /// Validate every control, marking all failures.
    pub fn validate_all(&self, dom: &D) -> bool {
        self.fields
            .iter()
            .fold(true, |ok, field| self.validate_field(dom, field) && ok)
    }

    pub fn begin_submit(&mut self, dom: &D) -> SubmitOutcome {
        if self.pending {
            log::debug!("submission already in flight");
            return SubmitOutcome::AlreadyPending;
        }
        if !self.validate_all(dom) {
            return SubmitOutcome::Invalid;
        }
        self.pending = true;
        self.set_loading(dom, true);
        log::info!("submitting contact form");
        SubmitOutcome::Accepted(self.config.submit_delay())
    }

    pub fn finish_submit(&mut self, dom: &D) {
        self.set_loading(dom, false);
        dom.reset_form(&self.form);
        self.open_modal(dom);
        self.pending = false;
    }

    fn set_loading(&self, dom: &D, loading: bool) {
        if let Some(button) = &self.submit_button {
            dom.set_disabled(button, loading);
        }
        if let Some(text) = &self.submit_text {
            let label = if loading {
                &self.config.loading_label
            } else {
                &self.config.idle_label
            };
            dom.set_text(text, label);
        }
        if let Some(spinner) = &self.spinner {
            if loading {
                dom.remove_class(spinner, HIDDEN);
            } else {
                dom.add_class(spinner, HIDDEN);
            }
        }
    }

    pub fn open_modal(&self, dom: &D) {
        let Some(modal) = &self.modal else {
            return;
        };
        dom.remove_class(modal, HIDDEN);
        if let Some(body) = &self.body {
            dom.set_style(body, "overflow", "hidden");
        }
    }

    pub fn close_modal(&self, dom: &D) {
        let Some(modal) = &self.modal else {
            return;
        };
        dom.add_class(modal, HIDDEN);
        if let Some(body) = &self.body {
            dom.set_style(body, "overflow", "");
        }
    }

    /// Click anywhere inside the modal. Closes it when the click landed on
    /// the modal itself or its backdrop.
    pub fn on_modal_click(&self, dom: &D, target: &D::Element) -> bool {
        let on_modal = self.modal.as_ref() == Some(target);
        if on_modal || dom.has_class(target, BACKDROP) {
            self.close_modal(dom);
            return true;
        }
        false
    }
}
