//! Stable element identifiers and accessibility labels for each form

use super::field::FormKind;
use serde::Serialize;

/// One addressable element of a rendered form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Element {
    pub id: &'static str,
    pub aria_label: &'static str,
}

impl Element {
    const fn new(id: &'static str, aria_label: &'static str) -> Self {
        Self { id, aria_label }
    }
}

/// The elements every single-field form exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormElements {
    pub form: Element,
    pub input: Element,
    pub label: Element,
    pub description: Element,
    pub submit: Element,
}

impl FormElements {
    pub fn for_kind(kind: FormKind) -> Self {
        match kind {
            FormKind::StringInput => Self {
                form: Element::new("string-input-form", "String Input Form"),
                input: Element::new("string-input", "String Input"),
                label: Element::new("string-input-label", "String Input Label"),
                description: Element::new("string-input-description", "String Input Description"),
                submit: Element::new("submit-button", "Submit"),
            },
            FormKind::FolderPath => Self {
                form: Element::new("folder-path-form", "Folder Path Form"),
                input: Element::new("folder-path-input", "Folder Path Input"),
                label: Element::new("folder-path-label", "Folder Path Label"),
                description: Element::new("folder-path-description", "Folder Path Description"),
                submit: Element::new("submit-button", "Submit"),
            },
            FormKind::Contact => Self {
                form: Element::new("contact-form", "Contact Form"),
                input: Element::new("contact-input", "Form Submit Input"),
                label: Element::new("contact-label", "Form Submit Label"),
                description: Element::new("contact-description", "Form Submit Description"),
                submit: Element::new("contact-submit-button", "Form Submit Button"),
            },
        }
    }
}
