use dioxus::prelude::*;

use crate::client::service::validation::FieldErrors;

/// Inline message for one field of a validated form.
#[component]
pub fn FieldError(errors: FieldErrors, field: &'static str) -> Element {
    rsx!(
        if let Some(message) = errors.get(field) {
            p { class: "text-error text-sm mt-1", "{message}" }
        }
    )
}

/// Label wrapper used by every form field.
#[component]
pub fn Field(label: &'static str, children: Element) -> Element {
    rsx!(
        fieldset {
            class: "fieldset w-full",
            legend { class: "fieldset-legend", "{label}" }
            {children}
        }
    )
}
