//! Input Field Components
//!
//! Labeled text inputs for the admin login form.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Input label text; also used to derive the element id
    pub label: String,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, password, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// `autocomplete` hint for the platform
    #[props(default)]
    pub autocomplete: Option<String>,
}

/// Text input field
///
/// # Example
///
/// ```rust,ignore
/// let mut username = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: username(),
///         oninput: move |s| username.set(s),
///         label: "Username".to_string(),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = field_id(&props.label);

    rsx! {
        div { class: "form-field",
            label {
                class: "input-label",
                r#for: "{id}",
                "{props.label}"
                if props.required {
                    span { class: "input-required", " *" }
                }
            }
            input {
                id: "{id}",
                class: "input-field",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                autocomplete: props.autocomplete.as_deref().unwrap_or("off"),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Element id for a labeled field: `field-` plus the lowercased label with
/// runs of non-alphanumerics collapsed to `-`.
pub fn field_id(label: &str) -> String {
    let mut id = String::from("field");
    let mut pending_dash = true;
    for c in label.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash {
                id.push('-');
                pending_dash = false;
            }
            id.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_id_is_slugged() {
        assert_eq!(field_id("Username"), "field-username");
        assert_eq!(field_id("Admin  Password!"), "field-admin-password");
        assert_eq!(field_id(""), "field");
    }
}
