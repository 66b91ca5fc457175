use dioxus::prelude::*;
use tracing::warn;

use crate::{
    domain::{ParamEdit, ParamField},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
};

/// Free-entry numeric input. Keeps the typed text as a draft so invalid input
/// never reaches the parameters; the last valid value stays in effect.
#[component]
pub fn NumberField(field: ParamField, value: f64, on_edit: EventHandler<ParamEdit>) -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut draft = use_signal(|| field.input_text(value));
    let mut error = use_signal(|| None::<String>);

    let (min, max) = field.bounds();
    let message = error();
    let invalid = message.is_some();

    let on_blur = move |_| {
        if let Some(text) = blur_warning(error().as_deref(), &field.input_text(value)) {
            push_toast(toasts, ToastKind::Warning, text);
        }
        draft.set(field.input_text(value));
        error.set(None);
    };

    rsx! {
        div { class: "{theme::FIELD}",
            label { class: "{theme::FIELD_LABEL}", r#for: "{field:?}", "{field.label()}" }
            input {
                id: "{field:?}",
                class: "{theme::number_input(invalid)}",
                r#type: "number",
                inputmode: "decimal",
                min: "{min}",
                max: max.map(|max| max.to_string()),
                step: "{field.step()}",
                value: "{draft}",
                oninput: move |evt| {
                    let raw = evt.value();
                    match field.parse_edit(&raw) {
                        Ok(edit) => {
                            error.set(None);
                            on_edit.call(edit);
                        }
                        Err(err) => {
                            warn!(%err, "rejected parameter input");
                            error.set(Some(err.to_string()));
                        }
                    }
                    draft.set(raw);
                },
                onblur: on_blur,
            }
            if let Some(message) = message.as_deref() {
                p { class: "{theme::FIELD_ERROR}", "{message}" }
            }
        }
    }
}

/// Toast text shown when the field loses focus while holding rejected text.
fn blur_warning(error: Option<&str>, kept: &str) -> Option<String> {
    error.map(|err| format!("{err}. Keeping {kept}."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blur_warning_names_the_kept_value() {
        let err = ParamField::HourlyRate.parse_edit("abc").unwrap_err().to_string();
        let text = blur_warning(Some(&err), &ParamField::HourlyRate.input_text(50.0));
        assert_eq!(text, Some(format!("{err}. Keeping 50.")));
    }

    #[test]
    fn valid_text_raises_no_warning() {
        assert_eq!(blur_warning(None, "50"), None);
    }
}
