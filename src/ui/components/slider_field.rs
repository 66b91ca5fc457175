use dioxus::prelude::*;
use tracing::warn;

use crate::{
    domain::{ParamEdit, ParamField},
    ui::theme,
};

/// Range input for a bounded parameter, with its live value in the label.
#[component]
pub fn SliderField(
    field: ParamField,
    value: f64,
    #[props(default)] suffix: String,
    on_edit: EventHandler<ParamEdit>,
) -> Element {
    let (min, max) = field.bounds();
    let max = max.unwrap_or(min);
    let text = field.input_text(value);

    rsx! {
        div { class: "{theme::FIELD}",
            label {
                class: "{theme::FIELD_LABEL}",
                r#for: "{field:?}",
                "{field.label()}: "
                span { class: "field-value", "{text}{suffix}" }
            }
            input {
                id: "{field:?}",
                class: "{theme::RANGE_INPUT}",
                r#type: "range",
                min: "{min}",
                max: "{max}",
                step: "{field.step()}",
                value: "{text}",
                oninput: move |evt| match field.parse_edit(&evt.value()) {
                    Ok(edit) => on_edit.call(edit),
                    Err(err) => warn!(%err, "ignoring slider input"),
                },
            }
        }
    }
}
