use dioxus::prelude::*;

use crate::{
    domain::{ParamEdit, ParamField, WritingSpeed},
    ui::theme,
};

#[component]
pub fn SpeedSelector(selected: WritingSpeed, on_edit: EventHandler<ParamEdit>) -> Element {
    rsx! {
        fieldset { class: "{theme::FIELD}",
            legend { class: "{theme::FIELD_LABEL}", "{ParamField::WordsPerHour.label()}:" }
            div { class: "speed-options",
                for speed in WritingSpeed::ALL {
                    label {
                        key: "{speed.dom_id()}",
                        class: "{theme::speed_option(speed == selected)}",
                        r#for: "{speed.dom_id()}",
                        input {
                            id: "{speed.dom_id()}",
                            r#type: "radio",
                            name: "wordsPerHour",
                            value: "{speed.words_per_hour()}",
                            checked: speed == selected,
                            onchange: move |_| on_edit.call(ParamEdit::WordsPerHour(speed)),
                        }
                        "{speed.label()}"
                    }
                }
            }
        }
    }
}
