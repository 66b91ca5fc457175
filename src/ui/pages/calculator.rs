use dioxus::prelude::*;

use crate::{
    domain::{AppState, ParamEdit, ParamField},
    ui::{
        components::{
            kpi_card::KpiCard,
            number_field::NumberField,
            opportunity_list::OpportunityList,
            slider_field::SliderField,
            speed_selector::SpeedSelector,
            toast::{push_toast, ToastKind, ToastMessage},
            waste_chart::WasteChart,
        },
        theme,
    },
    util::format::{format_currency, format_hours, format_number},
};

const SLIDER_FIELDS: [(ParamField, &str); 3] = [
    (ParamField::WordsNeeded, ""),
    (ParamField::WordsRequested, ""),
    (ParamField::FundingRate, "%"),
];

const NUMBER_FIELDS: [ParamField; 2] = [ParamField::HourlyRate, ParamField::TotalApplications];

#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let (params, resets) = state.with(|st| (st.params, st.resets));
    let report = state.with(|st| st.report());
    let breakdown = report.breakdown;

    let on_edit = {
        let mut state = state;
        EventHandler::new(move |edit: ParamEdit| state.with_mut(|st| st.apply_edit(edit)))
    };

    let on_reset = {
        let mut state = state;
        move |_| {
            state.with_mut(|st| st.reset());
            push_toast(toasts, ToastKind::Info, "Restored default parameters.");
        }
    };

    let time_description = format!(
        "{} wasted words per application at {} words per hour",
        format_number(breakdown.wasted_words),
        params.words_per_hour.words_per_hour()
    );
    let money_description = format!("At {} per hour", format_currency(params.hourly_rate));

    rsx! {
        div { class: "calculator-grid",
            section { class: "{theme::PANEL}",
                h2 { class: "{theme::PANEL_TITLE}", "Input Parameters" }
                for (field, suffix) in SLIDER_FIELDS {
                    SliderField {
                        key: "{field:?}",
                        field,
                        value: params.value_of(field),
                        suffix: suffix.to_string(),
                        on_edit,
                    }
                }
                for field in NUMBER_FIELDS {
                    NumberField {
                        key: "{field:?}-{resets}",
                        field,
                        value: params.value_of(field),
                        on_edit,
                    }
                }
                SpeedSelector { selected: params.words_per_hour, on_edit }
                button { class: "{theme::BTN_SECONDARY}", onclick: on_reset, "Reset defaults" }
            }

            section { class: "{theme::PANEL}",
                h2 { class: "{theme::PANEL_TITLE}", "Cost Visualization" }
                WasteChart { data: report.chart_data().to_vec() }
                div { class: "kpi-grid",
                    KpiCard {
                        title: "Total time spent (unfunded projects)".to_string(),
                        value: format_hours(report.estimate.wasted_time),
                        description: Some(time_description),
                    }
                    KpiCard {
                        title: "Total cost (unfunded projects)".to_string(),
                        value: format_currency(report.estimate.wasted_money),
                        description: Some(money_description),
                    }
                }
                OpportunityList { cost: report.opportunity }
            }
        }
    }
}
