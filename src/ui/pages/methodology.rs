use dioxus::prelude::*;

use crate::{
    domain::{AppState, CONFERENCE_BURSARY_COST, HOURS_PER_PAPER, PHD_STUDENTSHIP_COST},
    ui::theme,
    util::format::{format_currency, format_hours, format_number},
};

/// Shows the working behind the headline numbers for the current parameters.
#[component]
pub fn MethodologyPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let params = state.with(|st| st.params);
    let report = state.with(|st| st.report());
    let breakdown = report.breakdown;

    let steps = vec![
        (
            "Wasted words per application",
            format!(
                "max({} − {}, 0) = {}",
                params.words_requested,
                params.words_needed,
                format_number(breakdown.wasted_words)
            ),
        ),
        (
            "Hours per application",
            format!(
                "{} ÷ {} words per hour = {}",
                format_number(breakdown.wasted_words),
                params.words_per_hour.words_per_hour(),
                format_hours(breakdown.hours_per_application)
            ),
        ),
        (
            "Unfunded share",
            format!(
                "(100 − {}) ÷ 100 = {}",
                format_number(params.funding_rate),
                format_number(breakdown.unfunded_fraction)
            ),
        ),
        (
            "Unfunded applications",
            format!(
                "{} × {} = {}",
                format_number(params.total_applications as f64),
                format_number(breakdown.unfunded_fraction),
                format_number(breakdown.unfunded_applications)
            ),
        ),
        (
            "Total time",
            format!(
                "{} × {} = {}",
                format_hours(breakdown.hours_per_application),
                format_number(breakdown.unfunded_applications),
                format_hours(report.estimate.wasted_time)
            ),
        ),
        (
            "Total cost",
            format!(
                "{} × {} = {}",
                format_hours(report.estimate.wasted_time),
                format_currency(params.hourly_rate),
                format_currency(report.estimate.wasted_money)
            ),
        ),
    ];

    let conversions = [
        format!("1 PhD studentship = {}", format_currency(PHD_STUDENTSHIP_COST)),
        format!("1 conference bursary = {}", format_currency(CONFERENCE_BURSARY_COST)),
        format!("1 research paper = {}", format_hours(HOURS_PER_PAPER)),
    ];

    rsx! {
        div { class: "methodology",
            section { class: "{theme::PANEL}",
                h2 { class: "{theme::PANEL_TITLE}", "How the estimate is calculated" }
                p { class: "{theme::MUTED}",
                    "Only words beyond what a reviewer needs count as waste, and only for applications that go unfunded."
                }
                dl { class: "working",
                    for (title, working) in steps {
                        div { key: "{title}",
                            dt { "{title}" }
                            dd { "{working}" }
                        }
                    }
                }
            }
            section { class: "{theme::PANEL}",
                h2 { class: "{theme::PANEL_TITLE}", "Opportunity cost conversions" }
                p { class: "{theme::MUTED}",
                    "Totals are rounded to the penny before conversion; partial units are dropped."
                }
                ul { class: "opportunity-list",
                    for line in conversions {
                        li { key: "{line}", "• {line}" }
                    }
                }
            }
        }
    }
}
