use dioxus::prelude::*;

use crate::{domain::OpportunityCost, ui::theme, util::format::format_count};

/// Bullet list translating the wasted totals into alternative research spend.
#[component]
pub fn OpportunityList(cost: OpportunityCost) -> Element {
    let lines = [
        (cost.phd_studentships, "PhD studentships"),
        (cost.conference_bursaries, "conference bursaries"),
        (cost.research_papers, "research papers"),
    ];

    rsx! {
        div { class: "{theme::PANEL}",
            h3 { class: "{theme::PANEL_TITLE}", "Opportunity cost" }
            p { class: "{theme::MUTED}", "The same time and money could have funded:" }
            ul { class: "opportunity-list",
                for (count, what) in lines {
                    li { key: "{what}", "• {format_count(count)} {what}" }
                }
            }
        }
    }
}
