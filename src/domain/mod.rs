//! Calculation engine for grant-writing waste lives here.

pub mod app_state;
pub mod params;
pub mod waste;

#[allow(unused_imports)]
pub use app_state::AppState;
#[allow(unused_imports)]
pub use params::{ParamEdit, ParamError, ParamField, Parameters, WritingSpeed};
#[allow(unused_imports)]
pub use waste::{
    compute_opportunity_cost, compute_waste, to_chart_row, ChartRow, OpportunityCost,
    WasteBreakdown, WasteEstimate, WasteReport, CONFERENCE_BURSARY_COST, HOURS_PER_PAPER,
    PHD_STUDENTSHIP_COST,
};
