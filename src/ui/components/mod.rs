pub mod kpi_card;
pub mod number_field;
pub mod opportunity_list;
pub mod slider_field;
pub mod speed_selector;
pub mod toast;
pub mod waste_chart;
