//! Class helpers shared across pages. The classes themselves live in `assets/main.css`.

// ============================================
// PANELS
// ============================================

pub const PANEL: &str = "panel";
pub const PANEL_TITLE: &str = "panel-title";
pub const MUTED: &str = "text-muted";

// ============================================
// INPUTS
// ============================================

pub const FIELD: &str = "field";
pub const FIELD_LABEL: &str = "field-label";
pub const FIELD_ERROR: &str = "field-error";
pub const RANGE_INPUT: &str = "range-input";
pub const NUMBER_INPUT: &str = "number-input";

pub fn number_input(invalid: bool) -> &'static str {
    if invalid {
        "number-input number-input--invalid"
    } else {
        NUMBER_INPUT
    }
}

pub fn speed_option(active: bool) -> &'static str {
    if active {
        "speed-option speed-option--active"
    } else {
        "speed-option"
    }
}

// ============================================
// BUTTONS
// ============================================

pub const BTN_SECONDARY: &str = "btn btn--secondary";

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-button nav-button--active"
    } else {
        "nav-button"
    }
}

// ============================================
// CHART
// ============================================

pub const MONEY_FILL: &str = "#8884d8";
pub const TIME_FILL: &str = "#82ca9d";
pub const AXIS_TEXT: &str = "#94a3b8";
pub const GRID_STROKE: &str = "#1e293b";
