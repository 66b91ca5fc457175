use tracing::debug;

use super::{
    params::{ParamEdit, Parameters},
    waste::WasteReport,
};

/// In-memory state owned by the root component.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub params: Parameters,
    /// Number of edits applied since launch or the last reset.
    pub edits: u64,
    /// Bumped on every reset so free-entry fields drop stale drafts.
    pub resets: u32,
}

impl AppState {
    pub fn apply_edit(&mut self, edit: ParamEdit) {
        let next = self.params.apply(edit);
        debug!(
            field = ?edit.field(),
            ?edit,
            changed = (next != self.params),
            "applied parameter edit"
        );
        self.params = next;
        self.edits += 1;
    }

    pub fn reset(&mut self) {
        debug!(edits = self.edits, "restoring default parameters");
        *self = Self {
            resets: self.resets + 1,
            ..Self::default()
        };
    }

    /// Recomputes the full report from the current parameters.
    pub fn report(&self) -> WasteReport {
        let report = WasteReport::from_params(&self.params);
        debug!(
            wasted_time = report.estimate.wasted_time,
            wasted_money = report.estimate.wasted_money,
            "recomputed waste report"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::params::WritingSpeed;

    #[test]
    fn edits_replace_parameters() {
        let mut state = AppState::default();
        state.apply_edit(ParamEdit::WordsPerHour(WritingSpeed::Slow));
        state.apply_edit(ParamEdit::FundingRate(30.0));

        assert_eq!(state.params.words_per_hour, WritingSpeed::Slow);
        assert_eq!(state.params.funding_rate, 30.0);
        assert_eq!(state.edits, 2);
    }

    #[test]
    fn report_follows_latest_parameters() {
        let mut state = AppState::default();
        assert_eq!(state.report().estimate.wasted_time, 51_000.0);

        state.apply_edit(ParamEdit::FundingRate(100.0));
        assert_eq!(state.report().estimate.wasted_time, 0.0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = AppState::default();
        state.apply_edit(ParamEdit::HourlyRate(99.0));
        state.reset();
        assert_eq!(state.params, Parameters::default());
        assert_eq!(state.edits, 0);
        assert_eq!(state.resets, 1);
    }
}
