use serde::{Deserialize, Serialize};

use super::params::Parameters;

/// Cost of one fully funded PhD studentship.
pub const PHD_STUDENTSHIP_COST: f64 = 20_000.0;
/// Cost of one conference bursary.
pub const CONFERENCE_BURSARY_COST: f64 = 1_000.0;
/// Researcher hours that go into one research paper.
pub const HOURS_PER_PAPER: f64 = 200.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WasteEstimate {
    /// Hours spent on unfunded applications, rounded to 2 decimals.
    pub wasted_time: f64,
    /// Money spent on unfunded applications, rounded to 2 decimals.
    pub wasted_money: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpportunityCost {
    pub phd_studentships: u64,
    pub conference_bursaries: u64,
    pub research_papers: u64,
}

/// The single data point fed to the bar chart. Field names are the chart's data keys.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    pub value: f64,
    pub time: f64,
}

/// Intermediate quantities behind a [`WasteEstimate`], unrounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WasteBreakdown {
    pub wasted_words: f64,
    pub hours_per_application: f64,
    pub unfunded_fraction: f64,
    pub unfunded_applications: f64,
}

impl WasteBreakdown {
    pub fn from_params(params: &Parameters) -> Self {
        let wasted_words = (params.words_requested as f64 - params.words_needed as f64).max(0.0);
        let hours_per_application = wasted_words / params.words_per_hour.words_per_hour() as f64;
        let unfunded_fraction = (100.0 - params.funding_rate) / 100.0;

        Self {
            wasted_words,
            hours_per_application,
            unfunded_fraction,
            unfunded_applications: params.total_applications as f64 * unfunded_fraction,
        }
    }
}

pub fn compute_waste(params: &Parameters) -> WasteEstimate {
    let breakdown = WasteBreakdown::from_params(params);
    let total_time = breakdown.hours_per_application
        * params.total_applications as f64
        * breakdown.unfunded_fraction;
    let total_money = total_time * params.hourly_rate;

    WasteEstimate {
        wasted_time: round2(total_time),
        wasted_money: round2(total_money),
    }
}

/// Expects the rounded outputs of [`compute_waste`].
pub fn compute_opportunity_cost(wasted_money: f64, wasted_time: f64) -> OpportunityCost {
    OpportunityCost {
        phd_studentships: whole_units(wasted_money, PHD_STUDENTSHIP_COST),
        conference_bursaries: whole_units(wasted_money, CONFERENCE_BURSARY_COST),
        research_papers: whole_units(wasted_time, HOURS_PER_PAPER),
    }
}

pub fn to_chart_row(wasted_money: f64, wasted_time: f64) -> ChartRow {
    ChartRow {
        value: wasted_money,
        time: wasted_time,
    }
}

/// Everything the calculator displays for one set of parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WasteReport {
    pub estimate: WasteEstimate,
    pub opportunity: OpportunityCost,
    pub chart: ChartRow,
    pub breakdown: WasteBreakdown,
}

impl WasteReport {
    pub fn from_params(params: &Parameters) -> Self {
        let estimate = compute_waste(params);
        Self {
            estimate,
            opportunity: compute_opportunity_cost(estimate.wasted_money, estimate.wasted_time),
            chart: to_chart_row(estimate.wasted_money, estimate.wasted_time),
            breakdown: WasteBreakdown::from_params(params),
        }
    }

    /// The chart dataset: always exactly one row.
    pub fn chart_data(&self) -> [ChartRow; 1] {
        [self.chart]
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn whole_units(amount: f64, unit: f64) -> u64 {
    (amount / unit).floor().max(0.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::params::{ParamEdit, WritingSpeed};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn default_parameters_produce_published_totals() {
        let params = Parameters::default();
        let breakdown = WasteBreakdown::from_params(&params);
        assert_eq!(breakdown.wasted_words, 5000.0);
        assert_eq!(breakdown.hours_per_application, 20.0);
        assert!(approx_eq(breakdown.unfunded_fraction, 0.85));

        let estimate = compute_waste(&params);
        assert_eq!(estimate.wasted_time, 51_000.0);
        assert_eq!(estimate.wasted_money, 2_550_000.0);
    }

    #[test]
    fn opportunity_cost_for_default_parameters() {
        let estimate = compute_waste(&Parameters::default());
        let cost = compute_opportunity_cost(estimate.wasted_money, estimate.wasted_time);
        assert_eq!(
            cost,
            OpportunityCost {
                phd_studentships: 127,
                conference_bursaries: 2550,
                research_papers: 255,
            }
        );
    }

    #[test]
    fn opportunity_cost_floors_partial_units() {
        let cost = compute_opportunity_cost(19_999.99, 199.99);
        assert_eq!(cost.phd_studentships, 0);
        assert_eq!(cost.conference_bursaries, 19);
        assert_eq!(cost.research_papers, 0);
    }

    #[test]
    fn requesting_fewer_words_than_needed_wastes_nothing() {
        let params = Parameters {
            words_needed: 5000,
            words_requested: 3000,
            ..Parameters::default()
        };
        let estimate = compute_waste(&params);
        assert_eq!(estimate.wasted_time, 0.0);
        assert_eq!(estimate.wasted_money, 0.0);
    }

    #[test]
    fn equal_word_counts_waste_nothing() {
        for words in [0, 1000, 6000, 10_000] {
            let params = Parameters {
                words_needed: words,
                words_requested: words,
                hourly_rate: 120.0,
                total_applications: 9000,
                ..Parameters::default()
            };
            let estimate = compute_waste(&params);
            assert_eq!(estimate.wasted_time, 0.0);
            assert_eq!(estimate.wasted_money, 0.0);
        }
    }

    #[test]
    fn full_funding_wastes_nothing() {
        for speed in WritingSpeed::ALL {
            let params = Parameters {
                funding_rate: 100.0,
                words_per_hour: speed,
                words_requested: 10_000,
                words_needed: 0,
                ..Parameters::default()
            };
            let estimate = compute_waste(&params);
            assert_eq!(estimate.wasted_time, 0.0);
            assert_eq!(estimate.wasted_money, 0.0);
        }
    }

    #[test]
    fn wasted_time_is_inversely_proportional_to_writing_speed() {
        let base = Parameters {
            words_needed: 750,
            ..Parameters::default()
        };
        let slow = compute_waste(&base.apply(ParamEdit::WordsPerHour(WritingSpeed::Slow)));
        let fast = compute_waste(&base.apply(ParamEdit::WordsPerHour(WritingSpeed::Fast)));

        assert_eq!(fast.wasted_time, 38_250.0);
        assert_eq!(slow.wasted_time, 89_250.0);
        assert!(approx_eq(slow.wasted_time, fast.wasted_time * 350.0 / 150.0));
    }

    #[test]
    fn waste_is_monotonic_in_word_counts() {
        let base = Parameters::default();
        let mut previous = 0.0;
        for requested in (0..=10_000).step_by(250) {
            let estimate = compute_waste(&base.apply(ParamEdit::WordsRequested(requested)));
            assert!(estimate.wasted_time >= previous);
            previous = estimate.wasted_time;
        }

        let mut previous = f64::INFINITY;
        for needed in (0..=10_000).step_by(250) {
            let estimate = compute_waste(&base.apply(ParamEdit::WordsNeeded(needed)));
            assert!(estimate.wasted_money <= previous);
            previous = estimate.wasted_money;
        }
    }

    #[test]
    fn outputs_are_never_negative() {
        for needed in [0, 2500, 10_000] {
            for requested in [0, 4000, 10_000] {
                for funding_rate in [0.0, 37.5, 100.0] {
                    for speed in WritingSpeed::ALL {
                        let params = Parameters {
                            words_needed: needed,
                            words_requested: requested,
                            funding_rate,
                            hourly_rate: 1.0,
                            total_applications: 1,
                            words_per_hour: speed,
                        };
                        let estimate = compute_waste(&params);
                        assert!(estimate.wasted_time >= 0.0);
                        assert!(estimate.wasted_money >= 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn repeated_evaluation_is_deterministic() {
        let params = Parameters {
            funding_rate: 22.0,
            hourly_rate: 37.5,
            ..Parameters::default()
        };
        assert_eq!(WasteReport::from_params(&params), WasteReport::from_params(&params));
    }

    #[test]
    fn outputs_are_rounded_to_cents() {
        let params = Parameters {
            words_needed: 0,
            words_requested: 1000,
            funding_rate: 0.0,
            hourly_rate: 1.0,
            total_applications: 1,
            words_per_hour: WritingSpeed::Fast,
        };
        // 1000 / 350 = 2.857142...
        let estimate = compute_waste(&params);
        assert_eq!(estimate.wasted_time, 2.86);
        assert_eq!(estimate.wasted_money, 2.86);
    }

    #[test]
    fn report_rounds_money_before_counting_studentships() {
        // 1000 words at 250/hr is 4 hours; 4 × 4999.999 = 19999.996.
        let params = Parameters {
            words_needed: 0,
            words_requested: 1000,
            funding_rate: 0.0,
            hourly_rate: 4999.999,
            total_applications: 1,
            words_per_hour: WritingSpeed::Average,
        };
        let report = WasteReport::from_params(&params);
        assert_eq!(report.estimate.wasted_time, 4.0);
        assert_eq!(report.estimate.wasted_money, 20_000.0);
        assert_eq!(report.opportunity.phd_studentships, 1);
        assert_eq!(report.opportunity.conference_bursaries, 20);

        let unrounded = report.breakdown.hours_per_application * params.hourly_rate;
        assert!(unrounded < PHD_STUDENTSHIP_COST);
    }

    #[test]
    fn report_packages_a_single_chart_row() {
        let report = WasteReport::from_params(&Parameters::default());
        let [row] = report.chart_data();
        assert_eq!(row.value, report.estimate.wasted_money);
        assert_eq!(row.time, report.estimate.wasted_time);
    }

    #[test]
    fn chart_row_serializes_with_chart_data_keys() {
        let row = to_chart_row(2_550_000.0, 51_000.0);
        let json = serde_json::to_value(row).unwrap();
        assert_eq!(json, serde_json::json!({ "value": 2_550_000.0, "time": 51_000.0 }));
    }
}
