use dioxus::prelude::*;

use crate::{
    domain::ChartRow,
    ui::theme,
    util::format::{format_currency, format_hours_tick},
};

const WIDTH: f64 = 520.0;
const HEIGHT: f64 = 300.0;
const MARGIN_LEFT: f64 = 96.0;
const MARGIN_RIGHT: f64 = 96.0;
const MARGIN_TOP: f64 = 24.0;
const MARGIN_BOTTOM: f64 = 16.0;
const BAR_WIDTH: f64 = 88.0;
const BAR_GAP: f64 = 24.0;
const TICK_COUNT: usize = 5;
/// Smallest axis step: one pound or one hour.
const MIN_STEP: f64 = 1.0;

/// Linear axis from zero to a rounded maximum with evenly spaced ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScale {
    pub max: f64,
    pub step: f64,
}

impl AxisScale {
    /// Picks a step of 1, 2, 2.5 or 5 × 10ⁿ so that `tick_count` ticks cover `data_max`.
    /// The step never drops below `MIN_STEP`, so tick labels stay distinct.
    pub fn nice(data_max: f64, tick_count: usize) -> Self {
        let intervals = tick_count.saturating_sub(1).max(1) as f64;
        if !data_max.is_finite() || data_max <= MIN_STEP * intervals {
            return Self {
                max: MIN_STEP * intervals,
                step: MIN_STEP,
            };
        }

        let raw_step = data_max / intervals;
        let magnitude = 10f64.powi(raw_step.log10().floor() as i32);
        let normalized = raw_step / magnitude;
        let nice = [1.0, 2.0, 2.5, 5.0, 10.0]
            .into_iter()
            .find(|candidate| normalized <= candidate + 1e-9)
            .unwrap_or(10.0);
        let step = nice * magnitude;

        Self {
            max: step * intervals,
            step,
        }
    }

    pub fn ticks(&self) -> Vec<f64> {
        let count = (self.max / self.step).round() as usize;
        (0..=count).map(|idx| idx as f64 * self.step).collect()
    }

    /// Position of `value` along the axis, from 0.0 at the origin to 1.0 at the top.
    pub fn fraction(&self, value: f64) -> f64 {
        (value / self.max).clamp(0.0, 1.0)
    }
}

fn plot_height() -> f64 {
    HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

fn y_for(scale: &AxisScale, value: f64) -> f64 {
    MARGIN_TOP + plot_height() * (1.0 - scale.fraction(value))
}

struct Tick {
    y: f64,
    label: String,
}

fn ticks(scale: &AxisScale, format: fn(f64) -> String) -> Vec<Tick> {
    scale
        .ticks()
        .into_iter()
        .map(|value| Tick {
            y: y_for(scale, value),
            label: format(value),
        })
        .collect()
}

struct Bar {
    x: f64,
    y: f64,
    height: f64,
    fill: &'static str,
    label: String,
    label_x: f64,
    label_y: f64,
}

fn bars(row: &ChartRow, money: &AxisScale, time: &AxisScale) -> [Bar; 2] {
    let centre = MARGIN_LEFT + (WIDTH - MARGIN_LEFT - MARGIN_RIGHT) / 2.0;
    let bar = |x: f64, y: f64, fill, label| Bar {
        x,
        y,
        height: MARGIN_TOP + plot_height() - y,
        fill,
        label,
        label_x: x + BAR_WIDTH / 2.0,
        label_y: y - 6.0,
    };

    [
        bar(
            centre - BAR_GAP / 2.0 - BAR_WIDTH,
            y_for(money, row.value),
            theme::MONEY_FILL,
            format_currency(row.value),
        ),
        bar(
            centre + BAR_GAP / 2.0,
            y_for(time, row.time),
            theme::TIME_FILL,
            format_hours_tick(row.time),
        ),
    ]
}

/// Two-bar chart of the single data row: money on the left axis, hours on the right.
#[component]
pub fn WasteChart(data: Vec<ChartRow>) -> Element {
    let Some(row) = data.first().copied() else {
        return rsx! { Fragment {} };
    };

    let money = AxisScale::nice(row.value, TICK_COUNT);
    let time = AxisScale::nice(row.time, TICK_COUNT);
    let money_ticks = ticks(&money, format_currency);
    let time_ticks = ticks(&time, format_hours_tick);
    let bars = bars(&row, &money, &time);
    let right_edge = WIDTH - MARGIN_RIGHT;
    let baseline = MARGIN_TOP + plot_height();
    let money_label_x = MARGIN_LEFT - 8.0;
    let time_label_x = right_edge + 8.0;

    rsx! {
        svg {
            class: "waste-chart",
            view_box: "0 0 {WIDTH} {HEIGHT}",
            width: "100%",
            for (idx, tick) in money_ticks.into_iter().enumerate() {
                g { key: "money-{idx}",
                    line {
                        x1: "{MARGIN_LEFT}",
                        x2: "{right_edge}",
                        y1: "{tick.y}",
                        y2: "{tick.y}",
                        stroke: theme::GRID_STROKE,
                        stroke_dasharray: "3 3",
                    }
                    text {
                        x: "{money_label_x}",
                        y: "{tick.y}",
                        text_anchor: "end",
                        dominant_baseline: "middle",
                        font_size: "11",
                        fill: theme::AXIS_TEXT,
                        "{tick.label}"
                    }
                }
            }
            for (idx, tick) in time_ticks.into_iter().enumerate() {
                text {
                    key: "time-{idx}",
                    x: "{time_label_x}",
                    y: "{tick.y}",
                    text_anchor: "start",
                    dominant_baseline: "middle",
                    font_size: "11",
                    fill: theme::AXIS_TEXT,
                    "{tick.label}"
                }
            }
            line {
                x1: "{MARGIN_LEFT}",
                x2: "{right_edge}",
                y1: "{baseline}",
                y2: "{baseline}",
                stroke: theme::AXIS_TEXT,
            }
            for bar in bars {
                g { key: "{bar.fill}",
                    rect {
                        x: "{bar.x}",
                        y: "{bar.y}",
                        width: "{BAR_WIDTH}",
                        height: "{bar.height}",
                        fill: bar.fill,
                    }
                    text {
                        x: "{bar.label_x}",
                        y: "{bar.label_y}",
                        text_anchor: "middle",
                        font_size: "12",
                        fill: bar.fill,
                        "{bar.label}"
                    }
                }
            }
        }
        ul { class: "chart-legend",
            li {
                span { class: "legend-swatch", style: "background: {theme::MONEY_FILL}" }
                "Total cost (unfunded projects)"
            }
            li {
                span { class: "legend-swatch", style: "background: {theme::TIME_FILL}" }
                "Total time spent (unfunded projects)"
            }
        }
    }
}
