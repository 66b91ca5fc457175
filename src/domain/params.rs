use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Writing speed options offered to the user, in words per hour.
///
/// Kept as a closed enum so the engine can divide by it without a zero check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum WritingSpeed {
    Slow,
    #[default]
    Average,
    Fast,
}

impl WritingSpeed {
    pub const ALL: [WritingSpeed; 3] = [WritingSpeed::Slow, WritingSpeed::Average, WritingSpeed::Fast];

    pub fn words_per_hour(self) -> u32 {
        match self {
            WritingSpeed::Slow => 150,
            WritingSpeed::Average => 250,
            WritingSpeed::Fast => 350,
        }
    }

    pub fn from_words_per_hour(value: u32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|speed| speed.words_per_hour() == value)
    }

    pub fn label(self) -> String {
        format!("{} words", self.words_per_hour())
    }

    /// Stable DOM id for the radio option.
    pub fn dom_id(self) -> &'static str {
        match self {
            WritingSpeed::Slow => "slow",
            WritingSpeed::Average => "average",
            WritingSpeed::Fast => "fast",
        }
    }
}

impl From<WritingSpeed> for u32 {
    fn from(speed: WritingSpeed) -> Self {
        speed.words_per_hour()
    }
}

impl TryFrom<u32> for WritingSpeed {
    type Error = ParamError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_words_per_hour(value).ok_or_else(|| ParamError::UnknownSpeed(value.to_string()))
    }
}

/// Current calculator inputs. Replaced wholesale on every edit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Words a reviewer actually needs to assess an application.
    pub words_needed: u32,
    /// Words the funder asks applicants to write.
    pub words_requested: u32,
    /// Share of applications funded, on a 0-100 scale.
    pub funding_rate: f64,
    /// Cost of one hour of researcher time.
    pub hourly_rate: f64,
    pub total_applications: u32,
    pub words_per_hour: WritingSpeed,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            words_needed: 1000,
            words_requested: 6000,
            funding_rate: 15.0,
            hourly_rate: 50.0,
            total_applications: 3000,
            words_per_hour: WritingSpeed::Average,
        }
    }
}

impl Parameters {
    /// Returns the parameters with `edit` applied. Values are clamped into the
    /// field's domain; every other field is carried over untouched.
    pub fn apply(self, edit: ParamEdit) -> Self {
        match edit {
            ParamEdit::WordsNeeded(value) => Self {
                words_needed: clamp_count(ParamField::WordsNeeded, value),
                ..self
            },
            ParamEdit::WordsRequested(value) => Self {
                words_requested: clamp_count(ParamField::WordsRequested, value),
                ..self
            },
            ParamEdit::FundingRate(value) => Self {
                funding_rate: ParamField::FundingRate.clamp(value),
                ..self
            },
            ParamEdit::HourlyRate(value) => Self {
                hourly_rate: ParamField::HourlyRate.clamp(value),
                ..self
            },
            ParamEdit::TotalApplications(value) => Self {
                total_applications: clamp_count(ParamField::TotalApplications, value),
                ..self
            },
            ParamEdit::WordsPerHour(speed) => Self {
                words_per_hour: speed,
                ..self
            },
        }
    }

    /// Current value of `field` as displayed in its control.
    pub fn value_of(&self, field: ParamField) -> f64 {
        match field {
            ParamField::WordsNeeded => self.words_needed as f64,
            ParamField::WordsRequested => self.words_requested as f64,
            ParamField::FundingRate => self.funding_rate,
            ParamField::HourlyRate => self.hourly_rate,
            ParamField::TotalApplications => self.total_applications as f64,
            ParamField::WordsPerHour => self.words_per_hour.words_per_hour() as f64,
        }
    }
}

fn clamp_count(field: ParamField, value: u32) -> u32 {
    field.clamp(value as f64) as u32
}

/// A single user edit, tagged with the parameter it updates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamEdit {
    WordsNeeded(u32),
    WordsRequested(u32),
    FundingRate(f64),
    HourlyRate(f64),
    TotalApplications(u32),
    WordsPerHour(WritingSpeed),
}

impl ParamEdit {
    pub fn field(&self) -> ParamField {
        match self {
            ParamEdit::WordsNeeded(_) => ParamField::WordsNeeded,
            ParamEdit::WordsRequested(_) => ParamField::WordsRequested,
            ParamEdit::FundingRate(_) => ParamField::FundingRate,
            ParamEdit::HourlyRate(_) => ParamField::HourlyRate,
            ParamEdit::TotalApplications(_) => ParamField::TotalApplications,
            ParamEdit::WordsPerHour(_) => ParamField::WordsPerHour,
        }
    }
}

/// Largest application count the parameters can hold.
const MAX_APPLICATIONS: f64 = u32::MAX as f64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamField {
    WordsNeeded,
    WordsRequested,
    FundingRate,
    HourlyRate,
    TotalApplications,
    WordsPerHour,
}

impl ParamField {
    pub fn label(self) -> &'static str {
        match self {
            ParamField::WordsNeeded => "Words needed for review",
            ParamField::WordsRequested => "Words requested by funder",
            ParamField::FundingRate => "Funding rate (%)",
            ParamField::HourlyRate => "Hourly rate (£)",
            ParamField::TotalApplications => "Total number of applications",
            ParamField::WordsPerHour => "Estimated time spent to write words (per hour)",
        }
    }

    /// Inclusive lower bound and optional upper bound.
    pub fn bounds(self) -> (f64, Option<f64>) {
        match self {
            ParamField::WordsNeeded | ParamField::WordsRequested => (0.0, Some(10_000.0)),
            ParamField::FundingRate => (0.0, Some(100.0)),
            ParamField::HourlyRate => (1.0, None),
            ParamField::TotalApplications => (1.0, Some(MAX_APPLICATIONS)),
            ParamField::WordsPerHour => (150.0, Some(350.0)),
        }
    }

    pub fn step(self) -> f64 {
        match self {
            ParamField::WordsNeeded | ParamField::WordsRequested => 50.0,
            _ => 1.0,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            ParamField::WordsNeeded
                | ParamField::WordsRequested
                | ParamField::TotalApplications
                | ParamField::WordsPerHour
        )
    }

    /// Raw text for this field's input control.
    pub fn input_text(self, value: f64) -> String {
        if self.is_integer() || value.fract() == 0.0 {
            format!("{value:.0}")
        } else {
            format!("{value}")
        }
    }

    pub fn clamp(self, value: f64) -> f64 {
        let (min, max) = self.bounds();
        let value = value.max(min);
        match max {
            Some(max) => value.min(max),
            None => value,
        }
    }

    /// Parses free-entry text from this field's control into an edit.
    ///
    /// Non-numeric text is rejected. Numbers outside the domain are clamped and
    /// integer fields round to the nearest whole number.
    pub fn parse_edit(self, raw: &str) -> Result<ParamEdit, ParamError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParamError::Empty { field: self });
        }

        Ok(match self {
            ParamField::WordsPerHour => ParamEdit::WordsPerHour(parse_speed(trimmed)?),
            ParamField::WordsNeeded => ParamEdit::WordsNeeded(self.parse_count(trimmed)?),
            ParamField::WordsRequested => ParamEdit::WordsRequested(self.parse_count(trimmed)?),
            ParamField::FundingRate => ParamEdit::FundingRate(self.parse_number(trimmed)?),
            ParamField::HourlyRate => ParamEdit::HourlyRate(self.parse_number(trimmed)?),
            ParamField::TotalApplications => {
                ParamEdit::TotalApplications(self.parse_count(trimmed)?)
            }
        })
    }

    fn parse_number(self, trimmed: &str) -> Result<f64, ParamError> {
        trimmed
            .replace(',', "")
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(|value| self.clamp(value))
            .ok_or_else(|| ParamError::NotANumber {
                field: self,
                input: trimmed.to_string(),
            })
    }

    fn parse_count(self, trimmed: &str) -> Result<u32, ParamError> {
        self.parse_number(trimmed).map(|value| value.round() as u32)
    }
}

fn parse_speed(trimmed: &str) -> Result<WritingSpeed, ParamError> {
    trimmed
        .parse::<u32>()
        .ok()
        .and_then(WritingSpeed::from_words_per_hour)
        .ok_or_else(|| ParamError::UnknownSpeed(trimmed.to_string()))
}

impl fmt::Display for ParamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("{field} needs a value")]
    Empty { field: ParamField },
    #[error("{field} must be a number (got \"{input}\")")]
    NotANumber { field: ParamField, input: String },
    #[error("writing speed must be 150, 250 or 350 words per hour (got \"{0}\")")]
    UnknownSpeed(String),
}
