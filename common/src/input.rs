//! # Commission Inputs
//!
//! The three numbers a user types in, in two shapes:
//! * [`FormState`]: what the form currently holds. Every field may be unset.
//! * [`CommissionInput`]: a complete, range-checked record the engine accepts.
//!
//! The only way to get a [`CommissionInput`] is [`FormState::validate`] (or
//! [`CommissionInput::new`], which runs the same checks).

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    /// Staffing count.
    Toa,
    /// Average margin percentage, as a whole number (16 means 16%).
    AvgPercent,
    /// Gross margin dollars per week.
    GmPerWeek,
}

impl InputField {
    pub const ALL: [InputField; 3] = [InputField::Toa, InputField::AvgPercent, InputField::GmPerWeek];

    pub fn label(self) -> &'static str {
        match self {
            InputField::Toa => "TOA",
            InputField::AvgPercent => "AVG (%)",
            InputField::GmPerWeek => "GM/Week ($)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            InputField::Toa => "Ex. 15",
            InputField::AvgPercent => "Ex. 16%",
            InputField::GmPerWeek => "Ex. $400",
        }
    }

    fn accepts(self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match self {
            InputField::Toa | InputField::GmPerWeek => value > 0.0,
            InputField::AvgPercent => value >= 0.0,
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InputField {
    type Err = String;

    /// Accepts the short names used on the command line (`toa`, `avg`, `gm`)
    /// and a few spelled-out aliases, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "toa" => Ok(InputField::Toa),
            "avg" | "avg%" | "avg_percent" | "margin" => Ok(InputField::AvgPercent),
            "gm" | "gm-week" | "gm_week" | "gm_per_week" => Ok(InputField::GmPerWeek),
            other => Err(format!("unknown field: {other}")),
        }
    }
}

/// Parses a number the way users tend to type it: `16`, `16%`, `$400`, `$1,200.50`.
pub fn parse_amount(s: &str) -> Result<f64, String> {
    let cleaned: String = s
        .trim()
        .trim_end_matches('%')
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect();
    cleaned
        .parse::<f64>()
        .map_err(|_| format!("not a number: {s}"))
}

/// The values currently entered in the form. `None` means the field is unset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FormState {
    pub toa: Option<f64>,
    pub avg_percent: Option<f64>,
    pub gm_per_week: Option<f64>,
}

impl FormState {
    pub fn new(toa: Option<f64>, avg_percent: Option<f64>, gm_per_week: Option<f64>) -> Self {
        Self {
            toa,
            avg_percent,
            gm_per_week,
        }
    }

    pub fn get(&self, field: InputField) -> Option<f64> {
        match field {
            InputField::Toa => self.toa,
            InputField::AvgPercent => self.avg_percent,
            InputField::GmPerWeek => self.gm_per_week,
        }
    }

    pub fn set(&mut self, field: InputField, value: Option<f64>) {
        let slot = match field {
            InputField::Toa => &mut self.toa,
            InputField::AvgPercent => &mut self.avg_percent,
            InputField::GmPerWeek => &mut self.gm_per_week,
        };
        *slot = value;
    }

    /// Clears every field back to unset.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn missing_fields(&self) -> Vec<InputField> {
        InputField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }

    /// Checks presence first, then ranges.
    ///
    /// A form with any unset field never reaches the range check, so a user
    /// who has typed an out-of-range TOA but not yet filled in GM/Week only
    /// sees the "missing" warning.
    pub fn validate(&self) -> Result<CommissionInput, InputError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            debug!("validation halted, {} field(s) unset", missing.len());
            return Err(InputError::Missing(missing));
        }

        let mut out_of_range = Vec::new();
        let mut values = [0.0; 3];
        for (slot, field) in values.iter_mut().zip(InputField::ALL) {
            let value = self.get(field).unwrap_or_default();
            if !field.accepts(value) {
                out_of_range.push((field, value));
            }
            *slot = value;
        }

        if !out_of_range.is_empty() {
            return Err(InputError::OutOfRange(out_of_range));
        }

        let [toa, avg_percent, gm_per_week] = values;
        Ok(CommissionInput {
            toa,
            avg_percent,
            gm_per_week,
        })
    }
}

/// A complete and range-checked set of inputs.
///
/// Fields are private so that `toa > 0`, `avg_percent >= 0` and
/// `gm_per_week > 0` hold for every value of this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommissionInput {
    toa: f64,
    avg_percent: f64,
    gm_per_week: f64,
}

impl CommissionInput {
    pub fn new(toa: f64, avg_percent: f64, gm_per_week: f64) -> Result<Self, InputError> {
        FormState::new(Some(toa), Some(avg_percent), Some(gm_per_week)).validate()
    }

    pub fn toa(&self) -> f64 {
        self.toa
    }

    pub fn avg_percent(&self) -> f64 {
        self.avg_percent
    }

    pub fn gm_per_week(&self) -> f64 {
        self.gm_per_week
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(toa: f64, avg: f64, gm: f64) -> FormState {
        FormState::new(Some(toa), Some(avg), Some(gm))
    }

    #[test]
    fn complete_form_validates() {
        let input = full(15.0, 16.0, 400.0).validate().unwrap();
        assert_eq!(input.toa(), 15.0);
        assert_eq!(input.avg_percent(), 16.0);
        assert_eq!(input.gm_per_week(), 400.0);
    }

    #[test]
    fn unset_avg_is_reported_missing() {
        let form = FormState::new(Some(15.0), None, Some(400.0));
        match form.validate() {
            Err(InputError::Missing(fields)) => assert_eq!(fields, vec![InputField::AvgPercent]),
            other => panic!("expected missing input, got {other:?}"),
        }
    }

    #[test]
    fn missing_wins_over_out_of_range() {
        let form = FormState::new(Some(0.0), None, None);
        let err = form.validate().unwrap_err();
        assert!(!err.is_fatal());
        assert_eq!(err.fields(), vec![InputField::AvgPercent, InputField::GmPerWeek]);
    }

    #[test]
    fn zero_toa_is_out_of_range() {
        match full(0.0, 16.0, 400.0).validate() {
            Err(InputError::OutOfRange(fields)) => assert_eq!(fields, vec![(InputField::Toa, 0.0)]),
            other => panic!("expected out of range, got {other:?}"),
        }
    }

    #[test]
    fn zero_avg_is_accepted() {
        assert!(full(15.0, 0.0, 400.0).validate().is_ok());
    }

    #[test]
    fn every_bad_field_is_reported() {
        let err = full(-1.0, -0.5, 0.0).validate().unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(
            err.fields(),
            vec![InputField::Toa, InputField::AvgPercent, InputField::GmPerWeek]
        );
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(full(f64::NAN, 16.0, 400.0).validate().is_err());
        assert!(full(15.0, f64::INFINITY, 400.0).validate().is_err());
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = full(15.0, 16.0, 400.0);
        form.reset();
        assert_eq!(form, FormState::default());
        assert_eq!(form.missing_fields().len(), 3);
    }

    #[test]
    fn amounts_accept_symbols() {
        assert_eq!(parse_amount("16"), Ok(16.0));
        assert_eq!(parse_amount("16%"), Ok(16.0));
        assert_eq!(parse_amount("$400"), Ok(400.0));
        assert_eq!(parse_amount(" $1,200.50 "), Ok(1200.5));
        assert_eq!(parse_amount("-3"), Ok(-3.0));
        assert!(parse_amount("lots").is_err());
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("TOA".parse::<InputField>(), Ok(InputField::Toa));
        assert_eq!("avg".parse::<InputField>(), Ok(InputField::AvgPercent));
        assert_eq!("gm".parse::<InputField>(), Ok(InputField::GmPerWeek));
        assert!("weekly".parse::<InputField>().is_err());
    }
}
