//! Display formatting for the summary table and chart labels.
//!
//! These only affect what is shown; exports and the engine keep full precision.

pub fn fixed2(value: f64) -> String {
    format!("{value:.2}")
}

/// `16.0` -> `"16.00%"`. The value is already a percentage, nothing is scaled.
pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// `25800.0` -> `"$25,800.00"`. Values too large for `f64` come out as `"inf"`.
pub fn currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${}.{cents}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

const SI_PREFIXES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "G"), (1e6, "M"), (1e3, "k")];

/// Two significant digits with an SI suffix: `25800.0` -> `"26k"`, `1419.0` -> `"1.4k"`.
pub fn si(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }

    let magnitude = value.abs();
    let (scale, suffix) = SI_PREFIXES
        .iter()
        .copied()
        .find(|(scale, _)| magnitude >= *scale)
        .unwrap_or((1.0, ""));

    let rounded = round_significant(value / scale, 2);

    // Rounding can carry into the next prefix, e.g. 999_600 -> 1000k -> 1.0M.
    if rounded.abs() >= 1000.0 && suffix != "T" {
        return si(rounded * scale);
    }

    let decimals = (2 - int_digits(rounded)).max(0) as usize;
    format!("{rounded:.decimals$}{suffix}")
}

fn int_digits(value: f64) -> i32 {
    (value.abs().log10().floor() as i32 + 1).max(1)
}

fn round_significant(value: f64, digits: i32) -> f64 {
    let exponent = value.abs().log10().floor() as i32;
    let factor = 10f64.powi(exponent + 1 - digits);
    (value / factor).round() * factor
}
