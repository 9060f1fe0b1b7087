use crate::domain::model::Restaurant;
use std::fmt::Write;

pub const NO_RESULTS_MESSAGE: &str = "Unable to find nearby restaurants.";
pub const REPORT_HEADER: &str = "Nearby Restaurants:\n";

/// Placeholder printed for a missing field.
const NONE: &str = "None";

/// Integral values keep a trailing `.0`. Magnitudes below 1e-4 or from 1e16
/// up switch to exponent form with a signed two digit exponent (`1e-05`,
/// `1e+16`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return exponent_form(value);
    }

    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

fn exponent_form(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => {
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exponent.abs())
            }
            Err(_) => formatted,
        },
        None => formatted,
    }
}

fn format_optional_float(value: Option<f64>) -> String {
    value.map(format_float).unwrap_or_else(|| NONE.to_string())
}

/// Renders the numbered report, or the no-results message for an empty list.
pub fn format_report(restaurants: &[Restaurant]) -> String {
    if restaurants.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }

    let mut report = String::from(REPORT_HEADER);
    for (i, restaurant) in restaurants.iter().enumerate() {
        // writing into a String cannot fail
        let _ = write!(
            report,
            "{}. Name: {}\n   Website: {}\n   Latitude: {}\n   Longitude: {}\n",
            i + 1,
            restaurant.name,
            restaurant.website.as_deref().unwrap_or(NONE),
            format_optional_float(restaurant.latitude),
            format_optional_float(restaurant.longitude),
        );
    }

    report.trim_end_matches('-').to_string()
}
