//! Response formatting.
//!
//! ```text
//! Bus 750: 5 stops on route, 3 unique stops, 27600 route length, 1.31808 curvature
//! Bus 751: not found
//! Stop Samara: not found
//! Stop Prazhskaya: no buses
//! Stop Biryulyovo Zapadnoye: buses 256 828
//! ```
//!
//! Every line uses `<Kind> <key>: ` with no space before the colon, including
//! found results. Older bus-manager output wrote `Bus 750 : …` and
//! `Stop X : buses …` for found results only; consumers diffing against that
//! output need to normalise the colon.

use std::fmt;

use bn_core::BusId;
use bn_network::BusMetrics;

/// Significant digits for floating-point output.
pub const PRECISION: usize = 6;

/// The answer to one stat request.
#[derive(Clone, Debug, PartialEq)]
pub enum StatResponse {
    Bus { number: BusId, metrics: Option<BusMetrics> },
    Stop { name: String, buses: Option<Vec<BusId>> },
}

impl fmt::Display for StatResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatResponse::Bus { number, metrics: None } => write!(f, "Bus {number}: not found"),
            StatResponse::Bus { number, metrics: Some(m) } => write!(
                f,
                "Bus {number}: {} stops on route, {} unique stops, {} route length, {} curvature",
                m.stops_on_route,
                m.unique_stops,
                m.declared_length,
                format_significant(m.curvature, PRECISION),
            ),
            StatResponse::Stop { name, buses: None } => write!(f, "Stop {name}: not found"),
            StatResponse::Stop { name, buses: Some(b) } if b.is_empty() => {
                write!(f, "Stop {name}: no buses")
            }
            StatResponse::Stop { name, buses: Some(b) } => {
                write!(f, "Stop {name}: buses")?;
                for bus in b {
                    write!(f, " {bus}")?;
                }
                Ok(())
            }
        }
    }
}

/// Format `value` with `digits` significant digits, choosing fixed or
/// exponent notation the way C's `%g` does and dropping trailing zeros.
///
/// ```
/// use bn_io::format_significant;
///
/// assert_eq!(format_significant(1.3180841159, 6), "1.31808");
/// assert_eq!(format_significant(27600.0, 6), "27600");
/// assert_eq!(format_significant(1234567.0, 6), "1.23457e+06");
/// ```
pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let digits = digits.max(1);
    // Rust renders e.g. "1.31808e0"; the exponent is that of the rounded value.
    let sci = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= digits as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.abs())
    } else {
        let decimals = (digits as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_owned()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
