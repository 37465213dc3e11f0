use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::constants::BALLS_PER_OVER;
use crate::error::{NrrError, Result};

/// An overs figure as supplied by a caller.
///
/// Numbers are taken to be decimal overs already (`19.5` is nineteen and a half overs).
/// Text is cricket notation `"O.B"`: whole overs, then balls bowled in the current over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Overs {
    Decimal(f64),
    Notation(String),
}

impl Overs {
    /// Decimal overs value used in rate arithmetic.
    pub fn to_decimal(&self) -> Result<f64> {
        match self {
            Overs::Decimal(value) => Ok(*value),
            Overs::Notation(text) => overs_to_decimal(text),
        }
    }
}

impl fmt::Display for Overs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Overs::Decimal(value) => write!(f, "{}", value),
            Overs::Notation(text) => write!(f, "{}", text),
        }
    }
}

impl From<f64> for Overs {
    fn from(value: f64) -> Self {
        Overs::Decimal(value)
    }
}

impl From<&str> for Overs {
    fn from(text: &str) -> Self {
        Overs::Notation(text.to_string())
    }
}

impl From<String> for Overs {
    fn from(text: String) -> Self {
        Overs::Notation(text)
    }
}

/// Convert cricket notation (`"19.4"`) to decimal overs (`19.666..`).
///
/// The ball component is not range-checked: `"20.10"` is read as 20 overs and 10 balls.
pub fn overs_to_decimal(notation: &str) -> Result<f64> {
    let invalid = || NrrError::InvalidOvers(notation.to_string());

    let mut parts = notation.trim().split('.');
    let overs: u32 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(invalid)?;
    let balls: u32 = match parts.next() {
        Some(p) if !p.is_empty() => p.parse().map_err(|_| invalid())?,
        _ => 0,
    };

    Ok(overs as f64 + balls as f64 / BALLS_PER_OVER)
}

/// Convert decimal overs back to cricket notation.
///
/// Balls are rounded to the nearest delivery; six balls carry into the next over.
pub fn decimal_to_overs(decimal: f64) -> String {
    let overs = decimal.floor();
    let balls = ((decimal - overs) * BALLS_PER_OVER).round();

    if balls >= BALLS_PER_OVER {
        return format!("{}.0", overs as i64 + 1);
    }

    format!("{}.{}", overs as i64, balls as i64)
}

/// Serde helper for stored aggregates: accepts `133.1` or `"133.1"`, keeping the notation text.
pub(crate) fn notation_from_any<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Overs::deserialize(deserializer)? {
        Overs::Decimal(value) => value.to_string(),
        Overs::Notation(text) => text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation_to_decimal() {
        assert_eq!(overs_to_decimal("20").unwrap(), 20.0);
        assert!((overs_to_decimal("19.4").unwrap() - (19.0 + 4.0 / 6.0)).abs() < 1e-12);
        assert!((overs_to_decimal(" 0.3 ").unwrap() - 0.5).abs() < 1e-12);
        assert_eq!(overs_to_decimal("20.").unwrap(), 20.0);
    }

    #[test]
    fn test_unchecked_ball_component() {
        let decimal = overs_to_decimal("20.10").unwrap();
        assert!((decimal - (20.0 + 10.0 / 6.0)).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_notation() {
        assert!(matches!(overs_to_decimal("abc"), Err(NrrError::InvalidOvers(_))));
        assert!(matches!(overs_to_decimal(".4"), Err(NrrError::InvalidOvers(_))));
        assert!(matches!(overs_to_decimal("12.x"), Err(NrrError::InvalidOvers(_))));
    }

    #[test]
    fn test_decimal_to_overs() {
        assert_eq!(decimal_to_overs(20.0), "20.0");
        assert_eq!(decimal_to_overs(19.0 + 4.0 / 6.0), "19.4");
        assert_eq!(decimal_to_overs(19.111), "19.1");
    }

    #[test]
    fn test_six_balls_carry() {
        assert_eq!(decimal_to_overs(20.0 + 5.999 / 6.0), "21.0");
        assert_eq!(decimal_to_overs(0.99), "1.0");
    }

    #[test]
    fn test_round_trip_all_notations() {
        for overs in 0..50 {
            for balls in 0..6 {
                let text = format!("{}.{}", overs, balls);
                let back = decimal_to_overs(overs_to_decimal(&text).unwrap());
                assert_eq!(back, text);
            }
        }
    }

    #[test]
    fn test_overs_input_forms() {
        assert_eq!(Overs::from(20.5).to_decimal().unwrap(), 20.5);
        assert!((Overs::from("20.3").to_decimal().unwrap() - 20.5).abs() < 1e-12);
        assert_eq!(Overs::from(20.0).to_string(), "20");
        assert_eq!(Overs::from("19.4").to_string(), "19.4");

        let number: Overs = serde_json::from_str("20").unwrap();
        assert_eq!(number, Overs::Decimal(20.0));
        let text: Overs = serde_json::from_str("\"17.2\"").unwrap();
        assert_eq!(text, Overs::Notation("17.2".to_string()));
    }
}
