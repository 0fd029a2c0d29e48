//! Challenge rating value object
//!
//! Ratings are kept as their canonical string form ("1/2", "1/3", "7") so that
//! fractional ratings survive serialization and table lookups exactly. Every
//! constructor funnels through [`normalize_rating`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Decimal spellings of fractional ratings that show up in hand-written stat blocks
const DECIMAL_FRACTIONS: &[(&str, &str)] = &[
    ("0.5", "1/2"),
    ("0.33", "1/3"),
    ("0.333", "1/3"),
    ("0.25", "1/4"),
    ("0.16", "1/6"),
    ("0.166", "1/6"),
    ("0.167", "1/6"),
    ("0.125", "1/8"),
];

/// Numeric fractions matched (with a small tolerance) when a rating arrives as a number
const NUMERIC_FRACTIONS: &[(f64, &str)] = &[
    (0.5, "1/2"),
    (1.0 / 3.0, "1/3"),
    (0.25, "1/4"),
    (1.0 / 6.0, "1/6"),
    (0.125, "1/8"),
];

/// A creature's challenge rating in canonical string form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChallengeRating(String);

impl ChallengeRating {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(normalize_rating(raw.as_ref()))
    }

    /// Build a rating from a numeric value, mapping common fractions to their
    /// canonical spelling (0.5 -> "1/2", 0.333 -> "1/3", ...)
    pub fn from_number(value: f64) -> Self {
        if let Some((_, canonical)) = NUMERIC_FRACTIONS
            .iter()
            .find(|(fraction, _)| (value - fraction).abs() < 0.005)
        {
            return Self((*canonical).to_string());
        }
        if value.fract() == 0.0 {
            Self(format!("{}", value as i64))
        } else {
            Self::new(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the rating ("1/2" -> 0.5, "7" -> 7.0)
    pub fn numeric_value(&self) -> Option<f64> {
        match self.0.split_once('/') {
            Some((numerator, denominator)) => {
                let numerator: f64 = numerator.trim().parse().ok()?;
                let denominator: f64 = denominator.trim().parse().ok()?;
                if denominator == 0.0 {
                    None
                } else {
                    Some(numerator / denominator)
                }
            }
            None => self.0.parse().ok(),
        }
    }
}

/// Normalize a raw rating string to its canonical table key.
///
/// Strips a leading "CR" label and rewrites decimal fractions; anything else
/// passes through trimmed. Unknown ratings are not an error, they simply miss
/// every table lookup.
pub fn normalize_rating(raw: &str) -> String {
    let trimmed = raw.trim();
    let key = match trimmed.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("cr") => trimmed[2..].trim_start(),
        _ => trimmed,
    };

    DECIMAL_FRACTIONS
        .iter()
        .find(|(decimal, _)| *decimal == key)
        .map(|(_, fraction)| (*fraction).to_string())
        .unwrap_or_else(|| key.to_string())
}

impl fmt::Display for ChallengeRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ChallengeRating {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Serialize for ChallengeRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ChallengeRating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawRating {
            Text(String),
            Number(f64),
        }

        Ok(match RawRating::deserialize(deserializer)? {
            RawRating::Text(text) => Self::new(text),
            RawRating::Number(number) => Self::from_number(number),
        })
    }
}
