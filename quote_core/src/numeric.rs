//! # Lenient Numeric Input
//!
//! Form fields arrive as numbers, numeric strings, empty strings or `null`.
//! Pricing never rejects them: anything that is not a finite, non-negative
//! number becomes `0.0`.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::numeric::parse_or_zero;
//!
//! assert_eq!(parse_or_zero("2.5"), 2.5);
//! assert_eq!(parse_or_zero(" 3 kg"), 3.0);
//! assert_eq!(parse_or_zero(""), 0.0);
//! assert_eq!(parse_or_zero("abc"), 0.0);
//! ```

/// Clamp a number into the domain pricing accepts.
///
/// NaN, infinities, negatives and `-0.0` all map to `0.0`.
#[inline]
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parse a form string into a non-negative number, defaulting to `0.0`.
///
/// Like a browser's `parseFloat`, a numeric prefix is accepted
/// (`"12.5kg"` parses as `12.5`).
pub fn parse_or_zero(input: &str) -> f64 {
    let trimmed = input.trim();
    if let Ok(value) = trimmed.parse::<f64>() {
        return non_negative(value);
    }

    let prefix_len = trimmed
        .char_indices()
        .take_while(|&(i, c)| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E') || (i == 0 && matches!(c, '+' | '-')))
        .count();

    (1..=prefix_len)
        .rev()
        .find_map(|len| trimmed[..len].parse::<f64>().ok())
        .map(non_negative)
        .unwrap_or(0.0)
}

/// Serde adapter for `f64` fields fed by form input.
///
/// Accepts JSON numbers, numeric strings, `null` and empty strings.
/// Serializes as a plain number.
///
/// ```rust
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Row {
///     #[serde(default, with = "quote_core::numeric::lenient_f64")]
///     quantity: f64,
/// }
///
/// let row: Row = serde_json::from_str(r#"{ "quantity": "4" }"#).unwrap();
/// assert_eq!(row.quantity, 4.0);
///
/// let row: Row = serde_json::from_str(r#"{ "quantity": "" }"#).unwrap();
/// assert_eq!(row.quantity, 0.0);
/// ```
pub mod lenient_f64 {
    use std::fmt;

    use serde::de::{self, Deserializer, Visitor};
    use serde::Serializer;

    use super::{non_negative, parse_or_zero};

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(*value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LenientVisitor)
    }

    struct LenientVisitor;

    impl<'de> Visitor<'de> for LenientVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number, a numeric string, or null")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(non_negative(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(non_negative(v as f64))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(non_negative(v as f64))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            Ok(parse_or_zero(v))
        }

        fn visit_bool<E: de::Error>(self, _v: bool) -> Result<f64, E> {
            Ok(0.0)
        }

        fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
            Ok(0.0)
        }

        fn visit_none<E: de::Error>(self) -> Result<f64, E> {
            Ok(0.0)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<f64, D::Error> {
            deserializer.deserialize_any(LenientVisitor)
        }
    }
}

/// Serde adapter for optional `f64` fields where "not filled in" matters.
///
/// `null`, a missing field and blank strings are `None`; anything else is
/// `Some` of the lenient parse.
pub mod lenient_opt_f64 {
    use std::fmt;

    use serde::de::{self, Deserializer, Visitor};
    use serde::{Serialize, Serializer};

    use super::{non_negative, parse_or_zero};

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(OptionalVisitor)
    }

    struct OptionalVisitor;

    impl<'de> Visitor<'de> for OptionalVisitor {
        type Value = Option<f64>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number, a numeric string, or null")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(non_negative(v)))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(non_negative(v as f64)))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(non_negative(v as f64)))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            if v.trim().is_empty() {
                Ok(None)
            } else {
                Ok(Some(parse_or_zero(v)))
            }
        }

        fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
            deserializer.deserialize_any(OptionalVisitor)
        }
    }
}
