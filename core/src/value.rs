//! Attribute values carried by IR nodes.

use core::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// A single attribute value: either a number or a string.
///
/// Numbers keep their kind so that `10` stays `10` in serialized output instead of turning into
/// `10.0`. The [`Display`](fmt::Display) form is what a live document stores.
///
/// `NaN` and the infinities have no JSON number form. The `From` conversions store them as the
/// text a browser would (`NaN`, `Infinity`, `-Infinity`), and a `Float` holding one serializes
/// as that text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Integral number.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Free-form text.
    Str(String),
}

impl AttrValue {
    /// Returns the string payload, if this value is textual.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            Self::Int(_) | Self::Float(_) => None,
        }
    }

    /// Returns the numeric payload widened to `f64`, if this value is a number.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::Str(_) => None,
        }
    }
}

const fn non_finite_name(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value.is_sign_positive() {
        "Infinity"
    } else {
        "-Infinity"
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) if value.is_finite() => write!(f, "{value}"),
            Self::Float(value) => f.write_str(non_finite_name(*value)),
            Self::Str(value) => f.write_str(value),
        }
    }
}

impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::Float(value) if value.is_finite() => serializer.serialize_f64(*value),
            Self::Float(value) => serializer.serialize_str(non_finite_name(*value)),
            Self::Str(value) => serializer.serialize_str(value),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for AttrValue {
    fn from(value: f32) -> Self {
        Self::from(f64::from(value))
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Self::Float(value)
        } else {
            Self::Str(non_finite_name(value).to_owned())
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_document_form() {
        assert_eq!(AttrValue::from(10).to_string(), "10");
        assert_eq!(AttrValue::from(10.0).to_string(), "10");
        assert_eq!(AttrValue::from(1.5).to_string(), "1.5");
        assert_eq!(AttrValue::from("red").to_string(), "red");
    }

    #[test]
    fn integers_serialize_without_fraction() {
        let json = serde_json::to_string(&AttrValue::from(10)).expect("serializes");
        assert_eq!(json, "10");
        let json = serde_json::to_string(&AttrValue::from("red")).expect("serializes");
        assert_eq!(json, "\"red\"");
    }

    #[test]
    fn deserialize_picks_matching_kind() {
        let value: AttrValue = serde_json::from_str("3").expect("int");
        assert_eq!(value, AttrValue::Int(3));
        let value: AttrValue = serde_json::from_str("0.25").expect("float");
        assert_eq!(value, AttrValue::Float(0.25));
        let value: AttrValue = serde_json::from_str("\"none\"").expect("string");
        assert_eq!(value.as_str(), Some("none"));
    }

    #[test]
    fn non_finite_floats_become_text() {
        assert_eq!(AttrValue::from(f64::NAN), AttrValue::from("NaN"));
        assert_eq!(AttrValue::from(f64::INFINITY), AttrValue::from("Infinity"));
        assert_eq!(AttrValue::from(f32::NEG_INFINITY), AttrValue::from("-Infinity"));
        assert_eq!(AttrValue::Float(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(AttrValue::Float(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn non_finite_floats_survive_json() {
        let json = serde_json::to_string(&AttrValue::Float(f64::NEG_INFINITY)).expect("serializes");
        assert_eq!(json, "\"-Infinity\"");

        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let original = AttrValue::from(value);
            let json = serde_json::to_string(&original).expect("serializes");
            let reloaded: AttrValue = serde_json::from_str(&json).expect("reloads");
            assert_eq!(reloaded, original);
            assert_eq!(reloaded.to_string(), original.to_string());
        }
    }
}
