//! Positional argument values

use std::borrow::Cow;
use std::fmt;

use super::number::{format_float, format_signed, format_unsigned};
use super::spec::FormatSpec;

/// A positional argument.
///
/// Build one with `Value::from` for any of the supported primitive types.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// Signed integer with the bit width of its source type
    Int { value: i64, bits: u32 },
    UInt(u64),
    Float(f64),
    Bool(bool),
    Char(char),
    Str(Cow<'a, str>),
}

impl Value<'_> {
    /// Render as text under the current stream state (without padding)
    pub fn to_text(&self, spec: &FormatSpec) -> String {
        match self {
            Value::Int { value, bits } => format_signed(*value, *bits, spec),
            Value::UInt(n) => format_unsigned(*n, spec),
            Value::Float(f) => format_float(*f, spec),
            Value::Bool(b) if spec.bool_as_word => b.to_string(),
            Value::Bool(b) => format_unsigned(u64::from(*b), spec),
            Value::Char(c) => c.to_string(),
            Value::Str(s) => s.to_string(),
        }
    }

    /// Detach from any borrowed string
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Int { value, bits } => Value::Int { value, bits },
            Value::UInt(n) => Value::UInt(n),
            Value::Float(f) => Value::Float(f),
            Value::Bool(b) => Value::Bool(b),
            Value::Char(c) => Value::Char(c),
            Value::Str(s) => Value::Str(Cow::Owned(s.into_owned())),
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(&FormatSpec::default()))
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value<'_> {
                fn from(value: $ty) -> Self {
                    Value::Int {
                        value: value as i64,
                        bits: <$ty>::BITS,
                    }
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value<'_> {
                fn from(value: $ty) -> Self {
                    Value::UInt(value as u64)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Value<'_> {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value<'_> {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Str(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(value: &'a String) -> Self {
        Value::Str(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Value<'_> {
    fn from(value: String) -> Self {
        Value::Str(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Value::Str(value)
    }
}

impl<'a, 'b> From<&'b Value<'a>> for Value<'a> {
    fn from(value: &'b Value<'a>) -> Self {
        value.clone()
    }
}
