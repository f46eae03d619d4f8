// Tagged argument values and typed extraction

use std::fmt;

/// Type tag of a trailing argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    Int,
    Double,
    Text,
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgKind::Int => write!(f, "int"),
            ArgKind::Double => write!(f, "double"),
            ArgKind::Text => write!(f, "text"),
        }
    }
}

/// One slot of an argument sequence.
///
/// Every value carries its own tag, so an extraction that asks for the wrong
/// type is detected instead of reinterpreting the slot.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Int(i64),
    Double(f64),
    Text(String),
}

impl ArgValue {
    pub fn kind(&self) -> ArgKind {
        match self {
            ArgValue::Int(_) => ArgKind::Int,
            ArgValue::Double(_) => ArgKind::Double,
            ArgValue::Text(_) => ArgKind::Text,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Int(v) => write!(f, "{}", v),
            ArgValue::Double(v) => write!(f, "{}", v),
            ArgValue::Text(v) => write!(f, "{}", v),
        }
    }
}

impl From<i32> for ArgValue {
    fn from(v: i32) -> Self {
        ArgValue::Int(v.into())
    }
}

impl From<i64> for ArgValue {
    fn from(v: i64) -> Self {
        ArgValue::Int(v)
    }
}

impl From<u32> for ArgValue {
    fn from(v: u32) -> Self {
        ArgValue::Int(v.into())
    }
}

// Floats are promoted to double, as with C default argument promotion.
impl From<f32> for ArgValue {
    fn from(v: f32) -> Self {
        ArgValue::Double(v.into())
    }
}

impl From<f64> for ArgValue {
    fn from(v: f64) -> Self {
        ArgValue::Double(v)
    }
}

impl From<&str> for ArgValue {
    fn from(v: &str) -> Self {
        ArgValue::Text(v.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(v: String) -> Self {
        ArgValue::Text(v)
    }
}

/// Types that can be extracted from an argument slot.
///
/// `KIND` is the tag the slot must carry; the cursor checks it before calling
/// `from_arg`. `from_arg` returns `None` when a slot of the right kind does not
/// fit `Self` (an `Int` narrowed to `i32`), which the cursor reports as
/// out of range.
pub trait FromArg<'a>: Sized {
    const KIND: ArgKind;

    fn from_arg(value: &'a ArgValue) -> Option<Self>;
}

impl<'a> FromArg<'a> for i64 {
    const KIND: ArgKind = ArgKind::Int;

    fn from_arg(value: &'a ArgValue) -> Option<Self> {
        match value {
            ArgValue::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl<'a> FromArg<'a> for i32 {
    const KIND: ArgKind = ArgKind::Int;

    fn from_arg(value: &'a ArgValue) -> Option<Self> {
        match value {
            ArgValue::Int(v) => i32::try_from(*v).ok(),
            _ => None,
        }
    }
}

impl<'a> FromArg<'a> for f64 {
    const KIND: ArgKind = ArgKind::Double;

    fn from_arg(value: &'a ArgValue) -> Option<Self> {
        match value {
            ArgValue::Double(v) => Some(*v),
            _ => None,
        }
    }
}

impl<'a> FromArg<'a> for &'a str {
    const KIND: ArgKind = ArgKind::Text;

    fn from_arg(value: &'a ArgValue) -> Option<Self> {
        match value {
            ArgValue::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

impl<'a> FromArg<'a> for String {
    const KIND: ArgKind = ArgKind::Text;

    fn from_arg(value: &'a ArgValue) -> Option<Self> {
        match value {
            ArgValue::Text(v) => Some(v.clone()),
            _ => None,
        }
    }
}
