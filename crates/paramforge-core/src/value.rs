//! Parameter values and parameter type descriptors.
//!
//! Tuples mix value kinds across positions, so every position holds a
//! [`ParamValue`]: a tagged union over the kinds the interesting-value
//! factories know about, plus strings and a null sentinel.

use std::fmt;

/// A single argument value placed at one tuple position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ParamValue {
    /// The null sentinel used by nullable generators.
    Null,
    Bool(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Char(char),
    Str(String),
}

/// One full, ordered set of argument values.
pub type ParamTuple = Vec<ParamValue>;

impl ParamValue {
    /// Returns true for the null sentinel.
    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }

    /// Returns the kind of a non-null value.
    pub fn kind(&self) -> Option<ParamKind> {
        match self {
            ParamValue::Null => None,
            ParamValue::Bool(_) => Some(ParamKind::Bool),
            ParamValue::Byte(_) => Some(ParamKind::Byte),
            ParamValue::Short(_) => Some(ParamKind::Short),
            ParamValue::Int(_) => Some(ParamKind::Int),
            ParamValue::Long(_) => Some(ParamKind::Long),
            ParamValue::Float(_) => Some(ParamKind::Float),
            ParamValue::Double(_) => Some(ParamKind::Double),
            ParamValue::Char(_) => Some(ParamKind::Char),
            ParamValue::Str(_) => Some(ParamKind::Str),
        }
    }

    /// Widens any integral value to `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            ParamValue::Byte(v) => Some(v.into()),
            ParamValue::Short(v) => Some(v.into()),
            ParamValue::Int(v) => Some(v.into()),
            ParamValue::Long(v) => Some(v),
            _ => None,
        }
    }

    /// Widens any floating-point value to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            ParamValue::Float(v) => Some(v.into()),
            ParamValue::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Null => write!(f, "null"),
            ParamValue::Bool(v) => write!(f, "{v}"),
            ParamValue::Byte(v) => write!(f, "{v}i8"),
            ParamValue::Short(v) => write!(f, "{v}i16"),
            ParamValue::Int(v) => write!(f, "{v}"),
            ParamValue::Long(v) => write!(f, "{v}i64"),
            ParamValue::Float(v) => write!(f, "{v}f32"),
            ParamValue::Double(v) => write!(f, "{v}f64"),
            ParamValue::Char(v) => write!(f, "{v:?}"),
            ParamValue::Str(v) => write!(f, "{v:?}"),
        }
    }
}

macro_rules! impl_param_conversions {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::$variant(value)
                }
            }

            impl TryFrom<ParamValue> for $ty {
                type Error = ParamValue;

                fn try_from(value: ParamValue) -> Result<Self, Self::Error> {
                    match value {
                        ParamValue::$variant(v) => Ok(v),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

impl_param_conversions! {
    bool => Bool,
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    char => Char,
    String => Str,
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Null, Into::into)
    }
}

/// The category of value a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ParamKind {
    Bool,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
    Str,
}

impl ParamKind {
    pub fn name(self) -> &'static str {
        match self {
            ParamKind::Bool => "bool",
            ParamKind::Byte => "i8",
            ParamKind::Short => "i16",
            ParamKind::Int => "i32",
            ParamKind::Long => "i64",
            ParamKind::Float => "f32",
            ParamKind::Double => "f64",
            ParamKind::Char => "char",
            ParamKind::Str => "String",
        }
    }
}

/// A parameter's declared type: its kind and whether null is accepted.
///
/// # Example
///
/// ```
/// use paramforge_core::{ParamKind, ParamType};
///
/// let ty = ParamType::of(ParamKind::Int).nullable();
/// assert!(ty.is_nullable());
/// assert_eq!(ty.to_string(), "Option<i32>");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamType {
    kind: ParamKind,
    nullable: bool,
}

impl ParamType {
    /// A non-nullable parameter of the given kind.
    pub fn of(kind: ParamKind) -> Self {
        Self {
            kind,
            nullable: false,
        }
    }

    /// Marks the parameter as accepting the null sentinel.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }
}

impl From<ParamKind> for ParamType {
    fn from(kind: ParamKind) -> Self {
        ParamType::of(kind)
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            write!(f, "Option<{}>", self.kind.name())
        } else {
            f.write_str(self.kind.name())
        }
    }
}
