//! Dynamic value domain for placeholder expressions.
//!
//! Expression trees mix arithmetic and comparison nodes, so a single static
//! type cannot describe what a tree evaluates to (`ARG * 2` is numeric while
//! `ARG * 2 > 100` is boolean). [`Value`] is the small closed domain the
//! evaluator works over: integers, floats and booleans, with operand typing
//! checked at evaluation time.

use std::fmt;

/// A concrete value flowing into or out of an expression evaluation.
///
/// Arithmetic between two `Int`s stays integral; as soon as a `Float` is
/// involved, both operands are promoted to `f64` and the result is a
/// `Float`. `Bool` takes part in no arithmetic and no ordering; it only
/// supports equality against another `Bool`.
///
/// # Examples
///
/// ```rust
/// use enumars::lambda::Value;
///
/// let value = Value::from(42);
/// assert!(value.is_int());
/// assert_eq!(value.to_string(), "42");
///
/// let value = Value::from(2.5);
/// assert!(value.is_float());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating point number.
    Float(f64),
    /// A boolean, produced by comparison nodes.
    Bool(bool),
}

impl Value {
    /// Returns `true` if this value is an `Int`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::lambda::Value;
    ///
    /// assert!(Value::Int(1).is_int());
    /// assert!(!Value::Float(1.0).is_int());
    /// ```
    #[inline]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Returns `true` if this value is a `Float`.
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Returns `true` if this value is a `Bool`.
    #[inline]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Returns the numeric content promoted to `f64`, or `None` for `Bool`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::lambda::Value;
    ///
    /// assert_eq!(Value::Int(2).as_f64(), Some(2.0));
    /// assert_eq!(Value::Float(2.5).as_f64(), Some(2.5));
    /// assert_eq!(Value::Bool(true).as_f64(), None);
    /// ```
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::Bool(_) => None,
        }
    }

    /// Returns the boolean content, or `None` for numeric values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::lambda::Value;
    ///
    /// assert_eq!(Value::Bool(true).as_bool(), Some(true));
    /// assert_eq!(Value::Int(1).as_bool(), None);
    /// ```
    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Int(_) | Self::Float(_) => None,
        }
    }

    /// Returns the name of the value's kind, for diagnostics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::lambda::Value;
    ///
    /// assert_eq!(Value::Int(1).type_name(), "integer");
    /// assert_eq!(Value::Bool(true).type_name(), "boolean");
    /// ```
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
            Self::Bool(value) => write!(formatter, "{value}"),
        }
    }
}

macro_rules! impl_value_from_int {
    ($($source:ty),* $(,)?) => {
        $(
            impl From<$source> for Value {
                #[inline]
                fn from(value: $source) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_conversions_widen_to_i64() {
        assert_eq!(Value::from(7_i8), Value::Int(7));
        assert_eq!(Value::from(7_u32), Value::Int(7));
        assert_eq!(Value::from(-7_i64), Value::Int(-7));
    }

    #[test]
    fn float_conversions_widen_to_f64() {
        assert_eq!(Value::from(0.5_f32), Value::Float(0.5));
        assert_eq!(Value::from(0.5_f64), Value::Float(0.5));
    }

    #[test]
    fn display_matches_inner_value() {
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn as_f64_promotes_integers_only() {
        assert_eq!(Value::Int(3).as_f64(), Some(3.0));
        assert_eq!(Value::Bool(true).as_f64(), None);
    }
}
