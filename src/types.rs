// Copyright 2026, The Android Open Source Project
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Value types shared by every configstore query.

use std::fmt;

/// A configuration setting that an implementation may decline to report.
///
/// When `specified` is false the payload in `value` carries no meaning and
/// must not be interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionalValue<T> {
    /// Whether the implementation provides a value for this setting.
    pub specified: bool,
    /// The setting. Only meaningful when `specified` is true.
    pub value: T,
}

/// `OptionalBool` in the HAL types.
pub type OptionalBool = OptionalValue<bool>;
/// `OptionalInt64` in the HAL types.
pub type OptionalInt64 = OptionalValue<i64>;
/// `OptionalUInt64` in the HAL types.
pub type OptionalUInt64 = OptionalValue<u64>;

impl<T> OptionalValue<T> {
    /// A populated value.
    pub fn specified(value: T) -> Self {
        Self { specified: true, value }
    }

}

impl<T: Default> OptionalValue<T> {
    /// A value the implementation declines to provide.
    pub fn unspecified() -> Self {
        Self::default()
    }
}

impl<T: Default> From<Option<T>> for OptionalValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::specified(v),
            None => Self::unspecified(),
        }
    }
}

impl<T> From<OptionalValue<T>> for Option<T> {
    fn from(value: OptionalValue<T>) -> Self {
        if value.specified {
            Some(value.value)
        } else {
            None
        }
    }
}

impl<T: fmt::Display> fmt::Display for OptionalValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.specified {
            write!(f, "{}", self.value)
        } else {
            f.write_str("<unspecified>")
        }
    }
}

/// The result of any of the configstore queries with its type erased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryValue {
    /// Result of a query returning `OptionalBool`.
    Bool(OptionalBool),
    /// Result of a query returning `OptionalInt64`.
    Int64(OptionalInt64),
    /// Result of a query returning `OptionalUInt64`.
    UInt64(OptionalUInt64),
}

impl QueryValue {
    /// The `specified` flag of the wrapped value.
    pub fn is_specified(&self) -> bool {
        match self {
            Self::Bool(v) => v.specified,
            Self::Int64(v) => v.specified,
            Self::UInt64(v) => v.specified,
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => fmt::Display::fmt(v, f),
            Self::Int64(v) => fmt::Display::fmt(v, f),
            Self::UInt64(v) => fmt::Display::fmt(v, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unspecified_is_default() {
        let v = OptionalInt64::unspecified();
        assert!(!v.specified);
        assert_eq!(v.value, 0);
    }

    #[test]
    fn from_option() {
        assert_eq!(OptionalBool::from(Some(true)), OptionalBool { specified: true, value: true });
        assert_eq!(OptionalUInt64::from(None), OptionalUInt64 { specified: false, value: 0 });
    }

    #[test]
    fn into_option_ignores_payload_when_unspecified() {
        let v = OptionalInt64 { specified: false, value: 42 };
        assert_eq!(Option::<i64>::from(v), None);
        let v = OptionalInt64 { specified: true, value: 42 };
        assert_eq!(Option::<i64>::from(v), Some(42));
    }

    #[test]
    fn display() {
        assert_eq!(OptionalInt64::specified(-5).to_string(), "-5");
        assert_eq!(OptionalBool { specified: false, value: true }.to_string(), "<unspecified>");
        assert_eq!(QueryValue::UInt64(OptionalUInt64::specified(4096)).to_string(), "4096");
    }

    #[test]
    fn query_value_specified_flag() {
        assert!(QueryValue::Bool(OptionalBool::specified(false)).is_specified());
        assert!(!QueryValue::Int64(OptionalInt64::unspecified()).is_specified());
    }
}
