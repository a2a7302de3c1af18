//! Strongly-typed identifiers for domain entities
//!
//! Identities are assigned by the store (`BIGSERIAL` columns), so each identifier
//! wraps an `i64`. Newtype wrappers keep a payee identity from being passed where
//! an expense identity is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when an identifier cannot be parsed from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} identifier: '{input}'")]
pub struct IdParseError {
    kind: &'static str,
    input: String,
}

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw identity value
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw identity value
            pub fn get(&self) -> i64 {
                self.0
            }

            /// Store-assigned identities are always strictly positive
            pub fn is_valid(&self) -> bool {
                self.0 > 0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let digits = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                digits.parse::<i64>().map(Self).map_err(|_| IdParseError {
                    kind: $prefix,
                    input: s.to_string(),
                })
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(PayeeId, "PAYEE");
define_id!(ExpenseId, "EXP");
