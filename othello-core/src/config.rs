//! Rule options chosen once when an [`crate::Env`] is created.

use derive_more::{Display, Error};
use std::str::FromStr;

/// How a side with no legal placement gives up its turn.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum PassPolicy {
    /// A `Pass` action is offered and must be applied; it takes a history slot.
    #[display(fmt = "explicit")]
    Explicit,
    /// The turn is skipped automatically after the previous move; nothing is recorded.
    #[display(fmt = "implicit")]
    Implicit,
}

/// How strictly placements and passes are checked.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Legality {
    /// Placements must capture; passes only when no placement exists.
    #[display(fmt = "strict")]
    Strict,
    /// Placements only need an empty cell; passes are always accepted.
    #[display(fmt = "lenient")]
    Lenient,
}

/// Rule options for an [`crate::Env`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EnvConfig {
    pub pass_policy: PassPolicy,
    pub legality: Legality,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            pass_policy: PassPolicy::Explicit,
            legality: Legality::Strict,
        }
    }
}

impl EnvConfig {
    pub fn with_pass_policy(self, pass_policy: PassPolicy) -> Self {
        Self {
            pass_policy,
            ..self
        }
    }

    pub fn with_legality(self, legality: Legality) -> Self {
        Self { legality, ..self }
    }
}

#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "unknown option {:?}", value)]
pub struct ParseConfigError {
    value: String,
}

impl FromStr for PassPolicy {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "explicit" => Ok(PassPolicy::Explicit),
            "implicit" => Ok(PassPolicy::Implicit),
            _ => Err(ParseConfigError {
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for Legality {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(Legality::Strict),
            "lenient" => Ok(Legality::Lenient),
            _ => Err(ParseConfigError {
                value: s.to_string(),
            }),
        }
    }
}
