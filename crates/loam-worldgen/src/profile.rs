//! Generation profiles and the process-wide profile switch.
//!
//! A profile names one of the two fixed rule sets the synthesizer applies.
//! The switch holds the currently active profile; each fill request captures
//! the profile at enqueue time, so toggling never affects in-flight work.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the two fixed terrain generation profiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WorldProfile {
    /// Rolling sinusoidal hills with grass surfaces and a cloud layer.
    #[default]
    Verdant,
    /// The same landform at wider wavelengths, all stone, no clouds.
    Barren,
}

impl WorldProfile {
    /// Returns the other profile.
    pub fn toggled(self) -> Self {
        match self {
            Self::Verdant => Self::Barren,
            Self::Barren => Self::Verdant,
        }
    }

    /// Returns the profile's canonical name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Verdant => "verdant",
            Self::Barren => "barren",
        }
    }
}

impl fmt::Display for WorldProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown profile name.
#[derive(Debug, Error)]
#[error("unknown world profile: {0:?} (expected \"verdant\" or \"barren\")")]
pub struct ParseProfileError(pub String);

impl FromStr for WorldProfile {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "verdant" => Ok(Self::Verdant),
            "barren" => Ok(Self::Barren),
            other => Err(ParseProfileError(other.to_string())),
        }
    }
}

/// Holder for the currently active profile.
///
/// There is exactly one of these per world; the host passes it by handle to
/// whatever binds the toggle action. Mutation happens only through
/// [`toggle`](Self::toggle), between scheduler ticks.
#[derive(Clone, Debug, Default)]
pub struct ProfileSwitch {
    current: WorldProfile,
}

impl ProfileSwitch {
    /// Creates a switch starting at the given profile.
    pub fn new(initial: WorldProfile) -> Self {
        Self { current: initial }
    }

    /// Returns the currently active profile.
    pub fn current(&self) -> WorldProfile {
        self.current
    }

    /// Flips to the other profile and returns the new value.
    ///
    /// Only requests enqueued after this call see the new profile.
    pub fn toggle(&mut self) -> WorldProfile {
        self.current = self.current.toggled();
        self.current
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
