//! Typewriter cadence.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{HeroError, HeroResult};

/// Delay before each typed character.
pub const TYPE_DELAY: Duration = Duration::from_millis(100);

/// Delay before each deleted character.
pub const DELETE_DELAY: Duration = Duration::from_millis(50);

/// How long a fully typed phrase stays on screen before deletion starts.
pub const HOLD_DELAY: Duration = Duration::from_millis(2000);

/// Delays used by the engine. Serialized as whole milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterTiming {
    #[serde(rename = "type_ms", with = "millis")]
    pub type_delay: Duration,
    #[serde(rename = "delete_ms", with = "millis")]
    pub delete_delay: Duration,
    #[serde(rename = "hold_ms", with = "millis")]
    pub hold_delay: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_delay: TYPE_DELAY,
            delete_delay: DELETE_DELAY,
            hold_delay: HOLD_DELAY,
        }
    }
}

impl TypewriterTiming {
    /// Every delay must be non-zero; a zero delay would let the engine spin
    /// without ever yielding to the runtime.
    pub fn validate(&self) -> HeroResult<()> {
        for (name, delay) in [
            ("type", self.type_delay),
            ("delete", self.delete_delay),
            ("hold", self.hold_delay),
        ] {
            if delay.is_zero() {
                return Err(HeroError::InvalidConfiguration(format!(
                    "{} delay must be greater than zero",
                    name
                )));
            }
        }
        Ok(())
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
