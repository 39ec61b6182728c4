#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use color::*;
pub use engine::*;
pub use error::*;
pub use snapshot::*;
pub use source::*;
pub use types::*;

mod color;
mod engine;
mod error;
mod snapshot;
mod source;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PainterConfig {
    /// Points per level: leveling up happens at `level * level_step`.
    pub level_step: u32,
    /// Probability that a reveal marks its cell as a power-up.
    pub power_up_chance: f64,
    pub starting_lives: u8,
}

impl PainterConfig {
    pub const DEFAULT_LEVEL_STEP: u32 = 10;
    pub const DEFAULT_POWER_UP_CHANCE: f64 = 0.1;
    pub const DEFAULT_STARTING_LIVES: u8 = 3;

    pub const fn new_unchecked(level_step: u32, power_up_chance: f64, starting_lives: u8) -> Self {
        Self {
            level_step,
            power_up_chance,
            starting_lives,
        }
    }

    pub fn new(level_step: u32, power_up_chance: f64, starting_lives: u8) -> Self {
        let clamped = Self::new_unchecked(
            level_step.max(1),
            if power_up_chance.is_nan() {
                0.0
            } else {
                power_up_chance.clamp(0.0, 1.0)
            },
            starting_lives,
        );
        if clamped.level_step != level_step || clamped.power_up_chance != power_up_chance {
            log::warn!(
                "Painter config clamped, requested step {} chance {}, using step {} chance {}",
                level_step,
                power_up_chance,
                clamped.level_step,
                clamped.power_up_chance
            );
        }
        clamped
    }

    pub fn validate(&self) -> Result<()> {
        if self.level_step == 0 || !(0.0..=1.0).contains(&self.power_up_chance) {
            Err(GameError::InvalidConfig)
        } else {
            Ok(())
        }
    }

    pub const fn threshold_for(&self, level: u32) -> u32 {
        level.saturating_mul(self.level_step)
    }
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_LEVEL_STEP,
            Self::DEFAULT_POWER_UP_CHANCE,
            Self::DEFAULT_STARTING_LIVES,
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    /// Cell was already painted, nothing happened.
    NoChange,
    Painted {
        color: Color,
        /// Points earned by this reveal alone.
        points: u32,
        power_up: bool,
        leveled_up: bool,
    },
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Painted { .. } => true,
        }
    }

    /// Color placed by the reveal, if any.
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::NoChange => None,
            Self::Painted { color, .. } => Some(color),
        }
    }
}
