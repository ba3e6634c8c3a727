use std::f32::consts::SQRT_2;

use crate::error::ConfigError;

// search
pub const EXPLORATION: f32 = SQRT_2;
pub const SIMULATIONS: u32 = 1000;
pub const REUSE_TREE: bool = true;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UctConfig {
    /// Exploration constant `c` of the confidence bounds.
    pub exploration: f32,
    /// Simulated playouts per decision.
    pub simulations: u32,
    /// Keep the subtree of the chosen move for the next decision.
    pub reuse_tree: bool,
}

impl Default for UctConfig {
    fn default() -> Self {
        UctConfig {
            exploration: EXPLORATION,
            simulations: SIMULATIONS,
            reuse_tree: REUSE_TREE,
        }
    }
}

impl UctConfig {
    pub fn new(exploration: f32, simulations: u32) -> Result<Self, ConfigError> {
        let config = UctConfig {
            exploration,
            simulations,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulations == 0 {
            Err(ConfigError::ZeroSimulations)
        } else if !self.exploration.is_finite() || self.exploration < 0.0 {
            Err(ConfigError::Exploration(self.exploration))
        } else {
            Ok(())
        }
    }
}
