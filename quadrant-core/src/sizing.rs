use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::AiPotential;

/// Marker sizes per AI potential tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DotSizes {
    pub none: f32,
    pub some: f32,
    pub many: f32,
}

impl Default for DotSizes {
    fn default() -> Self {
        Self {
            none: 10.0,
            some: 16.0,
            many: 24.0,
        }
    }
}

impl DotSizes {
    /// Marker size for a tier; a missing tier gets the smallest size
    pub fn size(&self, tier: Option<AiPotential>) -> f32 {
        match AiPotential::resolve(tier) {
            AiPotential::None => self.none,
            AiPotential::Some => self.some,
            AiPotential::Many => self.many,
        }
    }

    /// Sizes must be positive and strictly increasing with the tier
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.none > 0.0 && self.none < self.some && self.some < self.many) {
            return Err(ConfigError::InvalidDotSizes {
                none: self.none,
                some: self.some,
                many: self.many,
            });
        }
        Ok(())
    }
}
