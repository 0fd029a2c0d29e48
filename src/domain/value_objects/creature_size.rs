//! Creature size categories

use std::fmt;

use serde::{Deserialize, Serialize};

/// Size category, declared smallest to largest so ordering follows size
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum CreatureSize {
    Fine,
    Diminutive,
    Tiny,
    Small,
    #[default]
    Medium,
    Large,
    Huge,
    Gargantuan,
    Colossal,
}

impl CreatureSize {
    pub const ALL: [CreatureSize; 9] = [
        Self::Fine,
        Self::Diminutive,
        Self::Tiny,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::Huge,
        Self::Gargantuan,
        Self::Colossal,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Fine => "Fine",
            Self::Diminutive => "Diminutive",
            Self::Tiny => "Tiny",
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::Huge => "Huge",
            Self::Gargantuan => "Gargantuan",
            Self::Colossal => "Colossal",
        }
    }

    /// Move `steps` categories up (positive) or down (negative), clamped at the ends
    pub fn step(self, steps: i32) -> Self {
        let index = Self::ALL.iter().position(|s| *s == self).unwrap_or(4) as i32;
        let clamped = (index + steps).clamp(0, Self::ALL.len() as i32 - 1);
        Self::ALL[clamped as usize]
    }
}

impl fmt::Display for CreatureSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_steps_clamp() {
        assert_eq!(CreatureSize::Large.step(-1), CreatureSize::Medium);
        assert_eq!(CreatureSize::Fine.step(-1), CreatureSize::Fine);
        assert_eq!(CreatureSize::Gargantuan.step(3), CreatureSize::Colossal);
        assert!(CreatureSize::Huge > CreatureSize::Small);
    }
}
