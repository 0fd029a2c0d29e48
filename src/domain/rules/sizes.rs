//! Size modifiers and size-implied rating floors

use serde::Serialize;

use crate::domain::value_objects::CreatureSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeConstants {
    /// Applied to AC and attack rolls
    pub ac_attack_mod: i32,
    /// Applied to CMB and CMD
    pub cmb_cmd_mod: i32,
    pub stealth_mod: i32,
}

const fn size(ac_attack_mod: i32, cmb_cmd_mod: i32, stealth_mod: i32) -> SizeConstants {
    SizeConstants {
        ac_attack_mod,
        cmb_cmd_mod,
        stealth_mod,
    }
}

impl CreatureSize {
    pub fn constants(&self) -> SizeConstants {
        match self {
            Self::Fine => size(8, -8, 16),
            Self::Diminutive => size(4, -4, 12),
            Self::Tiny => size(2, -2, 8),
            Self::Small => size(1, -1, 4),
            Self::Medium => size(0, 0, 0),
            Self::Large => size(-1, 1, -4),
            Self::Huge => size(-2, 2, -8),
            Self::Gargantuan => size(-4, 4, -12),
            Self::Colossal => size(-8, 8, -16),
        }
    }

    /// Lowest rating a creature of this size should carry
    pub fn minimum_rating(&self) -> Option<f64> {
        match self {
            Self::Large => Some(2.0),
            Self::Huge => Some(4.0),
            Self::Gargantuan => Some(6.0),
            Self::Colossal => Some(8.0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_modifiers_mirror() {
        for size in CreatureSize::ALL {
            let constants = size.constants();
            assert_eq!(constants.ac_attack_mod, -constants.cmb_cmd_mod);
        }
        assert_eq!(CreatureSize::Medium.minimum_rating(), None);
        assert_eq!(CreatureSize::Colossal.minimum_rating(), Some(8.0));
    }
}
