//! Treasure and wealth tables
//!
//! Heroic NPC wealth is not tabulated directly; it is accumulated once from
//! the per-encounter treasure table the first time it is read.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::domain::value_objects::{ChallengeRating, EconomicTier};

const ENCOUNTERS_PER_LEVEL: f64 = 13.0;
const PARTY_SIZE: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreasureByRating {
    pub cr: &'static str,
    pub slow: u32,
    pub medium: u32,
    pub fast: u32,
}

const fn treasure(cr: &'static str, slow: u32, medium: u32, fast: u32) -> TreasureByRating {
    TreasureByRating {
        cr,
        slow,
        medium,
        fast,
    }
}

pub const TREASURE_BY_RATING: [TreasureByRating; 30] = [
    treasure("1/8", 35, 50, 65),
    treasure("1/6", 45, 65, 80),
    treasure("1/4", 65, 85, 100),
    treasure("1/3", 90, 135, 170),
    treasure("1/2", 130, 190, 230),
    treasure("1", 170, 260, 400),
    treasure("2", 350, 550, 800),
    treasure("3", 550, 800, 1_200),
    treasure("4", 750, 1_150, 1_700),
    treasure("5", 1_000, 1_550, 2_300),
    treasure("6", 1_350, 2_000, 3_000),
    treasure("7", 1_750, 2_600, 3_900),
    treasure("8", 2_200, 3_350, 5_000),
    treasure("9", 2_850, 4_250, 6_400),
    treasure("10", 3_650, 5_450, 8_200),
    treasure("11", 4_650, 7_000, 10_500),
    treasure("12", 6_000, 9_000, 13_500),
    treasure("13", 7_750, 11_600, 17_500),
    treasure("14", 10_000, 15_000, 22_000),
    treasure("15", 13_000, 19_500, 29_000),
    treasure("16", 16_500, 25_000, 38_000),
    treasure("17", 22_000, 32_000, 48_000),
    treasure("18", 28_000, 41_000, 62_000),
    treasure("19", 35_000, 53_000, 79_000),
    treasure("20", 45_000, 67_000, 100_000),
    treasure("21", 58_000, 88_000, 130_000),
    treasure("22", 75_000, 110_000, 170_000),
    treasure("23", 98_000, 150_000, 220_000),
    treasure("24", 130_000, 200_000, 290_000),
    treasure("25", 170_000, 260_000, 380_000),
];

/// Treasure value per encounter on the medium track, levels 1-20
pub const TREASURE_PER_ENCOUNTER_MEDIUM: [u32; 20] = [
    260, 550, 800, 1_150, 1_550, 2_000, 2_600, 3_350, 4_250, 5_450, 7_000, 9_000, 11_600,
    15_000, 19_500, 25_000, 32_000, 41_000, 53_000, 67_000,
];

/// NPC gear value for basic (NPC-class) characters, levels 1-20
pub const BASIC_NPC_WEALTH: [u32; 20] = [
    260, 390, 780, 1_650, 2_400, 3_450, 4_650, 6_000, 7_800, 10_050, 12_750, 16_350, 21_000,
    27_000, 34_800, 45_000, 58_500, 75_000, 96_000, 123_000,
];

/// Heroic NPC wealth, levels 1-20: running sum of one level's treasure
/// (13 encounters) split across a party of four
pub static HEROIC_NPC_WEALTH: Lazy<[u32; 20]> = Lazy::new(|| {
    let mut wealth = [0u32; 20];
    let mut cumulative = 0.0;
    for (slot, per_encounter) in wealth.iter_mut().zip(TREASURE_PER_ENCOUNTER_MEDIUM) {
        cumulative += f64::from(per_encounter) * ENCOUNTERS_PER_LEVEL / PARTY_SIZE;
        *slot = cumulative.round() as u32;
    }
    wealth
});

pub fn treasure_for(rating: &ChallengeRating) -> Option<&'static TreasureByRating> {
    TREASURE_BY_RATING
        .iter()
        .find(|row| row.cr == rating.as_str())
}

/// Expected gear value for an NPC tier at a character level (1-20).
/// Monsters are valued by rating instead and always return `None` here.
pub fn wealth_by_level(tier: EconomicTier, level: u32) -> Option<u32> {
    if !(1..=20).contains(&level) {
        return None;
    }
    let index = (level - 1) as usize;
    match tier {
        EconomicTier::HeroicNpc => Some(HEROIC_NPC_WEALTH[index]),
        EconomicTier::BasicNpc => Some(BASIC_NPC_WEALTH[index]),
        EconomicTier::Monster => None,
    }
}
