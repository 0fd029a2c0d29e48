use serde::{Deserialize, Serialize};

use crate::domain::rules::{
    benchmarks_for, treasure_for, CreatureTypeRule, MonsterStatistics, TreasureByRating,
    EXPERIENCE_BY_RATING,
};
use crate::domain::value_objects::{BabProgression, ChallengeRating, Save};

/// Everything tabulated for one challenge rating
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChallengeRatingDto {
    pub rating: ChallengeRating,
    pub xp: u32,
    pub benchmarks: Option<MonsterStatistics>,
    pub treasure: Option<TreasureByRating>,
}

impl ChallengeRatingDto {
    /// Every rating in the experience table, lowest first
    pub fn all() -> Vec<Self> {
        EXPERIENCE_BY_RATING
            .iter()
            .map(|(rating, xp)| Self::row(ChallengeRating::new(rating), *xp))
            .collect()
    }

    pub fn find(rating: &ChallengeRating) -> Option<Self> {
        EXPERIENCE_BY_RATING
            .iter()
            .find(|(cr, _)| *cr == rating.as_str())
            .map(|(_, xp)| Self::row(rating.clone(), *xp))
    }

    fn row(rating: ChallengeRating, xp: u32) -> Self {
        Self {
            benchmarks: benchmarks_for(&rating).copied(),
            treasure: treasure_for(&rating).copied(),
            rating,
            xp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureTypeDto {
    pub name: String,
    pub bab_progression: BabProgression,
    pub good_saves: Vec<Save>,
    pub skill_ranks_per_hd: u32,
    pub hit_die: u32,
    pub no_skills_or_feats: bool,
}

impl From<&CreatureTypeRule> for CreatureTypeDto {
    fn from(value: &CreatureTypeRule) -> Self {
        Self {
            name: value.name.to_string(),
            bab_progression: value.bab_progression,
            good_saves: value.good_saves.to_vec(),
            skill_ranks_per_hd: value.skill_ranks_per_hd,
            hit_die: value.hit_die,
            no_skills_or_feats: value.no_skills_or_feats,
        }
    }
}
