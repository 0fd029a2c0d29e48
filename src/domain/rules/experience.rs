//! Experience award by challenge rating

use crate::domain::value_objects::ChallengeRating;

/// Award used when a stat block carries no experience value at all (CR 1)
pub const DEFAULT_EXPERIENCE: u32 = 400;

/// Declaration order matters: nearest-rating lookups break ties on the first
/// entry scanned, so entries stay lowest rating first.
pub const EXPERIENCE_BY_RATING: [(&str, u32); 30] = [
    ("1/8", 50),
    ("1/6", 65),
    ("1/4", 100),
    ("1/3", 135),
    ("1/2", 200),
    ("1", 400),
    ("2", 600),
    ("3", 800),
    ("4", 1_200),
    ("5", 1_600),
    ("6", 2_400),
    ("7", 3_200),
    ("8", 4_800),
    ("9", 6_400),
    ("10", 9_600),
    ("11", 12_800),
    ("12", 19_200),
    ("13", 25_600),
    ("14", 38_400),
    ("15", 51_200),
    ("16", 76_800),
    ("17", 102_400),
    ("18", 153_600),
    ("19", 204_800),
    ("20", 307_200),
    ("21", 409_600),
    ("22", 614_400),
    ("23", 819_200),
    ("24", 1_228_800),
    ("25", 1_638_400),
];

/// Canonical award for a rating; exact match on the normalized key
pub fn experience_for(rating: &ChallengeRating) -> Option<u32> {
    EXPERIENCE_BY_RATING
        .iter()
        .find(|(cr, _)| *cr == rating.as_str())
        .map(|(_, xp)| *xp)
}
