//! Rule table API routes
//!
//! Read-only views of the challenge rating and creature type tables.

use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};

use crate::application::dto::{ChallengeRatingDto, CreatureTypeDto};
use crate::domain::rules::CREATURE_TYPE_RULES;
use crate::domain::value_objects::ChallengeRating;
use crate::infrastructure::http::error::ApiError;

/// List every tabulated challenge rating
pub async fn list_challenge_ratings() -> impl IntoResponse {
    Json(ChallengeRatingDto::all())
}

/// Get one challenge rating ("1/2", "0.5" and "CR 3" are all accepted)
pub async fn get_challenge_rating(
    Path(rating): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let row = ChallengeRatingDto::find(&ChallengeRating::new(&rating))
        .ok_or(ApiError::UnknownRating(rating))?;
    Ok(Json(row))
}

/// List the per-type progression rules
pub async fn list_creature_types() -> impl IntoResponse {
    let types: Vec<CreatureTypeDto> = CREATURE_TYPE_RULES.iter().map(CreatureTypeDto::from).collect();
    Json(types)
}
