//! Movie handlers - award interval queries.

use axum::Json;
use axum::extract::State;

use crate::dto::AwardIntervalsDto;
use crate::error::HttpError;
use crate::state::AppState;

/// Producers with the shortest and longest gaps between consecutive wins.
#[utoipa::path(
    get,
    path = "/movie/awards-result",
    tag = "movie",
    responses(
        (status = 200, description = "Per-producer minimum and maximum win intervals", body = AwardIntervalsDto),
        (status = 500, description = "Movie storage unavailable", body = crate::error::ErrorBody)
    )
)]
pub async fn awards_result(
    State(state): State<AppState>,
) -> Result<Json<AwardIntervalsDto>, HttpError> {
    let result = state.movies.award_intervals().await?;
    Ok(Json(result.into()))
}
