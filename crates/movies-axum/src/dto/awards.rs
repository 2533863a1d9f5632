//! Award interval DTOs.

use movies_core::{AwardIntervals, ProducerInterval};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One producer's gap between two consecutive wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProducerIntervalDto {
    /// Producers as credited on the winning movies.
    #[schema(example = "Joel Silver")]
    pub producers: String,
    /// Years between the two wins.
    #[schema(example = 1)]
    pub interval: i32,
    /// Year of the earlier win.
    #[schema(example = 1990)]
    pub previous_win: i32,
    /// Year of the later win.
    #[schema(example = 1991)]
    pub following_win: i32,
}

impl From<ProducerInterval> for ProducerIntervalDto {
    fn from(interval: ProducerInterval) -> Self {
        Self {
            producers: interval.producers,
            interval: interval.interval,
            previous_win: interval.previous_win,
            following_win: interval.following_win,
        }
    }
}

/// Response of `GET /movie/awards-result`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AwardIntervalsDto {
    /// Shortest interval of every producer with two or more wins.
    pub min: Vec<ProducerIntervalDto>,
    /// Longest interval of every producer with two or more wins.
    pub max: Vec<ProducerIntervalDto>,
}

impl From<AwardIntervals> for AwardIntervalsDto {
    fn from(result: AwardIntervals) -> Self {
        Self {
            min: result.min.into_iter().map(Into::into).collect(),
            max: result.max.into_iter().map(Into::into).collect(),
        }
    }
}
