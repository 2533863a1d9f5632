//! Producer win-interval computation.

use std::collections::BTreeMap;

use crate::domain::{AwardIntervals, Movie, ProducerInterval};

/// Compute the shortest and longest gaps between consecutive wins.
///
/// Non-winners are ignored. Movies are grouped by their exact `producers`
/// string and only groups with two or more wins contribute. Each
/// qualifying producer yields one `min` and one `max` entry; when several
/// gaps tie, the earliest pair of wins is reported. Both lists are ordered
/// by producer name.
pub fn compute_award_intervals(movies: &[Movie]) -> AwardIntervals {
    let mut wins_by_producer: BTreeMap<&str, Vec<i32>> = BTreeMap::new();
    for movie in movies.iter().filter(|m| m.winner) {
        wins_by_producer
            .entry(movie.producers.as_str())
            .or_default()
            .push(movie.year);
    }

    let mut result = AwardIntervals::default();

    for (producers, mut years) in wins_by_producer {
        if years.len() < 2 {
            continue;
        }
        years.sort_unstable();

        let gaps: Vec<ProducerInterval> = years
            .windows(2)
            .map(|pair| ProducerInterval {
                producers: producers.to_string(),
                interval: pair[1].saturating_sub(pair[0]),
                previous_win: pair[0],
                following_win: pair[1],
            })
            .collect();

        // Strict comparisons: the earliest pair wins ties.
        let shortest = gaps.iter().reduce(|best, gap| {
            if gap.interval < best.interval { gap } else { best }
        });
        let longest = gaps.iter().reduce(|best, gap| {
            if gap.interval > best.interval { gap } else { best }
        });

        if let (Some(shortest), Some(longest)) = (shortest, longest) {
            result.min.push(shortest.clone());
            result.max.push(longest.clone());
        }
    }

    result
}
