use crate::types::ScoreRange;

/// Min and max over all scores; `None` when there are no scores at all
pub fn reduce_score_range<I>(scores: I) -> Option<ScoreRange>
where
    I: IntoIterator<Item = u8>,
{
    scores.into_iter().fold(None, |range, score| {
        Some(match range {
            None => ScoreRange::new(score, score),
            Some(ScoreRange { min, max }) => ScoreRange::new(min.min(score), max.max(score)),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_of_three() {
        assert_eq!(reduce_score_range([30, 55, 80]), Some(ScoreRange::new(30, 80)));
        assert_eq!(reduce_score_range([80, 30, 55]), Some(ScoreRange::new(30, 80)));
    }

    #[test]
    fn test_single_score_is_flat() {
        let range = reduce_score_range([64]).unwrap();
        assert_eq!(range.min, 64);
        assert_eq!(range.max, 64);
        assert!(range.is_flat());
    }

    #[test]
    fn test_uniform_scores_are_flat() {
        assert!(reduce_score_range([50, 50, 50]).unwrap().is_flat());
    }

    #[test]
    fn test_empty_has_no_range() {
        assert_eq!(reduce_score_range(Vec::<u8>::new()), None);
    }
}
