use crate::types::{BandDistribution, CountryHealthRecord, RankedCountry};

/// Leaderboard order: best score first, ties by country code.
///
/// Tied countries share a rank and the following rank is skipped (1, 2, 2, 4).
pub fn rank_countries<'a, I>(records: I) -> Vec<RankedCountry>
where
    I: IntoIterator<Item = &'a CountryHealthRecord>,
{
    let mut ordered: Vec<&CountryHealthRecord> = records.into_iter().collect();
    ordered.sort_by(|a, b| {
        b.health_score
            .cmp(&a.health_score)
            .then_with(|| a.code.cmp(&b.code))
    });

    let mut ranked = Vec::with_capacity(ordered.len());
    let mut previous: Option<(u8, usize)> = None;
    for (index, record) in ordered.into_iter().enumerate() {
        let rank = match previous {
            Some((score, rank)) if score == record.health_score => rank,
            _ => index + 1,
        };
        previous = Some((record.health_score, rank));
        ranked.push(RankedCountry {
            rank,
            code: record.code.clone(),
            name: record.name.clone(),
            health_score: record.health_score,
        });
    }
    ranked
}

pub fn band_distribution<'a, I>(records: I) -> BandDistribution
where
    I: IntoIterator<Item = &'a CountryHealthRecord>,
{
    records.into_iter().map(|record| record.health_score).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CountryIndicatorSet, DisplayIndicators, SourceAttribution};

    fn record(code: &str, score: u8) -> CountryHealthRecord {
        CountryHealthRecord {
            code: code.to_string(),
            name: format!("Country {code}"),
            health_score: score,
            scored_indicator_count: 1,
            raw_indicators: CountryIndicatorSet::new(),
            display_indicators: DisplayIndicators::default(),
            source_attribution: SourceAttribution::default(),
        }
    }

    #[test]
    fn test_ranking_orders_by_score() {
        let records = vec![record("AFG", 38), record("NOR", 91), record("BRA", 72)];
        let ranked = rank_countries(&records);
        let codes: Vec<&str> = ranked.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["NOR", "BRA", "AFG"]);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn test_ties_share_rank() {
        let records = vec![
            record("SWE", 90),
            record("JPN", 92),
            record("CHE", 90),
            record("TCD", 20),
        ];
        let ranked = rank_countries(&records);
        let rows: Vec<(usize, &str)> = ranked.iter().map(|r| (r.rank, r.code.as_str())).collect();
        assert_eq!(rows, vec![(1, "JPN"), (2, "CHE"), (2, "SWE"), (4, "TCD")]);
    }

    #[test]
    fn test_ranking_empty() {
        assert!(rank_countries(&Vec::<CountryHealthRecord>::new()).is_empty());
    }

    #[test]
    fn test_band_distribution_from_records() {
        let records = vec![record("NOR", 91), record("BRA", 72), record("SOM", 15)];
        let distribution = band_distribution(&records);
        assert_eq!(distribution.very_high, 1);
        assert_eq!(distribution.high, 1);
        assert_eq!(distribution.very_low, 1);
        assert_eq!(distribution.total(), 3);
    }
}
