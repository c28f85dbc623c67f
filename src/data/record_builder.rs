use crate::logic::CompositeScore;
use crate::types::{
    CountryEntry, CountryHealthRecord, DisplayIndicators, Indicator, SourceAttribution,
};

pub struct CountryRecordBuilder {
    attribution: SourceAttribution,
}

impl CountryRecordBuilder {
    pub fn new(attribution: SourceAttribution) -> Self {
        Self { attribution }
    }

    pub fn build(
        &self,
        code: &str,
        entry: &CountryEntry,
        composite: CompositeScore,
    ) -> CountryHealthRecord {
        let indicators = &entry.indicators;
        let display_value = |indicator: Indicator| indicators.value(indicator).unwrap_or(0.0);

        CountryHealthRecord {
            code: code.to_string(),
            name: entry.name.clone(),
            health_score: composite.score,
            scored_indicator_count: composite.scored_indicators,
            raw_indicators: indicators.clone(),
            display_indicators: DisplayIndicators {
                life_expectancy: display_value(Indicator::LifeExpectancyAtBirth),
                infant_mortality: display_value(Indicator::InfantMortalityRate),
                immunization_coverage: display_value(Indicator::Dtp3Immunization),
                coverage_index: display_value(Indicator::UhcServiceCoverageIndex),
            },
            source_attribution: self.attribution.clone(),
        }
    }
}

impl Default for CountryRecordBuilder {
    fn default() -> Self {
        Self::new(SourceAttribution::default())
    }
}
