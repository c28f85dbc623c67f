/// WHO indicator catalog: names, units, direction and scoring rules in one table
use serde::Serialize;
use std::fmt;

/// Every indicator the engine recognizes, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Indicator {
    // Mortality
    LifeExpectancyAtBirth,
    HealthyLifeExpectancyAtBirth,
    MaternalMortalityRatio,
    InfantMortalityRate,
    UnderFiveMortalityRate,
    NeonatalMortalityRate,
    AdultMortalityRate,
    // Coverage
    SkilledBirthAttendance,
    AntenatalCareCoverage,
    UhcServiceCoverageIndex,
    FamilyPlanningSatisfied,
    // Immunization
    Dtp3Immunization,
    MeaslesImmunization,
    PolioImmunization,
    HepatitisBImmunization,
    MeaslesSecondDoseImmunization,
    PneumococcalImmunization,
    HpvImmunization,
    // Nutrition
    ChildUnderweight,
    ChildStunting,
    ChildWasting,
    ChildOverweight,
    AnaemiaInWomen,
    // Disease burden
    TuberculosisIncidence,
    HivPrevalence,
    MalariaIncidence,
    HepatitisBPrevalence,
    NcdMortalityProbability,
    // Infrastructure
    MedicalDoctorDensity,
    NursingPersonnelDensity,
    HospitalBedDensity,
    // Water and sanitation
    BasicDrinkingWater,
    BasicSanitation,
    SafelyManagedDrinkingWater,
    SafelyManagedSanitation,
    // Financing
    HealthExpenditureShareOfGdp,
    GovernmentHealthExpenditureShare,
    OutOfPocketExpenditureShare,
}

/// Whether a higher raw value means better health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitFamily {
    PercentageOrIndex,
    Years,
    RatePer1000,
    RatePer10000,
    RatePer100000,
    PrevalencePercentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndicatorCategory {
    Mortality,
    Coverage,
    Immunization,
    Nutrition,
    DiseaseBurden,
    Infrastructure,
    WaterSanitation,
    Financing,
}

/// Rule used to turn a raw value into a 0-100 goodness value.
///
/// Each rule is keyed to the natural range of its unit family rather than
/// rescaled across countries, so a country's score never depends on which
/// other countries are in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NormalizationRule {
    LifeExpectancy,
    Percentage,
    MaternalMortality,
    ChildMortality,
    Malnutrition,
    TuberculosisIncidence,
    HivPrevalence,
    MalariaIncidence,
}

impl NormalizationRule {
    pub const fn direction(self) -> Direction {
        match self {
            NormalizationRule::LifeExpectancy | NormalizationRule::Percentage => Direction::Positive,
            _ => Direction::Negative,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorDefinition {
    pub indicator: Indicator,
    pub name: &'static str,
    pub category: IndicatorCategory,
    pub direction: Direction,
    pub unit_family: UnitFamily,
    /// `None` marks a display-only indicator that never feeds the score
    pub rule: Option<NormalizationRule>,
    /// Spellings used by the WHO statistical annex
    pub aliases: &'static [&'static str],
}

impl IndicatorDefinition {
    pub fn is_scored(&self) -> bool {
        self.rule.is_some()
    }

    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|alias| *alias == name)
    }

    const fn with_aliases(self, aliases: &'static [&'static str]) -> Self {
        IndicatorDefinition { aliases, ..self }
    }
}

const fn scored(
    indicator: Indicator,
    name: &'static str,
    category: IndicatorCategory,
    unit_family: UnitFamily,
    rule: NormalizationRule,
) -> IndicatorDefinition {
    IndicatorDefinition {
        indicator,
        name,
        category,
        direction: rule.direction(),
        unit_family,
        rule: Some(rule),
        aliases: &[],
    }
}

const fn display_only(
    indicator: Indicator,
    name: &'static str,
    category: IndicatorCategory,
    direction: Direction,
    unit_family: UnitFamily,
) -> IndicatorDefinition {
    IndicatorDefinition {
        indicator,
        name,
        category,
        direction,
        unit_family,
        rule: None,
        aliases: &[],
    }
}

use Direction::{Negative, Positive};
use IndicatorCategory as Cat;
use NormalizationRule as Rule;
use UnitFamily as Unit;

const CATALOG_SIZE: usize = 38;

/// Canonical catalog, indexed by `Indicator as usize`
pub static CATALOG: [IndicatorDefinition; CATALOG_SIZE] = [
    scored(Indicator::LifeExpectancyAtBirth, "Life expectancy at birth (years)", Cat::Mortality, Unit::Years, Rule::LifeExpectancy),
    scored(Indicator::HealthyLifeExpectancyAtBirth, "Healthy life expectancy at birth (years)", Cat::Mortality, Unit::Years, Rule::LifeExpectancy),
    scored(Indicator::MaternalMortalityRatio, "Maternal mortality ratio (per 100,000 live births)", Cat::Mortality, Unit::RatePer100000, Rule::MaternalMortality).with_aliases(&["Maternal mortality ratio (per 100 000 live births)"]),
    scored(Indicator::InfantMortalityRate, "Infant mortality rate (per 1,000 live births)", Cat::Mortality, Unit::RatePer1000, Rule::ChildMortality).with_aliases(&["Infant mortality rate (per 1000 live births)"]),
    scored(Indicator::UnderFiveMortalityRate, "Under-five mortality rate (per 1,000 live births)", Cat::Mortality, Unit::RatePer1000, Rule::ChildMortality).with_aliases(&["Under-five mortality rate (per 1000 live births)"]),
    display_only(Indicator::NeonatalMortalityRate, "Neonatal mortality rate (per 1,000 live births)", Cat::Mortality, Negative, Unit::RatePer1000).with_aliases(&["Neonatal mortality rate (per 1000 live births)"]),
    display_only(Indicator::AdultMortalityRate, "Adult mortality rate (per 1,000 population)", Cat::Mortality, Negative, Unit::RatePer1000).with_aliases(&["Adult mortality rate (per 1000 population)"]),
    scored(Indicator::SkilledBirthAttendance, "Births attended by skilled health personnel (%)", Cat::Coverage, Unit::PercentageOrIndex, Rule::Percentage).with_aliases(&["Proportion of births attended by skilled health personnel (%)"]),
    scored(Indicator::AntenatalCareCoverage, "Antenatal care coverage (at least four visits) (%)", Cat::Coverage, Unit::PercentageOrIndex, Rule::Percentage),
    scored(Indicator::UhcServiceCoverageIndex, "UHC: Service coverage index", Cat::Coverage, Unit::PercentageOrIndex, Rule::Percentage),
    display_only(Indicator::FamilyPlanningSatisfied, "Family planning need satisfied with modern methods (%)", Cat::Coverage, Positive, Unit::PercentageOrIndex).with_aliases(&["Proportion of women of reproductive age who have their need for family planning satisfied with modern methods (%)"]),
    scored(Indicator::Dtp3Immunization, "DTP3 immunization coverage among 1-year-olds (%)", Cat::Immunization, Unit::PercentageOrIndex, Rule::Percentage).with_aliases(&["Diphtheria-tetanus-pertussis (DTP3) immunization coverage among 1-year-olds (%)"]),
    scored(Indicator::MeaslesImmunization, "Measles immunization coverage among 1-year-olds (%)", Cat::Immunization, Unit::PercentageOrIndex, Rule::Percentage),
    scored(Indicator::PolioImmunization, "Polio (Pol3) immunization coverage among 1-year-olds (%)", Cat::Immunization, Unit::PercentageOrIndex, Rule::Percentage),
    display_only(Indicator::HepatitisBImmunization, "Hepatitis B (HepB3) immunization coverage among 1-year-olds (%)", Cat::Immunization, Positive, Unit::PercentageOrIndex),
    display_only(Indicator::MeaslesSecondDoseImmunization, "Measles second-dose (MCV2) immunization coverage (%)", Cat::Immunization, Positive, Unit::PercentageOrIndex).with_aliases(&["Measles-containing-vaccine second-dose (MCV2) immunization coverage by the locally recommended age (%)"]),
    display_only(Indicator::PneumococcalImmunization, "Pneumococcal conjugate (PCV3) immunization coverage among 1-year-olds (%)", Cat::Immunization, Positive, Unit::PercentageOrIndex).with_aliases(&["Pneumococcal conjugate 3rd dose (PCV3) immunization coverage  among 1-year olds (%)", "Pneumococcal conjugate 3rd dose (PCV3) immunization coverage among 1-year olds (%)"]),
    display_only(Indicator::HpvImmunization, "HPV immunization coverage among 15-year-old girls (%)", Cat::Immunization, Positive, Unit::PercentageOrIndex).with_aliases(&["Human papillomavirus (HPV) immunization coverage estimates among 15 year-old girls (%)"]),
    scored(Indicator::ChildUnderweight, "Children under 5 who are underweight (%)", Cat::Nutrition, Unit::PrevalencePercentage, Rule::Malnutrition),
    scored(Indicator::ChildStunting, "Children under 5 who are stunted (%)", Cat::Nutrition, Unit::PrevalencePercentage, Rule::Malnutrition).with_aliases(&["Prevalence of stunting in children under 5 (%)"]),
    scored(Indicator::ChildWasting, "Children under 5 who are wasted (%)", Cat::Nutrition, Unit::PrevalencePercentage, Rule::Malnutrition).with_aliases(&["Prevalence of wasting in children under 5 (%)"]),
    display_only(Indicator::ChildOverweight, "Children under 5 who are overweight (%)", Cat::Nutrition, Negative, Unit::PrevalencePercentage).with_aliases(&["Prevalence of overweight in children under 5 (%)"]),
    display_only(Indicator::AnaemiaInWomen, "Prevalence of anaemia in women of reproductive age (%)", Cat::Nutrition, Negative, Unit::PrevalencePercentage).with_aliases(&["Prevalence of anaemia in women of reproductive age (15-49 years) (%)"]),
    scored(Indicator::TuberculosisIncidence, "Tuberculosis incidence (per 100,000 population)", Cat::DiseaseBurden, Unit::RatePer100000, Rule::TuberculosisIncidence).with_aliases(&["Tuberculosis incidence (per 100 000 population)"]),
    scored(Indicator::HivPrevalence, "HIV prevalence among adults aged 15-49 (%)", Cat::DiseaseBurden, Unit::PrevalencePercentage, Rule::HivPrevalence),
    scored(Indicator::MalariaIncidence, "Malaria incidence (per 1,000 population at risk)", Cat::DiseaseBurden, Unit::RatePer1000, Rule::MalariaIncidence).with_aliases(&["Malaria incidence (per 1000 population at risk)"]),
    display_only(Indicator::HepatitisBPrevalence, "Hepatitis B surface antigen prevalence among children under 5 (%)", Cat::DiseaseBurden, Negative, Unit::PrevalencePercentage).with_aliases(&["Hepatitis B surface antigen (HBsAg) prevalence among children under 5 years (%)"]),
    display_only(Indicator::NcdMortalityProbability, "Probability of dying from NCDs between age 30 and 70 (%)", Cat::DiseaseBurden, Negative, Unit::PrevalencePercentage).with_aliases(&["Probability of dying from any of CVD, cancer, diabetes, CRD between age 30 and exact age 70 (%)"]),
    display_only(Indicator::MedicalDoctorDensity, "Density of medical doctors (per 10,000 population)", Cat::Infrastructure, Positive, Unit::RatePer10000).with_aliases(&["Density of medical doctors (per 10 000 population)"]),
    display_only(Indicator::NursingPersonnelDensity, "Density of nursing and midwifery personnel (per 10,000 population)", Cat::Infrastructure, Positive, Unit::RatePer10000).with_aliases(&["Density of nursing and midwifery personnel (per 10 000 population)"]),
    display_only(Indicator::HospitalBedDensity, "Hospital beds (per 10,000 population)", Cat::Infrastructure, Positive, Unit::RatePer10000).with_aliases(&["Hospital beds (per 10 000 population)"]),
    scored(Indicator::BasicDrinkingWater, "Population using at least basic drinking-water services (%)", Cat::WaterSanitation, Unit::PercentageOrIndex, Rule::Percentage),
    scored(Indicator::BasicSanitation, "Population using at least basic sanitation services (%)", Cat::WaterSanitation, Unit::PercentageOrIndex, Rule::Percentage),
    display_only(Indicator::SafelyManagedDrinkingWater, "Population using safely-managed drinking-water services (%)", Cat::WaterSanitation, Positive, Unit::PercentageOrIndex).with_aliases(&["Proportion of population using safely-managed drinking-water services (%)"]),
    display_only(Indicator::SafelyManagedSanitation, "Population using safely-managed sanitation services (%)", Cat::WaterSanitation, Positive, Unit::PercentageOrIndex).with_aliases(&["Proportion of population using safely-managed sanitation services (%)"]),
    display_only(Indicator::HealthExpenditureShareOfGdp, "Current health expenditure as percentage of GDP (%)", Cat::Financing, Positive, Unit::PercentageOrIndex),
    display_only(Indicator::GovernmentHealthExpenditureShare, "Domestic general government health expenditure as percentage of general government expenditure (%)", Cat::Financing, Positive, Unit::PercentageOrIndex).with_aliases(&["Domestic general government health expenditure (GGHE-D) as percentage of general government expenditure (GGE) (%)"]),
    display_only(Indicator::OutOfPocketExpenditureShare, "Out-of-pocket expenditure as percentage of current health expenditure (%)", Cat::Financing, Negative, Unit::PercentageOrIndex),
];

impl Indicator {
    pub fn definition(self) -> &'static IndicatorDefinition {
        &CATALOG[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.definition().name
    }

    pub fn rule(self) -> Option<NormalizationRule> {
        self.definition().rule
    }

    /// Resolve a catalog name or WHO annex spelling. Matching is exact.
    pub fn from_name(name: &str) -> Option<Indicator> {
        CATALOG
            .iter()
            .find(|definition| definition.matches(name))
            .map(|definition| definition.indicator)
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The full catalog in canonical order
pub fn catalog() -> &'static [IndicatorDefinition] {
    &CATALOG
}

/// Scored indicators where higher raw values are better
pub fn positive_set() -> impl Iterator<Item = &'static IndicatorDefinition> {
    scored_with_direction(Direction::Positive)
}

/// Scored indicators where higher raw values are worse
pub fn negative_set() -> impl Iterator<Item = &'static IndicatorDefinition> {
    scored_with_direction(Direction::Negative)
}

fn scored_with_direction(direction: Direction) -> impl Iterator<Item = &'static IndicatorDefinition> {
    CATALOG
        .iter()
        .filter(move |definition| definition.is_scored() && definition.direction == direction)
}
