//! Derivation engines over a four-pillar chart.
//!
//! This crate provides:
//! - The ten-gods relation (canonical derivation, no literal tables)
//! - Branch-to-branch and stem-to-stem relation detection
//! - Shen-sha markers, elemental strength, growth-stage aggregation
//! - The decade→year→month fortune progression with position tracking
//! - Collaborator traits for calendar conversion and the gazetteer
//!
//! Everything is pure and synchronous over immutable tables; the only
//! suspension points live behind the collaborator traits.

pub mod analysis;
pub mod fortune;
pub mod fortune_types;
pub mod providers;
pub mod relations;
pub mod shensha;
pub mod strength;
pub mod ten_gods;

pub use analysis::{ChartAnalysis, PillarAnalysis, analyze, conception_pillar};
pub use fortune::{
    direction_for, find_decade, first_month_stem, fortune_timeline, start_age_from_term_distance,
};
pub use fortune_types::{
    ANNUAL_STEPS, AnnualStep, DAYS_PER_FORTUNE_YEAR, DECADE_STEPS, DEFAULT_START_AGE_YEARS,
    DecadeStep, Direction, FortuneTimeline, Gender, MONTHLY_STEPS, MonthlyStep, PreFortune,
    SOLAR_TERMS, YEARS_PER_DECADE,
};
pub use providers::{
    CalendarProvider, Gazetteer, PillarExtract, ProviderError, resolve_or_default,
};
pub use relations::{
    PairKind, PairRelation, RelationReport, StemCombination, TriUnion, chart_relations,
    is_break, is_clash, is_harm, is_punishment, six_combination, stem_combination, tri_union,
};
pub use shensha::{
    ALL_SHENSHA, ShenSha, huagai_branch, jiangxing_branch, shensha_of_chart, taohua_branch,
    tianyi_branches, wenchang_branch, yima_branch,
};
pub use strength::{
    MODERATE_RATIO, STEM_SCORE, STRONG_RATIO, StrengthAssessment, StrengthLevel,
    elemental_strength,
};
pub use ten_gods::{
    ALL_TEN_GODS, TenGod, branch_relation, pillar_code, pillar_code_of, stem_relation,
};
