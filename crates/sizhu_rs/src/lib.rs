//! Convenience wrapper for the sizhu Four Pillars engine.
//!
//! Accepts four glyph pillars (or a civil birth moment plus collaborators),
//! runs every derivation engine, and returns serde-serializable reports.
//! The caller picks the wire format.
//!
//! # Quick start
//!
//! ```rust
//! use sizhu_rs::*;
//!
//! let chart = chart_from_names(["甲子", "丙寅", "戊午", "壬戌"]).unwrap();
//! let report = full_report(&chart, Gender::Male, 1984, None, 2024);
//! assert_eq!(report.day_master, "戊");
//! ```

pub mod convenience;
pub mod error;
pub mod report;

pub use convenience::{
    chart_from_names, chart_report, full_report, parse_pair, report_for_birth,
};
pub use error::SizhuError;
pub use report::{
    AnnualReport, ChartReport, DecadeReport, FortuneReport, HiddenReport, MonthlyReport,
    PairRelationReport, PillarReport, PreFortuneReport, RelationsReport, StemCombinationReport,
    StrengthReport, TriUnionReport,
};

// Re-export the typed surface so callers don't need the inner crates.
pub use sizhu_core::{
    ALL_BRANCHES, ALL_ELEMENTS, ALL_STEMS, Branch, Chart, ChartError, Element, GrowthStage,
    NaYin, Pillar, PillarSlot, Polarity, Stem,
};
pub use sizhu_engine::{
    CalendarProvider, ChartAnalysis, Direction, FortuneTimeline, Gazetteer, Gender,
    PillarExtract, ProviderError, ShenSha, StrengthLevel, TenGod, analyze, fortune_timeline,
};
pub use sizhu_time::{DEFAULT_COORDINATE, TimeError, true_solar_time};
