//! Types for the fortune progression (decade → year → month).

use sizhu_core::{Branch, Stem};

use crate::ten_gods::TenGod;

/// Number of decade steps generated per timeline.
pub const DECADE_STEPS: usize = 10;

/// Years covered by one decade step.
pub const YEARS_PER_DECADE: u8 = 10;

/// Annual steps generated for the active decade.
pub const ANNUAL_STEPS: usize = 10;

/// Monthly steps generated for the active year.
pub const MONTHLY_STEPS: usize = 12;

/// Fallback first-decade start age when the calendar collaborator cannot
/// report the distance to the adjacent solar term.
pub const DEFAULT_START_AGE_YEARS: u8 = 8;

/// Days of term distance per fortune year (the traditional 3-days-1-year
/// conversion).
pub const DAYS_PER_FORTUNE_YEAR: f64 = 3.0;

/// The 12 governing solar terms in flow-month order (立春 first).
pub const SOLAR_TERMS: [&str; 12] = [
    "立春", "惊蛰", "清明", "立夏", "芒种", "小暑", "立秋", "白露", "寒露", "立冬", "大雪", "小寒",
];

/// Subject gender, one input of the direction rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

/// Iteration direction of the decade sequence, fixed for a whole timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Signed cycle step (+1 / −1).
    pub const fn step(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    /// The opposite direction.
    pub const fn reversed(self) -> Direction {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    /// Chinese name (顺排 / 逆排).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "顺排",
            Self::Backward => "逆排",
        }
    }
}

/// The interval between birth and the first decade step, when nonzero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreFortune {
    /// First year of the interval (the birth year).
    pub start_year: i32,
    /// Length of the interval in years.
    pub span_years: u8,
}

/// One decade step of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecadeStep {
    /// 1-based position among the decade steps.
    pub order: u8,
    /// The step's stem.
    pub stem: Stem,
    /// The step's branch.
    pub branch: Branch,
    /// Sexagenary index of the step's pillar.
    pub cycle: u8,
    /// Age at which the step begins.
    pub start_age: u8,
    /// Calendar year in which the step begins.
    pub start_year: i32,
    /// Ten-gods relation of the step's stem to the day-master.
    pub stem_god: TenGod,
    /// Ten-gods relation of the step's branch to the day-master.
    pub branch_god: TenGod,
}

/// One annual step nested in the active decade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnualStep {
    /// Calendar year.
    pub year: i32,
    /// Age in that year.
    pub age: u8,
    /// The year's stem.
    pub stem: Stem,
    /// The year's branch.
    pub branch: Branch,
    /// Ten-gods relation of the stem to the day-master.
    pub stem_god: TenGod,
    /// Ten-gods relation of the branch to the day-master.
    pub branch_god: TenGod,
}

/// One monthly step nested in the active year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyStep {
    /// Calendar year the month belongs to.
    pub year: i32,
    /// 1-based position in the flow-month sequence (1 = 立春 month).
    pub order: u8,
    /// Governing solar term name.
    pub term: &'static str,
    /// The month's stem.
    pub stem: Stem,
    /// The month's branch.
    pub branch: Branch,
    /// Ten-gods relation of the stem to the day-master.
    pub stem_god: TenGod,
    /// Ten-gods relation of the branch to the day-master.
    pub branch_god: TenGod,
}

/// The full nested progression with current-position indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FortuneTimeline {
    /// Fixed iteration direction.
    pub direction: Direction,
    /// First-decade start age in years.
    pub start_age: u8,
    /// Leading pre-fortune interval, present when the start age is nonzero.
    pub pre_fortune: Option<PreFortune>,
    /// The 10 decade steps.
    pub decades: Vec<DecadeStep>,
    /// Annual steps of the active decade.
    pub years: Vec<AnnualStep>,
    /// Monthly steps of the active year.
    pub months: Vec<MonthlyStep>,
    /// Index of the decade containing the reference year, if any.
    pub decade_index: Option<usize>,
    /// Index of the reference year within `years`, if any.
    pub year_index: Option<usize>,
}
