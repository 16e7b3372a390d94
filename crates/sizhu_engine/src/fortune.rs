//! Fortune progression generation (decade → year → month).
//!
//! The decade sequence seeds from the month pillar and walks the sexagenary
//! cycle in a direction fixed by year-stem polarity and gender. Annual
//! pillars come from the absolute year's cycle index and therefore always
//! advance forward, whatever the decade direction; monthly pillars follow
//! the five-tigers rule from the annual stem and also advance forward.

use tracing::debug;

use sizhu_core::{Branch, Chart, Polarity, Stem, advance, index_to_pillar, year_cycle_index};

use crate::fortune_types::{
    ANNUAL_STEPS, AnnualStep, DAYS_PER_FORTUNE_YEAR, DECADE_STEPS, DecadeStep, Direction,
    FortuneTimeline, Gender, MONTHLY_STEPS, MonthlyStep, PreFortune, SOLAR_TERMS,
    YEARS_PER_DECADE,
};
use crate::ten_gods::{branch_relation, stem_relation};

/// Direction of the decade sequence.
///
/// Forward iff (yang year stem ∧ male) ∨ (yin year stem ∧ female).
pub const fn direction_for(year_stem_polarity: Polarity, gender: Gender) -> Direction {
    match (year_stem_polarity, gender) {
        (Polarity::Yang, Gender::Male) | (Polarity::Yin, Gender::Female) => Direction::Forward,
        _ => Direction::Backward,
    }
}

/// First-decade start age from the day-distance to the adjacent solar term.
///
/// Three days per year, rounded to nearest, never below one year.
pub fn start_age_from_term_distance(days: f64) -> u8 {
    let years = (days.abs() / DAYS_PER_FORTUNE_YEAR).round();
    (years.max(1.0)).min(u8::MAX as f64) as u8
}

/// Stem of the first flow month (the 寅 month) for a year stem: the
/// five-tigers rule, `(2y + 2) mod 10`.
pub const fn first_month_stem(year_stem: Stem) -> Stem {
    Stem::from_index((2 * year_stem.index() + 2) % 10)
}

/// Locate the decade step whose `[start_year, start_year + 10)` interval
/// contains a year.
pub fn find_decade(decades: &[DecadeStep], year: i32) -> Option<usize> {
    decades
        .iter()
        .position(|d| d.start_year <= year && year < d.start_year + YEARS_PER_DECADE as i32)
}

/// Generate the full timeline.
///
/// `start_age` is the first-decade start age (see
/// [`start_age_from_term_distance`] and
/// [`crate::fortune_types::DEFAULT_START_AGE_YEARS`]); `reference_year`
/// drives the current-position indices and selects the decade and year whose
/// nested steps are materialized (falling back to the first of each when the
/// reference lies outside the timeline).
pub fn fortune_timeline(
    chart: &Chart,
    gender: Gender,
    birth_year: i32,
    start_age: u8,
    reference_year: i32,
) -> FortuneTimeline {
    let day_master = chart.day_master();
    let direction = direction_for(chart.year().stem().polarity(), gender);
    debug!(
        direction = direction.name(),
        start_age, "generating fortune timeline"
    );

    // Decade steps: walk the cycle from the month pillar.
    let mut decades = Vec::with_capacity(DECADE_STEPS);
    let mut cycle = chart.month().cycle_index();
    for i in 0..DECADE_STEPS {
        cycle = advance(cycle, direction.step());
        let (stem, branch) = index_to_pillar(cycle);
        let age = start_age + (i as u8) * YEARS_PER_DECADE;
        decades.push(DecadeStep {
            order: (i as u8) + 1,
            stem,
            branch,
            cycle,
            start_age: age,
            start_year: birth_year + age as i32,
            stem_god: stem_relation(day_master, stem),
            branch_god: branch_relation(day_master, branch),
        });
    }

    let pre_fortune = (start_age > 0).then_some(PreFortune {
        start_year: birth_year,
        span_years: start_age,
    });

    let decade_index = find_decade(&decades, reference_year);
    let active_decade = &decades[decade_index.unwrap_or(0)];

    let years = annual_steps(day_master, active_decade);
    let year_index = years.iter().position(|y| y.year == reference_year);
    let active_year = &years[year_index.unwrap_or(0)];

    let months = monthly_steps(day_master, active_year);

    FortuneTimeline {
        direction,
        start_age,
        pre_fortune,
        decades,
        years,
        months,
        decade_index,
        year_index,
    }
}

/// Annual steps covering a decade step, pillars from the absolute year.
fn annual_steps(day_master: Stem, decade: &DecadeStep) -> Vec<AnnualStep> {
    (0..ANNUAL_STEPS as u8)
        .map(|offset| {
            let year = decade.start_year + offset as i32;
            let (stem, branch) = index_to_pillar(year_cycle_index(year));
            AnnualStep {
                year,
                age: decade.start_age + offset,
                stem,
                branch,
                stem_god: stem_relation(day_master, stem),
                branch_god: branch_relation(day_master, branch),
            }
        })
        .collect()
}

/// Monthly steps covering an annual step, stems by the five-tigers rule.
fn monthly_steps(day_master: Stem, year: &AnnualStep) -> Vec<MonthlyStep> {
    let first_stem = first_month_stem(year.stem).index();
    (0..MONTHLY_STEPS as u8)
        .map(|k| {
            let stem = Stem::from_index(first_stem + k);
            let branch = Branch::from_index(2 + k); // flow months start at 寅
            MonthlyStep {
                year: year.year,
                order: k + 1,
                term: SOLAR_TERMS[k as usize],
                stem,
                branch,
                stem_god: stem_relation(day_master, stem),
                branch_god: branch_relation(day_master, branch),
            }
        })
        .collect()
}
