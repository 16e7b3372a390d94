//! High-level entry points.
//!
//! Accept glyph strings or raw pairs, run the engines, and hand back
//! serializable reports. The full birth pipeline (true solar time →
//! collaborator pillar extraction → analysis → fortune) lives in
//! [`report_for_birth`].

use chrono::{Datelike, NaiveDateTime};
use tracing::debug;

use sizhu_core::{Branch, Chart, Stem, void_pair};
use sizhu_engine::{
    CalendarProvider, DEFAULT_START_AGE_YEARS, Direction, Gazetteer, Gender, analyze,
    direction_for, fortune_timeline, resolve_or_default, start_age_from_term_distance,
};
use sizhu_time::true_solar_time;

use crate::error::SizhuError;
use crate::report::ChartReport;

/// Parse a two-glyph pillar string (e.g. `甲子`) into a stem-branch pair.
pub fn parse_pair(text: &str) -> Result<(Stem, Branch), SizhuError> {
    let mut chars = text.chars();
    let (Some(stem_glyph), Some(branch_glyph), None) =
        (chars.next(), chars.next(), chars.next())
    else {
        return Err(sizhu_core::ChartError::UnknownGlyph(text.to_string()).into());
    };
    let stem = Stem::from_name(&stem_glyph.to_string())
        .ok_or_else(|| sizhu_core::ChartError::UnknownGlyph(stem_glyph.to_string()))?;
    let branch = Branch::from_name(&branch_glyph.to_string())
        .ok_or_else(|| sizhu_core::ChartError::UnknownGlyph(branch_glyph.to_string()))?;
    Ok((stem, branch))
}

/// Build a chart from four two-glyph pillar strings in year/month/day/hour
/// order.
pub fn chart_from_names(names: [&str; 4]) -> Result<Chart, SizhuError> {
    let mut pairs = [(Stem::Jia, Branch::Zi); 4];
    for (slot, name) in pairs.iter_mut().zip(names) {
        *slot = parse_pair(name)?;
    }
    Ok(Chart::from_pairs(pairs)?)
}

/// Analyze a chart and attach the fortune progression.
pub fn full_report(
    chart: &Chart,
    gender: Gender,
    birth_year: i32,
    start_age: Option<u8>,
    reference_year: i32,
) -> ChartReport {
    let analysis = analyze(chart);
    let timeline = fortune_timeline(
        chart,
        gender,
        birth_year,
        start_age.unwrap_or(DEFAULT_START_AGE_YEARS),
        reference_year,
    );
    ChartReport::from_engine(chart, &analysis, Some(&timeline))
}

/// Analyze a chart without the fortune progression.
pub fn chart_report(chart: &Chart) -> ChartReport {
    let analysis = analyze(chart);
    ChartReport::from_engine(chart, &analysis, None)
}

/// The full birth pipeline.
///
/// Corrects the civil timestamp to true solar time (resolving the
/// birthplace through the gazetteer, degrading to the default coordinate),
/// asks the calendar collaborator for the pillars, and runs every engine.
/// The collaborator's void branches override the decade-block table when
/// supplied; the start age derives from the term distance when the
/// collaborator reports one.
pub fn report_for_birth(
    calendar: &dyn CalendarProvider,
    gazetteer: Option<&dyn Gazetteer>,
    place: Option<&str>,
    civil: NaiveDateTime,
    gender: Gender,
    reference_year: i32,
) -> Result<ChartReport, SizhuError> {
    let (longitude, _latitude) = match (gazetteer, place) {
        (Some(g), Some(p)) => resolve_or_default(g, p),
        _ => sizhu_time::DEFAULT_COORDINATE,
    };
    let solar = true_solar_time(civil, longitude)?;
    debug!(%civil, %solar, longitude, "corrected birth moment");

    let extract = calendar.solar_to_pillars(solar)?;
    let chart = Chart::from_pairs(extract.pairs())?;

    let direction = direction_for(chart.year().stem().polarity(), gender);
    let start_age = match calendar
        .days_to_adjacent_term(solar, direction == Direction::Forward)?
    {
        Some(days) => start_age_from_term_distance(days),
        None => DEFAULT_START_AGE_YEARS,
    };

    let analysis = analyze(&chart);
    let timeline = fortune_timeline(&chart, gender, civil.year(), start_age, reference_year);
    let mut report = ChartReport::from_engine(&chart, &analysis, Some(&timeline));

    // The collaborator's xun-kong answer is authoritative when present.
    if let Some((a, b)) = calendar.day_void_branches(solar)? {
        if (a, b) != void_pair(chart.day()) {
            debug!(
                collaborator = %format!("{}{}", a.name(), b.name()),
                "collaborator void pair overrides table"
            );
        }
        report.voids = [a.name().to_string(), b.name().to_string()];
    }
    if let Ok(animal) = calendar.year_zodiac_animal(solar) {
        report.animal = animal;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pair_glyphs() {
        assert_eq!(parse_pair("甲子").unwrap(), (Stem::Jia, Branch::Zi));
        assert_eq!(parse_pair("癸亥").unwrap(), (Stem::Gui, Branch::Hai));
        assert!(parse_pair("甲").is_err());
        assert!(parse_pair("子甲").is_err());
        assert!(parse_pair("甲子丑").is_err());
    }

    #[test]
    fn chart_from_names_validates() {
        let chart = chart_from_names(["甲子", "丙寅", "戊午", "壬戌"]).unwrap();
        assert_eq!(chart.day_master(), Stem::Wu);
        // 甲丑 is parity-mismatched.
        assert!(chart_from_names(["甲丑", "丙寅", "戊午", "壬戌"]).is_err());
    }

    #[test]
    fn full_report_carries_fortune() {
        let chart = chart_from_names(["甲子", "丙寅", "戊午", "壬戌"]).unwrap();
        let report = full_report(&chart, Gender::Male, 1984, None, 2015);
        let fortune = report.fortune.unwrap();
        assert_eq!(fortune.direction, "顺排");
        assert_eq!(fortune.decades.len(), 10);
        assert_eq!(fortune.years.len(), 10);
        assert_eq!(fortune.months.len(), 12);
    }

    #[test]
    fn chart_report_omits_fortune() {
        let chart = chart_from_names(["甲子", "丙寅", "戊午", "壬戌"]).unwrap();
        assert!(chart_report(&chart).fortune.is_none());
    }
}
