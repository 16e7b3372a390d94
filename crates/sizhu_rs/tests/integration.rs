//! End-to-end tests for the convenience surface with stub collaborators.

use chrono::{NaiveDate, NaiveDateTime};

use sizhu_rs::*;

/// Calendar stub for 1984-02-05 12:00 (甲子 year, 丙寅 month, 戊午 day,
/// 戊午 hour), with term distance and void overrides.
struct StubCalendar {
    term_days: Option<f64>,
    voids: Option<(Branch, Branch)>,
}

impl CalendarProvider for StubCalendar {
    fn solar_to_pillars(&self, _at: NaiveDateTime) -> Result<PillarExtract, ProviderError> {
        Ok(PillarExtract {
            year: (Stem::Jia, Branch::Zi),
            month: (Stem::Bing, Branch::Yin),
            day: (Stem::Wu, Branch::Wu),
            hour: (Stem::Wu, Branch::Wu),
            lunar_year: 1984,
            lunar_month: 1,
            lunar_day: 4,
            leap_month: false,
        })
    }

    fn day_void_branches(
        &self,
        _at: NaiveDateTime,
    ) -> Result<Option<(Branch, Branch)>, ProviderError> {
        Ok(self.voids)
    }

    fn days_to_adjacent_term(
        &self,
        _at: NaiveDateTime,
        _forward: bool,
    ) -> Result<Option<f64>, ProviderError> {
        Ok(self.term_days)
    }
}

/// Calendar stub that always fails.
struct DownCalendar;

impl CalendarProvider for DownCalendar {
    fn solar_to_pillars(&self, _at: NaiveDateTime) -> Result<PillarExtract, ProviderError> {
        Err(ProviderError::CalendarUnavailable("timeout".to_string()))
    }
}

struct StubGazetteer;

impl Gazetteer for StubGazetteer {
    fn resolve(&self, place: &str) -> Option<(f64, f64)> {
        (place == "成都").then_some((104.06, 30.67))
    }
}

fn birth() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1984, 2, 5)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

#[test]
fn pipeline_produces_full_report() {
    let calendar = StubCalendar {
        term_days: None,
        voids: None,
    };
    let report = report_for_birth(
        &calendar,
        Some(&StubGazetteer),
        Some("成都"),
        birth(),
        Gender::Male,
        2024,
    )
    .unwrap();

    assert_eq!(report.pillars, ["甲子", "丙寅", "戊午", "戊午"]);
    assert_eq!(report.day_master, "戊");
    assert_eq!(report.animal, "鼠");
    // 戊午 day: index 54, block 5 → void 子丑.
    assert_eq!(report.voids, ["子", "丑"]);
    let fortune = report.fortune.as_ref().unwrap();
    // No term distance → default start age.
    assert_eq!(fortune.start_age, 8);
    assert!(fortune.pre_fortune.is_some());
}

#[test]
fn term_distance_drives_start_age() {
    let calendar = StubCalendar {
        term_days: Some(9.0),
        voids: None,
    };
    let report = report_for_birth(&calendar, None, None, birth(), Gender::Male, 2024).unwrap();
    assert_eq!(report.fortune.unwrap().start_age, 3);
}

#[test]
fn collaborator_voids_win() {
    let calendar = StubCalendar {
        term_days: None,
        voids: Some((Branch::Zi, Branch::Chou)),
    };
    let report = report_for_birth(&calendar, None, None, birth(), Gender::Male, 2024).unwrap();
    assert_eq!(report.voids, ["子", "丑"]);
}

#[test]
fn calendar_outage_surfaces_immediately() {
    let err = report_for_birth(&DownCalendar, None, None, birth(), Gender::Male, 2024)
        .unwrap_err();
    assert!(matches!(
        err,
        SizhuError::Provider(ProviderError::CalendarUnavailable(_))
    ));
}

#[test]
fn unknown_place_degrades_to_default() {
    // The default coordinate is used; the pipeline still succeeds.
    let calendar = StubCalendar {
        term_days: None,
        voids: None,
    };
    let report = report_for_birth(
        &calendar,
        Some(&StubGazetteer),
        Some("nowhere"),
        birth(),
        Gender::Female,
        2024,
    )
    .unwrap();
    // Yang year + female → backward.
    assert_eq!(report.fortune.unwrap().direction, "逆排");
}

#[test]
fn report_serializes_to_json() {
    let chart = chart_from_names(["甲子", "丙寅", "戊午", "壬戌"]).unwrap();
    let report = full_report(&chart, Gender::Male, 1984, None, 2024);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["day_master"], "戊");
    assert_eq!(json["pillar_details"][0]["nayin"], "海中金");
    assert_eq!(json["voids"][0], "子");
    assert_eq!(json["fortune"]["decades"].as_array().unwrap().len(), 10);
    // The day pillar's stem god renders as the day-master marker.
    assert_eq!(json["pillar_details"][2]["stem_god"], "日主");
}

#[test]
fn report_round_trips_named_scenario() {
    // 甲 day master vs 己 year stem is 正财 (wood conquers earth, opposite
    // polarity).
    let chart = chart_from_names(["己巳", "丁卯", "甲申", "辛未"]).unwrap();
    let report = chart_report(&chart);
    assert_eq!(report.pillar_details[0].stem_god, "正财");
}
