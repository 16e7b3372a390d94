//! Serializable report types.
//!
//! Glyph-string views of the engine's typed output, ready for whatever wire
//! format the caller picks. Field values are the traditional glyphs; field
//! names are stable snake_case English.

use serde::Serialize;

use sizhu_core::{Branch, Chart, Stem};
use sizhu_engine::{
    AnnualStep, ChartAnalysis, DecadeStep, FortuneTimeline, MonthlyStep, PairRelation,
    PillarAnalysis, RelationReport, StemCombination, StrengthAssessment, TriUnion,
};

/// One pillar's derived attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarReport {
    /// Slot name (`year`/`month`/`day`/`hour`).
    pub slot: String,
    /// Two-glyph pillar (e.g. `甲子`).
    pub pillar: String,
    /// Stem ten-god name, or `日主` for the day pillar.
    pub stem_god: String,
    /// Branch ten-god name.
    pub branch_god: String,
    /// Hidden stems with their ten-god names.
    pub hidden: Vec<HiddenReport>,
    /// Na-yin name.
    pub nayin: String,
    /// Growth stage of the day-master over this branch.
    pub stage: String,
    /// Two-glyph ten-gods short code.
    pub code: String,
}

/// A hidden stem and its relation to the day-master.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiddenReport {
    /// The hidden stem's glyph.
    pub stem: String,
    /// Ten-god name of the hidden stem.
    pub god: String,
}

/// A detected pairwise relation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairRelationReport {
    /// Relation kind name (六合, 相冲, ...).
    pub kind: String,
    /// The two participating branches.
    pub branches: [String; 2],
    /// The two participating slots.
    pub slots: [String; 2],
    /// Resulting element for combinations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
}

/// A detected tri-union.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriUnionReport {
    /// The three members.
    pub branches: [String; 3],
    /// Produced element.
    pub element: String,
}

/// A detected stem combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StemCombinationReport {
    /// The two participating stems.
    pub stems: [String; 2],
    /// The two participating slots.
    pub slots: [String; 2],
    /// Produced element.
    pub element: String,
}

/// All relations of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationsReport {
    /// Pairwise branch relations.
    pub pairs: Vec<PairRelationReport>,
    /// Tri-unions.
    pub tri_unions: Vec<TriUnionReport>,
    /// Stem five-combinations.
    pub stem_combinations: Vec<StemCombinationReport>,
}

/// Elemental scores and strength classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthReport {
    /// Score per element glyph.
    pub scores: Vec<(String, u32)>,
    /// The day-master's element glyph.
    pub day_element: String,
    /// The day element's score.
    pub day_score: u32,
    /// Total score.
    pub total: u32,
    /// Day share of the total.
    pub ratio: f64,
    /// Band name (强/中等/弱).
    pub level: String,
    /// Elements absent from the chart.
    pub missing: Vec<String>,
}

/// One decade step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecadeReport {
    /// 1-based order.
    pub order: u8,
    /// Two-glyph pillar.
    pub pillar: String,
    /// Start age in years.
    pub start_age: u8,
    /// Start calendar year.
    pub start_year: i32,
    /// Two-glyph ten-gods code.
    pub code: String,
}

/// One annual step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualReport {
    /// Calendar year.
    pub year: i32,
    /// Age in that year.
    pub age: u8,
    /// Two-glyph pillar.
    pub pillar: String,
    /// Two-glyph ten-gods code.
    pub code: String,
}

/// One monthly step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyReport {
    /// Calendar year.
    pub year: i32,
    /// Governing solar term.
    pub term: String,
    /// Two-glyph pillar.
    pub pillar: String,
    /// Two-glyph ten-gods code.
    pub code: String,
}

/// The fortune progression with position indices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FortuneReport {
    /// Direction name (顺排/逆排).
    pub direction: String,
    /// First-decade start age.
    pub start_age: u8,
    /// Pre-fortune sentinel (童限) when the leading interval is nonzero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_fortune: Option<PreFortuneReport>,
    /// The decade steps.
    pub decades: Vec<DecadeReport>,
    /// Annual steps of the active decade.
    pub years: Vec<AnnualReport>,
    /// Monthly steps of the active year.
    pub months: Vec<MonthlyReport>,
    /// Active decade index, if the reference year falls in the timeline.
    pub decade_index: Option<usize>,
    /// Active year index within the annual list.
    pub year_index: Option<usize>,
}

/// The leading pre-fortune interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreFortuneReport {
    /// Sentinel label (童限).
    pub label: String,
    /// First year of the interval.
    pub start_year: i32,
    /// Length in years.
    pub span_years: u8,
}

/// The complete chart report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartReport {
    /// The four pillars as two-glyph strings.
    pub pillars: [String; 4],
    /// The day-master glyph.
    pub day_master: String,
    /// Zodiac animal of the year branch.
    pub animal: String,
    /// Per-pillar attributes.
    pub pillar_details: [PillarReport; 4],
    /// Void pair of the day pillar.
    pub voids: [String; 2],
    /// Conception pillar (胎元).
    pub conception: String,
    /// Branch and stem relations.
    pub relations: RelationsReport,
    /// Fired shen-sha names.
    pub shensha: Vec<String>,
    /// Elemental strength.
    pub strength: StrengthReport,
    /// Fortune progression, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fortune: Option<FortuneReport>,
}

fn pillar_string(stem: Stem, branch: Branch) -> String {
    format!("{}{}", stem.name(), branch.name())
}

fn slot_pair(slots: [&'static str; 2]) -> [String; 2] {
    [slots[0].to_string(), slots[1].to_string()]
}

impl PillarReport {
    fn from_analysis(p: &PillarAnalysis) -> Self {
        PillarReport {
            slot: p.slot.name().to_string(),
            pillar: pillar_string(p.stem, p.branch),
            stem_god: p
                .stem_god
                .map_or_else(|| "日主".to_string(), |g| g.name().to_string()),
            branch_god: p.branch_god.name().to_string(),
            hidden: p
                .hidden
                .iter()
                .map(|(s, g)| HiddenReport {
                    stem: s.name().to_string(),
                    god: g.name().to_string(),
                })
                .collect(),
            nayin: p.nayin.name.to_string(),
            stage: p.stage.name().to_string(),
            code: p.code.clone(),
        }
    }
}

impl RelationsReport {
    fn from_engine(r: &RelationReport) -> Self {
        let pair = |p: &PairRelation| PairRelationReport {
            kind: p.kind.name().to_string(),
            branches: [p.first.1.name().to_string(), p.second.1.name().to_string()],
            slots: slot_pair([p.first.0.name(), p.second.0.name()]),
            element: p.element.map(|e| e.name().to_string()),
        };
        let union = |u: &TriUnion| TriUnionReport {
            branches: u.branches.map(|b| b.name().to_string()),
            element: u.element.name().to_string(),
        };
        let combo = |c: &StemCombination| StemCombinationReport {
            stems: [c.first.1.name().to_string(), c.second.1.name().to_string()],
            slots: slot_pair([c.first.0.name(), c.second.0.name()]),
            element: c.element.name().to_string(),
        };
        RelationsReport {
            pairs: r.pairs.iter().map(pair).collect(),
            tri_unions: r.tri_unions.iter().map(union).collect(),
            stem_combinations: r.stem_combinations.iter().map(combo).collect(),
        }
    }
}

impl StrengthReport {
    fn from_engine(s: &StrengthAssessment) -> Self {
        StrengthReport {
            scores: sizhu_core::ALL_ELEMENTS
                .into_iter()
                .map(|e| (e.name().to_string(), s.scores[e.index() as usize]))
                .collect(),
            day_element: s.day_element.name().to_string(),
            day_score: s.day_score,
            total: s.total,
            ratio: s.ratio,
            level: s.level.name().to_string(),
            missing: s.missing.iter().map(|e| e.name().to_string()).collect(),
        }
    }
}

impl FortuneReport {
    /// Build from an engine timeline.
    pub fn from_engine(tl: &FortuneTimeline) -> Self {
        let decade = |d: &DecadeStep| DecadeReport {
            order: d.order,
            pillar: pillar_string(d.stem, d.branch),
            start_age: d.start_age,
            start_year: d.start_year,
            code: format!("{}{}", d.stem_god.abbreviation(), d.branch_god.abbreviation()),
        };
        let year = |y: &AnnualStep| AnnualReport {
            year: y.year,
            age: y.age,
            pillar: pillar_string(y.stem, y.branch),
            code: format!("{}{}", y.stem_god.abbreviation(), y.branch_god.abbreviation()),
        };
        let month = |m: &MonthlyStep| MonthlyReport {
            year: m.year,
            term: m.term.to_string(),
            pillar: pillar_string(m.stem, m.branch),
            code: format!("{}{}", m.stem_god.abbreviation(), m.branch_god.abbreviation()),
        };
        FortuneReport {
            direction: tl.direction.name().to_string(),
            start_age: tl.start_age,
            pre_fortune: tl.pre_fortune.map(|p| PreFortuneReport {
                label: "童限".to_string(),
                start_year: p.start_year,
                span_years: p.span_years,
            }),
            decades: tl.decades.iter().map(decade).collect(),
            years: tl.years.iter().map(year).collect(),
            months: tl.months.iter().map(month).collect(),
            decade_index: tl.decade_index,
            year_index: tl.year_index,
        }
    }
}

impl ChartReport {
    /// Build from the engine's chart analysis and an optional timeline.
    pub fn from_engine(
        chart: &Chart,
        analysis: &ChartAnalysis,
        fortune: Option<&FortuneTimeline>,
    ) -> Self {
        ChartReport {
            pillars: chart.pillars().map(|p| p.name()),
            day_master: analysis.day_master.name().to_string(),
            animal: analysis.animal.to_string(),
            pillar_details: [
                PillarReport::from_analysis(&analysis.pillars[0]),
                PillarReport::from_analysis(&analysis.pillars[1]),
                PillarReport::from_analysis(&analysis.pillars[2]),
                PillarReport::from_analysis(&analysis.pillars[3]),
            ],
            voids: [
                analysis.voids.0.name().to_string(),
                analysis.voids.1.name().to_string(),
            ],
            conception: pillar_string(analysis.conception.0, analysis.conception.1),
            relations: RelationsReport::from_engine(&analysis.relations),
            shensha: analysis
                .shensha
                .iter()
                .map(|s| s.name().to_string())
                .collect(),
            strength: StrengthReport::from_engine(&analysis.strength),
            fortune: fortune.map(FortuneReport::from_engine),
        }
    }
}
