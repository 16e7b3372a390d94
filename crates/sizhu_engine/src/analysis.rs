//! Whole-chart aggregation of the derivation engines.
//!
//! One pass over a chart producing everything the presentation layer needs:
//! per-pillar ten gods (visible stem, branch, and each hidden stem), na-yin,
//! growth stages, the day pillar's void pair, branch/stem relations, fired
//! shen-sha, elemental strength, and the conception pillar.

use tracing::debug;

use sizhu_core::{
    Branch, Chart, GrowthStage, NaYin, Pillar, PillarSlot, Stem, growth_stage, nayin_of_index,
    void_pair,
};

use crate::relations::{RelationReport, chart_relations};
use crate::shensha::{ShenSha, shensha_of_chart};
use crate::strength::{StrengthAssessment, elemental_strength};
use crate::ten_gods::{TenGod, branch_relation, pillar_code_of, stem_relation};

/// Derived attributes of one pillar.
#[derive(Debug, Clone, PartialEq)]
pub struct PillarAnalysis {
    /// The pillar's slot.
    pub slot: PillarSlot,
    /// The pillar's stem.
    pub stem: Stem,
    /// The pillar's branch.
    pub branch: Branch,
    /// Stem relation to the day-master; `None` for the day pillar itself.
    pub stem_god: Option<TenGod>,
    /// Branch relation to the day-master (via dominant hidden stem).
    pub branch_god: TenGod,
    /// Every hidden stem with its relation to the day-master.
    pub hidden: Vec<(Stem, TenGod)>,
    /// Na-yin of the pillar.
    pub nayin: NaYin,
    /// Growth stage of the day-master over this pillar's branch.
    pub stage: GrowthStage,
    /// Two-glyph ten-gods short code.
    pub code: String,
}

/// Full derived view of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartAnalysis {
    /// The day-master.
    pub day_master: Stem,
    /// Per-pillar attributes in slot order.
    pub pillars: [PillarAnalysis; 4],
    /// Void pair of the day pillar.
    pub voids: (Branch, Branch),
    /// Branch and stem relations.
    pub relations: RelationReport,
    /// Fired shen-sha markers.
    pub shensha: Vec<ShenSha>,
    /// Elemental scores and day-master strength.
    pub strength: StrengthAssessment,
    /// Conception pillar (月柱 stem +1, branch +3).
    pub conception: (Stem, Branch),
    /// Zodiac animal of the year branch.
    pub animal: &'static str,
}

fn analyze_pillar(day_master: Stem, pillar: Pillar) -> PillarAnalysis {
    let stem = pillar.stem();
    let branch = pillar.branch();
    PillarAnalysis {
        slot: pillar.slot(),
        stem,
        branch,
        stem_god: (pillar.slot() != PillarSlot::Day).then(|| stem_relation(day_master, stem)),
        branch_god: branch_relation(day_master, branch),
        hidden: branch
            .hidden_stems()
            .iter()
            .map(|h| (h.stem, stem_relation(day_master, h.stem)))
            .collect(),
        nayin: nayin_of_index(pillar.cycle_index()),
        stage: growth_stage(day_master, branch),
        code: pillar_code_of(day_master, pillar),
    }
}

/// Conception pillar: month stem advanced one, month branch advanced three.
///
/// Both shifts flip parity, so the result is always a valid pair.
pub fn conception_pillar(chart: &Chart) -> (Stem, Branch) {
    let month = chart.month();
    (
        Stem::from_index(month.stem().index() + 1),
        Branch::from_index(month.branch().index() + 3),
    )
}

/// Run every derivation engine over a chart.
pub fn analyze(chart: &Chart) -> ChartAnalysis {
    let day_master = chart.day_master();
    debug!(day_master = day_master.name(), "analyzing chart");
    let pillars = chart.pillars().map(|p| analyze_pillar(day_master, p));

    ChartAnalysis {
        day_master,
        pillars,
        voids: void_pair(chart.day()),
        relations: chart_relations(chart),
        shensha: shensha_of_chart(chart),
        strength: elemental_strength(chart),
        conception: conception_pillar(chart),
        animal: chart.year().branch().animal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizhu_core::is_valid_pair;

    fn sample_chart() -> Chart {
        // 甲子 丙寅 戊午 壬戌
        Chart::from_pairs([
            (Stem::Jia, Branch::Zi),
            (Stem::Bing, Branch::Yin),
            (Stem::Wu, Branch::Wu),
            (Stem::Ren, Branch::Xu),
        ])
        .unwrap()
    }

    #[test]
    fn day_pillar_has_no_stem_god() {
        let a = analyze(&sample_chart());
        assert_eq!(a.pillars[PillarSlot::Day.index()].stem_god, None);
        for slot in [PillarSlot::Year, PillarSlot::Month, PillarSlot::Hour] {
            assert!(a.pillars[slot.index()].stem_god.is_some());
        }
    }

    #[test]
    fn hidden_gods_cover_all_hidden_stems() {
        let a = analyze(&sample_chart());
        for p in &a.pillars {
            assert_eq!(p.hidden.len(), p.branch.hidden_stems().len());
        }
    }

    #[test]
    fn year_pillar_gods_for_wu_day_master() {
        // Day master 戊: 甲 is OfficerAdverse, 子 (hides 癸) WealthDirect.
        let a = analyze(&sample_chart());
        let year = &a.pillars[PillarSlot::Year.index()];
        assert_eq!(year.stem_god, Some(TenGod::OfficerAdverse));
        assert_eq!(year.branch_god, TenGod::WealthDirect);
        assert_eq!(year.code, "杀财");
    }

    #[test]
    fn nayin_and_stage_per_pillar() {
        let a = analyze(&sample_chart());
        // 甲子 → 海中金; 戊 over 子 is 胎.
        let year = &a.pillars[PillarSlot::Year.index()];
        assert_eq!(year.nayin.name, "海中金");
        assert_eq!(year.stage, GrowthStage::Tai);
        // 戊 over 午 (its 帝旺).
        let day = &a.pillars[PillarSlot::Day.index()];
        assert_eq!(day.stage, GrowthStage::DiWang);
    }

    #[test]
    fn voids_from_day_pillar() {
        // 戊午 index 54 → block 5 → (子, 丑).
        let a = analyze(&sample_chart());
        assert_eq!(a.voids, (Branch::Zi, Branch::Chou));
    }

    #[test]
    fn conception_advances_month_pillar() {
        // 丙寅 → 丁巳.
        let a = analyze(&sample_chart());
        assert_eq!(a.conception, (Stem::Ding, Branch::Si));
        assert!(is_valid_pair(a.conception.0, a.conception.1));
    }

    #[test]
    fn animal_from_year_branch() {
        assert_eq!(analyze(&sample_chart()).animal, "鼠");
    }

    #[test]
    fn conception_always_valid_for_any_month() {
        for i in 0..60u8 {
            let (s, b) = sizhu_core::index_to_pillar(i);
            let chart = Chart::from_pairs([
                (Stem::Jia, Branch::Zi),
                (s, b),
                (Stem::Wu, Branch::Wu),
                (Stem::Ren, Branch::Xu),
            ])
            .unwrap();
            let (cs, cb) = conception_pillar(&chart);
            assert!(is_valid_pair(cs, cb), "month index {i}");
        }
    }
}
