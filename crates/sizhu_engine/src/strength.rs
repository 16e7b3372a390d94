//! Elemental strength scoring and day-master classification.
//!
//! Every stem contributes a fixed 5 to its own element; every branch
//! contributes its hidden-stem weights. The day-master's share of the total
//! decides the strength band: above 0.25 strong, above 0.18 moderate,
//! otherwise weak.

use sizhu_core::{ALL_ELEMENTS, Chart, Element};

/// Score contributed by each visible stem.
pub const STEM_SCORE: u32 = 5;

/// Strong/moderate boundary of the day-master ratio.
pub const STRONG_RATIO: f64 = 0.25;

/// Moderate/weak boundary of the day-master ratio.
pub const MODERATE_RATIO: f64 = 0.18;

/// Strength band of the day-master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLevel {
    Strong,
    Moderate,
    Weak,
}

impl StrengthLevel {
    /// Chinese name of the band.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strong => "强",
            Self::Moderate => "中等",
            Self::Weak => "弱",
        }
    }
}

/// Aggregated elemental scores and the day-master classification.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthAssessment {
    /// Score per element, indexed by `Element::index()`.
    pub scores: [u32; 5],
    /// The day-master's element.
    pub day_element: Element,
    /// The day element's score.
    pub day_score: u32,
    /// Total score over all elements.
    pub total: u32,
    /// `day_score / total`.
    pub ratio: f64,
    /// Band derived from the ratio.
    pub level: StrengthLevel,
    /// Elements with zero score anywhere in the chart.
    pub missing: Vec<Element>,
}

/// Score a chart and classify its day-master.
pub fn elemental_strength(chart: &Chart) -> StrengthAssessment {
    let mut scores = [0u32; 5];
    for stem in chart.stems() {
        scores[stem.element().index() as usize] += STEM_SCORE;
    }
    for branch in chart.branches() {
        for hidden in branch.hidden_stems() {
            scores[hidden.stem.element().index() as usize] += hidden.weight as u32;
        }
    }

    let day_element = chart.day_master().element();
    let day_score = scores[day_element.index() as usize];
    let total: u32 = scores.iter().sum();
    let ratio = day_score as f64 / total as f64;
    let level = if ratio > STRONG_RATIO {
        StrengthLevel::Strong
    } else if ratio > MODERATE_RATIO {
        StrengthLevel::Moderate
    } else {
        StrengthLevel::Weak
    };
    let missing = ALL_ELEMENTS
        .into_iter()
        .filter(|e| scores[e.index() as usize] == 0)
        .collect();

    StrengthAssessment {
        scores,
        day_element,
        day_score,
        total,
        ratio,
        level,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizhu_core::{Branch, HIDDEN_WEIGHT_TOTAL, Stem};

    #[test]
    fn total_is_fixed_by_construction() {
        // 4 stems × 5 + 4 branches × 8 = 52 for every chart.
        let chart = Chart::from_pairs([
            (Stem::Jia, Branch::Zi),
            (Stem::Bing, Branch::Yin),
            (Stem::Wu, Branch::Wu),
            (Stem::Ren, Branch::Xu),
        ])
        .unwrap();
        let a = elemental_strength(&chart);
        assert_eq!(
            a.total,
            4 * STEM_SCORE + 4 * HIDDEN_WEIGHT_TOTAL as u32
        );
        assert_eq!(a.scores.iter().sum::<u32>(), a.total);
    }

    #[test]
    fn all_wood_chart_is_strong() {
        // 甲寅 everywhere: wood dominates.
        let chart = Chart::from_pairs([
            (Stem::Jia, Branch::Yin),
            (Stem::Jia, Branch::Yin),
            (Stem::Jia, Branch::Yin),
            (Stem::Jia, Branch::Yin),
        ])
        .unwrap();
        let a = elemental_strength(&chart);
        assert_eq!(a.day_element, Element::Wood);
        // Stems 4×5, 寅 hides 甲5 each: 20 + 20 = 40 of 52.
        assert_eq!(a.day_score, 40);
        assert_eq!(a.level, StrengthLevel::Strong);
        // 寅 hides 丙 and 戊 only: metal and water never appear.
        assert_eq!(a.missing, vec![Element::Metal, Element::Water]);
    }

    #[test]
    fn starved_day_master_is_weak() {
        // Day master 甲 in a chart otherwise all metal/earth.
        let chart = Chart::from_pairs([
            (Stem::Geng, Branch::Shen),
            (Stem::Xin, Branch::You),
            (Stem::Jia, Branch::Shen),
            (Stem::Geng, Branch::Xu),
        ])
        .unwrap();
        let a = elemental_strength(&chart);
        assert_eq!(a.day_element, Element::Wood);
        // Only the day stem itself contributes wood: 5 of 52.
        assert_eq!(a.day_score, STEM_SCORE);
        assert_eq!(a.level, StrengthLevel::Weak);
    }

    #[test]
    fn moderate_band_between_thresholds() {
        // Day master 壬; water from 壬5 + 子8 = 13 of 52 = 0.25 → moderate
        // (strictly greater than 0.25 is required for strong).
        let chart = Chart::from_pairs([
            (Stem::Wu, Branch::Xu),
            (Stem::Ji, Branch::Mao),
            (Stem::Ren, Branch::Zi),
            (Stem::Wu, Branch::Wu),
        ])
        .unwrap();
        let a = elemental_strength(&chart);
        assert_eq!(a.day_score, 13);
        assert!((a.ratio - 0.25).abs() < 1e-12);
        assert_eq!(a.level, StrengthLevel::Moderate);
    }

    #[test]
    fn missing_empty_when_all_present() {
        let chart = Chart::from_pairs([
            (Stem::Jia, Branch::Zi),
            (Stem::Bing, Branch::Yin),
            (Stem::Wu, Branch::Wu),
            (Stem::Ren, Branch::Xu),
        ])
        .unwrap();
        let a = elemental_strength(&chart);
        assert!(a.missing.is_empty());
    }
}
