//! The ten-gods relation between the day-master and any stem or branch.
//!
//! One canonical derivation from the element generation/conquest cycles plus
//! polarity. The five element arrangements (same, I generate, it generates
//! me, I conquer, it conquers me) each split by polarity into two labels,
//! covering all 100 stem pairs with no unknown outcome. Branch targets
//! resolve through the branch's dominant hidden stem.

use sizhu_core::{Branch, Pillar, Stem};

/// The 10 relational categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGod {
    /// 比肩: same element, same polarity.
    Companion,
    /// 劫财: same element, opposite polarity.
    Rival,
    /// 食神: day-master generates target, same polarity.
    OutputSame,
    /// 伤官: day-master generates target, opposite polarity.
    OutputOpposite,
    /// 偏财: day-master conquers target, same polarity.
    WealthIndirect,
    /// 正财: day-master conquers target, opposite polarity.
    WealthDirect,
    /// 七杀: target conquers day-master, same polarity.
    OfficerAdverse,
    /// 正官: target conquers day-master, opposite polarity.
    OfficerDirect,
    /// 正印: target generates day-master, same polarity.
    SealDirect,
    /// 偏印: target generates day-master, opposite polarity.
    SealIndirect,
}

/// All 10 labels in traditional listing order.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Companion,
    TenGod::Rival,
    TenGod::OutputSame,
    TenGod::OutputOpposite,
    TenGod::WealthIndirect,
    TenGod::WealthDirect,
    TenGod::OfficerAdverse,
    TenGod::OfficerDirect,
    TenGod::SealIndirect,
    TenGod::SealDirect,
];

impl TenGod {
    /// Full Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Companion => "比肩",
            Self::Rival => "劫财",
            Self::OutputSame => "食神",
            Self::OutputOpposite => "伤官",
            Self::WealthIndirect => "偏财",
            Self::WealthDirect => "正财",
            Self::OfficerAdverse => "七杀",
            Self::OfficerDirect => "正官",
            Self::SealIndirect => "偏印",
            Self::SealDirect => "正印",
        }
    }

    /// One-glyph abbreviation used in pillar short codes.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Companion => "比",
            Self::Rival => "劫",
            Self::OutputSame => "食",
            Self::OutputOpposite => "伤",
            Self::WealthIndirect => "才",
            Self::WealthDirect => "财",
            Self::OfficerAdverse => "杀",
            Self::OfficerDirect => "官",
            Self::SealIndirect => "枭",
            Self::SealDirect => "印",
        }
    }
}

/// Relation of a target stem to the day-master.
pub fn stem_relation(day_master: Stem, target: Stem) -> TenGod {
    let day = day_master.element();
    let other = target.element();
    let same_polarity = day_master.polarity() == target.polarity();

    if day == other {
        if same_polarity {
            TenGod::Companion
        } else {
            TenGod::Rival
        }
    } else if day.generates() == other {
        if same_polarity {
            TenGod::OutputSame
        } else {
            TenGod::OutputOpposite
        }
    } else if other.generates() == day {
        if same_polarity {
            TenGod::SealDirect
        } else {
            TenGod::SealIndirect
        }
    } else if day.conquers() == other {
        if same_polarity {
            TenGod::WealthIndirect
        } else {
            TenGod::WealthDirect
        }
    } else {
        // The only remaining arrangement of two distinct elements.
        debug_assert_eq!(other.conquers(), day);
        if same_polarity {
            TenGod::OfficerAdverse
        } else {
            TenGod::OfficerDirect
        }
    }
}

/// Relation of a target branch to the day-master, via its dominant hidden
/// stem.
pub fn branch_relation(day_master: Stem, target: Branch) -> TenGod {
    stem_relation(day_master, target.primary_hidden_stem())
}

/// Two-glyph short code of a pillar against the day-master (stem
/// abbreviation then branch abbreviation, e.g. `杀财`).
pub fn pillar_code(day_master: Stem, stem: Stem, branch: Branch) -> String {
    format!(
        "{}{}",
        stem_relation(day_master, stem).abbreviation(),
        branch_relation(day_master, branch).abbreviation()
    )
}

/// Short code of a chart pillar.
pub fn pillar_code_of(day_master: Stem, pillar: Pillar) -> String {
    pillar_code(day_master, pillar.stem(), pillar.branch())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizhu_core::{ALL_BRANCHES, ALL_STEMS};

    #[test]
    fn self_relation_is_companion() {
        for s in ALL_STEMS {
            assert_eq!(stem_relation(s, s), TenGod::Companion);
        }
    }

    #[test]
    fn total_over_all_100_pairs() {
        for day in ALL_STEMS {
            for target in ALL_STEMS {
                // Must not panic; every pair maps to one of the ten labels.
                let god = stem_relation(day, target);
                assert!(ALL_TEN_GODS.contains(&god));
            }
        }
    }

    #[test]
    fn each_day_master_sees_every_label_once() {
        // The 10 targets partition into the 10 labels bijectively.
        for day in ALL_STEMS {
            let mut seen = std::collections::HashSet::new();
            for target in ALL_STEMS {
                seen.insert(stem_relation(day, target));
            }
            assert_eq!(seen.len(), 10, "day master {}", day.name());
        }
    }

    #[test]
    fn jia_vs_ji_is_wealth_direct() {
        // Wood conquers earth, opposite polarity.
        assert_eq!(stem_relation(Stem::Jia, Stem::Ji), TenGod::WealthDirect);
    }

    #[test]
    fn jia_row_matches_derivation_rules() {
        // 甲 (yang wood) against each stem.
        assert_eq!(stem_relation(Stem::Jia, Stem::Yi), TenGod::Rival);
        assert_eq!(stem_relation(Stem::Jia, Stem::Bing), TenGod::OutputSame);
        assert_eq!(stem_relation(Stem::Jia, Stem::Ding), TenGod::OutputOpposite);
        assert_eq!(stem_relation(Stem::Jia, Stem::Wu), TenGod::WealthIndirect);
        assert_eq!(stem_relation(Stem::Jia, Stem::Geng), TenGod::OfficerAdverse);
        assert_eq!(stem_relation(Stem::Jia, Stem::Xin), TenGod::OfficerDirect);
        assert_eq!(stem_relation(Stem::Jia, Stem::Ren), TenGod::SealDirect);
        assert_eq!(stem_relation(Stem::Jia, Stem::Gui), TenGod::SealIndirect);
    }

    #[test]
    fn branch_relation_uses_dominant_hidden_stem() {
        // 子 hides only 癸 (yin water); for 甲 that is SealIndirect.
        assert_eq!(branch_relation(Stem::Jia, Branch::Zi), TenGod::SealIndirect);
        // 寅 is dominated by 甲 itself.
        assert_eq!(branch_relation(Stem::Jia, Branch::Yin), TenGod::Companion);
    }

    #[test]
    fn branch_relation_total_over_120_pairs() {
        for day in ALL_STEMS {
            for b in ALL_BRANCHES {
                let god = branch_relation(day, b);
                assert!(ALL_TEN_GODS.contains(&god));
            }
        }
    }

    #[test]
    fn abbreviations_unique() {
        let mut seen = std::collections::HashSet::new();
        for g in ALL_TEN_GODS {
            assert!(seen.insert(g.abbreviation()));
        }
    }

    #[test]
    fn pillar_code_two_glyphs() {
        // Day master 戊 against 壬戌: 壬 is WealthIndirect (才), 戌 hides 戊
        // (Companion, 比).
        let code = pillar_code(Stem::Wu, Stem::Ren, Branch::Xu);
        assert_eq!(code, "才比");
    }
}
