//! Branch-to-branch and stem-to-stem relations within a chart.
//!
//! Pairwise kinds (six-combination, clash, punishment, harm, break) are
//! symmetric and checked over every unordered slot pair, so a branch sitting
//! in two slots can relate to itself (the self-punishing branches 辰午酉亥).
//! Tri-unions fire only when all three members are present. Distinct kinds
//! on the same pair are all reported.

use sizhu_core::{Branch, Chart, Element, PillarSlot, Stem};

/// Pairwise branch relation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairKind {
    /// 六合, producing an element.
    SixCombination,
    /// 相冲, opposite cycle positions.
    Clash,
    /// 相刑.
    Punishment,
    /// 相害.
    Harm,
    /// 相破.
    Break,
}

impl PairKind {
    /// Chinese name of the relation kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::SixCombination => "六合",
            Self::Clash => "相冲",
            Self::Punishment => "相刑",
            Self::Harm => "相害",
            Self::Break => "相破",
        }
    }
}

/// A detected pairwise branch relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairRelation {
    /// Relation kind.
    pub kind: PairKind,
    /// First participant (earlier slot).
    pub first: (PillarSlot, Branch),
    /// Second participant (later slot).
    pub second: (PillarSlot, Branch),
    /// Resulting element for six-combinations, `None` otherwise.
    pub element: Option<Element>,
}

/// A detected tri-union (三合) over three distinct branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriUnion {
    /// The three members in cycle order.
    pub branches: [Branch; 3],
    /// The element the union produces.
    pub element: Element,
}

/// A detected stem five-combination (五合).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StemCombination {
    /// First participant (earlier slot).
    pub first: (PillarSlot, Stem),
    /// Second participant (later slot).
    pub second: (PillarSlot, Stem),
    /// The element the combination produces.
    pub element: Element,
}

/// Everything the relation engine detected in one chart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelationReport {
    /// Pairwise branch relations in slot order.
    pub pairs: Vec<PairRelation>,
    /// Tri-unions present in full.
    pub tri_unions: Vec<TriUnion>,
    /// Stem five-combinations.
    pub stem_combinations: Vec<StemCombination>,
}

/// Resulting element of a six-combination pair, if the two branches combine.
///
/// 子丑→土, 寅亥→木, 卯戌→火, 辰酉→金, 巳申→水, 午未→土.
pub fn six_combination(a: Branch, b: Branch) -> Option<Element> {
    use Branch::*;
    match sorted(a, b) {
        (Zi, Chou) | (Wu, Wei) => Some(Element::Earth),
        (Yin, Hai) => Some(Element::Wood),
        (Mao, Xu) => Some(Element::Fire),
        (Chen, You) => Some(Element::Metal),
        (Si, Shen) => Some(Element::Water),
        _ => None,
    }
}

/// Whether two branches clash (cycle offset 6).
pub fn is_clash(a: Branch, b: Branch) -> bool {
    (a.index() as i32 - b.index() as i32).rem_euclid(12) == 6
}

/// Whether two branches punish each other.
///
/// The mutual pairs 子卯, the 丑戌未 and 寅巳申 triangles, plus the
/// self-punishing branches 辰午酉亥 when one occupies two slots.
pub fn is_punishment(a: Branch, b: Branch) -> bool {
    use Branch::*;
    if a == b {
        return matches!(a, Chen | Wu | You | Hai);
    }
    matches!(
        sorted(a, b),
        (Zi, Mao) | (Chou, Wei) | (Chou, Xu) | (Wei, Xu) | (Yin, Si) | (Yin, Shen) | (Si, Shen)
    )
}

/// Whether two branches harm each other.
///
/// 子未, 丑午, 寅巳, 卯辰, 申亥, 酉戌.
pub fn is_harm(a: Branch, b: Branch) -> bool {
    use Branch::*;
    matches!(
        sorted(a, b),
        (Zi, Wei) | (Chou, Wu) | (Yin, Si) | (Mao, Chen) | (Shen, Hai) | (You, Xu)
    )
}

/// Whether two branches break each other.
///
/// 子酉, 丑辰, 寅亥, 卯午, 巳申, 未戌.
pub fn is_break(a: Branch, b: Branch) -> bool {
    use Branch::*;
    matches!(
        sorted(a, b),
        (Zi, You) | (Chou, Chen) | (Yin, Hai) | (Mao, Wu) | (Si, Shen) | (Wei, Xu)
    )
}

/// Resulting element of a tri-union, if the three branches form one.
///
/// 申子辰→水, 巳酉丑→金, 寅午戌→火, 亥卯未→木.
pub fn tri_union(a: Branch, b: Branch, c: Branch) -> Option<Element> {
    let mut idx = [a.index(), b.index(), c.index()];
    idx.sort_unstable();
    use Branch::*;
    let members = [
        Branch::from_index(idx[0]),
        Branch::from_index(idx[1]),
        Branch::from_index(idx[2]),
    ];
    match members {
        [Zi, Chen, Shen] => Some(Element::Water),
        [Chou, Si, You] => Some(Element::Metal),
        [Yin, Wu, Xu] => Some(Element::Fire),
        [Mao, Wei, Hai] => Some(Element::Wood),
        _ => None,
    }
}

/// Resulting element of a stem five-combination, if the stems combine.
///
/// 甲己→土, 乙庚→金, 丙辛→水, 丁壬→木, 戊癸→火 (indices five apart).
pub fn stem_combination(a: Stem, b: Stem) -> Option<Element> {
    let lo = a.index().min(b.index());
    let hi = a.index().max(b.index());
    if hi - lo != 5 {
        return None;
    }
    Some(match lo {
        0 => Element::Earth,
        1 => Element::Metal,
        2 => Element::Water,
        3 => Element::Wood,
        _ => Element::Fire,
    })
}

fn sorted(a: Branch, b: Branch) -> (Branch, Branch) {
    if a.index() <= b.index() { (a, b) } else { (b, a) }
}

/// Detect every relation among a chart's branches and stems.
pub fn chart_relations(chart: &Chart) -> RelationReport {
    let mut report = RelationReport::default();
    let pillars = chart.pillars();

    for i in 0..pillars.len() {
        for j in (i + 1)..pillars.len() {
            let first = (pillars[i].slot(), pillars[i].branch());
            let second = (pillars[j].slot(), pillars[j].branch());
            let (a, b) = (first.1, second.1);

            if let Some(element) = six_combination(a, b) {
                report.pairs.push(PairRelation {
                    kind: PairKind::SixCombination,
                    first,
                    second,
                    element: Some(element),
                });
            }
            for (kind, hit) in [
                (PairKind::Clash, is_clash(a, b)),
                (PairKind::Punishment, is_punishment(a, b)),
                (PairKind::Harm, is_harm(a, b)),
                (PairKind::Break, is_break(a, b)),
            ] {
                if hit {
                    report.pairs.push(PairRelation {
                        kind,
                        first,
                        second,
                        element: None,
                    });
                }
            }

            let sf = (pillars[i].slot(), pillars[i].stem());
            let ss = (pillars[j].slot(), pillars[j].stem());
            if let Some(element) = stem_combination(sf.1, ss.1) {
                report.stem_combinations.push(StemCombination {
                    first: sf,
                    second: ss,
                    element,
                });
            }
        }
    }

    // Triples: every 3-subset of the four branches, deduplicated by member
    // set so a union is reported once even when a member repeats.
    let branches = chart.branches();
    for i in 0..branches.len() {
        for j in (i + 1)..branches.len() {
            for k in (j + 1)..branches.len() {
                if let Some(element) = tri_union(branches[i], branches[j], branches[k]) {
                    let mut idx = [
                        branches[i].index(),
                        branches[j].index(),
                        branches[k].index(),
                    ];
                    idx.sort_unstable();
                    let union = TriUnion {
                        branches: [
                            Branch::from_index(idx[0]),
                            Branch::from_index(idx[1]),
                            Branch::from_index(idx[2]),
                        ],
                        element,
                    };
                    if !report.tri_unions.contains(&union) {
                        report.tri_unions.push(union);
                    }
                }
            }
        }
    }

    report
}
