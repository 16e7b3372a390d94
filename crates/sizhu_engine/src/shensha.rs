//! Shen-sha (auspicious/inauspicious) markers.
//!
//! Two rule families: day-stem markers (天乙贵人, 文昌贵人) map the
//! day-master to target branches; reference-branch markers (将星, 华盖,
//! 驿马, 桃花) map the year branch's tri-union group to a target branch. A
//! marker fires when its target appears anywhere in the chart; the output is
//! the deduplicated set in declaration order.

use sizhu_core::{Branch, Chart, Stem};

/// The named markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShenSha {
    /// 天乙贵人 — nobleman star, from the day stem.
    Tianyi,
    /// 文昌贵人 — literary star, from the day stem.
    Wenchang,
    /// 将星 — general star, from the year branch.
    Jiangxing,
    /// 华盖 — canopy star, from the year branch.
    Huagai,
    /// 驿马 — travel horse, from the year branch.
    Yima,
    /// 桃花 — peach blossom, from the year branch.
    Taohua,
}

/// All markers in declaration order.
pub const ALL_SHENSHA: [ShenSha; 6] = [
    ShenSha::Tianyi,
    ShenSha::Wenchang,
    ShenSha::Jiangxing,
    ShenSha::Huagai,
    ShenSha::Yima,
    ShenSha::Taohua,
];

impl ShenSha {
    /// Full Chinese name of the marker.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tianyi => "天乙贵人",
            Self::Wenchang => "文昌贵人",
            Self::Jiangxing => "将星",
            Self::Huagai => "华盖",
            Self::Yima => "驿马",
            Self::Taohua => "桃花",
        }
    }
}

/// Nobleman target branches for a day stem.
///
/// 甲戊庚→未丑, 乙己→申子, 丙丁→酉亥, 辛→寅午, 壬癸→卯巳.
pub fn tianyi_branches(day_stem: Stem) -> [Branch; 2] {
    match day_stem {
        Stem::Jia | Stem::Wu | Stem::Geng => [Branch::Wei, Branch::Chou],
        Stem::Yi | Stem::Ji => [Branch::Shen, Branch::Zi],
        Stem::Bing | Stem::Ding => [Branch::You, Branch::Hai],
        Stem::Xin => [Branch::Yin, Branch::Wu],
        Stem::Ren | Stem::Gui => [Branch::Mao, Branch::Si],
    }
}

/// Literary-star target branch for a day stem.
///
/// 甲巳 乙午 丙申 丁酉 戊申 己酉 庚亥 辛子 壬寅 癸丑.
pub const fn wenchang_branch(day_stem: Stem) -> Branch {
    match day_stem {
        Stem::Jia => Branch::Si,
        Stem::Yi => Branch::Wu,
        Stem::Bing | Stem::Wu => Branch::Shen,
        Stem::Ding | Stem::Ji => Branch::You,
        Stem::Geng => Branch::Hai,
        Stem::Xin => Branch::Zi,
        Stem::Ren => Branch::Yin,
        Stem::Gui => Branch::Chou,
    }
}

/// Tri-union group of a branch: 0 = 申子辰, 1 = 巳酉丑, 2 = 寅午戌,
/// 3 = 亥卯未 (`index mod 4`).
const fn trine_group(branch: Branch) -> usize {
    (branch.index() % 4) as usize
}

/// General-star target: the group's peak branch (子酉午卯).
pub const fn jiangxing_branch(reference: Branch) -> Branch {
    [Branch::Zi, Branch::You, Branch::Wu, Branch::Mao][trine_group(reference)]
}

/// Canopy target: the group's storage branch (辰丑戌未).
pub const fn huagai_branch(reference: Branch) -> Branch {
    [Branch::Chen, Branch::Chou, Branch::Xu, Branch::Wei][trine_group(reference)]
}

/// Travel-horse target: the clash of the group's first member (寅亥申巳).
pub const fn yima_branch(reference: Branch) -> Branch {
    [Branch::Yin, Branch::Hai, Branch::Shen, Branch::Si][trine_group(reference)]
}

/// Peach-blossom target: the branch after the group's peak (酉午卯子).
pub const fn taohua_branch(reference: Branch) -> Branch {
    [Branch::You, Branch::Wu, Branch::Mao, Branch::Zi][trine_group(reference)]
}

/// Markers fired by a chart, deduplicated, in declaration order.
///
/// The reference branch for the branch-keyed markers is the year branch.
pub fn shensha_of_chart(chart: &Chart) -> Vec<ShenSha> {
    let day_stem = chart.day_master();
    let reference = chart.year().branch();
    let branches = chart.branches();
    let present = |target: Branch| branches.contains(&target);

    let mut fired = Vec::new();
    if tianyi_branches(day_stem).into_iter().any(present) {
        fired.push(ShenSha::Tianyi);
    }
    if present(wenchang_branch(day_stem)) {
        fired.push(ShenSha::Wenchang);
    }
    if present(jiangxing_branch(reference)) {
        fired.push(ShenSha::Jiangxing);
    }
    if present(huagai_branch(reference)) {
        fired.push(ShenSha::Huagai);
    }
    if present(yima_branch(reference)) {
        fired.push(ShenSha::Yima);
    }
    if present(taohua_branch(reference)) {
        fired.push(ShenSha::Taohua);
    }
    fired
}
