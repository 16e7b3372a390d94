//! Na-yin (sound element) of the sexagenary pairs.
//!
//! Each consecutive pair of cycle indices shares one of 30 named sound
//! elements, so the table is 30 entries keyed by `cycle_index / 2`. Total
//! over all 60 valid pairs; there is no fallback entry.

use crate::branch::Branch;
use crate::cycle::pillar_to_index;
use crate::element::Element;
use crate::error::ChartError;
use crate::stem::Stem;

/// A na-yin value: the traditional name and its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaYin {
    /// Traditional three-glyph name (e.g. 海中金).
    pub name: &'static str,
    /// The sound element named by the final glyph.
    pub element: Element,
}

/// The 30 na-yin entries in cycle order (entry k covers indices 2k and 2k+1).
const NAYIN_TABLE: [(&str, Element); 30] = [
    ("海中金", Element::Metal), // 甲子 乙丑
    ("炉中火", Element::Fire),  // 丙寅 丁卯
    ("大林木", Element::Wood),  // 戊辰 己巳
    ("路旁土", Element::Earth), // 庚午 辛未
    ("剑锋金", Element::Metal), // 壬申 癸酉
    ("山头火", Element::Fire),  // 甲戌 乙亥
    ("涧下水", Element::Water), // 丙子 丁丑
    ("城头土", Element::Earth), // 戊寅 己卯
    ("白蜡金", Element::Metal), // 庚辰 辛巳
    ("杨柳木", Element::Wood),  // 壬午 癸未
    ("井泉水", Element::Water), // 甲申 乙酉
    ("屋上土", Element::Earth), // 丙戌 丁亥
    ("霹雳火", Element::Fire),  // 戊子 己丑
    ("松柏木", Element::Wood),  // 庚寅 辛卯
    ("长流水", Element::Water), // 壬辰 癸巳
    ("砂中金", Element::Metal), // 甲午 乙未
    ("山下火", Element::Fire),  // 丙申 丁酉
    ("平地木", Element::Wood),  // 戊戌 己亥
    ("壁上土", Element::Earth), // 庚子 辛丑
    ("金泊金", Element::Metal), // 壬寅 癸卯
    ("覆灯火", Element::Fire),  // 甲辰 乙巳
    ("天河水", Element::Water), // 丙午 丁未
    ("大驿土", Element::Earth), // 戊申 己酉
    ("钗钏金", Element::Metal), // 庚戌 辛亥
    ("桑柘木", Element::Wood),  // 壬子 癸丑
    ("大溪水", Element::Water), // 甲寅 乙卯
    ("砂中土", Element::Earth), // 丙辰 丁巳
    ("天上火", Element::Fire),  // 戊午 己未
    ("石榴木", Element::Wood),  // 庚申 辛酉
    ("大海水", Element::Water), // 壬戌 癸亥
];

/// Na-yin at a cycle index. Indices wrap modulo 60.
pub const fn nayin_of_index(index: u8) -> NaYin {
    let (name, element) = NAYIN_TABLE[((index % 60) / 2) as usize];
    NaYin { name, element }
}

/// Na-yin of a stem-branch pair, rejecting invalid pairs.
pub fn nayin(stem: Stem, branch: Branch) -> Result<NaYin, ChartError> {
    Ok(nayin_of_index(pillar_to_index(stem, branch)?))
}
