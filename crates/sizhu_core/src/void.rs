//! Void (empty) branches of a day pillar.
//!
//! The 60 cycle indices split into six decades of ten; each decade starts at
//! 甲 and covers ten of the twelve branches, leaving two unreached. Those two
//! are the void pair for every pillar in the decade.

use crate::branch::Branch;
use crate::chart::Pillar;

/// Void pairs per decade block (`cycle_index / 10`).
const VOID_TABLE: [(Branch, Branch); 6] = [
    (Branch::Xu, Branch::Hai),   // 甲子 decade
    (Branch::Shen, Branch::You), // 甲戌 decade
    (Branch::Wu, Branch::Wei),   // 甲申 decade
    (Branch::Chen, Branch::Si),  // 甲午 decade
    (Branch::Yin, Branch::Mao),  // 甲辰 decade
    (Branch::Zi, Branch::Chou),  // 甲寅 decade
];

/// Void pair at a cycle index. Indices wrap modulo 60.
pub const fn void_of_index(index: u8) -> (Branch, Branch) {
    VOID_TABLE[((index % 60) / 10) as usize]
}

/// Void pair of a day pillar.
pub const fn void_pair(day: Pillar) -> (Branch, Branch) {
    void_of_index(day.cycle_index())
}
