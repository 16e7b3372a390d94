//! Sexagenary cycle arithmetic.
//!
//! The 60-term cycle pairs stem index `i mod 10` with branch index `i mod 12`.
//! Only same-parity combinations occur, so 60 of the 120 conceivable pairs are
//! valid. The epoch year 1984 CE is 甲子 (index 0).

use crate::branch::Branch;
use crate::error::ChartError;
use crate::stem::Stem;

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: u8 = 60;

/// Reference epoch: CE 1984 = 甲子 (index 0).
pub const SEXAGENARY_EPOCH_YEAR: i32 = 1984;

/// Stem and branch at a cycle index. Indices wrap modulo 60.
pub const fn index_to_pillar(index: u8) -> (Stem, Branch) {
    let i = index % CYCLE_LEN;
    (Stem::from_index(i % 10), Branch::from_index(i % 12))
}

/// Whether a stem-branch pair is one of the 60 valid combinations.
///
/// Valid pairs share parity: yang stems sit on yang branches only.
pub const fn is_valid_pair(stem: Stem, branch: Branch) -> bool {
    stem.index() % 2 == branch.index() % 2
}

/// Cycle index of a stem-branch pair, rejecting parity-mismatched pairs.
///
/// Solves `i ≡ s (mod 10)`, `i ≡ b (mod 12)` as `(6s − 5b) mod 60`.
pub fn pillar_to_index(stem: Stem, branch: Branch) -> Result<u8, ChartError> {
    if !is_valid_pair(stem, branch) {
        return Err(ChartError::InvalidPair {
            stem: stem.name(),
            branch: branch.name(),
        });
    }
    let s = stem.index() as i32;
    let b = branch.index() as i32;
    Ok((6 * s - 5 * b).rem_euclid(CYCLE_LEN as i32) as u8)
}

/// Advance a cycle index by a signed number of steps, wrapping modulo 60.
pub fn advance(index: u8, steps: i32) -> u8 {
    (index as i32 + steps).rem_euclid(CYCLE_LEN as i32) as u8
}

/// Cycle index of a CE year (1984 = 甲子).
pub fn year_cycle_index(ce_year: i32) -> u8 {
    (ce_year - SEXAGENARY_EPOCH_YEAR).rem_euclid(CYCLE_LEN as i32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_zero_is_jiazi() {
        assert_eq!(index_to_pillar(0), (Stem::Jia, Branch::Zi));
    }

    #[test]
    fn index_59_is_guihai() {
        assert_eq!(index_to_pillar(59), (Stem::Gui, Branch::Hai));
    }

    #[test]
    fn round_trip_all_60() {
        for i in 0..CYCLE_LEN {
            let (s, b) = index_to_pillar(i);
            assert_eq!(pillar_to_index(s, b).unwrap(), i);
        }
    }

    #[test]
    fn parity_mismatch_rejected() {
        // 甲丑: yang stem on yin branch.
        assert!(pillar_to_index(Stem::Jia, Branch::Chou).is_err());
        // Exactly 60 of the 120 combinations validate.
        let mut valid = 0;
        for s in crate::stem::ALL_STEMS {
            for b in crate::branch::ALL_BRANCHES {
                if is_valid_pair(s, b) {
                    valid += 1;
                }
            }
        }
        assert_eq!(valid, 60);
    }

    #[test]
    fn bingzi_index() {
        // 丙子: stem 2, branch 0 → 12.
        assert_eq!(pillar_to_index(Stem::Bing, Branch::Zi).unwrap(), 12);
    }

    #[test]
    fn advance_wraps_both_ways() {
        assert_eq!(advance(59, 1), 0);
        assert_eq!(advance(0, -1), 59);
        assert_eq!(advance(30, 60), 30);
        assert_eq!(advance(5, -7), 58);
    }

    #[test]
    fn epoch_year_is_jiazi() {
        assert_eq!(year_cycle_index(1984), 0);
    }

    #[test]
    fn year_1990_is_gengwu() {
        // 1990 - 1984 = 6 → 庚午.
        let (s, b) = index_to_pillar(year_cycle_index(1990));
        assert_eq!(s, Stem::Geng);
        assert_eq!(b, Branch::Wu);
    }

    #[test]
    fn year_before_epoch() {
        // 1983: -1 → 59 → 癸亥.
        assert_eq!(year_cycle_index(1983), 59);
    }
}
