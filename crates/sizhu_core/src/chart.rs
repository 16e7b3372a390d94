//! Pillars, slots, and the four-pillar chart.
//!
//! A [`Pillar`] is guaranteed valid at construction: it stores its sexagenary
//! index, so stem and branch are always one of the 60 combinations. A
//! [`Chart`] holds exactly one pillar per slot; the day pillar's stem is the
//! day-master, the fixed reference for every relational computation, and
//! nothing about a chart can change after it is built.

use crate::branch::Branch;
use crate::cycle::{index_to_pillar, pillar_to_index};
use crate::error::ChartError;
use crate::stem::Stem;

/// The four chart positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PillarSlot {
    Year,
    Month,
    Day,
    Hour,
}

/// All 4 slots in chart order.
pub const ALL_SLOTS: [PillarSlot; 4] = [
    PillarSlot::Year,
    PillarSlot::Month,
    PillarSlot::Day,
    PillarSlot::Hour,
];

impl PillarSlot {
    /// English name of the slot.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }

    /// Chinese name of the slot (年柱 etc.).
    pub const fn chinese_name(self) -> &'static str {
        match self {
            Self::Year => "年柱",
            Self::Month => "月柱",
            Self::Day => "日柱",
            Self::Hour => "时柱",
        }
    }

    /// 0-based index in chart order.
    pub const fn index(self) -> usize {
        match self {
            Self::Year => 0,
            Self::Month => 1,
            Self::Day => 2,
            Self::Hour => 3,
        }
    }
}

/// A validated stem-branch pair assigned to a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pillar {
    slot: PillarSlot,
    cycle: u8,
}

impl Pillar {
    /// Build a pillar, rejecting the 60 parity-mismatched pairs.
    pub fn new(stem: Stem, branch: Branch, slot: PillarSlot) -> Result<Pillar, ChartError> {
        let cycle = pillar_to_index(stem, branch)?;
        Ok(Pillar { slot, cycle })
    }

    /// The slot this pillar occupies.
    pub const fn slot(self) -> PillarSlot {
        self.slot
    }

    /// Sexagenary cycle index (0..=59).
    pub const fn cycle_index(self) -> u8 {
        self.cycle
    }

    /// The pillar's stem.
    pub const fn stem(self) -> Stem {
        index_to_pillar(self.cycle).0
    }

    /// The pillar's branch.
    pub const fn branch(self) -> Branch {
        index_to_pillar(self.cycle).1
    }

    /// Two-glyph rendering (e.g. `甲子`).
    pub fn name(self) -> String {
        format!("{}{}", self.stem().name(), self.branch().name())
    }
}

/// The four pillars of a birth moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    pillars: [Pillar; 4],
}

impl Chart {
    /// Assemble a chart from four pillars, requiring one per slot.
    pub fn new(pillars: [Pillar; 4]) -> Result<Chart, ChartError> {
        for slot in ALL_SLOTS {
            let count = pillars.iter().filter(|p| p.slot() == slot).count();
            if count != 1 {
                return Err(ChartError::SlotMismatch(slot.name()));
            }
        }
        let mut ordered = pillars;
        ordered.sort_by_key(|p| p.slot().index());
        Ok(Chart { pillars: ordered })
    }

    /// Assemble a chart from stem-branch pairs in year/month/day/hour order.
    pub fn from_pairs(pairs: [(Stem, Branch); 4]) -> Result<Chart, ChartError> {
        let mut pillars = [Pillar::new(pairs[0].0, pairs[0].1, PillarSlot::Year)?; 4];
        for (i, slot) in ALL_SLOTS.into_iter().enumerate() {
            pillars[i] = Pillar::new(pairs[i].0, pairs[i].1, slot)?;
        }
        Chart::new(pillars)
    }

    /// The pillar at a slot.
    pub const fn pillar(&self, slot: PillarSlot) -> Pillar {
        self.pillars[slot.index()]
    }

    /// Year pillar.
    pub const fn year(&self) -> Pillar {
        self.pillar(PillarSlot::Year)
    }

    /// Month pillar.
    pub const fn month(&self) -> Pillar {
        self.pillar(PillarSlot::Month)
    }

    /// Day pillar.
    pub const fn day(&self) -> Pillar {
        self.pillar(PillarSlot::Day)
    }

    /// Hour pillar.
    pub const fn hour(&self) -> Pillar {
        self.pillar(PillarSlot::Hour)
    }

    /// The day-master: the day pillar's stem.
    pub const fn day_master(&self) -> Stem {
        self.day().stem()
    }

    /// All four pillars in slot order.
    pub const fn pillars(&self) -> &[Pillar; 4] {
        &self.pillars
    }

    /// The four stems in slot order.
    pub fn stems(&self) -> [Stem; 4] {
        self.pillars.map(|p| p.stem())
    }

    /// The four branches in slot order.
    pub fn branches(&self) -> [Branch; 4] {
        self.pillars.map(|p| p.branch())
    }
}
