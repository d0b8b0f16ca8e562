//! Mail items and their weight classification.
//!
//! # Carry classes
//!
//! Weight determines how many robots must jointly carry an item:
//!
//! | Class    | Weight (g)  | Team size |
//! |----------|-------------|-----------|
//! | `Single` | ≤ 2000      | 1         |
//! | `Pair`   | 2001 – 2600 | 2         |
//! | `Triple` | 2601 – 3000 | 3         |
//!
//! Anything above 3000 g cannot be carried at all and is rejected at pool
//! insertion.  [`CarryClass::for_weight`] is the single classification point;
//! no other code compares weights against the ceilings directly.

use std::cmp::Reverse;
use std::fmt;

use crate::{MailId, Tick};

// ── Weight ceilings ───────────────────────────────────────────────────────────

/// Heaviest item one robot can carry alone.
pub const SINGLE_MAX_WEIGHT: u32 = 2_000;
/// Heaviest item a pair of robots can carry.
pub const PAIR_MAX_WEIGHT: u32 = 2_600;
/// Heaviest item a triple can carry — the absolute ceiling.
pub const TRIPLE_MAX_WEIGHT: u32 = 3_000;

// ── CarryClass ────────────────────────────────────────────────────────────────

/// One of the three weight tiers, which is also the required team size.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarryClass {
    Single,
    Pair,
    Triple,
}

impl CarryClass {
    /// All classes in ascending team-size order.  Iteration order matters:
    /// the scheduler breaks exact rank ties toward the earlier class.
    pub const ALL: [CarryClass; 3] = [CarryClass::Single, CarryClass::Pair, CarryClass::Triple];

    /// Classify a weight, or `None` if it exceeds the triple-carry ceiling.
    pub fn for_weight(weight: u32) -> Option<CarryClass> {
        match weight {
            0..=SINGLE_MAX_WEIGHT => Some(CarryClass::Single),
            w if w <= PAIR_MAX_WEIGHT => Some(CarryClass::Pair),
            w if w <= TRIPLE_MAX_WEIGHT => Some(CarryClass::Triple),
            _ => None,
        }
    }

    /// Number of robots needed to carry an item of this class.
    #[inline]
    pub fn team_size(self) -> usize {
        match self {
            CarryClass::Single => 1,
            CarryClass::Pair => 2,
            CarryClass::Triple => 3,
        }
    }

    /// Queue index in the pool's class array.
    #[inline]
    pub fn index(self) -> usize {
        self.team_size() - 1
    }
}

impl fmt::Display for CarryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CarryClass::Single => "single",
            CarryClass::Pair => "pair",
            CarryClass::Triple => "triple",
        };
        write!(f, "{name}")
    }
}

// ── Rank ──────────────────────────────────────────────────────────────────────

/// The pool's total order, as a comparable key.
///
/// Lower compares first: higher priority wins, then lower destination floor,
/// then earlier arrival.  `MailId` is unique, so the order is strict — two
/// distinct items never rank equal.
pub type Rank = (Reverse<u32>, u32, MailId);

// ── MailItem ──────────────────────────────────────────────────────────────────

/// One parcel.  Immutable once created.
///
/// `MailItem` is `Clone` (observers and tests copy freely) but deliberately
/// not `Copy`: an item's slot ownership transfers by move — from pool to
/// robot on assignment, from robot to the delivery sink on drop-off.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MailItem {
    /// Identity and arrival sequence number.
    pub id: MailId,
    /// Weight in grams.  Determines the carry class.
    pub weight: u32,
    /// Floor the item is addressed to.
    pub destination: u32,
    /// Urgency: 1 for ordinary mail, higher integers are more urgent.
    pub priority: u32,
    /// Tick at which the item entered the building.  Used for latency
    /// reporting, never for ordering.
    pub arrival_tick: Tick,
}

impl MailItem {
    /// Lowest-urgency priority level, carried by ordinary mail.
    pub const ORDINARY_PRIORITY: u32 = 1;

    /// Create an ordinary (priority 1) item.
    pub fn new(id: MailId, weight: u32, destination: u32, arrival_tick: Tick) -> Self {
        Self::with_priority(id, weight, destination, Self::ORDINARY_PRIORITY, arrival_tick)
    }

    /// Create an item with an explicit priority level.
    pub fn with_priority(
        id: MailId,
        weight: u32,
        destination: u32,
        priority: u32,
        arrival_tick: Tick,
    ) -> Self {
        Self { id, weight, destination, priority, arrival_tick }
    }

    /// The item's position in the pool total order (lower = served first).
    #[inline]
    pub fn rank(&self) -> Rank {
        (Reverse(self.priority), self.destination, self.id)
    }

    /// The item's carry class, or `None` for overweight items.
    #[inline]
    pub fn carry_class(&self) -> Option<CarryClass> {
        CarryClass::for_weight(self.weight)
    }
}

impl fmt::Display for MailItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mail {} | to floor {} | {} g | priority {}",
            self.id.0, self.destination, self.weight, self.priority
        )
    }
}
