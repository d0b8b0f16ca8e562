//! One committed item-to-team match, produced by the scheduler and applied
//! by the driver.

use mb_core::{MailItem, RobotId};

/// A delivery commitment: one item, the robots that will carry it, and — for
/// solo trips only — an opportunistic second item for the carrier's tube.
///
/// The first robot in `team` is the **carrier**: it takes ownership of
/// `item` (and `secondary`, if any).  The remaining members are escorts that
/// travel to the same floor in lockstep and return empty-handed after the
/// joint drop-off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub item: MailItem,
    /// Robots committed to this trip, in idle-registry (FIFO) order.
    /// `team[0]` is the carrier.
    pub team: Vec<RobotId>,
    /// Tube item for the carrier.  Only ever `Some` on solo assignments.
    pub secondary: Option<MailItem>,
}

impl Assignment {
    /// The committed team size (1, 2, or 3).
    #[inline]
    pub fn team_size(&self) -> usize {
        self.team.len()
    }

    /// The robot that owns the item for this trip.
    #[inline]
    pub fn carrier(&self) -> RobotId {
        self.team[0]
    }

    /// The non-carrying team members.
    #[inline]
    pub fn escorts(&self) -> &[RobotId] {
        &self.team[1..]
    }
}
