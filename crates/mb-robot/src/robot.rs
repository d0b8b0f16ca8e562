//! One robot: two carry slots, a floor position, and the step logic.

use mb_core::{MailItem, RobotId};

use crate::{RobotEffect, RobotError, RobotResult, RobotState};
use crate::fleet::FleetConfig;

/// Most drop-offs a robot may perform in one trip — one per carry slot.
const MAX_TRIP_DELIVERIES: u32 = 2;

/// A single delivery robot.
///
/// The robot owns its two item slots exclusively.  An item enters a slot via
/// the fleet's loading operations and leaves either to the delivery sink
/// (drop-off) or back to the pool (depot hand-back); nothing else inspects
/// or mutates the slots.
///
/// Robots boot in [`Returning`][RobotState::Returning] at the depot, so the
/// first tick routes them through the same idle-registration path as a
/// completed trip.
#[derive(Debug)]
pub struct Robot {
    id: RobotId,
    state: RobotState,
    current_floor: u32,
    destination_floor: u32,
    primary: Option<MailItem>,
    secondary: Option<MailItem>,
    /// Committed team size for the current trip; 1 outside team trips.
    team_size: usize,
    deliveries_this_trip: u32,
    /// Set by the scheduler's dispatch signal; cleared when the trip starts.
    dispatched: bool,
    /// Lockstep counter: a team member moves only when `pace` reaches the
    /// configured stride.
    pace: u32,
}

impl Robot {
    pub(crate) fn new(id: RobotId, depot_floor: u32) -> Self {
        Self {
            id,
            state: RobotState::Returning,
            current_floor: depot_floor,
            destination_floor: depot_floor,
            primary: None,
            secondary: None,
            team_size: 1,
            deliveries_this_trip: 0,
            dispatched: false,
            pace: 0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> RobotId {
        self.id
    }

    #[inline]
    pub fn state(&self) -> RobotState {
        self.state
    }

    #[inline]
    pub fn current_floor(&self) -> u32 {
        self.current_floor
    }

    #[inline]
    pub fn destination_floor(&self) -> u32 {
        self.destination_floor
    }

    #[inline]
    pub fn team_size(&self) -> usize {
        self.team_size
    }

    #[inline]
    pub fn primary(&self) -> Option<&MailItem> {
        self.primary.as_ref()
    }

    #[inline]
    pub fn secondary(&self) -> Option<&MailItem> {
        self.secondary.as_ref()
    }

    /// `true` when both carry slots are empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none()
    }

    // ── Loading operations (called via the fleet) ─────────────────────────

    pub(crate) fn load_primary(&mut self, item: MailItem, team_size: usize) {
        debug_assert!(self.primary.is_none(), "{} already has a primary item", self.id);
        debug_assert_eq!(self.state, RobotState::Waiting);
        self.primary = Some(item);
        self.team_size = team_size;
    }

    pub(crate) fn load_escort(&mut self, destination_floor: u32, team_size: usize) {
        debug_assert!(self.is_empty(), "{} escorting while loaded", self.id);
        debug_assert!(team_size > 1, "solo robots always carry");
        self.destination_floor = destination_floor;
        self.team_size = team_size;
    }

    pub(crate) fn load_tube(&mut self, item: MailItem) {
        debug_assert!(self.primary.is_some(), "tube loaded before primary");
        debug_assert!(self.secondary.is_none(), "{} already has a tube item", self.id);
        debug_assert_eq!(self.team_size, 1, "team members never carry a tube item");
        self.secondary = Some(item);
    }

    pub(crate) fn receive_dispatch(&mut self) {
        debug_assert!(
            self.primary.is_some() || self.team_size > 1,
            "{} dispatched with nothing to do",
            self.id
        );
        self.dispatched = true;
    }

    // ── Step ──────────────────────────────────────────────────────────────

    /// Advance the robot by one tick.
    ///
    /// Exactly one thing happens per tick: a one-floor move, or a state
    /// transition.  Returned effects are the robot's requests to the driver
    /// (report a delivery, hand an item back, register idle).
    pub(crate) fn step(&mut self, cfg: FleetConfig) -> RobotResult<Vec<RobotEffect>> {
        debug_assert!(
            self.secondary.is_none() || self.primary.is_some(),
            "{} holds only a tube item",
            self.id
        );

        let mut effects = Vec::new();

        match self.state {
            RobotState::Returning => {
                if self.current_floor == cfg.depot_floor {
                    self.arrive_at_depot(&mut effects);
                } else {
                    self.move_towards(cfg.depot_floor, cfg.team_stride);
                }
            }

            RobotState::Waiting => {
                if self.dispatched {
                    self.start_trip();
                }
            }

            RobotState::Delivering => {
                if self.current_floor == self.destination_floor {
                    self.drop_off(&mut effects)?;
                } else {
                    self.move_towards(self.destination_floor, cfg.team_stride);
                }
            }
        }

        Ok(effects)
    }

    /// Returning → Waiting: hand back any leftover tube item, clear trip
    /// state, and announce idleness.
    fn arrive_at_depot(&mut self, effects: &mut Vec<RobotEffect>) {
        debug_assert!(self.primary.is_none(), "{} returned still carrying", self.id);
        if let Some(item) = self.secondary.take() {
            effects.push(RobotEffect::ReturnedToPool { item });
        }
        self.team_size = 1;
        self.pace = 0;
        self.deliveries_this_trip = 0;
        self.state = RobotState::Waiting;
        effects.push(RobotEffect::BecameIdle);
    }

    /// Waiting → Delivering: consume the dispatch signal and set the route.
    fn start_trip(&mut self) {
        self.dispatched = false;
        self.deliveries_this_trip = 0;
        if let Some(item) = &self.primary {
            self.destination_floor = item.destination;
        }
        // Escorts had their destination set at assignment time.
        self.state = RobotState::Delivering;
    }

    /// Arrival at the destination floor: drop off, then either promote the
    /// tube item (solo only) or turn around.
    fn drop_off(&mut self, effects: &mut Vec<RobotEffect>) -> RobotResult<()> {
        let team_size = self.team_size;
        let was_team = team_size > 1;
        // The team disbands at the joint drop-off; the return leg runs at
        // full speed.
        self.team_size = 1;
        self.pace = 0;

        if let Some(item) = self.primary.take() {
            self.deliveries_this_trip += 1;
            if self.deliveries_this_trip > MAX_TRIP_DELIVERIES {
                return Err(RobotError::ExcessiveDeliveries {
                    robot: self.id,
                    count: self.deliveries_this_trip,
                });
            }
            effects.push(RobotEffect::Delivered { item, team_size });
        }

        if was_team {
            // Team members always return after the joint drop-off.  A tube
            // item in a team member's slot would be a scheduling bug; leaving
            // it in place routes it through the depot hand-back.
            debug_assert!(self.secondary.is_none(), "team member carried a tube item");
            self.state = RobotState::Returning;
        } else if let Some(next) = self.secondary.take() {
            // Still Delivering — straight on to the tube item's floor.
            self.destination_floor = next.destination;
            self.primary = Some(next);
        } else {
            self.state = RobotState::Returning;
        }

        Ok(())
    }

    /// Move one floor toward `destination`, honoring team lockstep pacing:
    /// while part of a team, advance only every `stride`-th tick.
    fn move_towards(&mut self, destination: u32, stride: u32) {
        if self.team_size > 1 {
            self.pace += 1;
            if self.pace < stride {
                return;
            }
            self.pace = 0;
        }
        if self.current_floor < destination {
            self.current_floor += 1;
        } else if self.current_floor > destination {
            self.current_floor -= 1;
        }
    }
}
