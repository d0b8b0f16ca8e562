//! `RobotFleet` — storage and stepping for the whole fleet.

use mb_core::{MailItem, RobotId};

use crate::{Robot, RobotEffect, RobotResult, RobotState};

/// Parameters shared by every robot's state machine.
#[derive(Copy, Clone, Debug)]
pub struct FleetConfig {
    /// The floor where robots start, return to, and register as idle.
    pub depot_floor: u32,
    /// Team lockstep pacing: team members advance one floor only every
    /// `team_stride`-th tick.  `1` disables the delay.
    pub team_stride: u32,
}

/// All robots, indexed by `RobotId`.
///
/// The fleet is the only mutation path into robot state: the driver applies
/// scheduler assignments through the loading operations below and advances
/// each machine with [`step`][Self::step].  Iteration order is always
/// ascending `RobotId`, which keeps runs deterministic.
pub struct RobotFleet {
    robots: Vec<Robot>,
    config: FleetConfig,
}

impl RobotFleet {
    /// Build `count` robots at the depot.  IDs are assigned from a
    /// monotonically increasing counter: `RobotId(0)` through
    /// `RobotId(count - 1)`.
    pub fn new(count: usize, config: FleetConfig) -> Self {
        let robots = (0..count as u32)
            .map(|i| Robot::new(RobotId(i), config.depot_floor))
            .collect();
        Self { robots, config }
    }

    pub fn len(&self) -> usize {
        self.robots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.robots.is_empty()
    }

    #[inline]
    pub fn config(&self) -> FleetConfig {
        self.config
    }

    /// Read-only view of one robot.
    #[inline]
    pub fn robot(&self, id: RobotId) -> &Robot {
        &self.robots[id.index()]
    }

    /// All robot IDs in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = RobotId> + use<> {
        (0..self.robots.len() as u32).map(RobotId)
    }

    /// `true` when every robot is idle at the depot.
    pub fn all_waiting(&self) -> bool {
        self.robots.iter().all(|r| r.state() == RobotState::Waiting)
    }

    // ── Assignment operations (applied by the driver) ─────────────────────

    /// Load `item` into `robot`'s primary slot as the trip's carrier.
    pub fn assign_carrier(&mut self, robot: RobotId, item: MailItem, team_size: usize) {
        self.robots[robot.index()].load_primary(item, team_size);
    }

    /// Mark `robot` as a team escort bound for `destination_floor`.
    pub fn assign_escort(&mut self, robot: RobotId, destination_floor: u32, team_size: usize) {
        self.robots[robot.index()].load_escort(destination_floor, team_size);
    }

    /// Load a second small item into a solo carrier's tube.
    pub fn assign_tube(&mut self, robot: RobotId, item: MailItem) {
        self.robots[robot.index()].load_tube(item);
    }

    /// Signal `robot` to leave Waiting on its next step.
    pub fn dispatch(&mut self, robot: RobotId) {
        self.robots[robot.index()].receive_dispatch();
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance one robot by one tick.
    pub fn step(&mut self, robot: RobotId) -> RobotResult<Vec<RobotEffect>> {
        let config = self.config;
        self.robots[robot.index()].step(config)
    }
}
