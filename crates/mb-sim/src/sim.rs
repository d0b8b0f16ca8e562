//! The `Sim` struct and its tick loop.

use mb_core::{MailItem, RobotId, SimConfig, Tick};
use mb_dispatch::{Assignment, DispatchScheduler};
use mb_gen::MailSource;
use mb_pool::PoolResult;
use mb_robot::{RobotEffect, RobotFleet};

use crate::{SimObserver, SimResult};

/// The main simulation driver.
///
/// `Sim<A>` owns all simulation state: the scheduler (which owns the pool
/// and the idle registry), the fleet, and the arrival source.  Each tick it
/// runs the three phases described in the [crate docs][crate]: arrivals,
/// dispatch, robot steps.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<A: MailSource> {
    /// Global configuration (building shape, fleet size, cap, …).
    pub config: SimConfig,

    /// The current tick — advanced at the end of every processed tick.
    pub tick: Tick,

    /// Matching core: pool, idle registry, team formation.
    pub scheduler: DispatchScheduler,

    /// Every robot's state machine.
    pub fleet: RobotFleet,

    /// Where arriving mail comes from.
    pub source: A,

    /// Drop-offs reported so far.
    pub delivered: usize,
}

impl<A: MailSource> Sim<A> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Insert an item out of band, bypassing the arrival source.
    ///
    /// Overweight items are rejected with the pool untouched; the caller
    /// decides whether to care.
    pub fn insert(&mut self, item: MailItem) -> PoolResult<()> {
        self.scheduler.insert(item)
    }

    /// `true` once there is nothing left to do: the source is exhausted,
    /// the pool is empty, and every robot is idle at the depot.
    pub fn is_complete(&self) -> bool {
        self.source.is_exhausted() && self.scheduler.pool().is_empty() && self.fleet.all_waiting()
    }

    /// Run until the simulation completes or `config.total_ticks` is hit.
    ///
    /// Returns the tick at which the run stopped.  Fatal errors (an
    /// unassignable item, an over-delivering robot) propagate immediately —
    /// an inconsistent simulation must abort, not patch over the fault.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Tick> {
        while self.tick < self.config.end_tick() && !self.is_complete() {
            self.process_tick(observer)?;
        }
        observer.on_sim_end(self.tick);
        Ok(self.tick)
    }

    /// Run exactly `n` ticks from the current position (ignores the cap and
    /// the completion check).  Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.process_tick(observer)?;
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.tick;
        observer.on_tick_start(now);

        // ── Phase 1: arrivals ─────────────────────────────────────────────
        //
        // Overweight mail is a per-item rejection, not a run failure: report
        // it and keep going.
        for item in self.source.take_arrivals(now) {
            observer.on_item_arrived(now, &item);
            if let Err(e) = self.scheduler.insert(item) {
                observer.on_item_rejected(now, &e);
            }
        }

        // ── Phase 2: dispatch pass ────────────────────────────────────────
        let assignments = self.scheduler.step()?;
        for assignment in assignments {
            self.apply_assignment(assignment, now, observer);
        }

        // ── Phase 3: robot steps, ascending RobotId ───────────────────────
        for index in 0..self.fleet.len() {
            let robot = RobotId(index as u32);
            self.step_robot(robot, now, observer)?;
        }

        observer.on_tick_end(now);
        self.tick = now + 1;
        Ok(())
    }

    /// Load one committed assignment into the fleet: the first team member
    /// carries the item (and the tube item, if any), the rest escort.
    fn apply_assignment<O: SimObserver>(
        &mut self,
        assignment: Assignment,
        now: Tick,
        observer: &mut O,
    ) {
        let Assignment { item, team, secondary } = assignment;
        let team_size = team.len();
        let destination = item.destination;

        let carrier = team[0];
        self.fleet.assign_carrier(carrier, item, team_size);
        if let Some(tube) = secondary {
            self.fleet.assign_tube(carrier, tube);
        }
        for &escort in &team[1..] {
            self.fleet.assign_escort(escort, destination, team_size);
        }

        for &member in &team {
            self.fleet.dispatch(member);
            observer.on_dispatch(now, member, team_size);
        }
    }

    /// Step one robot and apply its effects.
    fn step_robot<O: SimObserver>(
        &mut self,
        robot: RobotId,
        now: Tick,
        observer: &mut O,
    ) -> SimResult<()> {
        let before = self.fleet.robot(robot).state();
        let effects = self.fleet.step(robot)?;
        let after = self.fleet.robot(robot).state();
        if before != after {
            observer.on_state_change(now, robot, before, after);
        }

        for effect in effects {
            match effect {
                RobotEffect::Delivered { item, team_size } => {
                    self.delivered += 1;
                    observer.on_delivery(now, &item, team_size);
                }
                RobotEffect::ReturnedToPool { item } => {
                    observer.on_item_returned(now, &item);
                    // A handed-back tube item was already classified once,
                    // so re-insertion cannot reject it.
                    self.scheduler.insert(item)?;
                }
                RobotEffect::BecameIdle => {
                    self.scheduler.register_idle(robot);
                    observer.on_register_idle(now, robot);
                }
            }
        }
        Ok(())
    }
}
