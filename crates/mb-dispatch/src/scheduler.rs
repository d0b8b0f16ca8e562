//! `DispatchScheduler` — owns the pool and the idle registry, forms teams.

use std::collections::VecDeque;

use mb_core::{CarryClass, MailId, MailItem, Rank, RobotId};
use mb_pool::{MailPool, PoolResult};

use crate::{Assignment, DispatchError, DispatchResult};

/// Matches pooled mail against idle robots, one pass per tick.
///
/// The scheduler exclusively owns the [`MailPool`] and the idle registry.
/// It never touches robot state: each [`step`][Self::step] returns the
/// [`Assignment`]s it committed, and the driver applies them to the fleet.
pub struct DispatchScheduler {
    pool: MailPool,
    /// Robots currently idle at the depot, in registration (FIFO) order.
    idle: VecDeque<RobotId>,
    /// Total robots that will ever exist — the team feasibility bound.
    fleet_size: usize,
}

impl DispatchScheduler {
    pub fn new(fleet_size: usize) -> Self {
        Self {
            pool: MailPool::new(),
            idle: VecDeque::new(),
            fleet_size,
        }
    }

    // ── Pool boundary ─────────────────────────────────────────────────────

    /// Insert a newly arrived (or handed-back) item into the pool.
    #[inline]
    pub fn insert(&mut self, item: MailItem) -> PoolResult<()> {
        self.pool.insert(item)
    }

    /// Read-only view of the pool, for observers and tests.
    #[inline]
    pub fn pool(&self) -> &MailPool {
        &self.pool
    }

    // ── Idle registry ─────────────────────────────────────────────────────

    /// Register a robot as idle at the depot.
    ///
    /// Robots are dispatched in registration order.  The state machine emits
    /// exactly one idle notification per depot return, so a robot can never
    /// be registered twice.
    pub fn register_idle(&mut self, robot: RobotId) {
        debug_assert!(
            !self.idle.contains(&robot),
            "{robot} registered idle while already in the registry"
        );
        self.idle.push_back(robot);
    }

    /// Robots currently idle.
    #[inline]
    pub fn idle_count(&self) -> usize {
        self.idle.len()
    }

    // ── Matching pass ─────────────────────────────────────────────────────

    /// Run one matching pass: repeatedly commit the globally best-ranked
    /// item to a team of idle robots, until nothing more can be matched.
    ///
    /// The pass drains every currently satisfiable match in one call — a
    /// tick with three idle robots and three solo items commits all three.
    /// When the best candidate needs more robots than are idle, the whole
    /// pass stops: lower-ranked items must not overtake it (strict priority
    /// order).  That situation is backpressure, not an error; the item stays
    /// queued and is retried next tick.
    ///
    /// # Errors
    ///
    /// [`DispatchError::UnassignableItem`] if the best candidate needs a
    /// bigger team than the fleet will ever have.  Fatal: the run aborts, so
    /// any assignments already committed in this pass are discarded with it.
    pub fn step(&mut self) -> DispatchResult<Vec<Assignment>> {
        let mut assignments = Vec::new();

        while let Some((class, id)) = self.best_candidate() {
            let required = class.team_size();
            if required > self.fleet_size {
                return Err(DispatchError::UnassignableItem {
                    id,
                    required,
                    fleet_size: self.fleet_size,
                });
            }
            if self.idle.len() < required {
                break;
            }

            let Some(item) = self.pool.pop_front(class) else { break };
            let team: Vec<RobotId> =
                (0..required).filter_map(|_| self.idle.pop_front()).collect();

            // Solo trips opportunistically take a second small item for the
            // tube; team trips never do.
            let secondary = match class {
                CarryClass::Single => self.pool.pop_front(CarryClass::Single),
                _ => None,
            };

            assignments.push(Assignment { item, team, secondary });
        }

        Ok(assignments)
    }

    /// The class whose head item ranks best across all three queues, plus
    /// that item's id.
    ///
    /// Classes are scanned in ascending team-size order with strict-improvement
    /// replacement, so an exact rank tie resolves toward the lower class.
    /// (`MailId` makes ranks unique in practice; the rule is fixed anyway so
    /// the selection is deterministic by construction, not by accident.)
    fn best_candidate(&self) -> Option<(CarryClass, MailId)> {
        let mut best: Option<(CarryClass, MailId, Rank)> = None;
        for class in CarryClass::ALL {
            if let Some(head) = self.pool.peek_front(class) {
                let rank = head.rank();
                match best {
                    Some((_, _, best_rank)) if rank >= best_rank => {}
                    _ => best = Some((class, head.id, rank)),
                }
            }
        }
        best.map(|(class, id, _)| (class, id))
    }
}
