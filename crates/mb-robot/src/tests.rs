//! Unit tests for mb-robot.

use mb_core::{MailId, MailItem, RobotId, Tick};

use crate::{FleetConfig, RobotEffect, RobotError, RobotFleet, RobotState};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn item(id: u32, dest: u32) -> MailItem {
    MailItem::new(MailId(id), 500, dest, Tick::ZERO)
}

fn fleet(count: usize, team_stride: u32) -> RobotFleet {
    RobotFleet::new(count, FleetConfig { depot_floor: 0, team_stride })
}

/// Step every robot once, in id order, collecting all effects.
fn step_all(f: &mut RobotFleet) -> Vec<RobotEffect> {
    let mut effects = Vec::new();
    for id in f.ids() {
        effects.extend(f.step(id).unwrap());
    }
    effects
}

/// Boot tick: robots start Returning at the depot and register idle.
fn boot(f: &mut RobotFleet) {
    let effects = step_all(f);
    assert!(effects.iter().all(|e| matches!(e, RobotEffect::BecameIdle)));
}

// ── Boot and idle registration ────────────────────────────────────────────────

#[cfg(test)]
mod boot_path {
    use super::*;

    #[test]
    fn robots_boot_through_the_return_path() {
        let mut f = fleet(2, 3);
        assert_eq!(f.robot(RobotId(0)).state(), RobotState::Returning);

        let effects = step_all(&mut f);
        assert_eq!(effects.len(), 2);
        assert!(f.all_waiting());
    }

    #[test]
    fn waiting_robot_emits_no_duplicate_idle() {
        let mut f = fleet(1, 3);
        boot(&mut f);
        // Further idle ticks must not re-register.
        for _ in 0..5 {
            assert!(step_all(&mut f).is_empty());
        }
        assert_eq!(f.robot(RobotId(0)).state(), RobotState::Waiting);
    }
}

// ── Solo delivery cycle ───────────────────────────────────────────────────────

#[cfg(test)]
mod solo_trip {
    use super::*;

    #[test]
    fn full_cycle_timeline() {
        let mut f = fleet(1, 3);
        let r = RobotId(0);
        boot(&mut f);

        f.assign_carrier(r, item(0, 5), 1);
        f.dispatch(r);

        // Trip start consumes a tick without moving.
        assert!(step_all(&mut f).is_empty());
        assert_eq!(f.robot(r).state(), RobotState::Delivering);
        assert_eq!(f.robot(r).current_floor(), 0);

        // Five ticks to climb to floor 5.
        for floor in 1..=5 {
            assert!(step_all(&mut f).is_empty());
            assert_eq!(f.robot(r).current_floor(), floor);
        }

        // Drop-off tick: report and turn around.
        let effects = step_all(&mut f);
        assert_eq!(
            effects,
            vec![RobotEffect::Delivered { item: item(0, 5), team_size: 1 }]
        );
        assert_eq!(f.robot(r).state(), RobotState::Returning);

        // Five ticks back down.
        for floor in (0..=4).rev() {
            assert!(step_all(&mut f).is_empty());
            assert_eq!(f.robot(r).current_floor(), floor);
        }

        // Depot tick: back to Waiting, idle again.
        let effects = step_all(&mut f);
        assert_eq!(effects, vec![RobotEffect::BecameIdle]);
        assert_eq!(f.robot(r).state(), RobotState::Waiting);
        assert!(f.robot(r).is_empty());
    }

    #[test]
    fn tube_item_is_delivered_without_returning_first() {
        let mut f = fleet(1, 3);
        let r = RobotId(0);
        boot(&mut f);

        f.assign_carrier(r, item(0, 2), 1);
        f.assign_tube(r, item(1, 4));
        f.dispatch(r);

        step_all(&mut f); // start trip
        step_all(&mut f); // floor 1
        step_all(&mut f); // floor 2

        // First drop-off promotes the tube item; the robot stays out.
        let effects = step_all(&mut f);
        assert_eq!(
            effects,
            vec![RobotEffect::Delivered { item: item(0, 2), team_size: 1 }]
        );
        assert_eq!(f.robot(r).state(), RobotState::Delivering);
        assert_eq!(f.robot(r).destination_floor(), 4);
        assert_eq!(f.robot(r).primary().map(|m| m.id), Some(MailId(1)));
        assert!(f.robot(r).secondary().is_none());

        step_all(&mut f); // floor 3
        step_all(&mut f); // floor 4
        let effects = step_all(&mut f);
        assert_eq!(
            effects,
            vec![RobotEffect::Delivered { item: item(1, 4), team_size: 1 }]
        );
        assert_eq!(f.robot(r).state(), RobotState::Returning);
    }

    #[test]
    fn slot_invariant_holds_through_a_tube_trip() {
        let mut f = fleet(1, 3);
        let r = RobotId(0);
        boot(&mut f);

        f.assign_carrier(r, item(0, 3), 1);
        f.assign_tube(r, item(1, 6));
        f.dispatch(r);

        for _ in 0..20 {
            step_all(&mut f);
            let robot = f.robot(r);
            assert!(robot.secondary().is_none() || robot.primary().is_some());
        }
    }
}

// ── Team trips ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod team_trip {
    use super::*;

    #[test]
    fn escorts_move_in_lockstep_and_return_empty_handed() {
        let mut f = fleet(2, 1); // stride 1: no pacing delay
        let (carrier, escort) = (RobotId(0), RobotId(1));
        boot(&mut f);

        f.assign_carrier(carrier, item(0, 3), 2);
        f.assign_escort(escort, 3, 2);
        f.dispatch(carrier);
        f.dispatch(escort);

        step_all(&mut f); // both start
        for floor in 1..=3 {
            step_all(&mut f);
            assert_eq!(f.robot(carrier).current_floor(), floor);
            assert_eq!(f.robot(escort).current_floor(), floor);
        }

        // Joint drop-off: one report, both turn around.
        let effects = step_all(&mut f);
        assert_eq!(
            effects,
            vec![RobotEffect::Delivered { item: item(0, 3), team_size: 2 }]
        );
        assert_eq!(f.robot(carrier).state(), RobotState::Returning);
        assert_eq!(f.robot(escort).state(), RobotState::Returning);

        // Both reach the depot and register exactly once each.
        for _ in 0..3 {
            step_all(&mut f);
        }
        let effects = step_all(&mut f);
        assert_eq!(effects.len(), 2);
        assert!(effects.iter().all(|e| matches!(e, RobotEffect::BecameIdle)));
    }

    #[test]
    fn team_members_advance_every_stride_ticks() {
        let mut f = fleet(1, 3);
        let r = RobotId(0);
        boot(&mut f);

        f.assign_carrier(r, item(0, 2), 3);
        f.dispatch(r);
        step_all(&mut f); // start trip

        // Two stalled ticks, then a move.
        step_all(&mut f);
        assert_eq!(f.robot(r).current_floor(), 0);
        step_all(&mut f);
        assert_eq!(f.robot(r).current_floor(), 0);
        step_all(&mut f);
        assert_eq!(f.robot(r).current_floor(), 1);
    }

    #[test]
    fn return_leg_runs_at_full_speed_after_the_team_disbands() {
        let mut f = fleet(1, 3);
        let r = RobotId(0);
        boot(&mut f);

        f.assign_carrier(r, item(0, 1), 3);
        f.dispatch(r);
        step_all(&mut f); // start
        step_all(&mut f); // stall
        step_all(&mut f); // stall
        step_all(&mut f); // move to floor 1
        step_all(&mut f); // drop off, disband
        assert_eq!(f.robot(r).state(), RobotState::Returning);

        // One tick per floor on the way home.
        step_all(&mut f);
        assert_eq!(f.robot(r).current_floor(), 0);
    }
}

// ── Fatal errors ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod fatal {
    use super::*;

    #[test]
    fn third_drop_off_in_one_trip_aborts() {
        let mut f = fleet(1, 3);
        let r = RobotId(0);
        boot(&mut f);

        // All three items share a floor so drop-offs chain back to back.
        f.assign_carrier(r, item(0, 2), 1);
        f.assign_tube(r, item(1, 2));
        f.dispatch(r);

        step_all(&mut f); // start
        step_all(&mut f); // floor 1
        step_all(&mut f); // floor 2
        step_all(&mut f); // first drop-off, tube promoted

        // A buggy scheduler reloads the tube mid-trip.
        f.assign_tube(r, item(2, 2));
        step_all(&mut f); // second drop-off, third item promoted

        let err = f.step(r).unwrap_err();
        assert!(matches!(
            err,
            RobotError::ExcessiveDeliveries { robot: RobotId(0), count: 3 }
        ));
    }
}
