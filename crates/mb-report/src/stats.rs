//! In-memory delivery statistics.

use std::fmt;

use mb_core::{MailItem, Tick};
use mb_pool::PoolError;
use mb_sim::SimObserver;

/// Exponent applied to delivery latency in the weighted score — late mail
/// hurts superlinearly.
const TIME_PENALTY: f64 = 1.1;

/// Accumulates a run summary from delivery-sink callbacks.
///
/// Latency is measured in ticks from the item's arrival at the mail room to
/// its drop-off.  The weighted score is `latency^1.1 × priority`, summed
/// over all deliveries, so urgent mail left waiting dominates the total.
#[derive(Default)]
pub struct DeliveryStats {
    delivered: usize,
    rejected: usize,
    /// Deliveries by committed team size, indexed by `team_size - 1`.
    per_team: [usize; 3],
    total_latency: u64,
    max_latency: u64,
    weighted_score: f64,
    final_tick: Tick,
}

impl DeliveryStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delivered(&self) -> usize {
        self.delivered
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Deliveries performed by teams of `team_size`.
    pub fn deliveries_by_team(&self, team_size: usize) -> usize {
        self.per_team.get(team_size.wrapping_sub(1)).copied().unwrap_or(0)
    }

    /// Mean ticks from arrival to drop-off, or 0.0 with no deliveries.
    pub fn average_latency(&self) -> f64 {
        if self.delivered == 0 {
            0.0
        } else {
            self.total_latency as f64 / self.delivered as f64
        }
    }

    pub fn max_latency(&self) -> u64 {
        self.max_latency
    }

    /// Priority-weighted time penalty, summed over all deliveries.
    pub fn weighted_score(&self) -> f64 {
        self.weighted_score
    }

    pub fn final_tick(&self) -> Tick {
        self.final_tick
    }
}

impl SimObserver for DeliveryStats {
    fn on_delivery(&mut self, tick: Tick, item: &MailItem, team_size: usize) {
        let latency = tick.since(item.arrival_tick);
        self.delivered += 1;
        if let Some(slot) = self.per_team.get_mut(team_size - 1) {
            *slot += 1;
        }
        self.total_latency += latency;
        self.max_latency = self.max_latency.max(latency);
        self.weighted_score += (latency as f64).powf(TIME_PENALTY) * item.priority as f64;
    }

    fn on_item_rejected(&mut self, _tick: Tick, _error: &PoolError) {
        self.rejected += 1;
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.final_tick = final_tick;
    }
}

impl fmt::Display for DeliveryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Delivered {} items by {}", self.delivered, self.final_tick)?;
        writeln!(
            f,
            "  solo: {}  pair: {}  triple: {}",
            self.per_team[0], self.per_team[1], self.per_team[2]
        )?;
        writeln!(
            f,
            "  latency: avg {:.1} ticks, max {} ticks",
            self.average_latency(),
            self.max_latency
        )?;
        writeln!(f, "  weighted score: {:.1}", self.weighted_score)?;
        if self.rejected > 0 {
            writeln!(f, "  rejected as overweight: {}", self.rejected)?;
        }
        Ok(())
    }
}
