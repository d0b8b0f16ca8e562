//! Simulation time model and top-level configuration.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one unit
//! of simulated time: a robot moves at most one floor per tick, the scheduler
//! runs one matching pass per tick.  Using an integer tick as the canonical
//! time unit means all latency arithmetic is exact and comparisons are O(1).

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64` to avoid overflow: at one tick per simulated second a u64
/// lasts far longer than any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Validated by `SimBuilder::build` in `mb-sim`; the fields here are plain
/// data so applications can construct or deserialize them freely.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of floors in the building.  Valid destinations are
    /// `0..floors`, though mail is normally addressed above the depot.
    pub floors: u32,

    /// The floor where robots start, return to, and register as idle.
    pub depot_floor: u32,

    /// Fleet size.  Fixed for the whole run; also the feasibility bound for
    /// team formation (an item needing more robots than this is fatal).
    pub robot_count: usize,

    /// Hard cap on simulated ticks.  `Sim::run` stops here even if mail is
    /// still undelivered, so a wedged scenario cannot loop forever.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical arrivals.
    pub seed: u64,

    /// Team lockstep pacing: a robot carrying as part of a team advances one
    /// floor only every `team_stride`-th tick, modelling members waiting for
    /// each other.  `1` disables the delay; the classic value is 3.
    pub team_stride: u32,
}

impl SimConfig {
    /// The tick at which the simulation is cut off (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }
}
