//! Fluent builder for constructing a [`Sim`].

use mb_core::{MailItem, SimConfig, Tick};
use mb_dispatch::DispatchScheduler;
use mb_gen::MailSource;
use mb_robot::{FleetConfig, RobotFleet};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<A>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — building shape, fleet size, tick cap, seed
/// - `A: MailSource` — where arriving mail comes from
///
/// # Optional inputs
///
/// | Method        | Default            |
/// |---------------|--------------------|
/// | `.queued(v)`  | empty pool at tick 0 |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, ManifestSource::from_path(path)?)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<A: MailSource> {
    config: SimConfig,
    source: A,
    queued: Vec<MailItem>,
}

impl<A: MailSource> SimBuilder<A> {
    pub fn new(config: SimConfig, source: A) -> Self {
        Self { config, source, queued: Vec::new() }
    }

    /// Seed the pool with items already present at tick 0.
    pub fn queued(mut self, items: Vec<MailItem>) -> Self {
        self.queued = items;
        self
    }

    /// Validate the configuration and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<A>> {
        let config = self.config;

        if config.robot_count == 0 {
            return Err(SimError::Config("robot_count must be at least 1".into()));
        }
        if config.floors < 2 {
            return Err(SimError::Config("a building needs at least 2 floors".into()));
        }
        if config.depot_floor >= config.floors {
            return Err(SimError::Config(format!(
                "depot floor {} is outside the {}-floor building",
                config.depot_floor, config.floors
            )));
        }
        if config.team_stride == 0 {
            return Err(SimError::Config("team_stride must be at least 1".into()));
        }

        let fleet = RobotFleet::new(
            config.robot_count,
            FleetConfig {
                depot_floor: config.depot_floor,
                team_stride: config.team_stride,
            },
        );

        let mut scheduler = DispatchScheduler::new(config.robot_count);
        for item in self.queued {
            // Seeding is a build-time path: an overweight seed is a caller
            // bug, surfaced instead of silently skipped.
            scheduler.insert(item)?;
        }

        Ok(Sim {
            config,
            tick: Tick::ZERO,
            scheduler,
            fleet,
            source: self.source,
            delivered: 0,
        })
    }
}
