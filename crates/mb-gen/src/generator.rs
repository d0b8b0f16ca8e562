//! Deterministic random mail generation.

use mb_core::item::{PAIR_MAX_WEIGHT, SINGLE_MAX_WEIGHT, TRIPLE_MAX_WEIGHT};
use mb_core::{MailId, MailItem, SimRng, Tick};

use crate::MailSource;

/// Tuning knobs for [`RandomMailGenerator`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Total items to produce over the whole run.
    pub total_items: usize,
    /// Expected arrivals per tick (Poisson λ).
    pub lambda: f64,
    /// Number of floors.  Destinations are sampled uniformly from
    /// `1..floors` — the ground floor is the depot and receives no mail.
    pub floors: u32,
    /// Probability that an item is priority mail (level 10 or 100) rather
    /// than ordinary (level 1).
    pub priority_chance: f64,
    /// Probability that an item is pair-carry weight.
    pub pair_chance: f64,
    /// Probability that an item is triple-carry weight.
    pub triple_chance: f64,
}

/// Produces a deterministic stream of mail: same seed, same arrivals.
///
/// Per-tick arrival counts follow a Poisson distribution; weights are drawn
/// from a configured mix across the three carry classes; priority mail
/// carries level 10 or 100.
pub struct RandomMailGenerator {
    config: GeneratorConfig,
    rng: SimRng,
    next_id: u32,
}

impl RandomMailGenerator {
    pub fn new(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: SimRng::new(seed),
            next_id: 0,
        }
    }

    /// Items produced so far.
    pub fn produced(&self) -> usize {
        self.next_id as usize
    }

    fn make_item(&mut self, tick: Tick) -> MailItem {
        let id = MailId(self.next_id);
        self.next_id += 1;

        let weight = self.sample_weight();
        let destination = self.rng.gen_range(1..self.config.floors.max(2));
        let priority = self.sample_priority();

        MailItem::with_priority(id, weight, destination, priority, tick)
    }

    fn sample_weight(&mut self) -> u32 {
        let roll: f64 = self.rng.random();
        if roll < self.config.triple_chance {
            self.rng.gen_range(PAIR_MAX_WEIGHT + 1..=TRIPLE_MAX_WEIGHT)
        } else if roll < self.config.triple_chance + self.config.pair_chance {
            self.rng.gen_range(SINGLE_MAX_WEIGHT + 1..=PAIR_MAX_WEIGHT)
        } else {
            self.rng.gen_range(200..=SINGLE_MAX_WEIGHT)
        }
    }

    fn sample_priority(&mut self) -> u32 {
        if self.rng.gen_bool(self.config.priority_chance) {
            if self.rng.gen_bool(0.5) { 10 } else { 100 }
        } else {
            MailItem::ORDINARY_PRIORITY
        }
    }
}

impl MailSource for RandomMailGenerator {
    fn take_arrivals(&mut self, tick: Tick) -> Vec<MailItem> {
        let remaining = self.config.total_items - self.produced();
        if remaining == 0 {
            return vec![];
        }
        let count = poisson(&mut self.rng, self.config.lambda).min(remaining);
        (0..count).map(|_| self.make_item(tick)).collect()
    }

    fn is_exhausted(&self) -> bool {
        self.produced() >= self.config.total_items
    }
}

/// Knuth's Poisson sampler: multiply uniforms until the product drops below
/// e^-λ.  Fine for the small λ values mail arrival uses.
fn poisson(rng: &mut SimRng, lambda: f64) -> usize {
    let threshold = (-lambda).exp();
    let mut count = 0;
    let mut product: f64 = rng.random();
    while product > threshold {
        count += 1;
        product *= rng.random::<f64>();
    }
    count
}
