//! Unit tests for mb-gen.

use std::io::Cursor;

use mb_core::item::TRIPLE_MAX_WEIGHT;
use mb_core::{MailId, MailItem, Tick};

use crate::{GeneratorConfig, MailSource, ManifestSource, NoArrivals, RandomMailGenerator};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(total: usize) -> GeneratorConfig {
    GeneratorConfig {
        total_items: total,
        lambda: 1.5,
        floors: 10,
        priority_chance: 0.2,
        pair_chance: 0.1,
        triple_chance: 0.05,
    }
}

fn drain(source: &mut impl MailSource, ticks: u64) -> Vec<MailItem> {
    let mut items = Vec::new();
    for t in 0..ticks {
        items.extend(source.take_arrivals(Tick(t)));
    }
    items
}

// ── RandomMailGenerator ───────────────────────────────────────────────────────

#[cfg(test)]
mod generator {
    use super::*;

    #[test]
    fn same_seed_same_arrivals() {
        let mut a = RandomMailGenerator::new(config(50), 42);
        let mut b = RandomMailGenerator::new(config(50), 42);
        assert_eq!(drain(&mut a, 200), drain(&mut b, 200));
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = RandomMailGenerator::new(config(50), 1);
        let mut b = RandomMailGenerator::new(config(50), 2);
        assert_ne!(drain(&mut a, 200), drain(&mut b, 200));
    }

    #[test]
    fn produces_exactly_total_items_then_exhausts() {
        let mut g = RandomMailGenerator::new(config(25), 7);
        let items = drain(&mut g, 10_000);
        assert_eq!(items.len(), 25);
        assert!(g.is_exhausted());
        assert!(g.take_arrivals(Tick(10_000)).is_empty());
    }

    #[test]
    fn every_item_is_carriable_and_addressed_above_the_depot() {
        let mut g = RandomMailGenerator::new(config(100), 3);
        for item in drain(&mut g, 10_000) {
            assert!(item.weight <= TRIPLE_MAX_WEIGHT);
            assert!(item.carry_class().is_some());
            assert!((1..10).contains(&item.destination));
        }
    }

    #[test]
    fn ids_are_sequential_arrival_order() {
        let mut g = RandomMailGenerator::new(config(30), 11);
        let ids: Vec<u32> = drain(&mut g, 10_000).iter().map(|m| m.id.0).collect();
        assert_eq!(ids, (0..30).collect::<Vec<_>>());
    }

    #[test]
    fn priority_levels_are_1_10_or_100() {
        let mut g = RandomMailGenerator::new(
            GeneratorConfig { priority_chance: 0.9, ..config(100) },
            5,
        );
        let items = drain(&mut g, 10_000);
        assert!(items.iter().all(|m| matches!(m.priority, 1 | 10 | 100)));
        assert!(items.iter().any(|m| m.priority > 1));
    }
}

// ── ManifestSource ────────────────────────────────────────────────────────────

#[cfg(test)]
mod manifest {
    use super::*;

    const MANIFEST_CSV: &str = "\
tick,weight,destination,priority
0,1500,5,1
0,2800,3,10
4,700,8,1
2,600,2,1
";

    #[test]
    fn rows_are_bucketed_by_tick_in_file_order() {
        let mut m = ManifestSource::from_reader(Cursor::new(MANIFEST_CSV)).unwrap();
        assert_eq!(m.remaining(), 4);

        let t0 = m.take_arrivals(Tick(0));
        assert_eq!(t0.len(), 2);
        assert_eq!(t0[0].id, MailId(0));
        assert_eq!(t0[1].id, MailId(1));

        assert!(m.take_arrivals(Tick(1)).is_empty());
        assert_eq!(m.take_arrivals(Tick(2))[0].id, MailId(3));
        assert!(m.take_arrivals(Tick(3)).is_empty());
        assert_eq!(m.take_arrivals(Tick(4))[0].id, MailId(2));
        assert!(m.is_exhausted());
    }

    #[test]
    fn arrival_tick_is_recorded_on_each_item() {
        let mut m = ManifestSource::from_entries(vec![(Tick(3), 900, 4, 1)]);
        let items = m.take_arrivals(Tick(3));
        assert_eq!(items[0].arrival_tick, Tick(3));
    }

    #[test]
    fn malformed_rows_error_out() {
        let bad = "tick,weight,destination,priority\n0,heavy,5,1\n";
        assert!(ManifestSource::from_reader(Cursor::new(bad)).is_err());
    }

    #[test]
    fn empty_manifest_is_exhausted_immediately() {
        let m = ManifestSource::from_entries(vec![]);
        assert!(m.is_exhausted());
    }
}

// ── NoArrivals ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod no_arrivals {
    use super::*;

    #[test]
    fn never_produces_and_is_always_exhausted() {
        let mut s = NoArrivals;
        assert!(s.take_arrivals(Tick(0)).is_empty());
        assert!(s.is_exhausted());
    }
}
