//! Unit tests for mb-report.

use mb_core::{MailId, MailItem, SimConfig, Tick};
use mb_gen::ManifestSource;
use mb_sim::{SimBuilder, SimObserver};

use crate::{CsvDeliveryLog, DeliveryStats};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn item(id: u32, weight: u32, dest: u32, priority: u32, arrival: u64) -> MailItem {
    MailItem::with_priority(MailId(id), weight, dest, priority, Tick(arrival))
}

fn config() -> SimConfig {
    SimConfig {
        floors: 10,
        depot_floor: 0,
        robot_count: 3,
        total_ticks: 1_000,
        seed: 42,
        team_stride: 3,
    }
}

// ── DeliveryStats ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod stats {
    use super::*;

    #[test]
    fn accumulates_latency_and_team_counts() {
        let mut stats = DeliveryStats::new();
        stats.on_delivery(Tick(10), &item(0, 500, 5, 1, 0), 1);
        stats.on_delivery(Tick(30), &item(1, 2_500, 3, 1, 10), 2);
        stats.on_sim_end(Tick(40));

        assert_eq!(stats.delivered(), 2);
        assert_eq!(stats.deliveries_by_team(1), 1);
        assert_eq!(stats.deliveries_by_team(2), 1);
        assert_eq!(stats.deliveries_by_team(3), 0);
        assert_eq!(stats.average_latency(), 15.0); // (10 + 20) / 2
        assert_eq!(stats.max_latency(), 20);
        assert_eq!(stats.final_tick(), Tick(40));
    }

    #[test]
    fn urgent_mail_dominates_the_weighted_score() {
        let mut ordinary = DeliveryStats::new();
        ordinary.on_delivery(Tick(10), &item(0, 500, 5, 1, 0), 1);

        let mut urgent = DeliveryStats::new();
        urgent.on_delivery(Tick(10), &item(0, 500, 5, 100, 0), 1);

        assert!(urgent.weighted_score() > ordinary.weighted_score() * 50.0);
    }

    #[test]
    fn empty_run_reports_zeroes() {
        let stats = DeliveryStats::new();
        assert_eq!(stats.delivered(), 0);
        assert_eq!(stats.average_latency(), 0.0);
    }

    #[test]
    fn collects_from_a_real_run() {
        let mut sim = SimBuilder::new(
            config(),
            ManifestSource::from_entries(vec![
                (Tick(0), 1_500, 5, 1),
                (Tick(0), 3_500, 2, 1), // overweight, rejected
            ]),
        )
        .build()
        .unwrap();

        let mut stats = DeliveryStats::new();
        sim.run(&mut stats).unwrap();

        assert_eq!(stats.delivered(), 1);
        assert_eq!(stats.rejected(), 1);
        assert!(stats.max_latency() > 0);
        let summary = stats.to_string();
        assert!(summary.contains("Delivered 1 items"));
        assert!(summary.contains("rejected as overweight: 1"));
    }
}

// ── CsvDeliveryLog ────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_log {
    use super::*;

    #[test]
    fn writes_header_and_one_row_per_delivery() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deliveries.csv");

        let mut log = CsvDeliveryLog::new(&path).unwrap();
        log.on_delivery(Tick(7), &item(0, 1_500, 5, 1, 0), 1);
        log.on_delivery(Tick(32), &item(2, 2_800, 3, 10, 4), 3);
        log.on_sim_end(Tick(40));
        assert!(log.take_error().is_none());

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "mail_id,arrival_tick,delivered_tick,weight,destination_floor,priority,team_size"
        );
        assert_eq!(lines[1], "0,0,7,1500,5,1,1");
        assert_eq!(lines[2], "2,4,32,2800,3,10,3");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = CsvDeliveryLog::new(&dir.path().join("log.csv")).unwrap();
        log.finish().unwrap();
        log.finish().unwrap();
    }

    #[test]
    fn logs_a_real_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.csv");

        let mut sim = SimBuilder::new(
            config(),
            ManifestSource::from_entries(vec![(Tick(0), 900, 4, 1)]),
        )
        .build()
        .unwrap();
        let mut log = CsvDeliveryLog::new(&path).unwrap();
        sim.run(&mut log).unwrap();
        assert!(log.take_error().is_none());

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2); // header + one delivery
    }
}
