//! CSV-scripted arrivals.
//!
//! # CSV format
//!
//! One row per item, in arrival order:
//!
//! ```csv
//! tick,weight,destination,priority
//! 0,1500,5,1
//! 0,2800,3,10
//! 4,700,8,1
//! ```
//!
//! `MailId`s are assigned from row order, so two items arriving on the same
//! tick keep their file order as their arrival order.  Rows need not be
//! sorted by tick; the manifest buckets them.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use mb_core::{MailId, MailItem, Tick};

use crate::{GenError, GenResult, MailSource};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ManifestRecord {
    tick: u64,
    weight: u32,
    destination: u32,
    priority: u32,
}

// ── ManifestSource ────────────────────────────────────────────────────────────

/// Replays a fixed arrival script, bucketed by tick.
///
/// Backed by a `BTreeMap<Tick, Vec<MailItem>>` drained one tick at a time —
/// the driver only pays for ticks that actually have arrivals.
pub struct ManifestSource {
    by_tick: BTreeMap<Tick, Vec<MailItem>>,
    remaining: usize,
}

impl ManifestSource {
    /// Load a manifest CSV from `path`.
    pub fn from_path(path: &Path) -> GenResult<Self> {
        let file = std::fs::File::open(path).map_err(GenError::Io)?;
        Self::from_reader(file)
    }

    /// Like [`from_path`][Self::from_path] but accepts any `Read` source —
    /// tests pass a `std::io::Cursor` over an inline CSV string.
    pub fn from_reader<R: Read>(reader: R) -> GenResult<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut rows = Vec::new();
        for result in csv_reader.deserialize::<ManifestRecord>() {
            let row = result.map_err(|e| GenError::Parse(e.to_string()))?;
            rows.push((Tick(row.tick), row.weight, row.destination, row.priority));
        }
        Ok(Self::from_entries(rows))
    }

    /// Build a manifest from in-memory `(tick, weight, destination, priority)`
    /// entries.  Entry order is arrival order.
    pub fn from_entries(entries: Vec<(Tick, u32, u32, u32)>) -> Self {
        let mut by_tick: BTreeMap<Tick, Vec<MailItem>> = BTreeMap::new();
        let mut remaining = 0;
        for (seq, (tick, weight, destination, priority)) in entries.into_iter().enumerate() {
            let item =
                MailItem::with_priority(MailId(seq as u32), weight, destination, priority, tick);
            by_tick.entry(tick).or_default().push(item);
            remaining += 1;
        }
        Self { by_tick, remaining }
    }

    /// Items not yet released to the driver.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl MailSource for ManifestSource {
    fn take_arrivals(&mut self, tick: Tick) -> Vec<MailItem> {
        match self.by_tick.remove(&tick) {
            None => vec![],
            Some(items) => {
                self.remaining -= items.len();
                items
            }
        }
    }

    fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}
