//! CSV delivery log backend.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use mb_core::{MailItem, Tick};
use mb_sim::SimObserver;

use crate::{ReportError, ReportResult};

/// Writes one CSV row per drop-off.
///
/// `SimObserver` methods have no return value, so write errors are stored
/// internally — only the first one is kept.  After `sim.run()` returns,
/// check for it with [`take_error`][Self::take_error].
pub struct CsvDeliveryLog {
    writer: Writer<File>,
    last_error: Option<ReportError>,
    finished: bool,
}

impl CsvDeliveryLog {
    /// Open (or create) the log file at `path` and write the header row.
    pub fn new(path: &Path) -> ReportResult<Self> {
        let mut writer = Writer::from_path(path).map_err(ReportError::Csv)?;
        writer.write_record([
            "mail_id",
            "arrival_tick",
            "delivered_tick",
            "weight",
            "destination_floor",
            "priority",
            "team_size",
        ])?;
        Ok(Self {
            writer,
            last_error: None,
            finished: false,
        })
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<ReportError> {
        self.last_error.take()
    }

    /// Flush the underlying file.  Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    fn store_err(&mut self, result: ReportResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn write_delivery(&mut self, tick: Tick, item: &MailItem, team_size: usize) -> ReportResult<()> {
        self.writer.write_record(&[
            item.id.0.to_string(),
            item.arrival_tick.0.to_string(),
            tick.0.to_string(),
            item.weight.to_string(),
            item.destination.to_string(),
            item.priority.to_string(),
            team_size.to_string(),
        ])?;
        Ok(())
    }
}

impl SimObserver for CsvDeliveryLog {
    fn on_delivery(&mut self, tick: Tick, item: &MailItem, team_size: usize) {
        let result = self.write_delivery(tick, item, team_size);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.finish();
        self.store_err(result);
    }
}
