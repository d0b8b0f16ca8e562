//! The `MailSource` trait — where arriving mail comes from.

use mb_core::{MailItem, Tick};

/// Produces the mail arriving at the building each tick.
///
/// The driver drains the source once per tick, before the scheduler's
/// matching pass, and keeps running until the source reports exhaustion and
/// all produced items are delivered.
pub trait MailSource {
    /// All items arriving at `tick`.  Called exactly once per tick, with
    /// strictly increasing ticks.
    fn take_arrivals(&mut self, tick: Tick) -> Vec<MailItem>;

    /// `true` once the source will never produce another item.  Used by the
    /// driver's run-completion check.
    fn is_exhausted(&self) -> bool;
}

/// A source that never produces mail.  Useful for drills and for tests that
/// insert items out of band.
pub struct NoArrivals;

impl MailSource for NoArrivals {
    fn take_arrivals(&mut self, _tick: Tick) -> Vec<MailItem> {
        vec![]
    }

    fn is_exhausted(&self) -> bool {
        true
    }
}
