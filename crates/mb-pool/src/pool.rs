//! `MailPool` — three ordered queues, one per carry class.

use mb_core::{CarryClass, MailItem};

use crate::{PoolError, PoolResult};

/// Pooled mail awaiting dispatch, bucketed by carry class.
///
/// Each queue is a `Vec<MailItem>` kept in ascending [`rank`] order, front at
/// index 0.  Queues at this scale hold tens of items, so ordered `Vec`
/// insertion beats a heap: `peek` is a slice index, iteration is in service
/// order, and removal at an arbitrary position (needed when the scheduler
/// pulls a secondary item) is a plain `Vec::remove`.
///
/// [`rank`]: MailItem::rank
#[derive(Default)]
pub struct MailPool {
    queues: [Vec<MailItem>; 3],
}

impl MailPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify `item` by weight and insert it into its class queue at the
    /// position its rank dictates.
    ///
    /// Items above the triple-carry ceiling are rejected with
    /// [`PoolError::Overweight`]; the pool is left untouched.
    pub fn insert(&mut self, item: MailItem) -> PoolResult<()> {
        let class = item
            .carry_class()
            .ok_or(PoolError::Overweight { id: item.id, weight: item.weight })?;

        let queue = &mut self.queues[class.index()];
        // MailId makes ranks strictly unique, so <= vs < is moot — but <=
        // keeps the insert stable even if a duplicate id ever slipped in.
        let pos = queue.partition_point(|queued| queued.rank() <= item.rank());
        queue.insert(pos, item);
        Ok(())
    }

    /// The best-ranked item of `class`, if any.
    #[inline]
    pub fn peek_front(&self, class: CarryClass) -> Option<&MailItem> {
        self.queues[class.index()].first()
    }

    /// The best-ranked item of every class, indexed by `CarryClass::index`.
    ///
    /// The scheduler compares these three heads to pick the globally best
    /// candidate.
    pub fn heads(&self) -> [Option<&MailItem>; 3] {
        [
            self.peek_front(CarryClass::Single),
            self.peek_front(CarryClass::Pair),
            self.peek_front(CarryClass::Triple),
        ]
    }

    /// Remove and return the best-ranked item of `class`.
    #[inline]
    pub fn pop_front(&mut self, class: CarryClass) -> Option<MailItem> {
        self.remove_at(class, 0)
    }

    /// Remove and return the item at `pos` within `class`'s queue.
    ///
    /// Returns `None` if `pos` is out of bounds.
    pub fn remove_at(&mut self, class: CarryClass, pos: usize) -> Option<MailItem> {
        let queue = &mut self.queues[class.index()];
        if pos < queue.len() { Some(queue.remove(pos)) } else { None }
    }

    /// Number of items queued in `class`.
    #[inline]
    pub fn class_len(&self, class: CarryClass) -> usize {
        self.queues[class.index()].len()
    }

    /// Total items queued across all classes.
    pub fn len(&self) -> usize {
        self.queues.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.queues.iter().all(Vec::is_empty)
    }

    /// Iterate `class`'s queue in service order (for observers and tests).
    pub fn iter_class(&self, class: CarryClass) -> impl Iterator<Item = &MailItem> {
        self.queues[class.index()].iter()
    }
}
