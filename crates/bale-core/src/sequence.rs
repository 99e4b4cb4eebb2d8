//! Ordered release of updates for dispatch loops.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::{domain::UpdateId, update::Update};

/// Buffers updates arriving in any order and releases them in ascending
/// `update_id`.
///
/// Duplicates of buffered updates and ids at or below the last released one
/// are dropped, so a dispatch loop draining this never sees an id twice and
/// never sees one go backwards.
#[derive(Debug, Default)]
pub struct UpdateSequencer {
    pending: BinaryHeap<Reverse<Update>>,
    last_released: Option<UpdateId>,
}

impl UpdateSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer an update. Returns `false` when it was dropped as a duplicate
    /// or as already released.
    pub fn push(&mut self, update: Update) -> bool {
        if let Some(last) = self.last_released {
            if update.update_id <= last {
                return false;
            }
        }
        if self
            .pending
            .iter()
            .any(|Reverse(pending)| pending.update_id == update.update_id)
        {
            return false;
        }
        self.pending.push(Reverse(update));
        true
    }

    /// Release the lowest-id buffered update.
    pub fn pop(&mut self) -> Option<Update> {
        let Reverse(update) = self.pending.pop()?;
        self.last_released = Some(update.update_id);
        Some(update)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{payload::FromPayload, port::testing};

    fn update(id: i64) -> Update {
        Update::decode(Some(json!({"update_id": id})), &testing::noop())
            .unwrap()
            .unwrap()
    }

    #[test]
    fn releases_in_ascending_order() {
        let mut seq = UpdateSequencer::new();
        for id in [5, 2, 9, 4] {
            assert!(seq.push(update(id)));
        }
        assert_eq!(seq.len(), 4);

        let released: Vec<i64> = std::iter::from_fn(|| seq.pop())
            .map(|u| u.update_id.0)
            .collect();
        assert_eq!(released, [2, 4, 5, 9]);
        assert!(seq.is_empty());
    }

    #[test]
    fn drops_duplicates_and_released_ids() {
        let mut seq = UpdateSequencer::new();
        assert!(seq.push(update(3)));
        assert!(!seq.push(update(3)));

        assert_eq!(seq.pop().unwrap().update_id.0, 3);
        assert!(!seq.push(update(3)));
        assert!(!seq.push(update(2)));
        assert!(seq.push(update(4)));
    }
}
