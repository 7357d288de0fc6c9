//! In-memory hazard report store with a time-boxed undo window.
//!
//! The store is the single owner of the report collection. Readers take
//! [`ReportStore::snapshot`] copies, never a live handle, so a routing
//! request that is mid-scoring can never observe a partial mutation.

use crate::models::{Coordinate, HazardCategory, HazardReport};
use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

/// Only the most recent creation is ever undoable.
#[derive(Debug, Clone, Copy)]
struct UndoSlot {
    report_id: i64,
    expires_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct StoreInner {
    reports: Vec<HazardReport>,
    last_id: i64,
    undo: Option<UndoSlot>,
}

/// Thread-safe owner of the hazard report collection.
pub struct ReportStore {
    undo_window: Duration,
    inner: Mutex<StoreInner>,
}

impl Default for ReportStore {
    fn default() -> Self {
        Self::new(3)
    }
}

impl ReportStore {
    /// Create a store whose reports stay undoable for `undo_window_secs`
    /// after creation.
    pub fn new(undo_window_secs: u64) -> Self {
        Self {
            undo_window: Duration::seconds(undo_window_secs as i64),
            inner: Mutex::new(StoreInner::default()),
        }
    }

    /// Append a new report owned by the current user.
    ///
    /// The report id is derived from the creation timestamp (milliseconds)
    /// and bumped past the previous id when two creations land on the same
    /// millisecond, so ids never collide within one process. Creating a
    /// report arms the undo slot, displacing any previous pending undo.
    pub fn create(
        &self,
        location: Coordinate,
        category: HazardCategory,
        note: impl Into<String>,
    ) -> HazardReport {
        let now = Utc::now();
        let mut inner = self.inner.lock().expect("report store mutex poisoned");

        let id = now.timestamp_millis().max(inner.last_id + 1);
        inner.last_id = id;

        let report = HazardReport {
            id,
            location,
            category,
            note: note.into(),
            owned_by_current_user: true,
            created_at: now,
        };
        inner.reports.push(report.clone());
        inner.undo = Some(UndoSlot {
            report_id: id,
            expires_at: now + self.undo_window,
        });

        report
    }

    /// Revert the most recent creation, if its undo window is still open.
    ///
    /// Returns `true` when a report was removed. Calling with no pending
    /// undo, or after the window expired, is a no-op returning `false`.
    pub fn undo_last(&self) -> bool {
        let mut inner = self.inner.lock().expect("report store mutex poisoned");
        let Some(slot) = inner.undo.take() else {
            return false;
        };
        if Utc::now() >= slot.expires_at {
            return false;
        }

        let before = inner.reports.len();
        inner.reports.retain(|report| report.id != slot.report_id);
        inner.reports.len() < before
    }

    /// Remove a report by id, regardless of ownership or undo state.
    ///
    /// Returns `true` when a report was removed; deleting an unknown id is
    /// a no-op. Deleting the pending-undo report clears the undo slot.
    pub fn delete(&self, id: i64) -> bool {
        let mut inner = self.inner.lock().expect("report store mutex poisoned");
        if inner.undo.is_some_and(|slot| slot.report_id == id) {
            inner.undo = None;
        }

        let before = inner.reports.len();
        inner.reports.retain(|report| report.id != id);
        inner.reports.len() < before
    }

    /// Consistent copy of the collection for scoring.
    pub fn snapshot(&self) -> Vec<HazardReport> {
        self.inner
            .lock()
            .expect("report store mutex poisoned")
            .reports
            .clone()
    }

    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .expect("report store mutex poisoned")
            .reports
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
