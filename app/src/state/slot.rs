//! Current-shot slot — the one result a front end displays.
//!
//! Every shot request takes a number on arrival. A finished computation only
//! replaces the slot if its number is newer than the stored one, so the most
//! recently *requested* shot wins even when an older computation finishes
//! later.

use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use ballflight::ShotRecord;

pub struct ShotSlot {
    next_number: AtomicU64,
    current: RwLock<Option<ShotRecord>>,
}

impl ShotSlot {
    pub fn new() -> Self {
        Self {
            next_number: AtomicU64::new(1),
            current: RwLock::new(None),
        }
    }

    /// Reserve the shot number for a new request.
    pub fn next_shot_number(&self) -> u64 {
        self.next_number.fetch_add(1, Ordering::Relaxed)
    }

    /// Store `record` unless a newer shot is already in the slot.
    /// Returns whether the slot was replaced.
    pub fn offer(&self, record: ShotRecord) -> bool {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        match guard.as_ref() {
            Some(existing) if existing.shot_number > record.shot_number => false,
            _ => {
                *guard = Some(record);
                true
            }
        }
    }

    /// Clone the current record, if any shot has completed.
    pub fn snapshot(&self) -> Option<ShotRecord> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Default for ShotSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballflight::{FlightModel, ShotInputs};

    fn record(n: u64, speed: f64) -> ShotRecord {
        let inputs = ShotInputs {
            swing_speed_mph: speed,
            ..ShotInputs::default()
        };
        ShotRecord::compute(n, inputs, &FlightModel::default())
    }

    #[test]
    fn empty_until_first_shot() {
        let slot = ShotSlot::new();
        assert!(slot.snapshot().is_none());
        assert_eq!(slot.next_shot_number(), 1);
        assert_eq!(slot.next_shot_number(), 2);
    }

    #[test]
    fn newer_request_wins_regardless_of_finish_order() {
        let slot = ShotSlot::new();
        let older = slot.next_shot_number();
        let newer = slot.next_shot_number();

        assert!(slot.offer(record(newer, 90.0)));
        assert!(!slot.offer(record(older, 60.0)));
        let current = slot.snapshot().unwrap();
        assert_eq!(current.shot_number, newer);
        assert_eq!(current.inputs.swing_speed_mph, 90.0);
    }

    #[test]
    fn replacement_is_wholesale() {
        let slot = ShotSlot::new();
        slot.offer(record(1, 90.0));
        let first_len = slot.snapshot().unwrap().result.trajectory.len();
        slot.offer(record(2, 50.0));
        let second = slot.snapshot().unwrap();
        assert_eq!(second.shot_number, 2);
        assert_ne!(second.result.trajectory.len(), first_len);
        assert_eq!(second.result, record(2, 50.0).result);
    }
}
