use std::fmt;

use itertools::Itertools;

use crate::table::Slot;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotState {
    Empty,
    Tombstone,
    Occupied,
}

fn state_of<T>(slot: &Slot<T>) -> SlotState {
    match slot {
        Slot::Empty => SlotState::Empty,
        Slot::Tombstone => SlotState::Tombstone,
        Slot::Occupied(_) => SlotState::Occupied,
    }
}

/// Read-only snapshot of slot occupancy.
///
/// Runs of occupied slots are counted in index order and do not wrap around from the last
/// slot to the first. Tombstones break runs and count as empty bins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusReport {
    pub slots: Vec<SlotState>,
    pub longest_run: usize,
    // 0 when no slot is occupied
    pub shortest_run: usize,
    pub empty_bins: usize,
}

impl StatusReport {
    pub(crate) fn from_slots<T>(slots: &[Slot<T>]) -> Self {
        let slots: Vec<SlotState> = slots.iter().map(state_of).collect();
        let mut runs = Vec::new();
        for (occupied, run) in &slots.iter().group_by(|&&s| s == SlotState::Occupied) {
            if occupied {
                runs.push(run.count());
            }
        }
        let empty_bins = slots.iter().filter(|&&s| s != SlotState::Occupied).count();
        StatusReport {
            longest_run: runs.iter().copied().max().unwrap_or(0),
            shortest_run: runs.iter().copied().min().unwrap_or(0),
            empty_bins,
            slots,
        }
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.slots {
            let c = match s {
                SlotState::Empty => '.',
                SlotState::Tombstone => 'x',
                SlotState::Occupied => '#',
            };
            write!(f, "{}", c)?;
        }
        write!(
            f,
            " longest run: {}, shortest run: {}, empty bins: {}",
            self.longest_run, self.shortest_run, self.empty_bins
        )
    }
}
