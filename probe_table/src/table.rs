#[cfg(feature = "debug")]
use std::collections::BTreeMap;
use std::{cmp::Ordering, fmt::Display, mem, num::NonZeroUsize};

use crate::{
    hash::{bucket, probe_sequence},
    Probing, StatusReport, TableConfig, TableError,
};

#[derive(Clone, Debug)]
pub(crate) enum Slot<T> {
    Empty,
    // left behind by `remove` so that probe sequences running through it stay intact
    Tombstone,
    Occupied(T),
}

enum Search {
    Found(usize),
    // first reusable slot met before the probe sequence ended, if any
    Vacant(Option<usize>),
}

/// Fixed-capacity open-addressed hash table.
///
/// Elements are compared with [`Ord`] and hashed from the leading characters of their
/// [`Display`] rendering, see [`HashKind`](crate::HashKind). The table never grows: once no
/// free slot is reachable from an element's home bucket, insertion fails with
/// [`TableError::TableFull`].
#[derive(Clone, Debug)]
pub struct ProbingHashTable<T> {
    config: TableConfig,
    slots: Box<[Slot<T>]>,
    items: usize,
    #[cfg(feature = "debug")]
    pub probe_lengths: BTreeMap<usize, usize>,
}

fn empty_slots<T>(table_size: NonZeroUsize) -> Box<[Slot<T>]> {
    (0..table_size.get()).map(|_| Slot::Empty).collect()
}

impl<T> ProbingHashTable<T> {
    pub fn new() -> Self {
        Self::with_config(TableConfig::default())
    }
    pub fn with_strategy(probing: Probing) -> Self {
        Self::with_config(TableConfig::default().with_probing(probing))
    }
    pub fn with_config(config: TableConfig) -> Self {
        Self {
            config,
            slots: empty_slots(config.table_size),
            items: 0,
            #[cfg(feature = "debug")]
            probe_lengths: BTreeMap::new(),
        }
    }
    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn table_size(&self) -> NonZeroUsize {
        self.config.table_size
    }
    pub fn len(&self) -> usize {
        self.items
    }
    pub fn is_empty(&self) -> bool {
        self.items == 0
    }
    pub fn load_factor(&self) -> f64 {
        self.items as f64 / self.config.table_size.get() as f64
    }
    pub fn clear(&mut self) {
        self.slots.fill_with(|| Slot::Empty);
        self.items = 0;
    }
    // elements in slot order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied(t) => Some(t),
            _ => None,
        })
    }
    pub fn status(&self) -> StatusReport {
        StatusReport::from_slots(&self.slots)
    }
    #[cfg(feature = "debug")]
    fn record_probes(&mut self, probes: usize) {
        *self.probe_lengths.entry(probes).or_insert(0) += 1;
    }
}

impl<T: Ord + Display> ProbingHashTable<T> {
    pub fn bucket(&self, item: &T) -> usize {
        bucket(
            item,
            self.config.hash_digits,
            self.config.hash,
            self.config.table_size,
        )
    }

    fn search(&self, item: &T) -> (Search, usize) {
        let start = self.bucket(item);
        let mut free = None;
        let mut probes = 0;
        for (attempt, index) in
            probe_sequence(start, self.config.probing, self.config.table_size).enumerate()
        {
            probes = attempt;
            match &self.slots[index] {
                Slot::Occupied(t) if t.cmp(item) == Ordering::Equal => {
                    return (Search::Found(index), attempt)
                }
                Slot::Occupied(_) => {}
                Slot::Tombstone => {
                    free.get_or_insert(index);
                }
                Slot::Empty => return (Search::Vacant(free.or(Some(index))), attempt),
            }
        }
        (Search::Vacant(free), probes)
    }

    /// Stores `item` and returns the index of the slot it landed in.
    pub fn insert(&mut self, item: T) -> Result<usize, TableError> {
        let (search, _probes) = self.search(&item);
        #[cfg(feature = "debug")]
        self.record_probes(_probes);
        match search {
            Search::Found(_) => Err(TableError::DuplicateKey),
            Search::Vacant(None) => Err(TableError::TableFull),
            Search::Vacant(Some(index)) => {
                self.slots[index] = Slot::Occupied(item);
                self.items += 1;
                Ok(index)
            }
        }
    }

    pub fn find(&self, item: &T) -> Result<&T, TableError> {
        if let Search::Found(index) = self.search(item).0 {
            if let Slot::Occupied(t) = &self.slots[index] {
                return Ok(t);
            }
        }
        Err(TableError::NotFound)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_ok()
    }

    // index of the slot holding an element equal to `item`
    pub fn slot_of(&self, item: &T) -> Result<usize, TableError> {
        match self.search(item).0 {
            Search::Found(index) => Ok(index),
            Search::Vacant(_) => Err(TableError::NotFound),
        }
    }

    pub fn remove(&mut self, item: &T) -> Result<T, TableError> {
        let (search, _probes) = self.search(item);
        #[cfg(feature = "debug")]
        self.record_probes(_probes);
        let index = match search {
            Search::Found(index) => index,
            Search::Vacant(_) => return Err(TableError::NotFound),
        };
        match mem::replace(&mut self.slots[index], Slot::Tombstone) {
            Slot::Occupied(removed) => {
                self.items -= 1;
                if self.items == 0 {
                    // nothing left to reach, so every tombstone can go
                    self.clear();
                }
                Ok(removed)
            }
            other => {
                self.slots[index] = other;
                Err(TableError::NotFound)
            }
        }
    }

    /// Gets rid of tombstones, keeping every element.
    ///
    /// Elements are first re-placed in slot order into an empty array. Under quadratic
    /// probing an element taken early can claim the only slot a later one could reach; the
    /// layout is then kept as is and only the tombstones that no element's probe path runs
    /// through are emptied.
    pub fn compact(&mut self) {
        match self.rebuild_plan() {
            Some(plan) => {
                let mut old = mem::replace(&mut self.slots, empty_slots(self.config.table_size));
                for (to, from) in plan.into_iter().enumerate() {
                    if let Some(from) = from {
                        self.slots[to] = mem::replace(&mut old[from], Slot::Empty);
                    }
                }
            }
            None => self.drop_unused_tombstones(),
        }
    }

    // plan[to] = Some(from): the element in slot `from` moves to slot `to`
    fn rebuild_plan(&self) -> Option<Vec<Option<usize>>> {
        let table_size = self.config.table_size;
        let mut plan: Vec<Option<usize>> = vec![None; table_size.get()];
        for (from, slot) in self.slots.iter().enumerate() {
            if let Slot::Occupied(t) = slot {
                let to = probe_sequence(self.bucket(t), self.config.probing, table_size)
                    .find(|&j| plan[j].is_none())?;
                plan[to] = Some(from);
            }
        }
        Some(plan)
    }

    fn drop_unused_tombstones(&mut self) {
        let mut on_path = vec![false; self.config.table_size.get()];
        for (index, slot) in self.slots.iter().enumerate() {
            if let Slot::Occupied(t) = slot {
                for j in probe_sequence(self.bucket(t), self.config.probing, self.config.table_size)
                    .take_while(|&j| j != index)
                {
                    on_path[j] = true;
                }
            }
        }
        for (slot, on_path) in self.slots.iter_mut().zip(on_path) {
            if !on_path && matches!(slot, Slot::Tombstone) {
                *slot = Slot::Empty;
            }
        }
    }

    pub fn invariants(&self) -> bool {
        self.invariant1() && self.invariant2() && self.invariant3()
    }

    // `items` counts the occupied slots
    fn invariant1(&self) -> bool {
        self.iter().count() == self.items
    }

    // no two equal elements
    fn invariant2(&self) -> bool {
        let mut elements: Vec<&T> = self.iter().collect();
        elements.sort();
        elements.windows(2).all(|w| w[0].cmp(w[1]) != Ordering::Equal)
    }

    // every element is reached from its home bucket before any empty slot
    fn invariant3(&self) -> bool {
        self.slots.iter().enumerate().all(|(index, slot)| match slot {
            Slot::Occupied(t) => {
                probe_sequence(self.bucket(t), self.config.probing, self.config.table_size)
                    .find(|&j| j == index || matches!(self.slots[j], Slot::Empty))
                    == Some(index)
            }
            _ => true,
        })
    }
}

impl<T> Default for ProbingHashTable<T> {
    fn default() -> Self {
        ProbingHashTable::new()
    }
}
