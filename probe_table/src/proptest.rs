use proptest::{collection::btree_set, prelude::*};
use std::collections::BTreeSet;

use crate::{HashKind, Probing, TableConfig};

pub(crate) const MAX_SIZE: usize = 20;

#[derive(Clone, Debug)]
pub(crate) enum Op {
    Insert(u16),
    Remove(u16),
    Find(u16),
}

pub(crate) fn arb_probing() -> impl Strategy<Value = Probing> {
    prop_oneof![Just(Probing::Linear), Just(Probing::Quadratic)]
}

pub(crate) fn arb_hash() -> impl Strategy<Value = HashKind> {
    prop_oneof![Just(HashKind::CharSum), Just(HashKind::Mixed)]
}

pub(crate) fn arb_config() -> impl Strategy<Value = TableConfig> {
    (1..MAX_SIZE, 1..8usize, arb_probing(), arb_hash()).prop_map(
        |(table_size, hash_digits, probing, hash)| {
            TableConfig::new(table_size, hash_digits, probing)
                .unwrap()
                .with_hash(hash)
        },
    )
}

// a config together with at most `table_size` distinct elements
pub(crate) fn arb_fitting_elements(
    probing: Probing,
) -> impl Strategy<Value = (TableConfig, BTreeSet<u16>)> {
    (1..MAX_SIZE, 1..8usize, arb_hash()).prop_flat_map(move |(table_size, hash_digits, hash)| {
        let config = TableConfig::new(table_size, hash_digits, probing)
            .unwrap()
            .with_hash(hash);
        (Just(config), btree_set(any::<u16>(), 0..=table_size))
    })
}

// small key range so that removes and duplicate inserts actually hit
pub(crate) fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    let key = 0..64u16;
    proptest::collection::vec(
        prop_oneof![
            key.clone().prop_map(Op::Insert),
            key.clone().prop_map(Op::Remove),
            key.prop_map(Op::Find),
        ],
        0..200,
    )
}
