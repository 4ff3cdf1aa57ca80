#![no_main]
use std::collections::BTreeSet;

use libfuzzer_sys::{arbitrary::Unstructured, fuzz_target};
use probe_table::{
    arbitrary::{arb_config, arb_ops, Op},
    Probing, ProbingHashTable, SlotState, TableError,
};

fuzz_target!(|bytes: &[u8]| {
    let mut u = Unstructured::new(bytes);
    if let (Ok(config), Ok(ops)) = (arb_config(&mut u), arb_ops(&mut u)) {
        let mut m = ProbingHashTable::with_config(config);
        let mut model = BTreeSet::new();
        for op in ops {
            match op {
                Op::Insert(x) => match m.insert(x) {
                    Ok(_) => assert!(model.insert(x)),
                    Err(TableError::DuplicateKey) => assert!(model.contains(&x)),
                    Err(TableError::TableFull) => {
                        assert!(!model.contains(&x));
                        if config.probing() == Probing::Linear {
                            assert_eq!(model.len(), config.table_size().get());
                        }
                    }
                    Err(e) => panic!("unexpected {:?}", e),
                },
                Op::Remove(x) => assert_eq!(m.remove(&x).ok(), model.take(&x)),
                Op::Find(x) => assert_eq!(m.find(&x).ok(), model.get(&x)),
                Op::Clear => {
                    m.clear();
                    model.clear();
                }
                Op::Compact => {
                    m.compact();
                    assert_eq!(m.iter().copied().collect::<BTreeSet<_>>(), model);
                    if config.probing() == Probing::Linear {
                        assert!(!m.status().slots.contains(&SlotState::Tombstone));
                    }
                }
            }
            assert!(m.invariants());
            assert_eq!(m.len(), model.len());
        }
    }
});
