use arbitrary::{Arbitrary, Unstructured};

use crate::TableConfig;

const MAX_SIZE: usize = 64;
const MAX_DIGITS: usize = 8;

#[derive(Arbitrary, Clone, Debug)]
pub enum Op {
    Insert(u16),
    Remove(u16),
    Find(u16),
    Clear,
    Compact,
}

pub fn arb_config(u: &mut Unstructured<'_>) -> arbitrary::Result<TableConfig> {
    let table_size = u.int_in_range(1..=MAX_SIZE)?;
    let hash_digits = u.int_in_range(1..=MAX_DIGITS)?;
    let config = TableConfig::new(table_size, hash_digits, u.arbitrary()?)
        .map_err(|_| arbitrary::Error::IncorrectFormat)?;
    Ok(config.with_hash(u.arbitrary()?))
}

pub fn arb_ops(u: &mut Unstructured<'_>) -> arbitrary::Result<Vec<Op>> {
    let mut ops = Vec::new();
    for _ in 0..u.int_in_range(0..=1_000)? {
        ops.push(u.arbitrary()?);
    }
    Ok(ops)
}
