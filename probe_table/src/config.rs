use std::num::NonZeroUsize;

use crate::TableError;

pub const DEFAULT_TABLE_SIZE: usize = 10;
pub const DEFAULT_HASH_DIGITS: usize = 6;

/// Collision resolution used when the home bucket is taken.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Probing {
    /// `(start + attempt) mod table_size`
    #[default]
    Linear,
    /// `(start + attempt^2) mod table_size`. Over a table whose size is not prime the
    /// sequence may revisit slots, so a free slot can exist and still be missed.
    Quadratic,
}

/// How the leading characters of an element's string form become a bucket.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HashKind {
    /// Sum of character codes. Ignores character order, so anagrams always collide.
    #[default]
    CharSum,
    /// Multiplicative fold over the same characters, sensitive to their order.
    Mixed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableConfig {
    pub(crate) table_size: NonZeroUsize,
    pub(crate) hash_digits: NonZeroUsize,
    pub(crate) probing: Probing,
    pub(crate) hash: HashKind,
}

impl TableConfig {
    pub fn new(table_size: usize, hash_digits: usize, probing: Probing) -> Result<Self, TableError> {
        Ok(Self {
            table_size: NonZeroUsize::new(table_size).ok_or(TableError::ZeroTableSize)?,
            hash_digits: NonZeroUsize::new(hash_digits).ok_or(TableError::ZeroHashDigits)?,
            probing,
            hash: HashKind::default(),
        })
    }
    pub fn with_hash(mut self, hash: HashKind) -> Self {
        self.hash = hash;
        self
    }
    pub fn with_probing(mut self, probing: Probing) -> Self {
        self.probing = probing;
        self
    }
    pub fn table_size(&self) -> NonZeroUsize {
        self.table_size
    }
    pub fn hash_digits(&self) -> NonZeroUsize {
        self.hash_digits
    }
    pub fn probing(&self) -> Probing {
        self.probing
    }
    pub fn hash(&self) -> HashKind {
        self.hash
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            table_size: NonZeroUsize::new(DEFAULT_TABLE_SIZE).unwrap(),
            hash_digits: NonZeroUsize::new(DEFAULT_HASH_DIGITS).unwrap(),
            probing: Probing::Linear,
            hash: HashKind::CharSum,
        }
    }
}
