use std::{fmt::Display, num::NonZeroUsize};

use crate::{HashKind, Probing};

const HASH_SCAL: usize = 107;

// only the first `digits` chars of the rendered element take part
pub(crate) fn bucket<T: Display + ?Sized>(
    item: &T,
    digits: NonZeroUsize,
    kind: HashKind,
    table_size: NonZeroUsize,
) -> usize {
    let rendered = item.to_string();
    let codes = rendered.chars().take(digits.get()).map(|c| c as usize);
    let hash = match kind {
        HashKind::CharSum => codes.fold(0usize, usize::wrapping_add),
        HashKind::Mixed => codes.fold(0usize, |h, c| h.wrapping_mul(HASH_SCAL).wrapping_add(c)),
    };
    hash % table_size
}

// attempt 0 is always the home bucket
#[inline]
pub(crate) fn probe(start: usize, attempt: usize, probing: Probing, table_size: NonZeroUsize) -> usize {
    let n = table_size.get() as u128;
    let step = match probing {
        Probing::Linear => attempt as u128,
        Probing::Quadratic => {
            let a = attempt as u128 % n;
            a * a
        }
    };
    ((start as u128 + step) % n) as usize
}

// at most `table_size` slots are examined per operation
pub(crate) fn probe_sequence(
    start: usize,
    probing: Probing,
    table_size: NonZeroUsize,
) -> impl Iterator<Item = usize> {
    (0..table_size.get()).map(move |attempt| probe(start, attempt, probing, table_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn char_sum_ignores_order() {
        let (d, n) = (size(6), size(97));
        assert_eq!(
            bucket("ab", d, HashKind::CharSum, n),
            bucket("ba", d, HashKind::CharSum, n)
        );
        assert_eq!(bucket("ab", d, HashKind::CharSum, n), (97 + 98) % 97);
    }

    #[test]
    fn mixed_depends_on_order() {
        let (d, n) = (size(6), size(97));
        assert_ne!(
            bucket("ab", d, HashKind::Mixed, n),
            bucket("ba", d, HashKind::Mixed, n)
        );
        assert_eq!(bucket("ab", d, HashKind::Mixed, n), (97 * 107 + 98) % 97);
        // only the first two chars count
        assert_eq!(
            bucket("abc", size(2), HashKind::Mixed, n),
            bucket("ab", size(2), HashKind::Mixed, n)
        );
    }

    #[test]
    fn short_strings_use_available_chars() {
        assert_eq!(bucket("A", size(6), HashKind::CharSum, size(1000)), 65);
        assert_eq!(bucket("", size(6), HashKind::CharSum, size(7)), 0);
    }

    #[test]
    fn digits_truncate() {
        assert_eq!(bucket(&12345, size(2), HashKind::CharSum, size(1000)), 49 + 50);
    }

    #[test]
    fn linear_wraps() {
        let seq: Vec<_> = probe_sequence(3, Probing::Linear, size(5)).collect();
        assert_eq!(seq, vec![3, 4, 0, 1, 2]);
    }

    #[test]
    fn quadratic_steps() {
        let seq: Vec<_> = probe_sequence(2, Probing::Quadratic, size(5)).collect();
        // 2, 2+1, 2+4, 2+9, 2+16
        assert_eq!(seq, vec![2, 3, 1, 1, 3]);
    }

    #[test]
    fn quadratic_no_overflow() {
        let n = size(usize::MAX);
        assert!(probe(usize::MAX - 1, usize::MAX - 1, Probing::Quadratic, n) < usize::MAX);
    }
}
