//! Paired-field merge for the track and disk number/count compounds.

/// A compound numeric tag: position within a set plus the set size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pairing {
    pub index: u16,
    pub total: u16,
}

impl Pairing {
    pub fn new(index: u16, total: u16) -> Self {
        Self { index, total }
    }
}

/// Merge a partial request into the record's current pair.
///
/// Starts from `old` ({0,0} when the record has no pair) and overwrites only
/// the sub-fields the caller actually requested, so `--tracks 20` alone
/// keeps the existing track number. Callers skip the merge entirely when
/// neither sub-field was requested.
pub fn merge(old: Option<Pairing>, index: Option<u16>, total: Option<u16>) -> Pairing {
    let mut merged = old.unwrap_or_default();
    if let Some(index) = index {
        merged.index = index;
    }
    if let Some(total) = total {
        merged.total = total;
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_alone_keeps_the_old_index() {
        let merged = merge(Some(Pairing::new(3, 12)), None, Some(20));
        assert_eq!(merged, Pairing::new(3, 20));
    }

    #[test]
    fn index_alone_keeps_the_old_total() {
        let merged = merge(Some(Pairing::new(3, 12)), Some(7), None);
        assert_eq!(merged, Pairing::new(7, 12));
    }

    #[test]
    fn absent_pair_defaults_to_zero() {
        assert_eq!(merge(None, None, Some(9)), Pairing::new(0, 9));
        assert_eq!(merge(None, Some(2), None), Pairing::new(2, 0));
    }

    #[test]
    fn both_requested_overwrites_both() {
        let merged = merge(Some(Pairing::new(3, 12)), Some(1), Some(2));
        assert_eq!(merged, Pairing::new(1, 2));
    }
}
