//! Shared subset-search primitive.
//!
//! Naked subsets, hidden subsets, and basic fish all reduce to the same
//! question over a keyed collection of small sets: find `size` keys whose
//! values stay within a `size`-element union. Callers choose the key space
//! (cell indices, digits, or line indices).

use sudori_core::BitSet9;

/// Finds groups of `size` keys whose combined values fit in the seed's
/// value set.
///
/// Every entry with 1..=`size` values is tried as a seed; keys after it in
/// the slice whose values are a subset of the accumulated union join the
/// group, and the scan for one seed stops as soon as the group is full.
/// Entries with empty or oversized value sets never participate.
pub(crate) fn find_key_groups(entries: &[(u8, BitSet9)], size: usize) -> Vec<Vec<u8>> {
    let mut groups = Vec::new();
    if entries.len() < size {
        return groups;
    }
    for (seed_index, &(seed_key, seed_values)) in entries[..entries.len() - 1].iter().enumerate() {
        if seed_values.is_empty() || usize::from(seed_values.len()) > size {
            continue;
        }
        let union = seed_values;
        let mut group = vec![seed_key];
        for &(other_key, other_values) in &entries[seed_index + 1..] {
            if other_values.is_empty() || usize::from(other_values.len()) > size {
                continue;
            }
            if !other_values.is_subset(union) {
                continue;
            }
            group.push(other_key);
            if group.len() == size {
                break;
            }
        }
        if group.len() == size {
            groups.push(group);
        }
    }
    groups
}

/// Returns the union of the value sets of the given keys.
pub(crate) fn union_of(entries: &[(u8, BitSet9)], keys: &[u8]) -> BitSet9 {
    entries
        .iter()
        .filter(|(key, _)| keys.contains(key))
        .fold(BitSet9::EMPTY, |union, &(_, values)| union | values)
}
