//! Helpers over label arrays.
//!
//! Any negative label counts as noise. Non-negative ids need not be dense:
//! groups are built from the ids actually present, in ascending id order. For
//! labels produced by [`Dbscan`](super::Dbscan) (ids `0..K` plus
//! [`NOISE`](super::NOISE)) entry `k` of [`cluster_members`] is cluster `k`.

use std::collections::BTreeMap;

use super::Label;

/// Group point indices by cluster id.
///
/// Each group lists its members in input order; groups are ordered by id.
/// Noise points are left out; see [`noise_indices`].
pub fn cluster_members(labels: &[Label]) -> Vec<Vec<usize>> {
    let mut groups: BTreeMap<Label, Vec<usize>> = BTreeMap::new();
    for (idx, &label) in labels.iter().enumerate() {
        if label >= 0 {
            groups.entry(label).or_default().push(idx);
        }
    }
    groups.into_values().collect()
}

/// Indices with a noise (negative) label, in input order.
pub fn noise_indices(labels: &[Label]) -> Vec<usize> {
    labels
        .iter()
        .enumerate()
        .filter(|&(_, &l)| l < 0)
        .map(|(idx, _)| idx)
        .collect()
}

/// Number of distinct cluster ids.
pub fn count_clusters(labels: &[Label]) -> usize {
    let mut ids: Vec<Label> = labels.iter().copied().filter(|&l| l >= 0).collect();
    ids.sort_unstable();
    ids.dedup();
    ids.len()
}
