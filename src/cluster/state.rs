use super::{Label, NOISE};

/// Per-point progress through a clustering run.
///
/// Transitions only move forward (`Unvisited -> Visited -> {Noise, Member}`),
/// except that a `Noise` point may later be absorbed as `Member` when a core
/// point of some cluster reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointState {
    /// Not yet reached.
    #[default]
    Unvisited,
    /// Reached, neighborhood not yet classified.
    Visited,
    /// Visited and not density-reachable so far.
    Noise,
    /// Assigned to a cluster.
    Member(usize),
}

impl PointState {
    /// Whether the point has reached a final classification.
    pub fn is_settled(self) -> bool {
        matches!(self, PointState::Noise | PointState::Member(_))
    }

    /// Public label: the cluster id, or [`NOISE`] for anything else.
    pub fn label(self) -> Label {
        match self {
            PointState::Member(id) => id as Label,
            _ => NOISE,
        }
    }
}
