//! Affinity data model.
//!
//! - [`AffinityMatrix`]: validated symmetric N×N scores in `0..=100`
//! - [`SortedNeighbors`]: per-item neighbor lists ordered by affinity
//! - [`Instance`]: plain-text instance format with an optional known optimum

mod instance;
mod neighbors;
mod types;

pub use instance::Instance;
pub use neighbors::{Neighbor, SortedNeighbors};
pub use types::{AffinityMatrix, MAX_AFFINITY, NO_AFFINITY};
