//! Maximum-weight spanning tree (Prim's algorithm, max-heap variant).

use std::collections::BinaryHeap;

use rand::Rng;

use super::dfs::AdjacencyList;
use crate::matrix::AffinityMatrix;

/// Builds a spanning tree of the complete affinity graph that maximizes
/// total edge affinity.
///
/// # Algorithm
///
/// 1. Start from a random node.
/// 2. Pop the highest-affinity frontier edge `(affinity, node, parent)`;
///    skip it if `node` is already in the tree.
/// 3. Otherwise add `node`, record the undirected edge to its parent (the
///    start node has none), and push an edge to every node not yet in
///    the tree.
/// 4. Stop when the frontier is empty.
///
/// The result has exactly `N - 1` undirected edges; each appears in the
/// lists of both endpoints. A single-item matrix yields one node with
/// no edges.
pub fn maximum_spanning_tree<R: Rng + ?Sized>(
    matrix: &AffinityMatrix,
    rng: &mut R,
) -> AdjacencyList {
    let n = matrix.len();
    let mut tree: AdjacencyList = vec![Vec::new(); n];
    let mut in_tree = vec![false; n];
    let mut frontier: BinaryHeap<(i32, usize, Option<usize>)> = BinaryHeap::new();

    frontier.push((0, rng.random_range(0..n), None));

    while let Some((_, node, parent)) = frontier.pop() {
        if in_tree[node] {
            continue;
        }
        in_tree[node] = true;
        if let Some(parent) = parent {
            tree[node].push(parent);
            tree[parent].push(node);
        }
        for next in 0..n {
            if next != node && !in_tree[next] {
                frontier.push((matrix.affinity(node, next), next, Some(node)));
            }
        }
    }
    tree
}
