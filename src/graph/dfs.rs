//! Depth-first linearization of an adjacency list.

use rand::Rng;

use crate::error::{ArrangeError, Result};

/// Undirected graph as one neighbor list per node.
pub type AdjacencyList = Vec<Vec<usize>>;

/// Visits every node reachable from a random start node, depth first.
///
/// Uses an explicit stack: a node's neighbors are pushed in list order,
/// so the last-listed unvisited neighbor is explored first. Each node
/// appears at most once in the output. Nodes unreachable from the start
/// node are not visited.
///
/// Fails with [`ArrangeError::Validation`] if `graph` has no nodes or a
/// neighbor index is out of range.
pub fn dfs<R: Rng + ?Sized>(graph: &[Vec<usize>], rng: &mut R) -> Result<Vec<usize>> {
    let n = graph.len();
    if n == 0 {
        return Err(ArrangeError::validation("cannot traverse an empty graph"));
    }
    if let Some((node, &bad)) = graph
        .iter()
        .enumerate()
        .find_map(|(node, adj)| adj.iter().find(|&&v| v >= n).map(|v| (node, v)))
    {
        return Err(ArrangeError::validation(format!(
            "node {node} lists neighbor {bad}, but the graph has {n} nodes"
        )));
    }

    let start = rng.random_range(0..n);
    let mut order = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        if visited[node] {
            continue;
        }
        visited[node] = true;
        order.push(node);
        stack.extend(graph[node].iter().copied().filter(|&v| !visited[v]));
    }
    Ok(order)
}
