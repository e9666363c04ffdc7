#![allow(dead_code)]

use std::path::Path;

use u_arrange::matrix::{AffinityMatrix, Instance};

/// Best cycle cost by plain enumeration, independent of the crate's solvers.
pub fn brute_force_optimum(matrix: &AffinityMatrix) -> i64 {
    let n = matrix.len();
    if n <= 1 {
        return 0;
    }
    let mut order: Vec<usize> = (0..n).collect();
    let mut best = i64::MIN;
    permute(&mut order, 1, &mut |perm| {
        let total: i64 = (0..n)
            .map(|k| i64::from(matrix.affinity(perm[k], perm[(k + 1) % n])))
            .sum();
        best = best.max(total);
    });
    best
}

fn permute(order: &mut [usize], k: usize, visit: &mut dyn FnMut(&[usize])) {
    if k == order.len() {
        visit(order);
        return;
    }
    for i in k..order.len() {
        order.swap(k, i);
        permute(order, k + 1, visit);
        order.swap(k, i);
    }
}

/// Items on a line: affinity `100 - |x_i - x_j|`.
pub fn line_matrix(positions: &[i32]) -> AffinityMatrix {
    AffinityMatrix::from_fn(positions.len(), |i, j| 100 - (positions[i] - positions[j]).abs())
        .expect("positions must lie within 100 of each other")
}

pub fn load_instance(name: &str) -> Instance {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    text.parse()
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", path.display()))
}
