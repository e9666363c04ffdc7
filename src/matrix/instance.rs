//! Plain-text instance format.
//!
//! ```text
//! 3
//! -1 2 0
//! 2 -1 1
//! 0 1 -1
//! 6
//! ```
//!
//! The first line holds the item count `N`, the next `N` lines hold the
//! matrix rows, and an optional final line holds a known optimal cost.
//! Blank lines are ignored.

use std::str::FromStr;

use super::types::AffinityMatrix;
use crate::error::{ArrangeError, Result};

/// A parsed instance: the matrix plus, if recorded, its optimal cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    /// The validated affinity matrix.
    pub matrix: AffinityMatrix,
    /// Known optimal cycle cost, when the text records one.
    pub optimal_cost: Option<i64>,
}

impl Instance {
    /// Parses the text format described in the module docs.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

        let header = lines
            .next()
            .ok_or_else(|| ArrangeError::validation("instance text is empty"))?;
        let n: usize = header.parse().map_err(|_| {
            ArrangeError::validation(format!("invalid item count {header:?}"))
        })?;

        let mut rows = Vec::with_capacity(n);
        for i in 0..n {
            let line = lines.next().ok_or_else(|| {
                ArrangeError::validation(format!("expected {n} matrix rows, found {i}"))
            })?;
            let row = line
                .split_whitespace()
                .map(|tok| {
                    tok.parse::<i32>().map_err(|_| {
                        ArrangeError::validation(format!("row {i}: invalid affinity {tok:?}"))
                    })
                })
                .collect::<Result<Vec<i32>>>()?;
            rows.push(row);
        }
        let matrix = AffinityMatrix::new(rows)?;

        let optimal_cost = match lines.next() {
            None => None,
            Some(line) => Some(line.parse::<i64>().map_err(|_| {
                ArrangeError::validation(format!("invalid optimal cost {line:?}"))
            })?),
        };
        if let Some(extra) = lines.next() {
            return Err(ArrangeError::validation(format!(
                "unexpected trailing line {extra:?}"
            )));
        }

        Ok(Self {
            matrix,
            optimal_cost,
        })
    }
}

impl FromStr for Instance {
    type Err = ArrangeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl FromStr for AffinityMatrix {
    type Err = ArrangeError;

    fn from_str(s: &str) -> Result<Self> {
        Instance::parse(s).map(|inst| inst.matrix)
    }
}
