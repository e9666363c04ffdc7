//! Solver selection.

use std::fmt;
use std::str::FromStr;

use super::config::SolverConfig;
use super::types::ArrangementSolver;
use crate::approx::ApproximateSolver;
use crate::error::{ArrangeError, Result};
use crate::exact::{BranchAndBoundSolver, ExactPermutationSolver};
use crate::greedy::GreedySolver;

/// The available arrangement strategies.
///
/// # Examples
///
/// ```
/// use u_arrange::solver::SolverKind;
///
/// let kind: SolverKind = "branch-and-bound".parse().unwrap();
/// assert_eq!(kind, SolverKind::BranchAndBound);
/// assert!(kind.is_exact());
/// assert!(!kind.needs_sorted_neighbors());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SolverKind {
    /// Full permutation enumeration.
    Exact,
    /// Pruned depth-first search.
    BranchAndBound,
    /// Double-ended greedy insertion.
    Greedy,
    /// Maximum spanning tree walked depth first.
    Approximate,
}

impl SolverKind {
    /// Every strategy, exact ones first.
    pub const ALL: [SolverKind; 4] = [
        SolverKind::Exact,
        SolverKind::BranchAndBound,
        SolverKind::Greedy,
        SolverKind::Approximate,
    ];

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            SolverKind::Exact => "exact",
            SolverKind::BranchAndBound => "branch-and-bound",
            SolverKind::Greedy => "greedy",
            SolverKind::Approximate => "approximate",
        }
    }

    /// True if the strategy always returns an optimal arrangement.
    pub fn is_exact(self) -> bool {
        matches!(self, SolverKind::Exact | SolverKind::BranchAndBound)
    }

    /// True if the solver must be given a sorted-neighbor projection.
    pub fn needs_sorted_neighbors(self) -> bool {
        matches!(self, SolverKind::Greedy)
    }

    /// Builds a fresh solver of this kind.
    ///
    /// Fails with [`ArrangeError::Validation`] if `config` is invalid.
    pub fn build(self, config: &SolverConfig) -> Result<Box<dyn ArrangementSolver>> {
        config.validate()?;
        let solver: Box<dyn ArrangementSolver> = match self {
            SolverKind::Exact => Box::new(ExactPermutationSolver::with_config(config)?),
            SolverKind::BranchAndBound => Box::new(BranchAndBoundSolver::with_config(config)?),
            SolverKind::Greedy => Box::new(GreedySolver::new()),
            SolverKind::Approximate => Box::new(ApproximateSolver::with_config(config)?),
        };
        Ok(solver)
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolverKind {
    type Err = ArrangeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" | "brute-force" => Ok(SolverKind::Exact),
            "branch-and-bound" | "bnb" => Ok(SolverKind::BranchAndBound),
            "greedy" => Ok(SolverKind::Greedy),
            "approximate" | "approx" | "mst" => Ok(SolverKind::Approximate),
            other => Err(ArrangeError::validation(format!("unknown solver {other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for kind in SolverKind::ALL {
            assert_eq!(kind.name().parse::<SolverKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("BnB".parse::<SolverKind>().unwrap(), SolverKind::BranchAndBound);
        assert_eq!(" mst ".parse::<SolverKind>().unwrap(), SolverKind::Approximate);
        assert!("simulated-annealing".parse::<SolverKind>().is_err());
    }

    #[test]
    fn test_build_names_match() {
        let config = SolverConfig::default().with_seed(1);
        for kind in SolverKind::ALL {
            assert_eq!(kind.build(&config).unwrap().name(), kind.name());
        }
    }

    #[test]
    fn test_only_greedy_needs_neighbors() {
        let needs: Vec<SolverKind> = SolverKind::ALL
            .into_iter()
            .filter(|k| k.needs_sorted_neighbors())
            .collect();
        assert_eq!(needs, vec![SolverKind::Greedy]);
    }

    #[test]
    fn test_build_rejects_invalid_config() {
        let config = SolverConfig::default().with_exact_warn_threshold(0);
        for kind in SolverKind::ALL {
            assert!(
                matches!(kind.build(&config), Err(ArrangeError::Validation(_))),
                "{kind}"
            );
        }
    }
}
