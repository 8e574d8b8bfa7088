//! SAT-based exact solver for twin-width contraction sequences: tries the
//! closed-form tree/caterpillar shortcut first, and falls back to a
//! binary search over the width bound, each probe a fresh SAT instance
//! built from the order/parent/red-edge encoding in [`clauses`].

mod cardinality;
mod clauses;
mod decode;
mod search;
mod vars;

use occm_core::moddecomp::{self, PrimeSolver};
use occm_core::tree_shortcut::{self, UndirectedGraph};

/// Hands a modular decomposition's `PRIME` quotient (and the degenerate
/// whole-graph case where no decomposition applies at all) to the raw SAT
/// binary search — never back through [`solve`] itself, since a `PRIME`
/// quotient is by construction indecomposable.
struct SatPrimeSolver;

impl PrimeSolver for SatPrimeSolver {
    fn solve(&self, graph: &UndirectedGraph) -> (Vec<(usize, usize)>, usize) {
        search::solve(graph)
    }
}

/// Solves for a minimum-width contraction sequence, returning the sequence
/// of `(child, parent)` merges and the width it achieves. Tries the
/// closed-form tree/caterpillar shortcut first, then splits the graph via
/// modular decomposition (`PARALLEL`/`SERIES` join at zero extra width,
/// `PRIME` quotients fall through to the SAT search), per `spec.md` §4.8.
pub fn solve(graph: &UndirectedGraph) -> (Vec<(usize, usize)>, usize) {
    if let Some(sequence) = tree_shortcut::recognize(graph) {
        let width = if sequence.is_empty() { 0 } else { 1 };
        tracing::debug!(width, "tree/caterpillar shortcut applied, skipping SAT search");
        return (sequence, width);
    }

    tracing::debug!(n = graph.n(), "no closed-form shortcut, trying modular decomposition");
    moddecomp::solve(graph, &SatPrimeSolver)
}
