//! Binary search over the width bound: build a fresh CNF at each probed
//! bound (the contraction-order clauses are identical every time; only
//! the cardinality constraint changes) and ask the solver if a sequence
//! achieving that bound exists.

use crate::cardinality::bound_red_degree;
use crate::clauses;
use crate::decode::contraction_sequence;
use crate::vars::{SatVars, VarPool};
use occm_core::tree_shortcut::UndirectedGraph;
use rustsat::instances::{BasicVarManager, Cnf, ManageVars};
use rustsat::solvers::{Solve, SolverResult};
use rustsat_batsat::BasicSolver;

fn probe(graph: &UndirectedGraph, n: usize, bound: usize) -> Option<Vec<(usize, usize)>> {
    let mut pool = VarPool::new();
    let vars = SatVars::build(n, &mut pool);

    let mut cnf = Cnf::new();
    for clause in clauses::build(&vars, graph, n) {
        cnf.add_clause(clause);
    }

    let mut var_manager = BasicVarManager::default();
    for _ in 0..pool.count() {
        var_manager.new_var();
    }
    bound_red_degree(&vars, graph, n, bound, &mut var_manager, &mut cnf);

    let mut solver = BasicSolver::default();
    solver.add_cnf(cnf).ok()?;

    match solver.solve().ok()? {
        SolverResult::Sat => Some(contraction_sequence(&solver, &vars, n)),
        _ => None,
    }
}

/// Finds the minimum-width contraction sequence via binary search over
/// `0..n`, returning `(sequence, width)`. Always succeeds for `n >= 1`
/// since `bound = n - 1` is always satisfiable.
pub fn solve(graph: &UndirectedGraph) -> (Vec<(usize, usize)>, usize) {
    let n = graph.n();
    if n <= 1 {
        return (Vec::new(), 0);
    }

    let mut lo = 0usize;
    let mut hi = n - 1;
    let mut best = probe(graph, n, hi).expect("bound = n - 1 is always satisfiable");
    tracing::debug!(n, lo, hi, "SAT binary search: starting");

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match probe(graph, n, mid) {
            Some(sequence) => {
                best = sequence;
                hi = mid;
            }
            None => {
                lo = mid + 1;
            }
        }
        tracing::debug!(mid, lo, hi, "SAT binary search: probed");
    }

    (best, lo)
}
