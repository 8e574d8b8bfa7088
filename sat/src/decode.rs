//! Reads a satisfying assignment back into the contraction sequence the
//! encoding describes: for each step, find the `v` with `ord(v, t)` true
//! and the `u` with `parent(v, u, t)` true.

use crate::vars::SatVars;
use rustsat::solvers::Solve;
use rustsat::types::TernaryVal;

fn is_true<S: Solve>(solver: &S, lit: rustsat::types::Lit) -> bool {
    matches!(solver.lit_val(lit).unwrap(), TernaryVal::True)
}

pub fn contraction_sequence<S: Solve>(solver: &S, vars: &SatVars, n: usize) -> Vec<(usize, usize)> {
    let mut sequence = Vec::with_capacity(vars.steps);
    for t in 0..vars.steps {
        let v = (0..n)
            .find(|&v| is_true(solver, vars.ord_lit(v, t)))
            .expect("assignment clauses guarantee exactly one vertex eliminated per step");
        let u = (0..n)
            .filter(|&u| u != v)
            .find(|&u| is_true(solver, vars.parent_lit(v, u, t)))
            .expect("parent clauses guarantee exactly one partner per eliminated vertex");
        sequence.push((v, u));
    }
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vars::VarPool;

    #[test]
    fn empty_graph_has_empty_sequence() {
        let pool = &mut VarPool::new();
        let vars = SatVars::build(1, pool);
        assert_eq!(vars.steps, 0);
        let _ = contraction_sequence::<rustsat_batsat::BasicSolver>;
    }
}
