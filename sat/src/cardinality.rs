//! Width-bound cardinality constraints: "at most `d` of these red-edge
//! literals are true", one instance per vertex per step, encoded with
//! `rustsat`'s built-in totalizer rather than a hand-rolled sequential
//! counter.

use occm_core::tree_shortcut::UndirectedGraph;
use rustsat::encodings::card::Totalizer;
use rustsat::encodings::card::{BoundUpperIncremental, DbTotalizer};
use rustsat::instances::{BasicVarManager, Cnf};
use rustsat::types::Lit;

use crate::vars::SatVars;

/// The literals whose sum bounds `u`'s red degree at step `t`: one red
/// literal per other vertex.
fn red_degree_lits(vars: &SatVars, n: usize, u: usize, t: usize) -> Vec<Lit> {
    (0..n)
        .filter(|&w| w != u)
        .map(|w| vars.red_lit(u, w, t))
        .collect()
}

/// Appends, for every vertex and every step, a totalizer-encoded "at most
/// `bound` of these are true" constraint into `cnf`, using fresh variables
/// drawn from `var_manager`.
pub fn bound_red_degree(
    vars: &SatVars,
    graph: &UndirectedGraph,
    n: usize,
    bound: usize,
    var_manager: &mut BasicVarManager,
    cnf: &mut Cnf,
) {
    let _ = graph;
    for t in 0..=vars.steps {
        for u in 0..n {
            let lits = red_degree_lits(vars, n, u, t);
            if lits.is_empty() {
                continue;
            }
            let mut totalizer: DbTotalizer = Totalizer::from(lits).into();
            totalizer
                .encode_ub(0..=bound, cnf, var_manager)
                .expect("totalizer encoding over a finite literal set cannot fail");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vars::VarPool;

    #[test]
    fn emits_at_least_one_clause_per_vertex_per_step() {
        let g = UndirectedGraph::new(3, &[(0, 1), (1, 2), (0, 2)]);
        let mut pool = VarPool::new();
        let vars = SatVars::build(3, &mut pool);
        let mut var_manager = BasicVarManager::default();
        let mut cnf = Cnf::new();
        bound_red_degree(&vars, &g, 3, 1, &mut var_manager, &mut cnf);
        assert!(!cnf.is_empty());
    }
}
