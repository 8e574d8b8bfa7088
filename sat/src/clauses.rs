//! Clause generation for the twin-width contraction-sequence encoding.
//!
//! Black adjacency between two still-alive vertices never changes as the
//! sequence progresses — an edge either stays black (both endpoints agree
//! on every merge) or turns red; it never reappears once gone. That means
//! "is `u` black-adjacent to `w`" is always just the *original* graph's
//! edge relation, a compile-time constant rather than a SAT variable, and
//! the whole red-edge bookkeeping reduces to two kinds of clauses: a
//! persistence axiom (a red edge between two vertices, once present, never
//! un-reds itself) and a forcing axiom at the one contraction step that
//! actually touches it. This drops the usual frame axioms entirely — the
//! persistence clause already covers every pair the active contraction
//! doesn't touch.
//!
//! Cardinality (the width bound itself) is applied to every vertex at
//! every step, including vertices already eliminated — but
//! [`death_clamp_clauses`] forces a vertex's red edges false from the step
//! after it dies, so a dead vertex's clamped-false literals never inflate
//! a still-alive neighbor's counted red degree, and the bound stays exact.

use crate::vars::SatVars;
use occm_core::tree_shortcut::UndirectedGraph;
use rustsat::types::{Clause, Lit};

fn at_most_one(lits: &[Lit]) -> Vec<Clause> {
    let mut out = Vec::new();
    for i in 0..lits.len() {
        for j in (i + 1)..lits.len() {
            out.push(Clause::from(vec![!lits[i], !lits[j]]));
        }
    }
    out
}

fn at_least_one(lits: &[Lit]) -> Clause {
    Clause::from(lits.to_vec())
}

/// Every step eliminates exactly one vertex, and every vertex is
/// eliminated at most once (it may also never be eliminated — the one
/// left over is the sequence's final representative).
pub fn assignment_clauses(vars: &SatVars, n: usize) -> Vec<Clause> {
    let mut clauses = Vec::new();
    for t in 0..vars.steps {
        let lits: Vec<Lit> = (0..n).map(|v| vars.ord_lit(v, t)).collect();
        clauses.push(at_least_one(&lits));
        clauses.extend(at_most_one(&lits));
    }
    for v in 0..n {
        let lits: Vec<Lit> = (0..vars.steps).map(|t| vars.ord_lit(v, t)).collect();
        clauses.extend(at_most_one(&lits));
    }
    clauses
}

/// Links `parent(v, u, t)` to `ord(v, t)`: exactly one partner is chosen
/// for whichever vertex is eliminated at a given step, and no partner is
/// chosen for a step a vertex isn't eliminated at.
pub fn parent_clauses(vars: &SatVars, n: usize) -> Vec<Clause> {
    let mut clauses = Vec::new();
    for t in 0..vars.steps {
        for v in 0..n {
            let partners: Vec<Lit> = (0..n)
                .filter(|&u| u != v)
                .map(|u| vars.parent_lit(v, u, t))
                .collect();

            // ord(v,t) -> at least one partner.
            let mut at_least = vec![!vars.ord_lit(v, t)];
            at_least.extend(partners.iter().copied());
            clauses.push(Clause::from(at_least));

            // at most one partner, and each partner implies ord(v,t).
            clauses.extend(at_most_one(&partners));
            for &p in &partners {
                clauses.push(Clause::from(vec![!p, vars.ord_lit(v, t)]));
            }
        }
    }
    clauses
}

/// No red edges in the original trigraph.
fn initial_red_clauses(vars: &SatVars, n: usize) -> Vec<Clause> {
    vars.red_pairs(n)
        .map(|(u, v)| Clause::from(vec![!vars.red_lit(u, v, 0)]))
        .collect()
}

/// Persistence: a red edge, once present, stays present at every later
/// step. Combined with [`death_clamp_clauses`], this only actually holds
/// while both endpoints are alive — once either side dies its red literal
/// is clamped false, and nothing forces it back on.
fn persistence_clauses(vars: &SatVars, n: usize) -> Vec<Clause> {
    let mut clauses = Vec::new();
    for (u, v) in vars.red_pairs(n) {
        for t in 0..vars.steps {
            clauses.push(Clause::from(vec![!vars.red_lit(u, v, t), vars.red_lit(u, v, t + 1)]));
        }
    }
    clauses
}

/// Forces `v`'s red edges false from the step after `v` is eliminated: a
/// contraction's parent inherits the child's red edges
/// ([`red_creation_clauses`]), so the child's own red literal carries no
/// further meaning once it dies. Left unclamped, [`persistence_clauses`]
/// would keep it forced "on" forever and [`crate::cardinality`] would keep
/// counting it toward the *other* endpoint's red degree long after the
/// edge is gone, over-counting by one for every dead red-neighbor and
/// rejecting otherwise-feasible sequences right at the width boundary.
fn death_clamp_clauses(vars: &SatVars, n: usize) -> Vec<Clause> {
    let mut clauses = Vec::new();
    for v in 0..n {
        for t in 0..vars.steps {
            for w in 0..n {
                if w == v {
                    continue;
                }
                clauses.push(Clause::from(vec![!vars.ord_lit(v, t), !vars.red_lit(v, w, t + 1)]));
            }
        }
    }
    clauses
}

/// Forces the new red edges a contraction creates: merging `v` into `u`
/// turns `u`–`w` red if `w` was asymmetrically black-adjacent to `u`/`v`,
/// or inherits red from whichever of `u`, `v` already had it.
fn red_creation_clauses(vars: &SatVars, graph: &UndirectedGraph, n: usize) -> Vec<Clause> {
    let adjacent = |a: usize, b: usize| graph.neighbors(a).contains(&b);
    let mut clauses = Vec::new();

    for t in 0..vars.steps {
        for v in 0..n {
            for u in 0..n {
                if u == v {
                    continue;
                }
                let parent = vars.parent_lit(v, u, t);
                for w in 0..n {
                    if w == u || w == v {
                        continue;
                    }
                    if adjacent(u, w) != adjacent(v, w) {
                        clauses.push(Clause::from(vec![!parent, vars.red_lit(u, w, t + 1)]));
                    }
                    clauses.push(Clause::from(vec![
                        !parent,
                        !vars.red_lit(v, w, t),
                        vars.red_lit(u, w, t + 1),
                    ]));
                }
            }
        }
    }
    clauses
}

/// The full clause set, minus the cardinality bound (added separately by
/// [`crate::cardinality`] since it depends on the probed width).
pub fn build(vars: &SatVars, graph: &UndirectedGraph, n: usize) -> Vec<Clause> {
    let mut clauses = assignment_clauses(vars, n);
    clauses.extend(parent_clauses(vars, n));
    clauses.extend(initial_red_clauses(vars, n));
    clauses.extend(persistence_clauses(vars, n));
    clauses.extend(red_creation_clauses(vars, graph, n));
    clauses.extend(death_clamp_clauses(vars, n));
    clauses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vars::VarPool;

    #[test]
    fn triangle_produces_a_nonempty_satisfiable_shaped_clause_set() {
        let g = UndirectedGraph::new(3, &[(0, 1), (1, 2), (0, 2)]);
        let mut pool = VarPool::new();
        let vars = SatVars::build(3, &mut pool);
        let clauses = build(&vars, &g, 3);
        assert!(!clauses.is_empty());
    }

    #[test]
    fn death_clamp_emits_one_clause_per_vertex_per_step_per_other_vertex() {
        let vars = SatVars::build(3, &mut VarPool::new());
        let clauses = death_clamp_clauses(&vars, 3);
        // n=3, steps=2: 3 vertices * 2 steps * 2 other vertices each.
        assert_eq!(clauses.len(), 3 * 2 * 2);
    }

    #[test]
    fn build_includes_the_death_clamp_clauses() {
        let g = UndirectedGraph::new(3, &[(0, 1), (1, 2), (0, 2)]);
        let mut pool = VarPool::new();
        let vars = SatVars::build(3, &mut pool);
        let without_clamp = assignment_clauses(&vars, 3).len()
            + parent_clauses(&vars, 3).len()
            + initial_red_clauses(&vars, 3).len()
            + persistence_clauses(&vars, 3).len()
            + red_creation_clauses(&vars, &g, 3).len();
        assert_eq!(build(&vars, &g, 3).len(), without_clamp + death_clamp_clauses(&vars, 3).len());
    }
}
