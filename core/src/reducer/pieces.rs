//! Rule 3: sweeping A, whenever the count of currently-active B-vertices
//! returns to zero, the vertices seen so far form a self-contained piece —
//! no orientable pair crosses a piece boundary, so each piece is an
//! independent sub-problem that can be solved and concatenated.

use super::{solve_recursively, ExactSolver};
use crate::context::Context;
use crate::graph::{SubInstance, WeightedVertex};
use std::collections::HashMap;

pub fn apply(ctx: &Context, sub: &SubInstance, base: &dyn ExactSolver) -> Option<Vec<usize>> {
    let graph = ctx.oracle.graph();
    let weight_of: HashMap<usize, _> = sub.vertices.iter().map(|w| (w.id, w.weight)).collect();

    let mut open: HashMap<usize, Vec<usize>> = HashMap::new();
    let mut close: HashMap<usize, Vec<usize>> = HashMap::new();
    let mut isolated = Vec::new();

    for w in &sub.vertices {
        match graph.interval(w.id) {
            Some(iv) => {
                open.entry(iv.l).or_default().push(w.id);
                close.entry(iv.r).or_default().push(w.id);
            }
            // Isolated vertices have no interval to bucket; the isolated
            // rule normally runs first, but this rule stays defensive.
            None => isolated.push(w.id),
        }
    }

    let mut active: i64 = 0;
    let mut current: Vec<usize> = Vec::new();
    let mut pieces: Vec<Vec<usize>> = Vec::new();

    for a in 0..graph.n_a() {
        if let Some(vs) = open.get(&a) {
            active += vs.len() as i64;
            current.extend(vs.iter().copied());
        }
        if let Some(vs) = close.get(&a) {
            active -= vs.len() as i64;
        }
        if active == 0 && !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }

    if pieces.len() <= 1 {
        return None;
    }

    let mut result = Vec::with_capacity(sub.len());
    for piece_ids in pieces {
        let piece_sub = SubInstance::new(
            piece_ids
                .iter()
                .map(|&id| WeightedVertex {
                    id,
                    weight: weight_of[&id],
                })
                .collect(),
        );
        result.extend(solve_recursively(ctx, &piece_sub, base));
    }
    result.extend(isolated);
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Options;
    use crate::graph::Graph;
    use crate::oracle::Oracle;

    struct IdentitySolver;
    impl ExactSolver for IdentitySolver {
        fn solve(&self, _ctx: &Context, sub: &SubInstance) -> Vec<usize> {
            sub.ids()
        }
    }

    #[test]
    fn disjoint_intervals_split_into_independent_pieces() {
        // b0 -> {0,1}, b1 -> {2,3}: two disjoint pieces.
        let g = Graph::new(4, 2, &[(0, 0), (1, 0), (2, 1), (3, 1)]);
        let oracle = Oracle::build(&g).unwrap();
        let ctx = Context::new(&oracle, Options::default());
        let sub = SubInstance::unweighted(vec![0, 1]);
        let order = apply(&ctx, &sub, &IdentitySolver).unwrap();
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn single_piece_does_not_fire() {
        let g = Graph::new(2, 2, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let oracle = Oracle::build(&g).unwrap();
        let ctx = Context::new(&oracle, Options::default());
        let sub = SubInstance::unweighted(vec![0, 1]);
        assert!(apply(&ctx, &sub, &IdentitySolver).is_none());
    }
}
