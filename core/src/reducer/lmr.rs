//! Rule 4: LMR (left/middle/right) position-locking. A vertex `u` is
//! locked if every vertex preferring to stand left of it has an interval
//! ending no later than every vertex preferring to stand right of it
//! starts — in that case some optimal order places `u` with at least one
//! admissible slot, so it can be pulled out, the remainder solved, and `u`
//! reinserted by a linear scan.
//!
//! The source computes `l_max`/`r_min` with a dual segment tree over
//! compressed A-columns for an O(log n) per-vertex query; this
//! implementation computes the same two quantities with a direct O(n) scan
//! per candidate, which is simpler and has no bearing on correctness.

use super::{solve_recursively, ExactSolver};
use crate::context::Context;
use crate::graph::SubInstance;

pub fn apply(ctx: &Context, sub: &SubInstance, base: &dyn ExactSolver) -> Option<Vec<usize>> {
    let graph = ctx.oracle.graph();

    for w in &sub.vertices {
        let u = w.id;
        if graph.interval(u).is_none() {
            continue;
        }

        let mut l_max: Option<usize> = None;
        let mut r_min: Option<usize> = None;

        for other in &sub.vertices {
            if other.id == u {
                continue;
            }
            let v = other.id;
            let Some(iv_v) = graph.interval(v) else {
                continue;
            };
            let c_vu = ctx.oracle.crossings(v, u);
            let c_uv = ctx.oracle.crossings(u, v);
            if c_vu < c_uv {
                // v prefers standing to the left of u.
                l_max = Some(l_max.map_or(iv_v.r, |cur: usize| cur.max(iv_v.r)));
            } else if c_uv < c_vu {
                // v prefers standing to the right of u.
                r_min = Some(r_min.map_or(iv_v.l, |cur: usize| cur.min(iv_v.l)));
            }
        }

        let locked = match (l_max, r_min) {
            (Some(lm), Some(rm)) => lm <= rm,
            _ => true,
        };
        if !locked {
            continue;
        }

        let rest: Vec<_> = sub.vertices.iter().filter(|w2| w2.id != u).copied().collect();
        let rest_order = solve_recursively(ctx, &SubInstance::new(rest), base);

        let mut insert_at = 0;
        for (j, &v_j) in rest_order.iter().enumerate() {
            if ctx.oracle.crossings(v_j, u) < ctx.oracle.crossings(u, v_j) {
                insert_at = j + 1;
            }
        }
        let mut result = rest_order;
        result.insert(insert_at, u);
        return Some(result);
    }

    None
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
    fn disjoint_vertex_locks_immediately() {
        // b0 -> {0,1}, b1 -> {2,3}, b2 -> {4,5}: all pairwise non-orientable
        // with a fixed left-to-right order, so every vertex locks.
        let g = Graph::new(
            6,
            3,
            &[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)],
        );
        let oracle = Oracle::build(&g).unwrap();
        let ctx = Context::new(&oracle, Options::default());
        let sub = SubInstance::unweighted(vec![0, 1, 2]);
        let order = apply(&ctx, &sub, &IdentitySolver);
        assert!(order.is_some());
    }
}
