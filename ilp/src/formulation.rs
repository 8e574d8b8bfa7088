//! Shared transitive-tournament skeleton the three ILP formulations build
//! on: the orientable-pair variable map, the `σ(i,j)` substitution rule for
//! non-orientable pairs, and the transitivity constraints every
//! formulation needs regardless of which auxiliary variables it adds.

use good_lp::{variable, Expression, ProblemVariables, Variable};
use occm_core::context::Context;
use occm_core::matrix::Orientation;
use occm_core::{SubInstance, WeightedVertex};
use std::collections::HashMap;

/// `x_{i,j}` for every orientable pair `i < j` in the sub-instance,
/// interpreted as "i precedes j".
pub struct OrderVars {
    pub vars: HashMap<(usize, usize), Variable>,
}

impl OrderVars {
    pub fn build(ctx: &Context, sub: &SubInstance, problem: &mut ProblemVariables) -> OrderVars {
        let mut vars = HashMap::new();
        for (i, j) in ctx.oracle.orientable_pairs(sub) {
            vars.insert((i, j), problem.add(variable().binary()));
        }
        OrderVars { vars }
    }
}

/// The uniform substitution rule from the design notes: for an orientable
/// pair the canonical variable is keyed `(min, max)`; `σ(i,j) := x_{ij}` if
/// `i<j` else `1 − x_{ji}`. Non-orientable pairs substitute a constant:
/// `PRE → 1`, `POS → 0`, `FREE → by index order`.
pub fn sigma(ctx: &Context, order: &OrderVars, i: usize, j: usize) -> Expression {
    if ctx.oracle.is_orientable(i, j) {
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        let x = order.vars[&(lo, hi)];
        return if i < j {
            Expression::from(x)
        } else {
            Expression::from(1) - x
        };
    }
    match ctx.oracle.classify(i, j) {
        Orientation::Pre => Expression::from(1),
        Orientation::Pos => Expression::from(0),
        Orientation::Free => Expression::from(if i < j { 1 } else { 0 }),
    }
}

/// `(c(i,j) − c(j,i))·x_{ij}` objective terms plus the additive constant
/// `Σ c(j,i)`, each term scaled by `w_i·w_j` per `spec.md` §3's
/// `crossings((i,w_i),(j,w_j)) = w_i·w_j·c(i,j)` invariant — a twin-merged
/// representative must be costed as the whole group it stands for, not as
/// a single unit-weight vertex.
pub fn objective(ctx: &Context, sub: &SubInstance, order: &OrderVars) -> (Expression, i64) {
    let weight_of: HashMap<usize, _> = sub.vertices.iter().map(|w| (w.id, w.weight)).collect();
    let mut expr = Expression::from(0);
    let mut constant = 0i64;
    for (&(i, j), &x) in &order.vars {
        let wi = WeightedVertex { id: i, weight: weight_of[&i] };
        let wj = WeightedVertex { id: j, weight: weight_of[&j] };
        let c_ij = ctx.oracle.weighted_crossings(wi, wj);
        let c_ji = ctx.oracle.weighted_crossings(wj, wi);
        expr += (c_ij - c_ji) as f64 * x;
        constant += c_ji;
    }
    (expr, constant)
}

/// Every distinct triple drawn from the sub-instance's vertices, used to
/// emit `σ(i,j) + σ(j,k) − σ(i,k) ≤ 1` transitivity constraints.
pub fn triples(sub: &SubInstance) -> Vec<(usize, usize, usize)> {
    let ids = sub.ids();
    let n = ids.len();
    let mut out = Vec::new();
    for a in 0..n {
        for b in 0..n {
            if a == b {
                continue;
            }
            for c in 0..n {
                if c == a || c == b {
                    continue;
                }
                out.push((ids[a], ids[b], ids[c]));
            }
        }
    }
    out
}
