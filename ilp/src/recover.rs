//! Recovers a total order from a solved model: `successor_count(i) = Σ_j
//! σ(i,j)`, sort ascending, output in reverse.

use crate::formulation::{sigma, OrderVars};
use good_lp::{Expression, Solution};
use occm_core::context::Context;
use occm_core::SubInstance;

pub fn recover_order<S: Solution>(
    ctx: &Context,
    sub: &SubInstance,
    order: &OrderVars,
    solution: &S,
) -> Vec<usize> {
    let ids = sub.ids();
    let mut counted: Vec<(usize, f64)> = ids
        .iter()
        .map(|&i| {
            let count: f64 = ids
                .iter()
                .filter(|&&j| j != i)
                .map(|&j| {
                    let expr: Expression = sigma(ctx, order, i, j);
                    expr.eval_with(solution)
                })
                .sum();
            (i, count)
        })
        .collect();

    counted.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());
    let mut result: Vec<usize> = counted.into_iter().map(|(id, _)| id).collect();
    result.reverse();
    result
}
