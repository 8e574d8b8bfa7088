//! Same skeleton as [`crate::simple`], but only emits a transitivity
//! constraint for a triple when at least one of its three pairs is an
//! actual decision variable — a triple where every pair is already
//! constant-resolved (`PRE`/`POS`/`FREE`) can never be violated, so adding
//! it only grows the constraint matrix for no benefit.

use crate::backend;
use crate::formulation::{objective, sigma, triples, OrderVars};
use crate::prefix;
use crate::recover::recover_order;
use good_lp::{constraint, Expression, ProblemVariables};
use occm_core::context::Context;
use occm_core::error::SolverError;
use occm_core::SubInstance;

pub fn solve(ctx: &Context, sub: &SubInstance) -> Result<Vec<usize>, SolverError> {
    let mut problem = ProblemVariables::new();
    let order = OrderVars::build(ctx, sub, &mut problem);
    let (objective_expr, _constant) = objective(ctx, sub, &order);

    let mut constraints = Vec::new();
    for (i, j, k) in triples(sub) {
        let orientable =
            ctx.oracle.is_orientable(i, j) || ctx.oracle.is_orientable(j, k) || ctx.oracle.is_orientable(i, k);
        if !orientable {
            continue;
        }
        let lhs: Expression =
            sigma(ctx, &order, i, j) + sigma(ctx, &order, j, k) - sigma(ctx, &order, i, k);
        constraints.push(constraint!(lhs <= 1.0));
    }
    constraints.extend(prefix::constraints(ctx, sub, &order));

    let solution = backend::minimise(ctx, problem, objective_expr, constraints)?;
    Ok(recover_order(ctx, sub, &order, &solution))
}

#[cfg(test)]
mod tests {
    use super::*;
    use occm_core::oracle::Oracle;
    use occm_core::Graph;

    #[test]
    fn solves_k23_optimally() {
        let g = Graph::new(2, 3, &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        let oracle = Oracle::build(&g).unwrap();
        let ctx = Context::new(&oracle, Default::default());
        let sub = SubInstance::unweighted(vec![0, 1, 2]);
        let order = solve(&ctx, &sub).unwrap();
        assert_eq!(oracle.number_of_crossings(&order), 1);
    }
}
