//! The baseline formulation: one binary variable per orientable pair, a
//! transitivity constraint over every triple, and the linear objective from
//! [`crate::formulation::objective`]. Correct but quadratic-many
//! constraints on dense instances; [`crate::shorter`] and
//! [`crate::quadratic`] trade constraint count for extra variables.

use crate::backend;
use crate::formulation::{objective, sigma, triples, OrderVars};
use crate::prefix;
use crate::recover::recover_order;
use good_lp::{constraint, ProblemVariables};
use occm_core::context::Context;
use occm_core::error::SolverError;
use occm_core::SubInstance;

pub fn solve(ctx: &Context, sub: &SubInstance) -> Result<Vec<usize>, SolverError> {
    let mut problem = ProblemVariables::new();
    let order = OrderVars::build(ctx, sub, &mut problem);
    let (objective_expr, _constant) = objective(ctx, sub, &order);

    let mut constraints = Vec::new();
    for (i, j, k) in triples(sub) {
        let lhs = sigma(ctx, &order, i, j) + sigma(ctx, &order, j, k) - sigma(ctx, &order, i, k);
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
