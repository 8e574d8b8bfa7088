//! The default formulation. Alongside the pairwise order variables from
//! [`crate::formulation`], introduces rank-indicator variables `y_{i,k}`
//! ("vertex `i` sits within the first `k+1` positions of the final
//! order"), linked back to the pairwise variables. More variables than
//! [`crate::simple`] or [`crate::shorter`], but the solver tends to close
//! the LP relaxation faster on the dense instances this crate sees most
//! often, which is why it is the default.

use crate::backend;
use crate::formulation::{objective, sigma, OrderVars};
use crate::prefix;
use crate::recover::recover_order;
use good_lp::{constraint, variable, Expression, ProblemVariables, Variable};
use occm_core::context::Context;
use occm_core::error::SolverError;
use occm_core::SubInstance;
use std::collections::HashMap;

pub fn solve(ctx: &Context, sub: &SubInstance) -> Result<Vec<usize>, SolverError> {
    let ids = sub.ids();
    let n = ids.len();

    let mut problem = ProblemVariables::new();
    let order = OrderVars::build(ctx, sub, &mut problem);
    let (objective_expr, _constant) = objective(ctx, sub, &order);

    let mut y: HashMap<(usize, usize), Variable> = HashMap::new();
    for &i in &ids {
        for k in 0..n {
            y.insert((i, k), problem.add(variable().binary()));
        }
    }

    let mut constraints = Vec::new();

    // Exactly k+1 vertices sit in the first k+1 positions.
    for k in 0..n {
        let mut sum = Expression::from(0);
        for &i in &ids {
            sum += y[&(i, k)];
        }
        constraints.push(constraint!(sum == (k + 1) as f64));
    }

    // Once a vertex is in a prefix, it stays in every larger prefix.
    for &i in &ids {
        for k in 0..n.saturating_sub(1) {
            let lhs: Expression = Expression::from(y[&(i, k)]) - y[&(i, k + 1)];
            constraints.push(constraint!(lhs <= 0.0));
        }
    }

    // Link the rank indicators back to the pairwise order: if j precedes i,
    // i's prefix membership can't outrun j's.
    let slack = (n.max(1) - 1) as f64;
    for &i in &ids {
        for &j in &ids {
            if i == j {
                continue;
            }
            let x_ji = sigma(ctx, &order, j, i);
            for k in 0..n {
                let lhs: Expression =
                    Expression::from(y[&(i, k)]) - y[&(j, k)] - slack * x_ji.clone();
                constraints.push(constraint!(lhs <= 0.0));
            }
        }
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
