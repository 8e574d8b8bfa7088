//! Integer-programming optimizer for one-sided crossing minimization.
//! Builds a transitive-tournament formulation over whichever sub-instance
//! the reducer hands it, solves it with the bundled `good_lp` backend, and
//! falls back to the best heuristic order if the solver itself errors out
//! rather than propagate a hard failure through [`ExactSolver`]'s
//! infallible interface.

mod backend;
mod formulation;
mod prefix;
mod quadratic;
mod recover;
mod shorter;
mod simple;

use occm_core::context::{Context, IpFormulation};
use occm_core::heuristics::best_heuristic;
use occm_core::reducer::ExactSolver;
use occm_core::SubInstance;

pub use formulation::{objective, sigma, triples, OrderVars};

/// An [`ExactSolver`] backed by one of the three transitive-tournament ILP
/// formulations, selected by [`occm_core::context::Options::ip_formulation`].
pub struct IlpSolver;

impl ExactSolver for IlpSolver {
    fn solve(&self, ctx: &Context, sub: &SubInstance) -> Vec<usize> {
        let result = match ctx.options.ip_formulation {
            IpFormulation::Simple => simple::solve(ctx, sub),
            IpFormulation::Shorter => shorter::solve(ctx, sub),
            IpFormulation::Quadratic => quadratic::solve(ctx, sub),
            IpFormulation::Vini => quadratic::solve(ctx, sub),
        };

        match result {
            Ok(order) => order,
            Err(err) => {
                tracing::error!(
                    error = %err,
                    "ILP solver failed, falling back to the best heuristic order"
                );
                let (order, _crossings) = best_heuristic(ctx.oracle, sub);
                order
            }
        }
    }
}
