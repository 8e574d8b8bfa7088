//! The reducer: four exact-preserving rules applied in a fixed order on
//! every recursive call, each splicing sub-answers back together. If none
//! of the rules fire, the sub-instance is handed to whichever optimizer
//! the driver selected.

pub mod isolated;
pub mod lmr;
pub mod pieces;
pub mod twins;

use crate::context::Context;
use crate::graph::SubInstance;

/// The exact optimizer a sub-instance falls through to once no reducer
/// rule applies. Implemented by the ILP, SAT, and bitset-DP optimizers.
pub trait ExactSolver {
    fn solve(&self, ctx: &Context, sub: &SubInstance) -> Vec<usize>;
}

/// Recurses over `sub`, trying each reducer rule in order before falling
/// back to `base`. Mirrors the source's `BaseSolver::recursiveSolver`
/// cyclic containment (every rule calls back into the driver) as a free
/// function consuming an `ExactSolver`, rather than a method on a class
/// that is itself a driver over the rules.
pub fn solve_recursively(ctx: &Context, sub: &SubInstance, base: &dyn ExactSolver) -> Vec<usize> {
    if sub.is_empty() {
        return Vec::new();
    }
    if let Some(order) = isolated::apply(ctx, sub, base) {
        tracing::debug!(n = sub.len(), "reducer: isolated rule fired");
        return order;
    }
    if let Some(order) = twins::apply(ctx, sub, base) {
        tracing::debug!(n = sub.len(), "reducer: twins rule fired");
        return order;
    }
    if let Some(order) = pieces::apply(ctx, sub, base) {
        tracing::debug!(n = sub.len(), "reducer: pieces rule fired");
        return order;
    }
    if let Some(order) = lmr::apply(ctx, sub, base) {
        tracing::debug!(n = sub.len(), "reducer: lmr rule fired");
        return order;
    }
    tracing::debug!(n = sub.len(), "reducer: no rule fired, falling through to optimizer");
    base.solve(ctx, sub)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Options;
    use crate::graph::{Graph, WeightedVertex};
    use crate::oracle::Oracle;

    struct IdentitySolver;
    impl ExactSolver for IdentitySolver {
        fn solve(&self, _ctx: &Context, sub: &SubInstance) -> Vec<usize> {
            sub.ids()
        }
    }

    #[test]
    fn empty_sub_instance_returns_empty_order() {
        let g = Graph::new(1, 1, &[(0, 0)]);
        let oracle = Oracle::build(&g).unwrap();
        let ctx = Context::new(&oracle, Options::default());
        let sub = SubInstance::new(Vec::<WeightedVertex>::new());
        assert!(solve_recursively(&ctx, &sub, &IdentitySolver).is_empty());
    }
}
