//! Optional prefix-constraint cuts. For each pivot vertex, the other
//! vertices split into those that always prefer to precede it and those
//! that always prefer to follow, independent of how the rest of the order
//! resolves (`delta_j = c(pivot, j) − c(j, pivot)`). That split bounds how
//! early or late the pivot can sit in any optimal order, producing cuts
//! that tighten the LP relaxation without changing the optimum. Gated by
//! [`occm_core::context::PrefixConstraints`]; emits nothing when `None`.

use crate::formulation::{sigma, OrderVars};
use good_lp::{constraint, Constraint, Expression};
use occm_core::context::{Context, PrefixConstraints};
use occm_core::SubInstance;

fn max_prefix(ctx: &Context, pivot: usize, others: &[usize]) -> usize {
    others
        .iter()
        .filter(|&&j| ctx.oracle.crossings(pivot, j) - ctx.oracle.crossings(j, pivot) > 0)
        .count()
}

fn min_suffix(ctx: &Context, pivot: usize, others: &[usize]) -> usize {
    others
        .iter()
        .filter(|&&j| ctx.oracle.crossings(j, pivot) - ctx.oracle.crossings(pivot, j) > 0)
        .count()
}

pub fn constraints(ctx: &Context, sub: &SubInstance, order: &OrderVars) -> Vec<Constraint> {
    if ctx.options.prefix_constraints == PrefixConstraints::None {
        return Vec::new();
    }
    let ids = sub.ids();
    let emit_x = matches!(
        ctx.options.prefix_constraints,
        PrefixConstraints::X | PrefixConstraints::Both
    );
    let emit_y = matches!(
        ctx.options.prefix_constraints,
        PrefixConstraints::Y | PrefixConstraints::Both
    );

    let mut out = Vec::new();
    for &pivot in &ids {
        let others: Vec<usize> = ids.iter().copied().filter(|&v| v != pivot).collect();

        if emit_x {
            let bound = max_prefix(ctx, pivot, &others);
            if bound > 0 {
                let mut sum = Expression::from(0);
                for &j in &others {
                    sum += sigma(ctx, order, j, pivot);
                }
                out.push(constraint!(sum >= bound as f64));
            }
        }
        if emit_y {
            let bound = min_suffix(ctx, pivot, &others);
            if bound > 0 {
                let mut sum = Expression::from(0);
                for &j in &others {
                    sum += sigma(ctx, order, pivot, j);
                }
                out.push(constraint!(sum >= bound as f64));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use good_lp::ProblemVariables;
    use occm_core::oracle::Oracle;
    use occm_core::Graph;

    #[test]
    fn no_constraints_emitted_when_disabled() {
        let g = Graph::new(2, 3, &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        let oracle = Oracle::build(&g).unwrap();
        let ctx = Context::new(&oracle, Default::default());
        let sub = SubInstance::unweighted(vec![0, 1, 2]);
        let mut problem = ProblemVariables::new();
        let order = OrderVars::build(&ctx, &sub, &mut problem);
        assert!(constraints(&ctx, &sub, &order).is_empty());
    }
}
