//! Rule 1: vertices with an empty A-neighborhood incur no crossings in any
//! position, so they are pulled out, the rest is solved recursively, and
//! they are appended at the end.

use super::{solve_recursively, ExactSolver};
use crate::context::Context;
use crate::graph::SubInstance;

pub fn apply(ctx: &Context, sub: &SubInstance, base: &dyn ExactSolver) -> Option<Vec<usize>> {
    let (isolated, rest): (Vec<_>, Vec<_>) = sub
        .vertices
        .iter()
        .partition(|w| ctx.oracle.neighborhood(w.id).is_empty());

    if isolated.is_empty() {
        return None;
    }

    let rest_sub = SubInstance::new(rest.into_iter().copied().collect());
    let mut order = solve_recursively(ctx, &rest_sub, base);
    order.extend(isolated.into_iter().map(|w| w.id));
    Some(order)
}
