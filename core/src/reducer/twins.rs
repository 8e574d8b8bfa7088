//! Rule 2: vertices with identical sorted A-neighborhoods are
//! interchangeable — any pair of twins contributes the same crossing cost
//! regardless of their relative order. They are merged into one
//! weight-summed representative, solved as a single vertex, then expanded
//! back preserving their arbitrary-but-fixed internal order.

use super::{solve_recursively, ExactSolver};
use crate::context::Context;
use crate::fraction::Fraction;
use crate::graph::{SubInstance, WeightedVertex};
use std::collections::HashMap;

pub fn apply(ctx: &Context, sub: &SubInstance, base: &dyn ExactSolver) -> Option<Vec<usize>> {
    let mut members: HashMap<Vec<usize>, Vec<WeightedVertex>> = HashMap::new();
    let mut key_order: Vec<Vec<usize>> = Vec::new();

    for w in &sub.vertices {
        let key = ctx.oracle.neighborhood(w.id).to_vec();
        if !members.contains_key(&key) {
            key_order.push(key.clone());
        }
        members.entry(key).or_default().push(*w);
    }

    if key_order.iter().all(|k| members[k].len() == 1) {
        return None;
    }

    let mut reduced = Vec::with_capacity(key_order.len());
    for key in &key_order {
        let group = &members[key];
        let weight = group
            .iter()
            .fold(Fraction::integer(0), |acc, w| acc + w.weight);
        let rep_id = group.iter().map(|w| w.id).min().expect("group nonempty");
        reduced.push(WeightedVertex { id: rep_id, weight });
    }

    let order = solve_recursively(ctx, &SubInstance::new(reduced), base);

    let mut expanded = Vec::with_capacity(sub.len());
    for rep in order {
        let key = ctx.oracle.neighborhood(rep).to_vec();
        for w in &members[&key] {
            expanded.push(w.id);
        }
    }
    Some(expanded)
}
