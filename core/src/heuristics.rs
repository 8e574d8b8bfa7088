//! Cheap approximation heuristics used to seed the ILP optimizer with an
//! upper bound before the exact search runs.

use crate::oracle::Oracle;
use crate::SubInstance;

/// A heuristic producing a candidate permutation of a sub-instance from
/// first-order statistics of each vertex's A-neighborhood.
pub trait Heuristic {
    fn order(&self, oracle: &Oracle, sub: &SubInstance) -> Vec<usize>;
}

pub struct Barycenter;

impl Heuristic for Barycenter {
    fn order(&self, oracle: &Oracle, sub: &SubInstance) -> Vec<usize> {
        let mut ids = sub.ids();
        let mean = |v: usize| -> f64 {
            let n = oracle.neighborhood(v);
            if n.is_empty() {
                0.0
            } else {
                n.iter().sum::<usize>() as f64 / n.len() as f64
            }
        };
        ids.sort_by(|&a, &b| mean(a).partial_cmp(&mean(b)).unwrap().then(a.cmp(&b)));
        ids
    }
}

pub struct Median;

impl Heuristic for Median {
    fn order(&self, oracle: &Oracle, sub: &SubInstance) -> Vec<usize> {
        let mut ids = sub.ids();
        let median = |v: usize| -> f64 {
            let n = oracle.neighborhood(v);
            if n.is_empty() {
                return 0.0;
            }
            let mid = n.len() / 2;
            if n.len() % 2 == 1 {
                n[mid] as f64
            } else {
                (n[mid - 1] + n[mid]) as f64 / 2.0
            }
        };
        ids.sort_by(|&a, &b| median(a).partial_cmp(&median(b)).unwrap().then(a.cmp(&b)));
        ids
    }
}

/// Runs every heuristic and returns the best `(order, crossings)` pair
/// found, for use as an upper-bound cut fed into the ILP optimizer. Scored
/// with [`Oracle::weighted_number_of_crossings`] rather than the plain
/// unweighted count, since `sub` may hold twin-merged representatives.
pub fn best_heuristic(oracle: &Oracle, sub: &SubInstance) -> (Vec<usize>, i64) {
    let candidates: Vec<Vec<usize>> = vec![
        Barycenter.order(oracle, sub),
        Median.order(oracle, sub),
    ];
    candidates
        .into_iter()
        .map(|order| {
            let cost = oracle.weighted_number_of_crossings(sub, &order);
            (order, cost)
        })
        .min_by_key(|(_, cost)| *cost)
        .expect("at least one heuristic always runs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn barycenter_and_median_agree_on_symmetric_instance() {
        let g = Graph::new(3, 3, &[(0, 0), (1, 1), (2, 2)]);
        let oracle = Oracle::build(&g).unwrap();
        let sub = SubInstance::unweighted(vec![0, 1, 2]);
        let (_, cost) = best_heuristic(&oracle, &sub);
        assert_eq!(cost, 0);
    }
}
