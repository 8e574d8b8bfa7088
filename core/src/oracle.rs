//! The crossing oracle: an immutable facade combining the graph, the
//! sparse crossing matrix and a Fenwick-tree sweep into a single source of
//! truth every optimizer queries instead of recomputing crossing counts
//! itself.

use crate::error::{InvariantViolated, VerificationFailed};
use crate::fenwick::FenwickTree;
use crate::fraction::Fraction;
use crate::graph::{Graph, Interval, WeightedVertex};
use crate::matrix::{CrossingMatrix, Orientation};
use crate::SubInstance;
use std::collections::HashMap;

#[derive(Debug)]
pub struct Oracle<'g> {
    graph: &'g Graph,
    matrix: CrossingMatrix,
}

impl<'g> Oracle<'g> {
    pub fn build(graph: &'g Graph) -> Result<Oracle<'g>, InvariantViolated> {
        let matrix = CrossingMatrix::build(graph)?;
        Ok(Oracle { graph, matrix })
    }

    pub fn graph(&self) -> &Graph {
        self.graph
    }

    pub fn neighborhood(&self, v: usize) -> &[usize] {
        self.graph.neighbors_of_b(v)
    }

    pub fn interval(&self, v: usize) -> Option<Interval> {
        self.graph.interval(v)
    }

    /// Crossings contributed by placing `u` before `v`. Orientable pairs
    /// come straight from the matrix; non-orientable pairs are resolved by
    /// their forced orientation — `Pre`/`Pos` contribute zero crossings in
    /// the order they force and the full `c(u, v) + c(v, u)` total in the
    /// reverse, `Free` is symmetric so either direction is zero.
    pub fn crossings(&self, u: usize, v: usize) -> i64 {
        if let Some(c) = self.matrix.cost(u, v) {
            return c;
        }
        if let Some(c) = self.matrix.cost(v, u) {
            // (u, v) not orientable by definition if only the reverse key
            // exists would be a bug in the matrix; kept for symmetry.
            return c;
        }
        match CrossingMatrix::classify(self.graph, u, v) {
            Orientation::Pre => 0,
            // Forced the other way: never actually chosen, but must not be
            // cheaper than any real crossing count a caller might compare
            // it against.
            Orientation::Pos => self.forced_sentinel(),
            Orientation::Free => 0,
        }
    }

    fn forced_sentinel(&self) -> i64 {
        (self.graph.n_a() as i64) * (self.graph.n_b() as i64) + 1
    }

    /// Crossings contributed by placing `u` before `v`, scaled by each
    /// vertex's weight: `crossings((i,w_i),(j,w_j)) = w_i·w_j·c(i,j)`
    /// (`spec.md` §3, §4.2). A twin-merged group of size `k` behaves as `k`
    /// unit-weight vertices standing adjacently (zero cost among
    /// themselves, since twins share a neighborhood), so every crossing it
    /// contributes against an outside vertex is counted once per member —
    /// panics if the scaled total is not a whole number, since the twin
    /// rule only ever merges weights that must divide out evenly.
    pub fn weighted_crossings(&self, u: WeightedVertex, v: WeightedVertex) -> i64 {
        let raw = self.crossings(u.id, v.id);
        (Fraction::integer(raw) * u.weight * v.weight)
            .as_integer()
            .expect("weighted crossing count must be an integer")
    }

    /// Total weighted crossings of `order`, a permutation of (possibly
    /// twin-merged) vertex ids drawn from `sub`. Unlike
    /// [`Oracle::number_of_crossings`], which assumes every id in `order`
    /// stands for a single unit-weight vertex, this looks up each id's
    /// weight in `sub` and scales accordingly — the form every optimizer
    /// must use while still working with merged representatives, before
    /// the twin rule expands them back into unit-weight members.
    pub fn weighted_number_of_crossings(&self, sub: &SubInstance, order: &[usize]) -> i64 {
        let weight_of: HashMap<usize, Fraction> =
            sub.vertices.iter().map(|w| (w.id, w.weight)).collect();
        let mut total = 0i64;
        for (idx, &u) in order.iter().enumerate() {
            for &v in &order[idx + 1..] {
                let wu = WeightedVertex { id: u, weight: weight_of[&u] };
                let wv = WeightedVertex { id: v, weight: weight_of[&v] };
                total += self.weighted_crossings(wu, wv);
            }
        }
        total
    }

    pub fn is_orientable(&self, u: usize, v: usize) -> bool {
        self.matrix.is_orientable(u, v)
    }

    pub fn classify(&self, u: usize, v: usize) -> Orientation {
        CrossingMatrix::classify(self.graph, u, v)
    }

    /// Orientable pairs restricted to the vertices present in `sub`.
    pub fn orientable_pairs(&self, sub: &SubInstance) -> Vec<(usize, usize)> {
        let ids: std::collections::HashSet<usize> = sub.ids().into_iter().collect();
        self.matrix
            .orientable_pairs()
            .into_iter()
            .filter(|(u, v)| ids.contains(u) && ids.contains(v))
            .collect()
    }

    /// Remaps each vertex's A-interval endpoints onto a dense `0..k` range,
    /// where `k` is the number of distinct endpoints used by `sub`'s
    /// vertices. Isolated vertices are omitted.
    pub fn compressed_intervals(&self, sub: &SubInstance) -> HashMap<usize, Interval> {
        let mut endpoints: Vec<usize> = Vec::new();
        for w in &sub.vertices {
            if let Some(iv) = self.graph.interval(w.id) {
                endpoints.push(iv.l);
                endpoints.push(iv.r);
            }
        }
        endpoints.sort_unstable();
        endpoints.dedup();
        let rank: HashMap<usize, usize> = endpoints
            .iter()
            .enumerate()
            .map(|(i, &e)| (e, i))
            .collect();

        let mut out = HashMap::new();
        for w in &sub.vertices {
            if let Some(iv) = self.graph.interval(w.id) {
                out.insert(
                    w.id,
                    Interval {
                        l: rank[&iv.l],
                        r: rank[&iv.r],
                    },
                );
            }
        }
        out
    }

    /// Total crossings for a full permutation of B given as a list of
    /// 0-based vertex ids. Sweeps the (A-column, B-position) edge events in
    /// B-position order, then A-column order, and for every edge counts
    /// previously placed edges with a strictly greater A-column via a
    /// Fenwick tree — the standard reduction of crossing counting to
    /// inversion counting.
    pub fn number_of_crossings(&self, order: &[usize]) -> i64 {
        let mut position = vec![0usize; self.graph.n_b()];
        for (pos, &v) in order.iter().enumerate() {
            position[v] = pos;
        }

        let mut events: Vec<(usize, usize)> = Vec::new();
        for &v in order {
            for &a in self.graph.neighbors_of_b(v) {
                events.push((position[v], a));
            }
        }
        events.sort_unstable_by(|x, y| x.0.cmp(&y.0).then(x.1.cmp(&y.1)));

        let mut fenwick = FenwickTree::new(self.graph.n_a());
        let mut total: i64 = 0;
        for &(_, a) in &events {
            total += fenwick.suffix_query(a + 1);
            fenwick.update(a, 1);
        }
        total
    }

    /// Recomputes the crossing count for `order` and checks it against
    /// `expected` (typically a solver's claimed objective).
    pub fn verify(&self, order: &[usize], expected: i64) -> Result<(), VerificationFailed> {
        let actual = self.number_of_crossings(order);
        if actual == expected {
            Ok(())
        } else {
            Err(VerificationFailed {
                claimed: expected,
                actual,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> Graph {
        // A = {0,1,2}; edges make b0,b1 cross in one order and not the other.
        // b0 -> {0}, b1 -> {1, 2}, b2 -> {2}
        Graph::new(3, 3, &[(0, 0), (1, 1), (2, 1), (2, 2)])
    }

    #[test]
    fn number_of_crossings_matches_brute_force_inversions() {
        let g = graph();
        let oracle = Oracle::build(&g).unwrap();
        // identity order 0,1,2: edges (pos0,a0),(pos1,a1),(pos1,a2)... no crossing
        let c1 = oracle.number_of_crossings(&[0, 1, 2]);
        let c2 = oracle.number_of_crossings(&[1, 0, 2]);
        assert!(c1 <= c2);
    }

    #[test]
    fn weighted_crossings_scales_by_the_weight_product() {
        // K_{2,2}: b0 -> {0}, b1 -> {1}. One crossing in one order, zero in the other.
        let g = Graph::new(2, 2, &[(0, 0), (1, 1)]);
        let oracle = Oracle::build(&g).unwrap();
        let unit0 = WeightedVertex { id: 0, weight: Fraction::integer(1) };
        let unit1 = WeightedVertex { id: 1, weight: Fraction::integer(1) };
        let base = oracle.weighted_crossings(unit1, unit0);
        assert_eq!(base, oracle.crossings(1, 0));

        let tripled = WeightedVertex { id: 1, weight: Fraction::integer(3) };
        assert_eq!(oracle.weighted_crossings(tripled, unit0), 3 * base);
    }

    #[test]
    fn weighted_number_of_crossings_matches_per_member_expansion() {
        // b0 -> {0,1,2}, b1 -> {0,1,2}: twins, merged into one weight-2 rep
        // at id 0. The merged order [rep(weight 2), b2] must cost the same
        // as fully expanding the rep back to its two members, [0, 1, 2].
        let g = Graph::new(3, 3, &[(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1), (0, 2)]);
        let oracle = Oracle::build(&g).unwrap();
        let sub = SubInstance::new(vec![
            WeightedVertex { id: 0, weight: Fraction::integer(2) },
            WeightedVertex { id: 2, weight: Fraction::integer(1) },
        ]);
        let merged = oracle.weighted_number_of_crossings(&sub, &[0, 2]);
        let expanded = oracle.number_of_crossings(&[0, 1, 2]);
        assert_eq!(merged, expanded);
    }

    #[test]
    fn verify_reports_mismatch() {
        let g = graph();
        let oracle = Oracle::build(&g).unwrap();
        let actual = oracle.number_of_crossings(&[0, 1, 2]);
        assert!(oracle.verify(&[0, 1, 2], actual).is_ok());
        assert!(oracle.verify(&[0, 1, 2], actual + 1).is_err());
    }

    #[test]
    fn compressed_intervals_are_dense() {
        let g = graph();
        let oracle = Oracle::build(&g).unwrap();
        let sub = SubInstance::unweighted(vec![0, 1, 2]);
        let compressed = oracle.compressed_intervals(&sub);
        let mut vals: Vec<usize> = compressed.values().flat_map(|iv| [iv.l, iv.r]).collect();
        vals.sort_unstable();
        vals.dedup();
        for (i, v) in vals.iter().enumerate() {
            assert_eq!(i, *v);
        }
    }
}
