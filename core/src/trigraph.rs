//! The twin-width trigraph: black (original) and red (introduced by
//! contraction) adjacency, maintained as the driver replays a contraction
//! sequence. The SAT kernel reasons about red edges symbolically and never
//! builds this structure itself; `replay_width` exists to *verify* a
//! sequence returned by any optimizer, the same way `oracle::verify` checks
//! an OCM order.

use crate::error::InvariantViolated;
use bitvec::prelude::*;

#[derive(Debug, Clone)]
pub struct Trigraph {
    n: usize,
    black: Vec<BitVec>,
    red: Vec<BitVec>,
    /// `alive[v]` is false once `v` has been contracted into another vertex.
    alive: BitVec,
}

impl Trigraph {
    pub fn new(n: usize, edges: &[(usize, usize)]) -> Trigraph {
        let mut black = vec![bitvec![0; n]; n];
        for &(u, v) in edges {
            black[u].set(v, true);
            black[v].set(u, true);
        }
        Trigraph {
            n,
            black,
            red: vec![bitvec![0; n]; n],
            alive: bitvec![1; n],
        }
    }

    pub fn is_alive(&self, v: usize) -> bool {
        self.alive[v]
    }

    /// Current red-degree of `v`, i.e. its contribution to the trigraph's
    /// width.
    pub fn red_degree(&self, v: usize) -> usize {
        self.red[v].count_ones()
    }

    pub fn max_red_degree(&self) -> usize {
        (0..self.n)
            .filter(|&v| self.alive[v])
            .map(|v| self.red_degree(v))
            .max()
            .unwrap_or(0)
    }

    /// Contracts `child` into `parent`: every neighbor exclusive to one of
    /// the two (the symmetric difference of their closed neighborhoods,
    /// minus each other) becomes a red neighbor of `parent`; neighbors
    /// shared by both stay black; `child` is then marked dead.
    pub fn contract(&mut self, child: usize, parent: usize) -> Result<(), InvariantViolated> {
        if !self.alive[child] || !self.alive[parent] {
            return Err(InvariantViolated {
                message: format!(
                    "contract: vertex {child} or {parent} already contracted"
                ),
            });
        }
        if child == parent {
            return Err(InvariantViolated {
                message: "contract: child and parent are the same vertex".into(),
            });
        }

        for k in 0..self.n {
            if k == child || k == parent || !self.alive[k] {
                continue;
            }
            let child_adj = self.black[child][k] || self.red[child][k];
            let parent_adj = self.black[parent][k] || self.red[parent][k];
            if child_adj != parent_adj {
                self.set_red(parent, k, true);
            } else if child_adj && parent_adj && (self.red[child][k] || self.red[parent][k]) {
                self.set_red(parent, k, true);
            }
        }

        self.alive.set(child, false);
        self.set_red(parent, child, false);
        self.set_black(parent, child, false);
        Ok(())
    }

    fn set_red(&mut self, u: usize, v: usize, value: bool) {
        self.red[u].set(v, value);
        self.red[v].set(u, value);
    }

    fn set_black(&mut self, u: usize, v: usize, value: bool) {
        self.black[u].set(v, value);
        self.black[v].set(u, value);
    }

    /// Replays a contraction sequence `(child, parent)` (0-based, applied in
    /// order) from scratch and returns the maximum red-degree observed at
    /// any point, i.e. the sequence's width.
    pub fn replay_width(
        n: usize,
        edges: &[(usize, usize)],
        sequence: &[(usize, usize)],
    ) -> Result<usize, InvariantViolated> {
        let mut g = Trigraph::new(n, edges);
        if sequence.len() != n.saturating_sub(1) {
            return Err(InvariantViolated {
                message: format!(
                    "replay_width: sequence has {} steps, expected {}",
                    sequence.len(),
                    n.saturating_sub(1)
                ),
            });
        }
        let mut width = 0;
        for &(child, parent) in sequence {
            g.contract(child, parent)?;
            width = width.max(g.max_red_degree());
        }
        Ok(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_contracts_with_zero_width() {
        let edges = [(0, 1), (1, 2), (0, 2)];
        let seq = [(0, 1), (1, 2)];
        let w = Trigraph::replay_width(3, &edges, &seq).unwrap();
        assert_eq!(w, 0);
    }

    #[test]
    fn path_p4_has_width_one() {
        // 0-1-2-3
        let edges = [(0, 1), (1, 2), (2, 3)];
        // contract leaves inward: 0 into 1, then 1 into 2, then 2 into 3.
        let seq = [(0, 1), (1, 2), (2, 3)];
        let w = Trigraph::replay_width(4, &edges, &seq).unwrap();
        assert_eq!(w, 1);
    }

    #[test]
    fn contracting_dead_vertex_is_rejected() {
        let edges = [(0, 1), (1, 2)];
        let mut g = Trigraph::new(3, &edges);
        g.contract(0, 1).unwrap();
        assert!(g.contract(0, 2).is_err());
    }
}
