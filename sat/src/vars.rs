//! SAT variable allocation for the twin-width contraction-sequence
//! encoding: an elimination order (`ord`) and a partner assignment
//! (`parent`) over `n − 1` contraction steps, plus per-step red-edge
//! indicators (`red`). Mirrors the order/parent/red-edge variable split
//! a practical twin-width SAT encoder uses, built the same way the
//! reference ordering encoder allocates a `(pair) -> variable index` map
//! and hands out `Lit::positive`/`Lit::negative` on demand.

use rustsat::types::Lit;
use std::collections::HashMap;

/// A flat variable counter, same shape as a `HashMap`-backed ID allocator:
/// every distinct key gets exactly one fresh index the first time it's
/// requested.
#[derive(Default)]
pub struct VarPool {
    next: u32,
}

impl VarPool {
    pub fn new() -> Self {
        VarPool { next: 0 }
    }

    pub fn fresh(&mut self) -> u32 {
        let v = self.next;
        self.next += 1;
        v
    }

    pub fn count(&self) -> u32 {
        self.next
    }
}

pub struct SatVars {
    /// `ord[(v, t)]`: vertex `v` is eliminated (contracted away) at step `t`.
    ord: HashMap<(usize, usize), u32>,
    /// `parent[(v, u, t)]`: vertex `v` is merged into `u` at step `t`.
    parent: HashMap<(usize, usize, usize), u32>,
    /// `red[(min(u,v), max(u,v), t)]`: a red edge connects `u` and `v`
    /// immediately after `t` contraction steps have been applied (`t = 0`
    /// is the original graph, with no red edges yet).
    red: HashMap<(usize, usize, usize), u32>,
    pub steps: usize,
}

impl SatVars {
    pub fn build(n: usize, pool: &mut VarPool) -> SatVars {
        let steps = n.saturating_sub(1);
        let mut ord = HashMap::new();
        let mut parent = HashMap::new();
        let mut red = HashMap::new();

        for v in 0..n {
            for t in 0..steps {
                ord.insert((v, t), pool.fresh());
            }
        }
        for v in 0..n {
            for u in 0..n {
                if u == v {
                    continue;
                }
                for t in 0..steps {
                    parent.insert((v, u, t), pool.fresh());
                }
            }
        }
        for u in 0..n {
            for v in (u + 1)..n {
                for t in 0..=steps {
                    red.insert((u, v, t), pool.fresh());
                }
            }
        }

        SatVars {
            ord,
            parent,
            red,
            steps,
        }
    }

    pub fn ord_lit(&self, v: usize, t: usize) -> Lit {
        Lit::positive(self.ord[&(v, t)])
    }

    pub fn parent_lit(&self, v: usize, u: usize, t: usize) -> Lit {
        Lit::positive(self.parent[&(v, u, t)])
    }

    pub fn red_lit(&self, u: usize, v: usize, t: usize) -> Lit {
        let (lo, hi) = if u < v { (u, v) } else { (v, u) };
        Lit::positive(self.red[&(lo, hi, t)])
    }

    pub fn ord_vertices(&self, n: usize) -> impl Iterator<Item = usize> {
        0..n
    }

    pub fn red_pairs(&self, n: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..n).flat_map(move |u| ((u + 1)..n).map(move |v| (u, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_requested_key_gets_a_distinct_fresh_index() {
        let mut pool = VarPool::new();
        let vars = SatVars::build(3, &mut pool);
        let a = vars.ord_lit(0, 0);
        let b = vars.ord_lit(1, 0);
        assert_ne!(a, b);
        assert_eq!(pool.count() as usize, 3 * 2 + 3 * 2 * 2 + 3 * 3);
    }
}
