//! Configuration threaded explicitly through every recursive reducer and
//! optimizer call, replacing the source's process-wide global environment
//! (see the Global Environment design note) with an ordinary value.

use crate::oracle::Oracle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpFormulation {
    Simple,
    Shorter,
    Quadratic,
    Vini,
}

impl Default for IpFormulation {
    fn default() -> Self {
        IpFormulation::Quadratic
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpSolver {
    LpSolve,
    Gurobi,
    OrTools,
}

impl Default for IpSolver {
    fn default() -> Self {
        IpSolver::LpSolve
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixConstraints {
    None,
    X,
    Y,
    Both,
}

impl Default for PrefixConstraints {
    fn default() -> Self {
        PrefixConstraints::None
    }
}

/// User-selected knobs, parsed once from CLI flags and otherwise treated as
/// read-only data.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub ip_formulation: IpFormulation,
    pub ip_solver: IpSolver,
    pub prefix_constraints: PrefixConstraints,
}

/// Bundles the immutable oracle with the run's options. Every recursive
/// entry point in the reducer and optimizers takes `&Context` rather than
/// reaching for global state, so more than one solve can run in the same
/// process (the property tests do exactly this, back to back).
#[derive(Debug)]
pub struct Context<'a> {
    pub oracle: &'a Oracle<'a>,
    pub options: Options,
}

impl<'a> Context<'a> {
    pub fn new(oracle: &'a Oracle<'a>, options: Options) -> Self {
        Context { oracle, options }
    }
}
