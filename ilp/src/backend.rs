//! Solver backend dispatch. Only the bundled `microlp` backend is actually
//! compiled in (see the workspace's `good_lp` feature list); any other
//! `IpSolver` selection still runs, just against `microlp`, with a log line
//! noting the fallback rather than a hard error.

use good_lp::{microlp, Constraint, Expression, ProblemVariables, Solution, SolverModel};
use occm_core::context::{Context, IpSolver};
use occm_core::error::SolverError;

pub fn minimise(
    ctx: &Context,
    problem: ProblemVariables,
    objective: Expression,
    constraints: Vec<Constraint>,
) -> Result<impl Solution, SolverError> {
    if ctx.options.ip_solver != IpSolver::LpSolve {
        tracing::warn!(
            requested = ?ctx.options.ip_solver,
            "IP solver backend not compiled in, falling back to the bundled microlp solver"
        );
    }

    let mut model = problem.minimise(objective).using(microlp);
    for c in constraints {
        model = model.with(c);
    }
    model.solve().map_err(|e| SolverError {
        backend: "microlp".to_string(),
        message: e.to_string(),
    })
}
