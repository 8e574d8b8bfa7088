use anyhow::{bail, Result};
use clap::Parser;
use occm_cli::{Opts, Target};
use occm_core::context::Context;
use occm_core::dimacs::{self, Instance};
use occm_core::oracle::Oracle;
use occm_core::reducer::{solve_recursively, ExactSolver};
use occm_core::{bitset_dp, SubInstance};
use std::fs;

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Tries the bitset path-decomposition DP first (only viable on small,
/// narrow sub-instances), falling back to the ILP optimizer.
struct OcmBase;

impl ExactSolver for OcmBase {
    fn solve(&self, ctx: &Context, sub: &SubInstance) -> Vec<usize> {
        if let Some(order) = bitset_dp::solve(ctx.oracle, sub, &bitset_dp::DpBudget::default()) {
            return order;
        }
        occm_ilp::IlpSolver.solve(ctx, sub)
    }
}

fn run() -> Result<()> {
    let opts = Opts::parse();
    occm_cli::init_tracing(&opts.log_level);

    let contents = fs::read_to_string(&opts.filename)?;
    let instance = dimacs::parse(&contents)?;

    match instance {
        Instance::Ocm { n_a, n_b, graph } => {
            if opts.target == Target::Tww {
                bail!("input is a `p ocr` instance but --target=tww was requested");
            }
            let oracle = Oracle::build(&graph)?;
            let ctx = Context::new(&oracle, opts.options());
            let sub = SubInstance::unweighted((0..n_b).collect());

            let order = solve_recursively(&ctx, &sub, &OcmBase);
            let objective = oracle.number_of_crossings(&order);
            tracing::info!(objective, "OCM solved");

            if let Some(path) = &opts.verify {
                occm_cli::verify::check(path, &oracle, objective)?;
            }

            for v in &order {
                println!("{}", v + n_a + 1);
            }
        }
        Instance::Tww { n: _, graph } => {
            if opts.target == Target::Ocm {
                bail!("input is a `p tww` instance but --target=ocm was requested");
            }
            let (sequence, width) = occm_sat::solve(&graph);
            tracing::info!(width, "TWW solved");

            if let Some(path) = &opts.verify {
                let expected_width: usize = fs::read_to_string(path)?
                    .trim()
                    .parse()
                    .unwrap_or(width);
                if expected_width != width {
                    bail!(
                        "verification failed: expected width {expected_width}, computed {width}"
                    );
                }
            }

            for (child, parent) in &sequence {
                println!("{} {}", parent + 1, child + 1);
            }
        }
    }

    Ok(())
}
