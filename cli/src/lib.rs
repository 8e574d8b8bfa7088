use clap::Parser;
use occm_core::context::{IpFormulation, IpSolver, Options, PrefixConstraints};

pub mod verify;

#[derive(Parser)]
#[clap(version = "0.1")]
pub struct Opts {
    /// DIMACS input file (`p ocr` or `p tww`).
    pub filename: String,

    /// Which problem the input encodes. The DIMACS header already
    /// disambiguates `p ocr` from `p tww`; this is a redundant safety
    /// check against a mislabeled file, not a dispatch requirement.
    #[clap(long, value_enum, default_value_t = Target::Auto)]
    pub target: Target,

    /// ILP back-end solver.
    #[clap(long = "ipsolver", value_enum, default_value_t = CliIpSolver::LpSolve)]
    pub ip_solver: CliIpSolver,

    /// ILP model.
    #[clap(long = "ipformulation", value_enum, default_value_t = CliIpFormulation::Quadratic)]
    pub ip_formulation: CliIpFormulation,

    /// Prefix-constraint cuts.
    #[clap(long = "ipprefixconstraints", value_enum, default_value_t = CliPrefixConstraints::None)]
    pub ip_prefix_constraints: CliPrefixConstraints,

    /// Reads an external solution file and checks it matches the computed
    /// objective.
    #[clap(long)]
    pub verify: Option<String>,

    /// `tracing` log level.
    #[clap(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Auto,
    Ocm,
    Tww,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum CliIpSolver {
    LpSolve,
    Gurobi,
    OrTools,
}

impl From<CliIpSolver> for IpSolver {
    fn from(value: CliIpSolver) -> Self {
        match value {
            CliIpSolver::LpSolve => IpSolver::LpSolve,
            CliIpSolver::Gurobi => IpSolver::Gurobi,
            CliIpSolver::OrTools => IpSolver::OrTools,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum CliIpFormulation {
    Simple,
    Shorter,
    Quadratic,
    Vini,
}

impl From<CliIpFormulation> for IpFormulation {
    fn from(value: CliIpFormulation) -> Self {
        match value {
            CliIpFormulation::Simple => IpFormulation::Simple,
            CliIpFormulation::Shorter => IpFormulation::Shorter,
            CliIpFormulation::Quadratic => IpFormulation::Quadratic,
            CliIpFormulation::Vini => IpFormulation::Vini,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum CliPrefixConstraints {
    None,
    X,
    Y,
    Both,
}

impl From<CliPrefixConstraints> for PrefixConstraints {
    fn from(value: CliPrefixConstraints) -> Self {
        match value {
            CliPrefixConstraints::None => PrefixConstraints::None,
            CliPrefixConstraints::X => PrefixConstraints::X,
            CliPrefixConstraints::Y => PrefixConstraints::Y,
            CliPrefixConstraints::Both => PrefixConstraints::Both,
        }
    }
}

impl Opts {
    pub fn options(&self) -> Options {
        Options {
            ip_formulation: self.ip_formulation.into(),
            ip_solver: self.ip_solver.into(),
            prefix_constraints: self.ip_prefix_constraints.into(),
        }
    }
}

/// Installs the process-wide `tracing` subscriber. Library crates never do
/// this themselves, so embedding the engine elsewhere doesn't fight over
/// global logging state.
pub fn init_tracing(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_new(log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
