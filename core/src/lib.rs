pub mod bitset_dp;
pub mod context;
pub mod dimacs;
pub mod error;
pub mod fenwick;
pub mod fraction;
pub mod graph;
pub mod heuristics;
pub mod matrix;
pub mod moddecomp;
pub mod oracle;
pub mod reducer;
pub mod trigraph;
pub mod tree_shortcut;

pub use error::Error;
pub use fraction::Fraction;
pub use graph::{Graph, Interval, SubInstance, WeightedVertex};
pub use oracle::Oracle;

pub type Result<T> = std::result::Result<T, Error>;
