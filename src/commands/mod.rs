//! Command implementations

pub mod assist;
pub mod evaluate;
pub mod rank;

pub use assist::run_assist;
pub use evaluate::{run_evaluate, EvaluateOptions, EvaluateStatistics, WordTrial};
pub use rank::{run_rank, RankResult};
