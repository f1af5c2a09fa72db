pub mod mutation;
pub mod runner;
pub mod schedule;
pub mod tracker;

pub use self::runner::{AnnealResult, Annealer, IterationReport, NoProgress, ProgressCallback};
pub use self::schedule::Schedule;
pub use self::tracker::ResultTracker;
