//! Path ranking and operator-type walltime aggregation.
//!
//! The ranker turns enumerated paths into a walltime-descending sequence
//! whose first element is the critical path; the breakdown module groups
//! walltime by operator type, globally and along the critical path.

pub mod breakdown;
pub mod ranker;

// Re-export main functions
pub use breakdown::{critical_path_breakdown, global_breakdown};
pub use ranker::{critical_path_detail, path_walltime, rank_paths};
