//! Declarative plan layer for the weave matrix engine.
//!
//! A plan describes a matrix tree as data, picks a contiguous sampling
//! window, and expands into a deterministic report the surrounding test
//! orchestration can turn into job configurations.

mod canon;
mod hash;
mod plan;
mod spec;

pub use canon::{from_json_slice, to_canonical_json_bytes};
pub use hash::stable_hash_string;
pub use plan::{expand_plan, PlanEntry, PlanReport, SamplePlan};
pub use spec::MatrixSpec;
