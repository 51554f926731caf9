use serde::{Deserialize, Serialize};
use weave_core::{Sequence, WeaveError};
use weave_matrix::{describe, paths};

use crate::hash::stable_hash_string;
use crate::spec::MatrixSpec;

/// A matrix description plus the contiguous sampling window to draw from it.
///
/// `samples` defaults to the matrix's minimum scan length, the smallest
/// balanced window; `start` defaults to the beginning of the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplePlan {
    pub matrix: MatrixSpec,
    #[serde(default)]
    pub samples: Option<u64>,
    #[serde(default)]
    pub start: u64,
}

/// One sampled position with its renderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub index: u64,
    pub description: String,
    pub paths: Vec<String>,
}

/// Deterministic expansion of a [`SamplePlan`], stable byte-for-byte for
/// identical plans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanReport {
    pub plan_hash: String,
    pub size: u64,
    pub min_scan_len: u64,
    pub cyclicity: u64,
    pub entries: Vec<PlanEntry>,
}

/// Expands a plan into its report.
///
/// Window positions are reduced modulo the matrix size, so a window longer
/// than the sequence revisits it cyclically; the engine's own indexing
/// contract stays strict.
pub fn expand_plan(plan: &SamplePlan) -> Result<PlanReport, WeaveError> {
    let matrix = plan.matrix.build()?;
    let size = matrix.size();
    let min_scan_len = matrix.min_scan_len();
    let samples = plan.samples.unwrap_or(min_scan_len);
    let plan_hash = stable_hash_string(plan)?;

    let mut entries = Vec::with_capacity(samples as usize);
    for offset in 0..samples {
        let index = ((u128::from(plan.start) + u128::from(offset)) % u128::from(size)) as u64;
        let selection = matrix.index(index)?;
        entries.push(PlanEntry {
            index,
            description: describe(&selection, join_path),
            paths: paths(&selection, ".", join_path),
        });
    }

    Ok(PlanReport {
        plan_hash,
        size,
        min_scan_len,
        cyclicity: matrix.cyclicity(),
        entries,
    })
}

fn join_path(a: &str, b: &str) -> String {
    format!("{a}/{b}")
}
