use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, DomainBounds, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::guess::{GuessPoint, IncompleteRange};
use crate::interaction::{HoverState, RevealProgress};
use crate::render::Renderer;

use super::{GuessChart, GuessPhase};

pub const GUESS_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable deterministic state snapshot used by regression tests and
/// the trace replay tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessSnapshot {
    pub plot: Viewport,
    pub bounds: DomainBounds,
    pub phase: GuessPhase,
    pub reference: Vec<DataPoint>,
    pub guess: Vec<GuessPoint>,
    pub defined_count: usize,
    pub expected_len: usize,
    pub complete: bool,
    pub reveal_fired: bool,
    pub incomplete_range: Option<IncompleteRange>,
    pub hint_visible: bool,
    pub hover: HoverState,
    pub reveal_progress: RevealProgress,
    pub other_data: IndexMap<String, Vec<DataPoint>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: GuessSnapshot,
}

impl GuessSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = GuessSnapshotJsonContractV1 {
            schema_version: GUESS_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts both a bare snapshot and a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<GuessSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: GuessSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != GUESS_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> GuessChart<R> {
    #[must_use]
    pub fn snapshot(&self) -> GuessSnapshot {
        GuessSnapshot {
            plot: self.mapper.plot(),
            bounds: self.mapper.bounds(),
            phase: self.phase,
            reference: self.reference.clone(),
            guess: self.state.points().to_vec(),
            defined_count: self.state.defined_count(),
            expected_len: self.state.expected_len(),
            complete: self.state.is_complete(),
            reveal_fired: self.state.reveal_fired(),
            incomplete_range: self.state.incomplete_range(),
            hint_visible: self.interaction.hint_visible(),
            hover: self.interaction.hover(),
            reveal_progress: self.reveal_progress(),
            other_data: self.config.other_data.clone(),
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
