use serde::{Deserialize, Serialize};

use crate::core::ChartOptionsDocument;
use crate::error::{ChartError, ChartResult};

use super::{ChartState, ChartViewController};

pub const CHART_OPTIONS_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptionsJsonContractV1 {
    pub schema_version: u32,
    pub options: ChartOptionsDocument,
}

impl ChartOptionsDocument {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart options: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartOptionsJsonContractV1 {
            schema_version: CHART_OPTIONS_JSON_SCHEMA_V1,
            options: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart options contract v1: {e}"))
        })
    }

    /// Accepts either a bare options document or a versioned envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(document) = serde_json::from_str::<ChartOptionsDocument>(input) {
            return Ok(document);
        }
        let payload: ChartOptionsJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart options json payload: {e}"))
        })?;
        if payload.schema_version != CHART_OPTIONS_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported chart options schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.options)
    }
}

impl ChartState {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.document.to_json_contract_v1_pretty()
    }
}

impl ChartViewController {
    pub fn document_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.document().to_json_contract_v1_pretty()
    }
}
