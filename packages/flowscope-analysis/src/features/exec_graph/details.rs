//! Browser-facing detail payloads of execution-graph records
//!
//! Serialized as JSON into the `details` attribute; key casing matches what
//! the client scripts expect.

use serde::Serialize;

use crate::features::engine::domain::YieldDump;

/// Rendered in place of an empty constraint set
pub const NO_CONSTRAINT: &str = "no constraint";

/// `{sv, symbol}` pair; ordering is by symbolic value
#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct SvWithSymbol {
    pub sv: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl SvWithSymbol {
    pub fn new(sv: impl Into<String>, symbol: Option<String>) -> Self {
        Self {
            sv: sv.into(),
            symbol,
        }
    }
}

/// `{sv, constraints}` pair; ordering is by symbolic value
#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct SvWithConstraints {
    pub sv: String,
    pub constraints: Vec<String>,
}

impl SvWithConstraints {
    pub fn new(sv: impl Into<String>, constraints: Vec<String>) -> Self {
        Self {
            sv: sv.into(),
            constraints,
        }
    }

    pub fn single(sv: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self::new(sv, vec![constraint.into()])
    }
}

/// Node details payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDetails {
    pub pp_key: String,
    /// Stack order preserved, top first
    pub ps_stack: Vec<SvWithSymbol>,
    pub ps_constraints: Vec<SvWithConstraints>,
    pub ps_values: Vec<SvWithSymbol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_yields: Option<Vec<MethodYieldDetails>>,
}

/// Edge details payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeDetails {
    pub learned_constraints: Vec<SvWithConstraints>,
    pub learned_associations: Vec<SvWithSymbol>,
    pub selected_method_yields: Vec<MethodYieldDetails>,
}

/// One method outcome as shown in the viewer
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MethodYieldDetails {
    HappyPath {
        result: Vec<String>,
        #[serde(rename = "resultIndex")]
        result_index: i32,
        params: Vec<Vec<String>>,
    },
    Exception {
        exception: String,
        params: Vec<Vec<String>>,
    },
}

impl MethodYieldDetails {
    /// Normalize a wire yield into its display form
    pub fn from_dump(dump: &YieldDump) -> Self {
        match dump {
            YieldDump::HappyPath {
                params,
                result,
                result_index,
            } => MethodYieldDetails::HappyPath {
                result: normalize_constraints(result.as_deref().unwrap_or_default()),
                result_index: *result_index,
                params: normalize_params(params),
            },
            YieldDump::Exception { params, exception } => MethodYieldDetails::Exception {
                exception: exception
                    .clone()
                    .unwrap_or_else(|| "runtime Exception".to_string()),
                params: normalize_params(params),
            },
        }
    }
}

/// Empty constraint sets become the `no constraint` placeholder; everything
/// else is sorted alphabetically
pub fn normalize_constraints(constraints: &[String]) -> Vec<String> {
    if constraints.is_empty() {
        return vec![NO_CONSTRAINT.to_string()];
    }
    let mut sorted = constraints.to_vec();
    sorted.sort();
    sorted
}

fn normalize_params(params: &[Vec<String>]) -> Vec<Vec<String>> {
    params
        .iter()
        .map(|constraints| normalize_constraints(constraints))
        .collect()
}
