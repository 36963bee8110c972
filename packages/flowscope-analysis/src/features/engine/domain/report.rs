//! Wire model of the analysis report
//!
//! One report per request: the engine analyzes the first method/constructor
//! of the first type of the compilation unit it reads on stdin and emits this
//! JSON document on stdout. Exactly this data crosses the boundary; the
//! viewer never re-derives analysis facts.

use serde::{Deserialize, Serialize};

/// Complete engine report for one analyzed method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub method: MethodRef,
    pub cfg: CfgDump,
    pub exec: ExecDump,
}

/// Analyzed method reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodRef {
    pub name: String,
    pub line: u32,
}

/// Control-flow graph of the analyzed method
///
/// `blocks[0]` is the entry block; block id 0 is the exit block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CfgDump {
    pub blocks: Vec<CfgBlockDump>,
}

impl CfgDump {
    pub fn entry_block_id(&self) -> Option<u32> {
        self.blocks.first().map(|block| block.id)
    }

    pub fn block(&self, id: u32) -> Option<&CfgBlockDump> {
        self.blocks.iter().find(|block| block.id == id)
    }

    /// Syntax element at a program point, when the index addresses one
    pub fn element_at(&self, block_id: u32, index: usize) -> Option<&ElementDump> {
        self.block(block_id)
            .and_then(|block| block.elements.get(index))
    }
}

/// Basic block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CfgBlockDump {
    pub id: u32,
    #[serde(default)]
    pub elements: Vec<ElementDump>,
    #[serde(default)]
    pub terminator: Option<ElementDump>,
    #[serde(default)]
    pub successors: Vec<CfgSuccessor>,
}

/// Syntax element of a block, named by the engine's own syntax kinds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementDump {
    pub kind: String,
    pub line: u32,
}

/// Successor edge of a block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CfgSuccessor {
    pub target: u32,
    #[serde(default)]
    pub label: Option<String>,
}

/// Exploded execution graph, nodes in engine traversal order
///
/// A node's position in `nodes` is its id; edges point at parents that
/// appear earlier in the list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecDump {
    #[serde(default)]
    pub nodes: Vec<ExecNodeDump>,
}

/// One (program point, program state) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecNodeDump {
    pub point: ProgramPointDump,
    #[serde(default)]
    pub state: ProgramStateDump,
    /// Present when the point is a call with a known method behavior
    #[serde(default)]
    pub invocation: Option<InvocationDump>,
    /// Incoming edges from parent nodes
    #[serde(default)]
    pub edges: Vec<ExecEdgeDump>,
}

/// Program point: block id plus element index
///
/// `index` may equal the block's element count, addressing the block end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramPointDump {
    pub block: u32,
    pub index: usize,
}

impl ProgramPointDump {
    pub fn key(&self) -> String {
        format!("B{}.{}", self.block, self.index)
    }
}

/// Program state attached to a node
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgramStateDump {
    /// Symbol to symbolic-value bindings
    #[serde(default)]
    pub values: Vec<SymbolBinding>,
    /// Constraints learned so far, per symbolic value
    #[serde(default)]
    pub constraints: Vec<SvConstraints>,
    /// Value stack, top first
    #[serde(default)]
    pub stack: Vec<StackValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolBinding {
    pub symbol: String,
    pub sv: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SvConstraints {
    pub sv: String,
    #[serde(default)]
    pub constraints: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackValue {
    pub sv: String,
    #[serde(default)]
    pub symbol: Option<String>,
    /// Value produced by a thrown exception
    #[serde(default)]
    pub exceptional: bool,
}

/// Invocation behavior known at a call point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationDump {
    pub method_name: String,
    #[serde(default)]
    pub yields: Vec<YieldDump>,
}

/// State transition from a parent node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecEdgeDump {
    /// Index of the parent in `ExecDump::nodes`
    pub parent: usize,
    #[serde(default)]
    pub learned_constraints: Vec<LearnedConstraintDump>,
    #[serde(default)]
    pub learned_associations: Vec<LearnedAssociationDump>,
    /// Method yields consumed crossing this edge
    #[serde(default)]
    pub yields: Vec<YieldDump>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearnedConstraintDump {
    pub sv: String,
    pub constraint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearnedAssociationDump {
    pub sv: String,
    pub symbol: String,
}

/// One possible outcome of a called method
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum YieldDump {
    HappyPath {
        #[serde(default)]
        params: Vec<Vec<String>>,
        /// Constraints on the returned value; `null` means unconstrained
        #[serde(default)]
        result: Option<Vec<String>>,
        /// Index of the returned parameter, -1 when the result is fresh
        result_index: i32,
    },
    Exception {
        #[serde(default)]
        params: Vec<Vec<String>>,
        /// Thrown type FQN; `null` means an unknown runtime exception
        #[serde(default)]
        exception: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_report() {
        let json = r#"{
            "method": {"name": "foo", "line": 1},
            "cfg": {"blocks": [
                {"id": 1, "elements": [{"kind": "RETURN_STATEMENT", "line": 1}],
                 "successors": [{"target": 0, "label": "EXIT"}]},
                {"id": 0}
            ]},
            "exec": {"nodes": [
                {"point": {"block": 1, "index": 0}},
                {"point": {"block": 0, "index": 0}, "edges": [{"parent": 0}]}
            ]}
        }"#;
        let report: AnalysisReport = serde_json::from_str(json).unwrap();

        assert_eq!(report.method.name, "foo");
        assert_eq!(report.cfg.entry_block_id(), Some(1));
        assert_eq!(report.exec.nodes.len(), 2);
        assert!(report.exec.nodes[0].edges.is_empty());
        assert_eq!(report.exec.nodes[1].edges[0].parent, 0);
    }

    #[test]
    fn test_deserialize_tagged_yields() {
        let json = r#"[
            {"kind": "happy_path", "params": [["NOT_NULL"]], "result": null, "result_index": -1},
            {"kind": "exception", "params": [], "exception": "java.io.IOException"}
        ]"#;
        let yields: Vec<YieldDump> = serde_json::from_str(json).unwrap();

        match &yields[0] {
            YieldDump::HappyPath {
                params,
                result,
                result_index,
            } => {
                assert_eq!(params.len(), 1);
                assert!(result.is_none());
                assert_eq!(*result_index, -1);
            }
            other => panic!("expected happy_path, got {:?}", other),
        }
        match &yields[1] {
            YieldDump::Exception { exception, .. } => {
                assert_eq!(exception.as_deref(), Some("java.io.IOException"));
            }
            other => panic!("expected exception, got {:?}", other),
        }
    }

    #[test]
    fn test_state_fields_default_to_empty() {
        let json = r#"{"point": {"block": 0, "index": 0}}"#;
        let node: ExecNodeDump = serde_json::from_str(json).unwrap();

        assert!(node.state.values.is_empty());
        assert!(node.state.constraints.is_empty());
        assert!(node.state.stack.is_empty());
        assert!(node.invocation.is_none());
    }

    #[test]
    fn test_program_point_key() {
        let point = ProgramPointDump { block: 3, index: 2 };
        assert_eq!(point.key(), "B3.2");
    }

    #[test]
    fn test_element_lookup_past_block_end() {
        let cfg = CfgDump {
            blocks: vec![CfgBlockDump {
                id: 1,
                elements: vec![ElementDump {
                    kind: "IDENTIFIER".to_string(),
                    line: 1,
                }],
                terminator: None,
                successors: vec![],
            }],
        };
        assert!(cfg.element_at(1, 0).is_some());
        assert!(cfg.element_at(1, 1).is_none());
        assert!(cfg.element_at(7, 0).is_none());
    }
}
