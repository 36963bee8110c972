//! Shared fixtures for the integration tests

use flowscope_analysis::AnalysisReport;

/// Snippet with a nested if, matching [`SAMPLE_REPORT`]
pub const SAMPLE_SOURCE: &str = "\
class A {
  void foo(boolean a, boolean b) {
    if (a) {
      if (b) {
        return;
      }
      doSomething();
    }
    doSomethingElse();
  }
}
";

/// Report an engine would produce for [`SAMPLE_SOURCE`]: the nested-if CFG
/// plus a three-node execution graph down the `a == true` branch.
pub const SAMPLE_REPORT: &str = r#"{
  "method": {"name": "foo", "line": 2},
  "cfg": {"blocks": [
    {"id": 5,
     "elements": [{"kind": "IDENTIFIER", "line": 3}],
     "terminator": {"kind": "IF_STATEMENT", "line": 3},
     "successors": [{"target": 1, "label": "FALSE"}, {"target": 4, "label": "TRUE"}]},
    {"id": 4,
     "elements": [{"kind": "IDENTIFIER", "line": 4}],
     "terminator": {"kind": "IF_STATEMENT", "line": 4},
     "successors": [{"target": 2, "label": "FALSE"}, {"target": 3, "label": "TRUE"}]},
    {"id": 3,
     "elements": [{"kind": "RETURN_STATEMENT", "line": 5}],
     "successors": [{"target": 0, "label": "EXIT"}]},
    {"id": 2,
     "elements": [{"kind": "METHOD_INVOCATION", "line": 7}],
     "successors": [{"target": 1}]},
    {"id": 1,
     "elements": [{"kind": "METHOD_INVOCATION", "line": 9}],
     "successors": [{"target": 0, "label": "EXIT"}]},
    {"id": 0}
  ]},
  "exec": {"nodes": [
    {"point": {"block": 5, "index": 0},
     "state": {"values": [{"symbol": "a", "sv": "SV_1"}, {"symbol": "b", "sv": "SV_2"}]}},
    {"point": {"block": 4, "index": 0},
     "state": {"values": [{"symbol": "a", "sv": "SV_1"}, {"symbol": "b", "sv": "SV_2"}],
               "constraints": [{"sv": "SV_1", "constraints": ["TRUE"]}]},
     "edges": [{"parent": 0,
                "learned_constraints": [{"sv": "SV_1", "constraint": "TRUE"}]}]},
    {"point": {"block": 0, "index": 0},
     "state": {"values": [{"symbol": "a", "sv": "SV_1"}, {"symbol": "b", "sv": "SV_2"}]},
     "edges": [{"parent": 1}]}
  ]}
}"#;

pub fn sample_report() -> AnalysisReport {
    serde_json::from_str(SAMPLE_REPORT).expect("sample report parses")
}
