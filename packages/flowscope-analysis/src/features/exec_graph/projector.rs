//! Exploded execution graph projection
//!
//! Nodes keep the engine's traversal order; each node record is followed by
//! the records of its incoming edges. Labels carry the program point plus
//! the syntax element it addresses, edges the facts learned on the way.

use crate::errors::Result;
use crate::features::engine::domain::{
    AnalysisReport, ExecEdgeDump, ExecNodeDump, ProgramStateDump,
};
use crate::features::exec_graph::details::{
    EdgeDetails, MethodYieldDetails, NodeDetails, SvWithConstraints, SvWithSymbol,
    normalize_constraints,
};
use crate::shared::models::{DebugGraph, GraphEdge, GraphNode, Highlighting};

/// Keep every parent edge; switching this off reduces each node to its first
/// parent, turning the graph into a tree for easier reading.
const SHOW_MULTIPLE_PARENTS: bool = true;

/// Project the execution dump into the `ExplodedGraph` debug graph
pub fn project(report: &AnalysisReport) -> Result<DebugGraph> {
    let mut graph = DebugGraph::new("ExplodedGraph");
    let first_block = report.cfg.entry_block_id().unwrap_or(0);

    for (id, node) in report.exec.nodes.iter().enumerate() {
        graph.add_node(project_node(id, node, report, first_block)?);

        let parent_edges: &[ExecEdgeDump] = if SHOW_MULTIPLE_PARENTS {
            &node.edges
        } else {
            &node.edges[..node.edges.len().min(1)]
        };
        for edge in parent_edges {
            graph.add_edge(project_edge(id, edge, &node.state)?);
        }
    }

    Ok(graph)
}

fn project_node(
    id: usize,
    node: &ExecNodeDump,
    report: &AnalysisReport,
    first_block: u32,
) -> Result<GraphNode> {
    let point = &node.point;
    let mut label = point.key();
    if let Some(element) = report.cfg.element_at(point.block, point.index) {
        label.push_str("  ");
        label.push_str(&format!("{} L#{}", element.kind, element.line));
    }

    let details = NodeDetails {
        pp_key: point.key(),
        ps_stack: node
            .state
            .stack
            .iter()
            .map(|value| SvWithSymbol::new(value.sv.clone(), value.symbol.clone()))
            .collect(),
        ps_constraints: sorted_constraints(&node.state),
        ps_values: sorted_values(&node.state),
        method_name: node
            .invocation
            .as_ref()
            .map(|invocation| invocation.method_name.clone()),
        method_yields: node.invocation.as_ref().map(|invocation| {
            invocation
                .yields
                .iter()
                .map(MethodYieldDetails::from_dump)
                .collect()
        }),
    };

    let mut record =
        GraphNode::new(id, label).with_details(serde_json::to_string(&details)?);
    if let Some(highlighting) = node_highlighting(node, first_block) {
        record = record.with_highlighting(highlighting);
    }
    Ok(record)
}

/// Parentless nodes are the entry of the graph, or lost. A lost node should
/// never happen - worth investigation when it shows up in the viewer.
fn node_highlighting(node: &ExecNodeDump, first_block: u32) -> Option<Highlighting> {
    let point = &node.point;
    if node.edges.is_empty() {
        if point.block == first_block && point.index == 0 {
            return Some(Highlighting::FirstNode);
        }
        return Some(Highlighting::LostNode);
    }
    if point.block == 0 && point.index == 0 {
        return Some(Highlighting::ExitNode);
    }
    None
}

fn project_edge(child: usize, edge: &ExecEdgeDump, child_state: &ProgramStateDump) -> Result<GraphEdge> {
    let details = EdgeDetails {
        learned_constraints: {
            let mut constraints: Vec<SvWithConstraints> = edge
                .learned_constraints
                .iter()
                .map(|lc| SvWithConstraints::single(lc.sv.clone(), lc.constraint.clone()))
                .collect();
            constraints.sort();
            constraints
        },
        learned_associations: {
            let mut associations: Vec<SvWithSymbol> = edge
                .learned_associations
                .iter()
                .map(|la| SvWithSymbol::new(la.sv.clone(), Some(la.symbol.clone())))
                .collect();
            associations.sort();
            associations
        },
        selected_method_yields: edge
            .yields
            .iter()
            .map(MethodYieldDetails::from_dump)
            .collect(),
    };

    let mut record = GraphEdge::new(edge.parent, child)
        .with_details(serde_json::to_string(&details)?);
    let label = edge_label(edge);
    if !label.is_empty() {
        record = record.with_label(label);
    }
    if let Some(highlighting) = edge_highlighting(edge, child_state) {
        record = record.with_highlighting(highlighting);
    }
    Ok(record)
}

/// Learned constraints then learned associations, each group ordered by
/// symbolic value, joined with a literal `\n` the client renders as a break
fn edge_label(edge: &ExecEdgeDump) -> String {
    let mut constraints: Vec<(&str, &str)> = edge
        .learned_constraints
        .iter()
        .map(|lc| (lc.sv.as_str(), lc.constraint.as_str()))
        .collect();
    constraints.sort();
    let mut associations: Vec<(&str, &str)> = edge
        .learned_associations
        .iter()
        .map(|la| (la.sv.as_str(), la.symbol.as_str()))
        .collect();
    associations.sort();

    constraints
        .into_iter()
        .chain(associations)
        .map(|(sv, learned)| format!("{} - {}", sv, learned))
        .collect::<Vec<_>>()
        .join(",\\n")
}

fn edge_highlighting(
    edge: &ExecEdgeDump,
    child_state: &ProgramStateDump,
) -> Option<Highlighting> {
    if !edge.yields.is_empty() {
        return Some(Highlighting::YieldEdge);
    }
    let top_is_exceptional = child_state
        .stack
        .first()
        .map(|value| value.exceptional)
        .unwrap_or(false);
    if top_is_exceptional {
        return Some(Highlighting::ExceptionEdge);
    }
    None
}

fn sorted_constraints(state: &ProgramStateDump) -> Vec<SvWithConstraints> {
    let mut constraints: Vec<SvWithConstraints> = state
        .constraints
        .iter()
        .map(|entry| {
            SvWithConstraints::new(entry.sv.clone(), normalize_constraints(&entry.constraints))
        })
        .collect();
    constraints.sort();
    constraints
}

fn sorted_values(state: &ProgramStateDump) -> Vec<SvWithSymbol> {
    let mut values: Vec<SvWithSymbol> = state
        .values
        .iter()
        .map(|binding| SvWithSymbol::new(binding.sv.clone(), Some(binding.symbol.clone())))
        .collect();
    values.sort();
    values
}
