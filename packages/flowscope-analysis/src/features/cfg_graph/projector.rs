//! Control-flow graph projection
//!
//! All block nodes first, then all successor edges, in block order. The
//! entry block is suffixed `(START)` and block 0 `(EXIT)`.

use crate::features::engine::domain::CfgDump;
use crate::shared::models::{DebugGraph, GraphEdge, GraphNode, Highlighting};

/// Project the control-flow dump into the `CFG` debug graph
pub fn project(cfg: &CfgDump) -> DebugGraph {
    let mut graph = DebugGraph::new("CFG");
    let entry = cfg.entry_block_id();

    for block in &cfg.blocks {
        let mut label = format!("B{}", block.id);
        let mut highlighting = None;
        if Some(block.id) == entry {
            label.push_str(" (START)");
            highlighting = Some(Highlighting::FirstNode);
        } else if block.id == 0 {
            label.push_str(" (EXIT)");
            highlighting = Some(Highlighting::ExitNode);
        }

        let mut node = GraphNode::new(block.id as usize, label);
        if let Some(highlighting) = highlighting {
            node = node.with_highlighting(highlighting);
        }
        graph.add_node(node);
    }

    for block in &cfg.blocks {
        for successor in &block.successors {
            let mut edge = GraphEdge::new(block.id as usize, successor.target as usize);
            if let Some(label) = &successor.label {
                edge = edge.with_label(label);
            }
            graph.add_edge(edge);
        }
    }

    graph
}
