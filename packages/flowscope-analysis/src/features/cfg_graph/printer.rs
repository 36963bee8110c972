//! Plain-text control-flow listing
//!
//! One paragraph per block:
//! ```text
//! starts at B2
//!
//! B2 (START)
//!   0: IDENTIFIER L#1
//!   T: IF_STATEMENT L#1
//!   jumps to: B1(TRUE) B0(FALSE)
//! ```

use std::fmt::Write;

use crate::features::engine::domain::{CfgBlockDump, CfgDump};

/// Render the control-flow dump as a plain-text listing
pub fn print(cfg: &CfgDump) -> String {
    let entry = cfg.entry_block_id();
    let mut out = String::new();
    if let Some(entry) = entry {
        let _ = writeln!(out, "starts at B{}", entry);
    }

    for block in &cfg.blocks {
        out.push('\n');
        print_block(&mut out, block, entry);
    }
    out
}

fn print_block(out: &mut String, block: &CfgBlockDump, entry: Option<u32>) {
    let suffix = if Some(block.id) == entry {
        " (START)"
    } else if block.id == 0 {
        " (EXIT)"
    } else {
        ""
    };
    let _ = writeln!(out, "B{}{}", block.id, suffix);

    for (i, element) in block.elements.iter().enumerate() {
        let _ = writeln!(out, "  {}: {} L#{}", i, element.kind, element.line);
    }
    if let Some(terminator) = &block.terminator {
        let _ = writeln!(out, "  T: {} L#{}", terminator.kind, terminator.line);
    }
    if !block.successors.is_empty() {
        let targets: Vec<String> = block
            .successors
            .iter()
            .map(|successor| match &successor.label {
                Some(label) => format!("B{}({})", successor.target, label),
                None => format!("B{}", successor.target),
            })
            .collect();
        let _ = writeln!(out, "  jumps to: {}", targets.join(" "));
    }
}
