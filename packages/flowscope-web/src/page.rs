//! Page rendering
//!
//! Fills the embedded template with one request's outcome. Placeholders use
//! `{{name}}`; substitution is a single pass, so submitted code that happens
//! to contain a placeholder never gets expanded.

use std::error::Error;

use flowscope_analysis::{AnalysisError, PageValues};
use serde_json::json;

use crate::assets::INDEX_TEMPLATE;

/// Successful analysis: code, listing and all three graphs filled in
pub fn success_page(source: &str, values: &PageValues) -> String {
    fill(
        INDEX_TEMPLATE,
        &[
            ("javaCode", html_escape(source)),
            ("cfgText", html_escape(&values.cfg_text)),
            ("errorMessage", String::new()),
            ("errorTrace", String::new()),
            ("graphData", graph_data(Some(values))),
        ],
    )
}

/// Failed analysis: code kept in the editor, graphs empty, error shown
pub fn error_page(source: &str, error: &AnalysisError) -> String {
    fill(
        INDEX_TEMPLATE,
        &[
            ("javaCode", html_escape(source)),
            ("cfgText", String::new()),
            ("errorMessage", html_escape(&error.to_string())),
            ("errorTrace", error_trace(error)),
            ("graphData", graph_data(None)),
        ],
    )
}

/// Graph bundle for the inline `<script>`; `</` is broken up so a snippet
/// containing `</script>` cannot terminate the tag early.
fn graph_data(values: Option<&PageValues>) -> String {
    let bundle = match values {
        Some(values) => json!({
            "ast": values.ast,
            "cfg": values.cfg,
            "eg": values.eg,
        }),
        None => json!({ "ast": "", "cfg": "", "eg": "" }),
    };
    bundle.to_string().replace("</", "<\\/")
}

/// `source()` chain, one `caused by:` line per link, as HTML
fn error_trace(error: &AnalysisError) -> String {
    let mut lines = Vec::new();
    let mut cause: Option<&(dyn Error + 'static)> = error.source();
    while let Some(err) = cause {
        let line = html_escape(&err.to_string()).replace('\n', "<br/>");
        lines.push(format!("caused by: {}", line));
        cause = err.source();
    }
    lines.join("<br/>")
}

/// Single-pass `{{name}}` substitution; unknown placeholders are left as-is
fn fill(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let name = &after[..end];
                match values.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(name);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

pub fn html_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
