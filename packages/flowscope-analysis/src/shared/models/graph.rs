//! Renderable debug graphs and their single-line wire notation
//!
//! A graph is an ordered list of node and edge records. The writer preserves
//! push order, so each projection controls how the client replays its records.
//!
//! Notation:
//! - node: `id[details="…",label="…",highlighting="…"];` (absent attributes omitted)
//! - edge: `from->to[label="…"];` (brackets kept even when no attribute is set)
//! - graph: `graph Name {<records>}` on a single line
//!
//! Details payloads are JSON with every `"` swapped for `?` so the attribute
//! quoting stays intact; the client swaps them back before `JSON.parse`.
//! Labels escape `"` as `&quot;` and `?` as `&quest;`.

use std::fmt;

/// Visual categories understood by the client-side renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlighting {
    /// Entry node of a graph
    FirstNode,
    /// Exit node of an execution graph
    ExitNode,
    /// Node without parents that is not the entry (engine anomaly)
    LostNode,
    /// Lexical token of the syntax tree
    TokenKind,
    /// Type declaration of the syntax tree
    ClassKind,
    /// Method/constructor declaration of the syntax tree
    MethodKind,
    /// Execution edge that consumed method yields
    YieldEdge,
    /// Execution edge leading to an exceptional state
    ExceptionEdge,
}

impl Highlighting {
    pub fn as_str(&self) -> &'static str {
        match self {
            Highlighting::FirstNode => "firstNode",
            Highlighting::ExitNode => "exitNode",
            Highlighting::LostNode => "lostNode",
            Highlighting::TokenKind => "tokenKind",
            Highlighting::ClassKind => "classKind",
            Highlighting::MethodKind => "methodKind",
            Highlighting::YieldEdge => "yieldEdge",
            Highlighting::ExceptionEdge => "exceptionEdge",
        }
    }
}

impl fmt::Display for Highlighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Node record
#[derive(Debug, Clone)]
pub struct GraphNode {
    pub id: usize,
    pub label: String,
    pub highlighting: Option<Highlighting>,
    /// JSON payload, quote-substituted by the writer
    pub details: Option<String>,
}

impl GraphNode {
    pub fn new(id: usize, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            highlighting: None,
            details: None,
        }
    }

    pub fn with_highlighting(mut self, highlighting: Highlighting) -> Self {
        self.highlighting = Some(highlighting);
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Edge record
#[derive(Debug, Clone)]
pub struct GraphEdge {
    pub from: usize,
    pub to: usize,
    /// Empty label is omitted from the record
    pub label: String,
    pub highlighting: Option<Highlighting>,
    pub details: Option<String>,
}

impl GraphEdge {
    pub fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            label: String::new(),
            highlighting: None,
            details: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_highlighting(mut self, highlighting: Highlighting) -> Self {
        self.highlighting = Some(highlighting);
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[derive(Debug, Clone)]
enum Record {
    Node(GraphNode),
    Edge(GraphEdge),
}

/// Ordered debug graph
#[derive(Debug, Clone)]
pub struct DebugGraph {
    name: String,
    records: Vec<Record>,
}

impl DebugGraph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_node(&mut self, node: GraphNode) {
        self.records.push(Record::Node(node));
    }

    pub fn add_edge(&mut self, edge: GraphEdge) {
        self.records.push(Record::Edge(edge));
    }

    /// Render the graph as its single-line notation
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("graph ");
        out.push_str(&self.name);
        out.push_str(" {");
        for record in &self.records {
            match record {
                Record::Node(node) => write_node(&mut out, node),
                Record::Edge(edge) => write_edge(&mut out, edge),
            }
        }
        out.push('}');
        out
    }
}

/// `"` would end the attribute early; the client swaps `?` back before parsing
pub fn encode_details(json: &str) -> String {
    json.replace('"', "?")
}

/// Labels may carry arbitrary source text
pub fn escape_label(raw: &str) -> String {
    raw.replace('"', "&quot;").replace('?', "&quest;")
}

fn write_node(out: &mut String, node: &GraphNode) {
    out.push_str(&node.id.to_string());
    out.push('[');
    let mut first = true;
    if let Some(details) = &node.details {
        push_attr(out, &mut first, "details", &encode_details(details));
    }
    push_attr(out, &mut first, "label", &escape_label(&node.label));
    if let Some(highlighting) = node.highlighting {
        push_attr(out, &mut first, "highlighting", highlighting.as_str());
    }
    out.push_str("];");
}

fn write_edge(out: &mut String, edge: &GraphEdge) {
    out.push_str(&edge.from.to_string());
    out.push_str("->");
    out.push_str(&edge.to.to_string());
    out.push('[');
    let mut first = true;
    if let Some(details) = &edge.details {
        push_attr(out, &mut first, "details", &encode_details(details));
    }
    if !edge.label.is_empty() {
        push_attr(out, &mut first, "label", &escape_label(&edge.label));
    }
    if let Some(highlighting) = edge.highlighting {
        push_attr(out, &mut first, "highlighting", highlighting.as_str());
    }
    out.push_str("];");
}

fn push_attr(out: &mut String, first: &mut bool, name: &str, value: &str) {
    if !*first {
        out.push(',');
    }
    *first = false;
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(value);
    out.push('"');
}
