//! Syntax tree domain model
//!
//! Abstracts the parsed tree for graph projection and method lookup.

use crate::shared::models::Span;

/// Syntax node kind
///
/// Only the kinds the viewer classifies get their own variant; everything
/// else stays `Other` with the grammar name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxKind {
    ClassDeclaration,
    InterfaceDeclaration,
    EnumDeclaration,
    RecordDeclaration,
    AnnotationTypeDeclaration,
    MethodDeclaration,
    ConstructorDeclaration,
    Other(String),
}

impl SyntaxKind {
    pub fn from_grammar(kind: &str) -> Self {
        match kind {
            "class_declaration" => SyntaxKind::ClassDeclaration,
            "interface_declaration" => SyntaxKind::InterfaceDeclaration,
            "enum_declaration" => SyntaxKind::EnumDeclaration,
            "record_declaration" => SyntaxKind::RecordDeclaration,
            "annotation_type_declaration" => SyntaxKind::AnnotationTypeDeclaration,
            "method_declaration" => SyntaxKind::MethodDeclaration,
            "constructor_declaration" => SyntaxKind::ConstructorDeclaration,
            other => SyntaxKind::Other(other.to_string()),
        }
    }

    /// Original grammar name
    pub fn grammar_name(&self) -> &str {
        match self {
            SyntaxKind::ClassDeclaration => "class_declaration",
            SyntaxKind::InterfaceDeclaration => "interface_declaration",
            SyntaxKind::EnumDeclaration => "enum_declaration",
            SyntaxKind::RecordDeclaration => "record_declaration",
            SyntaxKind::AnnotationTypeDeclaration => "annotation_type_declaration",
            SyntaxKind::MethodDeclaration => "method_declaration",
            SyntaxKind::ConstructorDeclaration => "constructor_declaration",
            SyntaxKind::Other(name) => name,
        }
    }

    pub fn is_type_declaration(&self) -> bool {
        matches!(
            self,
            SyntaxKind::ClassDeclaration
                | SyntaxKind::InterfaceDeclaration
                | SyntaxKind::EnumDeclaration
                | SyntaxKind::RecordDeclaration
                | SyntaxKind::AnnotationTypeDeclaration
        )
    }

    pub fn is_method_like(&self) -> bool {
        matches!(
            self,
            SyntaxKind::MethodDeclaration | SyntaxKind::ConstructorDeclaration
        )
    }

    /// Body node of a type declaration (class_body, interface_body, ...)
    pub fn is_type_body(&self) -> bool {
        matches!(self, SyntaxKind::Other(name) if name.ends_with("_body"))
    }
}

/// Syntax node
#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub kind: SyntaxKind,
    pub span: Span,
    /// Source text, leaves only
    pub text: Option<String>,
    /// Named grammar node (as opposed to an anonymous token)
    pub named: bool,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: SyntaxKind, span: Span) -> Self {
        Self {
            kind,
            span,
            text: None,
            named: true,
            children: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_named(mut self, named: bool) -> Self {
        self.named = named;
        self
    }

    pub fn with_children(mut self, children: Vec<SyntaxNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Grammar name uppercased for graph labels
    pub fn display_kind(&self) -> String {
        self.kind.grammar_name().to_uppercase()
    }

    pub fn line(&self) -> u32 {
        self.span.start_line
    }

    /// Text of the first identifier child, if any
    pub fn name(&self) -> Option<&str> {
        self.children
            .iter()
            .find(|child| matches!(&child.kind, SyntaxKind::Other(kind) if kind == "identifier"))
            .and_then(|child| child.text.as_deref())
    }
}

/// Parse issue reported by the parser
#[derive(Debug, Clone)]
pub struct ParseIssue {
    pub message: String,
    pub span: Span,
}

/// Parsed syntax tree
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    pub root: SyntaxNode,
    pub source: String,
    pub has_errors: bool,
    pub errors: Vec<ParseIssue>,
}

impl SyntaxTree {
    pub fn new(root: SyntaxNode, source: String) -> Self {
        Self {
            root,
            source,
            has_errors: false,
            errors: Vec::new(),
        }
    }

    pub fn with_errors(mut self, errors: Vec<ParseIssue>) -> Self {
        self.has_errors = !errors.is_empty();
        self.errors = errors;
        self
    }

    /// First method or constructor among the direct members of the first
    /// top-level type declaration
    pub fn first_method(&self) -> Option<&SyntaxNode> {
        let first_type = self
            .root
            .children
            .iter()
            .find(|child| child.kind.is_type_declaration())?;
        let body = first_type
            .children
            .iter()
            .find(|child| child.kind.is_type_body())?;
        body.children
            .iter()
            .find(|member| member.kind.is_method_like())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(kind: &str) -> SyntaxNode {
        SyntaxNode::new(SyntaxKind::from_grammar(kind), Span::zero())
    }

    fn class_with_members(members: Vec<SyntaxNode>) -> SyntaxTree {
        let body = node("class_body").with_children(members);
        let class = node("class_declaration").with_children(vec![body]);
        let root = node("program").with_children(vec![class]);
        SyntaxTree::new(root, String::new())
    }

    #[test]
    fn test_kind_classification() {
        assert!(SyntaxKind::from_grammar("class_declaration").is_type_declaration());
        assert!(SyntaxKind::from_grammar("record_declaration").is_type_declaration());
        assert!(SyntaxKind::from_grammar("method_declaration").is_method_like());
        assert!(SyntaxKind::from_grammar("constructor_declaration").is_method_like());
        assert!(!SyntaxKind::from_grammar("if_statement").is_method_like());
        assert!(SyntaxKind::from_grammar("interface_body").is_type_body());
    }

    #[test]
    fn test_display_kind_uppercases_grammar_name() {
        assert_eq!(node("if_statement").display_kind(), "IF_STATEMENT");
        assert_eq!(node("method_declaration").display_kind(), "METHOD_DECLARATION");
    }

    #[test]
    fn test_first_method_picks_first_method_like_member() {
        let tree = class_with_members(vec![
            node("field_declaration"),
            node("method_declaration"),
            node("constructor_declaration"),
        ]);
        let found = tree.first_method().unwrap();
        assert_eq!(found.kind, SyntaxKind::MethodDeclaration);
    }

    #[test]
    fn test_first_method_accepts_constructor() {
        let tree = class_with_members(vec![node("constructor_declaration")]);
        let found = tree.first_method().unwrap();
        assert_eq!(found.kind, SyntaxKind::ConstructorDeclaration);
    }

    #[test]
    fn test_first_method_ignores_nested_type_members() {
        // Methods of a nested type are not direct members of the first type.
        let nested_body = node("class_body").with_children(vec![node("method_declaration")]);
        let nested = node("class_declaration").with_children(vec![nested_body]);
        let tree = class_with_members(vec![nested]);
        assert!(tree.first_method().is_none());
    }

    #[test]
    fn test_first_method_none_without_type() {
        let root = node("program");
        let tree = SyntaxTree::new(root, String::new());
        assert!(tree.first_method().is_none());
    }
}
