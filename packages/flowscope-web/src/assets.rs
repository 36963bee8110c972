//! Embedded assets
//!
//! Everything the browser needs ships inside the binary; there is nothing to
//! install next to it.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Page template, filled by [`crate::page`]
pub const INDEX_TEMPLATE: &str = include_str!("../assets/index.html");

/// Default snippet shown when no source file is configured
pub const EXAMPLE_SOURCE: &str = include_str!("../assets/Example.java");

const VIEWER_JS: &str = include_str!("../assets/viewer.js");
const VIEWER_CSS: &str = include_str!("../assets/viewer.css");

/// Files served under `/static/`, name to (content type, body)
pub static STATIC_FILES: Lazy<HashMap<&'static str, (&'static str, &'static str)>> =
    Lazy::new(|| {
        let mut files = HashMap::new();
        files.insert("viewer.js", ("application/javascript", VIEWER_JS));
        files.insert("viewer.css", ("text/css", VIEWER_CSS));
        files
    });
