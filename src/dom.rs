//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate used by the field locators.
//! Every function tolerates empty selections and returns `None` or an empty
//! value instead of failing.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

pub use tendril::StrTendril;

/// Elements that start a new line in rendered text.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li",
    "main", "nav", "ol", "p", "pre", "section", "table", "tr", "ul",
];

/// Elements whose text never renders.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Root element selection of a document.
#[inline]
#[must_use]
pub fn root(doc: &Document) -> Selection<'_> {
    doc.select("html")
}

// === Attributes and tags ===

/// Get any attribute value of the first node
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Trimmed text content, `None` when the selection is empty or blank.
#[must_use]
pub fn trimmed_text(sel: &Selection) -> Option<String> {
    if !sel.exists() {
        return None;
    }
    let text = text_content(sel);
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Rendered-text lines of a subtree, approximating a browser's `innerText`.
///
/// Whitespace inside text nodes collapses to single spaces; block elements
/// and `<br>` start new lines. Lines are trimmed and blank lines dropped.
#[must_use]
pub fn inner_text_lines(sel: &Selection) -> Vec<String> {
    let Some(node) = sel.nodes().first() else {
        return Vec::new();
    };

    let mut out = String::new();
    collect_rendered_text(node, &mut out);

    out.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn collect_rendered_text(node: &NodeRef, out: &mut String) {
    for child in node.children() {
        if child.is_text() {
            push_collapsed(&child.text(), out);
            continue;
        }
        if !child.is_element() {
            continue;
        }

        let tag = child
            .node_name()
            .map(|t| t.to_ascii_lowercase())
            .unwrap_or_default();

        if HIDDEN_ELEMENTS.contains(&tag.as_str()) {
            continue;
        }
        if tag == "br" {
            out.push('\n');
            continue;
        }

        let is_block = BLOCK_ELEMENTS.contains(&tag.as_str());
        if is_block {
            out.push('\n');
        }
        collect_rendered_text(&child, out);
        if is_block {
            out.push('\n');
        }
    }
}

fn push_collapsed(text: &str, out: &mut String) {
    if text.starts_with(char::is_whitespace) && !out.ends_with([' ', '\n']) {
        out.push(' ');
    }
    let mut words = text.split_whitespace().peekable();
    while let Some(word) = words.next() {
        out.push_str(word);
        if words.peek().is_some() {
            out.push(' ');
        }
    }
    if text.ends_with(char::is_whitespace) && !text.trim().is_empty() {
        out.push(' ');
    }
}

// === Tree Navigation ===

/// Get next element sibling (skipping text nodes)
#[must_use]
pub fn next_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.next_sibling();
        }
        None
    })
}

/// Direct element children with the given tag, in document order.
#[must_use]
pub fn children_with_tag<'a>(sel: &Selection<'a>, tag: &str) -> Vec<Selection<'a>> {
    sel.children()
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|child| tag_name(child).as_deref() == Some(tag))
        .collect()
}

// === Querying ===

/// Query single element by CSS selector, `None` when nothing matches.
#[must_use]
pub fn query_selector<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let found = sel.select_single(selector);
    found.exists().then_some(found)
}

/// Query all elements by CSS selector, one selection per node in document order.
#[must_use]
pub fn query_selector_all<'a>(sel: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    sel.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}
