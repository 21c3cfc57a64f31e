//! Minimal HTML element scanner.
//!
//! Builds a lightweight element tree from a fragment so headings and their
//! sibling elements can be located. This is a tolerant tag scanner, not a
//! conforming HTML parser: unclosed elements are closed at the end of their
//! parent or of the input, stray end tags are ignored, and markup is kept
//! as the original source slices.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<!--[\s\S]*?-->|<!\w[^>]*>|<(/?)([a-zA-Z][a-zA-Z0-9-]*)((?:[^>"']|"[^"]*"|'[^']*')*?)(/?)>"#)
        .unwrap()
});

static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

/// Start tags that close an open `<p>`.
const CLOSES_PARAGRAPH: &[&str] = &[
    "address", "article", "aside", "blockquote", "details", "dialog", "div", "dl", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hgroup", "hr", "main", "menu", "nav", "ol", "p", "pre", "section", "table", "ul",
];

/// Open elements an implied end tag does not look past.
const SCOPE_BOUNDARIES: &[&str] = &[
    "applet", "button", "caption", "html", "marquee", "object", "table", "td", "template", "th",
];

/// An element in the scanned tree.
#[derive(Debug, Clone)]
pub struct HtmlElement {
    /// Lowercase tag name (empty for the synthetic root)
    pub name: String,
    /// Byte offset of the start tag
    pub start: usize,
    /// Byte offset just past the end tag (or where the element was closed)
    pub end: usize,
    /// Child element ids, in document order
    pub children: Vec<usize>,
    /// Parent element id (None for the root)
    pub parent: Option<usize>,
    /// Whether the source itself closes the element (end tag, void or `/>`)
    pub explicit_end: bool,
}

impl HtmlElement {
    /// Check if this is an `<h1>`, `<h2>` or `<h3>` element.
    pub fn is_heading(&self) -> bool {
        matches!(self.name.as_str(), "h1" | "h2" | "h3")
    }
}

fn is_heading_name(name: &str) -> bool {
    matches!(name, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

/// Depth in `open` of the element a start tag implicitly closes, if any.
///
/// Block starts close a `<p>`, `<li>` closes a `<li>` (not across a list),
/// `<dt>`/`<dd>` close either.
fn implied_end(elements: &[HtmlElement], open: &[usize], name: &str) -> Option<usize> {
    let (targets, boundaries): (&[&str], &[&str]) = if CLOSES_PARAGRAPH.contains(&name) {
        (&["p"], &[])
    } else if name == "li" {
        (&["li"], &["ol", "ul"])
    } else if name == "dt" || name == "dd" {
        (&["dt", "dd"], &["dl"])
    } else {
        return None;
    };

    for (depth, &id) in open.iter().enumerate().skip(1).rev() {
        let open_name = elements[id].name.as_str();
        if targets.contains(&open_name) {
            return Some(depth);
        }
        if SCOPE_BOUNDARIES.contains(&open_name) || boundaries.contains(&open_name) {
            return None;
        }
    }
    None
}

/// Close every open element from `depth` up at byte offset `at`.
fn close_from(elements: &mut [HtmlElement], open: &mut Vec<usize>, depth: usize, at: usize) {
    for &id in &open[depth..] {
        elements[id].end = at;
    }
    open.truncate(depth);
}

/// A scanned HTML fragment.
#[derive(Debug, Clone)]
pub struct HtmlFragment<'a> {
    source: &'a str,
    /// Arena of elements; index 0 is the synthetic root, the rest are in
    /// document order.
    elements: Vec<HtmlElement>,
}

impl<'a> HtmlFragment<'a> {
    /// Scan a fragment.
    pub fn parse(source: &'a str) -> Self {
        let mut elements = vec![HtmlElement {
            name: String::new(),
            start: 0,
            end: source.len(),
            children: Vec::new(),
            parent: None,
            explicit_end: true,
        }];
        let mut open: Vec<usize> = vec![0];
        let mut pos = 0;

        while let Some(caps) = TAG.captures_at(source, pos) {
            let whole = caps.get(0).map_or(pos..pos, |m| m.range());
            pos = whole.end.max(pos + 1).min(source.len());

            let Some(name) = caps.get(2) else {
                // comment or doctype
                continue;
            };
            let name = name.as_str().to_lowercase();
            let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
            let self_closing = caps.get(4).is_some_and(|m| !m.as_str().is_empty());

            if closing {
                if let Some(depth) = open.iter().rposition(|&id| elements[id].name == name) {
                    if depth == 0 {
                        continue;
                    }
                    let id = open[depth];
                    close_from(&mut elements, &mut open, depth, whole.start);
                    elements[id].end = whole.end;
                    elements[id].explicit_end = true;
                }
                continue;
            }

            if let Some(depth) = implied_end(&elements, &open, &name) {
                close_from(&mut elements, &mut open, depth, whole.start);
            }
            if is_heading_name(&name) {
                let depth = open.len() - 1;
                if depth > 0 && is_heading_name(&elements[open[depth]].name) {
                    close_from(&mut elements, &mut open, depth, whole.start);
                }
            }

            let parent = open.last().copied().unwrap_or(0);
            let id = elements.len();
            elements.push(HtmlElement {
                name: name.clone(),
                start: whole.start,
                end: whole.end,
                children: Vec::new(),
                parent: Some(parent),
                explicit_end: false,
            });
            elements[parent].children.push(id);

            if self_closing || VOID_ELEMENTS.contains(&name.as_str()) {
                elements[id].explicit_end = true;
                continue;
            }

            if RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
                let close = format!("</{}", name);
                let rest = source[pos..].to_ascii_lowercase();
                match rest.find(&close) {
                    Some(offset) => {
                        let close_start = pos + offset;
                        let close_end = source[close_start..]
                            .find('>')
                            .map_or(source.len(), |i| close_start + i + 1);
                        elements[id].end = close_end;
                        elements[id].explicit_end = true;
                        pos = close_end;
                    }
                    None => {
                        elements[id].end = source.len();
                        pos = source.len();
                    }
                }
                continue;
            }

            open.push(id);
        }

        for &id in &open[1..] {
            elements[id].end = source.len();
        }

        Self { source, elements }
    }

    /// Get an element by id.
    pub fn element(&self, id: usize) -> &HtmlElement {
        &self.elements[id]
    }

    /// Number of elements, excluding the synthetic root.
    pub fn len(&self) -> usize {
        self.elements.len() - 1
    }

    /// Check if the fragment contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ids of `<h1>`..`<h3>` elements at any depth, in document order.
    pub fn headings(&self) -> impl Iterator<Item = usize> + '_ {
        (1..self.elements.len()).filter(move |&id| self.elements[id].is_heading())
    }

    /// Ids of the element siblings that follow `id` within its parent.
    pub fn following_siblings(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        let siblings: &[usize] = self.elements[id]
            .parent
            .map(|parent| self.elements[parent].children.as_slice())
            .unwrap_or(&[]);
        let skip = siblings.iter().position(|&s| s == id).map_or(siblings.len(), |i| i + 1);
        siblings[skip..].iter().copied()
    }

    /// Markup of an element, including its tags.
    ///
    /// Elements closed implicitly get their end tag appended.
    pub fn outer_html(&self, id: usize) -> Cow<'a, str> {
        let element = &self.elements[id];
        let markup = &self.source[element.start..element.end];
        if element.explicit_end {
            Cow::Borrowed(markup)
        } else {
            Cow::Owned(format!("{}</{}>", markup, element.name))
        }
    }

    /// Text content of an element with tags stripped and common entities decoded.
    pub fn text_content(&self, id: usize) -> String {
        decode_entities(&ANY_TAG.replace_all(&self.outer_html(id), ""))
    }
}

/// Decode the handful of entities that commonly appear in headings.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
