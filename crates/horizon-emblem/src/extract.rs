//! SVG path data extraction.
//!
//! Brand icons ship as full SVG documents, but rendering only needs the
//! drawing commands of the first `path` element. [`path_data`] pulls that
//! `d` attribute out of a document, preferring elements in the document's
//! default namespace and falling back to a namespace-ignoring match so
//! documents without an `xmlns` declaration still work.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

/// Extracts the `d` attribute of the first `path` element in an SVG document.
///
/// The first `path` carrying a `d` attribute in the document's default
/// namespace wins; if no element matches there, the first `path` with a `d`
/// in any namespace is used. Returns `None` when the document is not
/// well-formed XML or no matching element exists. Failures are logged at
/// warn level, never propagated.
pub fn path_data(svg: &str) -> Option<String> {
    match scan(svg) {
        Ok(Some(data)) => Some(data),
        Ok(None) => {
            tracing::warn!("SVG has no path element with a 'd' attribute");
            None
        }
        Err(e) => {
            tracing::warn!("SVG parse error: {}", e);
            None
        }
    }
}

/// Scans the whole document in one pass, recording the first matching
/// `path` in the default namespace and the first in any namespace.
///
/// The entire document must parse; a syntax error after a match still
/// discards the result.
fn scan(svg: &str) -> quick_xml::Result<Option<String>> {
    let mut reader = NsReader::from_str(svg);
    let mut default_ns: Option<Vec<u8>> = None;
    let mut saw_root = false;
    let mut first_in_default_ns: Option<String> = None;
    let mut first_anywhere: Option<String> = None;

    loop {
        let (resolution, event) = reader.read_resolved_event()?;
        match event {
            Event::Start(element) | Event::Empty(element) => {
                if !saw_root {
                    saw_root = true;
                    default_ns = declared_default_namespace(&element)?;
                }
                if element.local_name().as_ref() != b"path" {
                    continue;
                }
                let Some(data) = d_attribute(&element)? else {
                    continue;
                };
                if first_anywhere.is_none() {
                    first_anywhere = Some(data.clone());
                }
                if first_in_default_ns.is_none()
                    && let ResolveResult::Bound(Namespace(uri)) = resolution
                    && Some(uri) == default_ns.as_deref()
                {
                    first_in_default_ns = Some(data);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(first_in_default_ns.or(first_anywhere))
}

/// Reads the `xmlns` attribute off the root element, if declared.
fn declared_default_namespace(element: &BytesStart<'_>) -> quick_xml::Result<Option<Vec<u8>>> {
    for attr in element.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"xmlns" {
            return Ok(Some(attr.value.to_vec()));
        }
    }
    Ok(None)
}

/// Reads the unescaped `d` attribute off an element, if present.
fn d_attribute(element: &BytesStart<'_>) -> quick_xml::Result<Option<String>> {
    for attr in element.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"d" {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMESPACED: &str =
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M1 2"/></svg>"#;
    const PLAIN: &str = r#"<svg><path d="M3 4"/></svg>"#;

    #[test]
    fn test_extracts_from_namespaced_document() {
        assert_eq!(path_data(NAMESPACED).as_deref(), Some("M1 2"));
    }

    #[test]
    fn test_extracts_from_plain_document() {
        assert_eq!(path_data(PLAIN).as_deref(), Some("M3 4"));
    }

    #[test]
    fn test_prefixed_elements_match_by_local_name() {
        let svg = r#"<s:svg xmlns:s="http://www.w3.org/2000/svg"><s:path d="M7 8"/></s:svg>"#;
        assert_eq!(path_data(svg).as_deref(), Some("M7 8"));
    }

    #[test]
    fn test_default_namespace_is_preferred() {
        let svg = concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:o="urn:other">"#,
            r#"<o:path d="M9 9"/><path d="M10 10"/></svg>"#,
        );
        assert_eq!(path_data(svg).as_deref(), Some("M10 10"));
    }

    #[test]
    fn test_first_path_wins() {
        let svg = r#"<svg><path d="M1 1"/><path d="M2 2"/></svg>"#;
        assert_eq!(path_data(svg).as_deref(), Some("M1 1"));
    }

    #[test]
    fn test_path_without_d_is_skipped() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><path fill="red"/><path d="M5 6"/></svg>"#;
        assert_eq!(path_data(svg).as_deref(), Some("M5 6"));
    }

    #[test]
    fn test_no_path_element() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><rect width="4" height="4"/></svg>"#;
        assert_eq!(path_data(svg), None);
    }

    #[test]
    fn test_malformed_document_discards_match() {
        // The path parses before the mismatched close tag is reached.
        let svg = r#"<svg><path d="M1 2"></svg>"#;
        assert_eq!(path_data(svg), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(path_data(""), None);
    }

    #[test]
    fn test_attribute_value_is_unescaped() {
        let svg = r#"<svg><path d="M1&#32;2"/></svg>"#;
        assert_eq!(path_data(svg).as_deref(), Some("M1 2"));
    }
}
