//! Minimal markup inspection
//!
//! The sniffer only needs one fact out of a markup document: the tag name of
//! the root element. This walks past the XML prolog, comments and doctype and
//! reads the first element name, without building a tree.

/// Tag name of the root element of a markup fragment, if there is one
///
/// Returns the name without namespace prefix stripping (`svg:svg` is returned
/// as-is) and without validating the rest of the document.
pub fn root_element_name(text: &str) -> Option<&str> {
    let mut rest = text.trim_start_matches('\u{FEFF}').trim_start();
    loop {
        if let Some(after) = rest.strip_prefix("<?") {
            rest = after.split_once("?>")?.1.trim_start();
        } else if let Some(after) = rest.strip_prefix("<!--") {
            rest = after.split_once("-->")?.1.trim_start();
        } else if let Some(after) = rest.strip_prefix("<!") {
            rest = after.split_once('>')?.1.trim_start();
        } else {
            break;
        }
    }
    let after = rest.strip_prefix('<')?;
    let end = after
        .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
        .unwrap_or(after.len());
    let name = &after[..end];
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
