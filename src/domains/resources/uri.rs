//! URI template matching.
//!
//! Supports the subset of RFC 6570 used by this server: literal text with
//! `{name}` placeholders, each binding one non-empty path segment.

use std::collections::HashMap;

/// Match `uri` against `template`, returning the bound placeholders.
///
/// Returns `None` when the literal parts differ, a placeholder would be empty,
/// or a placeholder would have to span a `/`.
pub fn match_template(template: &str, uri: &str) -> Option<HashMap<String, String>> {
    let mut params = HashMap::new();
    let mut template = template;
    let mut rest = uri;

    while let Some(open) = template.find('{') {
        rest = rest.strip_prefix(&template[..open])?;

        let close = open + template[open..].find('}')?;
        let name = &template[open + 1..close];
        template = &template[close + 1..];

        let end = rest.find('/').unwrap_or(rest.len());
        if end == 0 {
            return None;
        }
        params.insert(name.to_string(), rest[..end].to_string());
        rest = &rest[end..];
    }

    (template == rest).then_some(params)
}
