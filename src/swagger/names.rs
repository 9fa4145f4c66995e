//! Route template to namespace identifier normalization.
//!
//! A route mask like `/search/{query}` names a nested namespace chain in the
//! generated declarations: `Search$Query`. Literal segments accumulate into
//! the current level; every `{param}` segment opens a new level, and levels
//! are joined with `$`. Within a level, non-alphanumeric characters act as
//! word boundaries and are dropped, with each word title-cased
//! (`foo-bar` becomes `FooBar`).
//!
//! The same normalization is applied to Route Tree keys and to the names the
//! annotator probes the declaration tree with, so matching is an exact,
//! case-sensitive string comparison.

/// Normalize a route or method template into a namespace identifier.
///
/// A template consisting only of `/` normalizes to the empty string.
pub fn normalize(template: &str) -> String {
    let mut levels: Vec<String> = Vec::new();

    for segment in template.split('/') {
        if segment.is_empty() {
            continue;
        }
        let (word, breaks_level) = match param_name(segment) {
            Some(param) => (param, true),
            None => (segment, false),
        };
        if breaks_level || levels.is_empty() {
            levels.push(String::new());
        }
        if let Some(level) = levels.last_mut() {
            push_title_cased(level, word);
        }
    }

    levels.join("$")
}

/// `{param}` segments name a path variable and start a new namespace level.
fn param_name(segment: &str) -> Option<&str> {
    segment.strip_prefix('{').and_then(|s| s.strip_suffix('}'))
}

/// Append `word` with each boundary-delimited run title-cased and the
/// boundaries themselves dropped.
fn push_title_cased(out: &mut String, word: &str) {
    let mut at_boundary = true;
    for c in word.chars() {
        if c.is_ascii_alphanumeric() {
            if at_boundary {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_boundary = false;
        } else {
            at_boundary = true;
        }
    }
}
