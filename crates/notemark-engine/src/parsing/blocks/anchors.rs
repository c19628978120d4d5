use std::collections::{HashMap, HashSet};

/// Id used when a heading has no usable characters.
pub const EMPTY_ANCHOR: &str = "section";

/// Turns heading text into an anchor id.
///
/// Lowercases, keeps alphanumerics, collapses whitespace and `-` runs into
/// one `-`, drops everything else.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut dash = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if dash && !out.is_empty() {
                out.push('-');
            }
            dash = false;
            out.extend(c.to_lowercase());
        } else if c.is_whitespace() || c == '-' {
            dash = true;
        }
    }
    if out.is_empty() {
        out.push_str(EMPTY_ANCHOR);
    }
    out
}

/// Hands out unique anchor ids in document order.
#[derive(Debug, Default)]
pub struct AnchorRegistry {
    used: HashSet<String>,
    next_suffix: HashMap<String, usize>,
}

impl AnchorRegistry {
    /// Claims the slug of `text`, suffixing `-1`, `-2`, ... on collisions.
    pub fn claim(&mut self, text: &str) -> String {
        let base = slugify(text);
        if self.used.insert(base.clone()) {
            return base;
        }
        let n = self.next_suffix.entry(base.clone()).or_insert(1);
        loop {
            let candidate = format!("{base}-{n}");
            *n += 1;
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}
