//! Cross-reference (`cref`) resolution.
//!
//! The compiler writes resolved references as documentation IDs
//! (`T:Ns.Type`, `M:Ns.Type.Run(System.String)`) and unresolved ones with a
//! `!:` marker. Resolved IDs render as display names; anything else keeps its
//! literal text.

/// The member category named by a documentation ID prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CrefKind {
    Namespace,
    Type,
    Method,
    Property,
    Field,
    Event,
}

impl CrefKind {
    fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            'N' => Some(CrefKind::Namespace),
            'T' => Some(CrefKind::Type),
            'M' => Some(CrefKind::Method),
            'P' => Some(CrefKind::Property),
            'F' => Some(CrefKind::Field),
            'E' => Some(CrefKind::Event),
            _ => None,
        }
    }
}

/// Outcome of resolving a `cref` attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CrefTarget {
    Resolved { kind: CrefKind, display: String },
    /// Literal reference text, minus any `!:` marker.
    Unresolved(String),
}

impl CrefTarget {
    pub fn display(&self) -> &str {
        match self {
            CrefTarget::Resolved { display, .. } => display,
            CrefTarget::Unresolved(text) => text,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, CrefTarget::Resolved { .. })
    }
}

/// Resolve a `cref` value to a display name.
pub fn resolve_cref(cref: &str, short_names: bool) -> CrefTarget {
    let cref = cref.trim();
    if let Some(literal) = cref.strip_prefix("!:") {
        return CrefTarget::Unresolved(literal.to_string());
    }

    let mut chars = cref.chars();
    let (Some(prefix), Some(':')) = (chars.next(), chars.next()) else {
        return CrefTarget::Unresolved(cref.to_string());
    };
    let Some(kind) = CrefKind::from_prefix(prefix) else {
        return CrefTarget::Unresolved(cref.to_string());
    };

    let body = &cref[2..];
    if !is_well_formed(body) {
        return CrefTarget::Unresolved(cref.to_string());
    }

    CrefTarget::Resolved {
        kind,
        display: render(body, short_names),
    }
}

fn is_well_formed(body: &str) -> bool {
    if body.is_empty() || body.starts_with('.') || body.chars().any(char::is_whitespace) {
        return false;
    }
    let mut depth: i32 = 0;
    for c in body.chars() {
        match c {
            '(' | '{' | '[' => depth += 1,
            ')' | '}' | ']' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

fn render(body: &str, short_names: bool) -> String {
    let (path, parameters) = match body.find('(') {
        Some(idx) => (&body[..idx], &body[idx..]),
        None => (body, ""),
    };
    let path = path.strip_suffix(".#ctor").unwrap_or(path);
    let path = if short_names {
        last_segment(path)
    } else {
        path
    };

    format!("{path}{parameters}")
        .replace('{', "<")
        .replace('}', ">")
}

/// Last `.`-separated segment, ignoring dots inside generic braces.
fn last_segment(path: &str) -> &str {
    let mut depth = 0usize;
    let mut start = 0;
    for (idx, c) in path.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => start = idx + 1,
            _ => {}
        }
    }
    &path[start..]
}
