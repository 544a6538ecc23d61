//! Section text accumulation and whitespace normalization.

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Break {
    Line,
    Paragraph,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Text(String),
    Code(String),
    Break(Break),
}

/// Accumulates the text of one documentation section.
///
/// Inline text is collected as-is and normalized when the section closes;
/// code blocks bypass normalization apart from dedent.
#[derive(Clone, Debug, Default)]
pub(crate) struct TextBuilder {
    segments: Vec<Segment>,
    visible: usize,
}

impl TextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.visible += text.chars().filter(|c| !c.is_whitespace()).count();
        match self.segments.last_mut() {
            Some(Segment::Text(existing)) => existing.push_str(text),
            _ => self.segments.push(Segment::Text(text.to_string())),
        }
    }

    pub fn push_code(&mut self, code: &str) {
        let code = dedent(code);
        if code.is_empty() {
            return;
        }
        self.visible += code.chars().filter(|c| !c.is_whitespace()).count();
        self.segments.push(Segment::Code(code));
    }

    pub fn line_break(&mut self) {
        self.segments.push(Segment::Break(Break::Line));
    }

    pub fn paragraph_break(&mut self) {
        self.segments.push(Segment::Break(Break::Paragraph));
    }

    /// Count of non-whitespace characters pushed so far.
    pub fn visible_len(&self) -> usize {
        self.visible
    }

    /// Render the section; `None` when it holds no visible text.
    pub fn finish(self, normalize: bool) -> Option<String> {
        let mut out = String::new();
        let mut pending: Option<Break> = None;
        let mut current = String::new();

        for segment in self.segments {
            match segment {
                Segment::Text(text) => current.push_str(&text),
                Segment::Break(kind) => {
                    flush(&mut out, &mut current, &mut pending, normalize);
                    pending = pending.max(Some(kind));
                }
                Segment::Code(code) => {
                    flush(&mut out, &mut current, &mut pending, normalize);
                    pending = pending.max(Some(Break::Line));
                    append_block(&mut out, &code, &mut pending);
                    pending = Some(Break::Line);
                }
            }
        }
        flush(&mut out, &mut current, &mut pending, normalize);

        if out.is_empty() { None } else { Some(out) }
    }
}

fn flush(out: &mut String, current: &mut String, pending: &mut Option<Break>, normalize: bool) {
    let block = if normalize {
        collapse_whitespace(current)
    } else {
        current.trim().to_string()
    };
    current.clear();
    if !block.is_empty() {
        append_block(out, &block, pending);
    }
}

fn append_block(out: &mut String, block: &str, pending: &mut Option<Break>) {
    if !out.is_empty() {
        match pending.unwrap_or(Break::Line) {
            Break::Line => out.push('\n'),
            Break::Paragraph => out.push_str("\n\n"),
        }
    }
    out.push_str(block);
    *pending = None;
}

/// Collapse every whitespace run to a single space and trim the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove the common leading indentation and surrounding blank lines.
pub(crate) fn dedent(code: &str) -> String {
    let lines: Vec<&str> = code.lines().collect();
    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());
    let (Some(first), Some(last)) = (first, last) else {
        return String::new();
    };
    let body = &lines[first..=last];

    let indent = body
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);

    body.iter()
        .map(|l| l.get(indent..).map_or_else(|| l.trim(), str::trim_end))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop anything that looks like a tag, keeping stray `<` characters.
pub(crate) fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(idx) = rest.find('<') {
        out.push_str(&rest[..idx]);
        let after = &rest[idx + 1..];
        let looks_like_tag = after
            .chars()
            .next()
            .is_some_and(|c| c == '/' || c == '!' || c == '?' || c.is_ascii_alphabetic());
        match after.find('>') {
            Some(end) if looks_like_tag => rest = &after[end + 1..],
            _ => {
                out.push('<');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Gets the\n      order   total. "), "Gets the order total.");
    }

    #[test]
    fn test_paragraphs_and_lines() {
        let mut builder = TextBuilder::new();
        builder.push_text("First  line.");
        builder.paragraph_break();
        builder.push_text("Second");
        builder.line_break();
        builder.push_text("- item");
        assert_eq!(
            builder.finish(true).as_deref(),
            Some("First line.\n\nSecond\n- item")
        );
    }

    #[test]
    fn test_code_is_dedented_not_collapsed() {
        let mut builder = TextBuilder::new();
        builder.push_text("Usage:");
        builder.push_code("\n    var x = new Order();\n    x.Add(  1 );\n");
        assert_eq!(
            builder.finish(true).as_deref(),
            Some("Usage:\nvar x = new Order();\nx.Add(  1 );")
        );
    }

    #[test]
    fn test_blank_builder_finishes_to_none() {
        let mut builder = TextBuilder::new();
        builder.push_text("   \n  ");
        builder.paragraph_break();
        assert_eq!(builder.visible_len(), 0);
        assert_eq!(builder.finish(true), None);
    }

    #[test]
    fn test_dedent_keeps_relative_indent() {
        assert_eq!(dedent("  if (x)\n    y();\n"), "if (x)\n  y();");
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("a < b</summary><returns>c</returns>"), "a < bc");
        assert_eq!(strip_tags("<see cref=\"T:X\"/>done"), "done");
        assert_eq!(strip_tags("tail <unterminated"), "tail <unterminated");
    }
}
