//! Event-driven XML documentation parser.

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, trace};

use super::comment::{ExceptionComment, ParameterComment, ResponseComment, XmlComment};
use super::cref::resolve_cref;
use super::options::ParseOptions;
use super::text::{TextBuilder, strip_tags};

/// Synthetic root wrapped around every comment so fragments parse as one document.
const ROOT: &str = "apidoc-root";

/// Parse raw documentation XML into an [`XmlComment`].
///
/// Returns `None` when no recognized section carries text. Malformed markup
/// never fails the parse: unknown tags are transparent, an end tag closes
/// everything opened after its start tag, and a bare `<` is read as text. A
/// fragment the reader cannot make sense of is stripped of tags and kept as
/// text of the open section, and reading resumes at the next section tag.
pub fn parse(raw: &str, options: &ParseOptions) -> Option<XmlComment> {
    let body = escape_stray_angles(strip_declaration(raw));
    let wrapped = format!("<{ROOT}>{body}</{ROOT}>");
    let mut parser = CommentParser::new(options);
    parser.run(&wrapped);
    parser.finish()
}

/// Tags that open a top-level section; reading resumes at these after a
/// malformed fragment.
const SECTION_TAGS: &[&str] = &[
    "summary",
    "remarks",
    "value",
    "returns",
    "example",
    "param",
    "typeparam",
    "exception",
    "response",
    "seealso",
    "deprecated",
];

fn strip_declaration(raw: &str) -> &str {
    let trimmed = raw.trim_start();
    if trimmed.starts_with("<?xml") {
        if let Some(end) = trimmed.find("?>") {
            return &trimmed[end + 2..];
        }
    }
    raw
}

/// Escape every `<` that cannot start markup (`a < b`, `i<0`), leaving
/// CDATA sections untouched.
fn escape_stray_angles(raw: &str) -> Cow<'_, str> {
    let opens_markup = |rest: &str| {
        rest.chars()
            .next()
            .is_some_and(|c| c.is_alphabetic() || matches!(c, '_' | '/' | '!' | '?'))
    };
    if !raw.match_indices('<').any(|(at, _)| !opens_markup(&raw[at + 1..])) {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len() + 8);
    let mut rest = raw;
    while let Some(at) = rest.find('<') {
        out.push_str(&rest[..at]);
        let tail = &rest[at..];
        if tail.starts_with("<![CDATA[") {
            let end = tail.find("]]>").map_or(tail.len(), |end| end + 3);
            out.push_str(&tail[..end]);
            rest = &tail[end..];
        } else if opens_markup(&tail[1..]) {
            out.push('<');
            rest = &tail[1..];
        } else {
            out.push_str("&lt;");
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Byte offset of the next section start tag at or after `from`.
fn next_section_start(input: &str, from: usize) -> Option<usize> {
    let tail = input.get(from..)?;
    tail.match_indices('<').map(|(at, _)| from + at).find(|&at| {
        let tag = &input[at + 1..];
        SECTION_TAGS.iter().any(|name| {
            tag.strip_prefix(name).is_some_and(|after| {
                after.starts_with(|c: char| c == '>' || c == '/' || c.is_ascii_whitespace())
            })
        })
    })
}

fn to_offset(position: u64) -> usize {
    usize::try_from(position).unwrap_or(usize::MAX)
}

#[derive(Debug)]
enum SectionKind {
    Summary,
    Remarks,
    Value,
    Returns,
    Example,
    Param { name: String, example: Option<String> },
    TypeParam { name: String },
    Exception { cref: String },
    Response { code: String, example: Option<String> },
    SeeAlso { target: String, is_link: bool },
    Deprecated,
}

#[derive(Debug)]
struct OpenSection {
    kind: SectionKind,
    text: TextBuilder,
}

/// What to do when an open element closes.
#[derive(Debug)]
enum Frame {
    Section,
    Transparent,
    InlineCode,
    CodeBlock(String),
    Paragraph,
    Term,
    Link { href: String },
    SeeLabel { fallback: String, mark: usize },
}

struct CommentParser<'o> {
    options: &'o ParseOptions,
    comment: XmlComment,
    section: Option<OpenSection>,
    /// Text outside every recognized section.
    loose: TextBuilder,
    frames: Vec<(String, Frame)>,
}

impl<'o> CommentParser<'o> {
    fn new(options: &'o ParseOptions) -> Self {
        Self {
            options,
            comment: XmlComment::default(),
            section: None,
            loose: TextBuilder::new(),
            frames: Vec::new(),
        }
    }

    fn run(&mut self, input: &str) {
        let mut from = 0;
        while let Some(resume) = self.read_from(input, from) {
            from = resume;
        }
    }

    /// Read events starting at byte `from`. Returns where to resume when a
    /// malformed fragment interrupted reading.
    fn read_from(&mut self, input: &str, from: usize) -> Option<usize> {
        let mut reader = Reader::from_str(input.get(from..)?);
        reader.config_mut().check_end_names = false;

        loop {
            let at = from.saturating_add(to_offset(reader.buffer_position()));
            match reader.read_event() {
                Ok(Event::Start(ref e) | Event::Empty(ref e)) if e.contains(&b'<') => {
                    debug!("unterminated tag at position {at}");
                    return Some(self.recover(input, at));
                }
                Ok(Event::Start(ref e)) => self.handle_start(e, false),
                Ok(Event::Empty(ref e)) => self.handle_start(e, true),
                Ok(Event::End(ref e)) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    self.handle_end(&name);
                }
                Ok(Event::Text(ref t)) => {
                    let text = match t.unescape() {
                        Ok(text) => text.into_owned(),
                        Err(e) => {
                            debug!("keeping raw text after unescape failure: {e}");
                            String::from_utf8_lossy(t).into_owned()
                        }
                    };
                    self.push_text(&text);
                }
                Ok(Event::CData(ref c)) => {
                    let text = String::from_utf8_lossy(c).into_owned();
                    self.push_text(&text);
                }
                Ok(Event::Eof) => return None,
                Ok(_) => {}
                Err(e) => {
                    debug!("malformed documentation at position {at}: {e}");
                    return Some(self.recover(input, at));
                }
            }
        }
    }

    /// Keep the malformed fragment at `at` as plain text of the open section,
    /// close everything, and return the offset of the next section tag.
    fn recover(&mut self, input: &str, at: usize) -> usize {
        let resume = next_section_start(input, at.saturating_add(1)).unwrap_or(input.len());
        let fragment = strip_tags(input.get(at..resume).unwrap_or_default());
        match unescape(&fragment) {
            Ok(text) => self.push_text(&text),
            Err(_) => self.push_text(&fragment),
        }

        while let Some((_, frame)) = self.frames.pop() {
            self.close_frame(frame);
        }
        resume
    }

    fn handle_start(&mut self, e: &BytesStart<'_>, empty: bool) {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();

        // Everything inside <code> is literal text.
        if self.code_buffer().is_some() {
            if !empty {
                self.frames.push((name, Frame::Transparent));
            }
            return;
        }

        if let Some(kind) = self.section_kind(&name, e) {
            if self.section.is_some() {
                trace!("nested <{name}> treated as text");
                if !empty {
                    self.frames.push((name, Frame::Transparent));
                }
                return;
            }
            self.section = Some(OpenSection {
                kind,
                text: TextBuilder::new(),
            });
            if empty {
                self.close_section();
            } else {
                self.frames.push((name, Frame::Section));
            }
            return;
        }

        let frame = match name.as_str() {
            "see" => self.start_see(e, empty),
            "paramref" | "typeparamref" => {
                if let Some(target) = attribute(e, "name") {
                    self.push_text(&format!("`{target}`"));
                }
                Frame::Transparent
            }
            "c" => {
                if !empty {
                    self.push_text("`");
                }
                Frame::InlineCode
            }
            "code" => Frame::CodeBlock(String::new()),
            "para" | "list" => {
                self.target().paragraph_break();
                Frame::Paragraph
            }
            "br" => {
                self.target().line_break();
                Frame::Transparent
            }
            "item" => {
                self.target().line_break();
                self.push_text("- ");
                Frame::Transparent
            }
            "term" => Frame::Term,
            "inheritdoc" | "include" => {
                trace!("ignoring unexpanded <{name}> directive");
                Frame::Transparent
            }
            _ => Frame::Transparent,
        };

        if !empty {
            self.frames.push((name, frame));
        }
    }

    fn start_see(&mut self, e: &BytesStart<'_>, empty: bool) -> Frame {
        if let Some(word) = attribute(e, "langword") {
            self.push_text(&format!("`{word}`"));
            return Frame::Transparent;
        }
        if let Some(cref) = attribute(e, "cref") {
            let target = resolve_cref(&cref, self.options.short_cref_names);
            if !target.is_resolved() {
                trace!(cref = %cref, "unresolved cross-reference");
            }
            if empty {
                self.push_text(target.display());
                return Frame::Transparent;
            }
            return Frame::SeeLabel {
                fallback: target.display().to_string(),
                mark: self.target().visible_len(),
            };
        }
        if let Some(href) = attribute(e, "href") {
            if empty {
                self.push_text(&href);
                return Frame::Transparent;
            }
            self.push_text("[");
            return Frame::Link { href };
        }
        Frame::Transparent
    }

    fn section_kind(&self, name: &str, e: &BytesStart<'_>) -> Option<SectionKind> {
        let kind = match name {
            "summary" => SectionKind::Summary,
            "remarks" => SectionKind::Remarks,
            "value" => SectionKind::Value,
            "returns" => SectionKind::Returns,
            "example" => SectionKind::Example,
            "param" => SectionKind::Param {
                name: attribute(e, "name").unwrap_or_default(),
                example: attribute(e, "example"),
            },
            "typeparam" => SectionKind::TypeParam {
                name: attribute(e, "name").unwrap_or_default(),
            },
            "exception" => SectionKind::Exception {
                cref: attribute(e, "cref")
                    .map(|cref| {
                        resolve_cref(&cref, self.options.short_cref_names)
                            .display()
                            .to_string()
                    })
                    .unwrap_or_default(),
            },
            "response" => SectionKind::Response {
                code: attribute(e, "code").unwrap_or_default(),
                example: attribute(e, "example"),
            },
            "seealso" => match (attribute(e, "cref"), attribute(e, "href")) {
                (Some(cref), _) => SectionKind::SeeAlso {
                    target: resolve_cref(&cref, self.options.short_cref_names)
                        .display()
                        .to_string(),
                    is_link: false,
                },
                (None, Some(href)) => SectionKind::SeeAlso {
                    target: href,
                    is_link: true,
                },
                (None, None) => SectionKind::SeeAlso {
                    target: String::new(),
                    is_link: false,
                },
            },
            "deprecated" => SectionKind::Deprecated,
            _ => return None,
        };
        Some(kind)
    }

    /// Close the innermost open element named `name`, and everything opened
    /// inside it. End tags with no open counterpart are ignored.
    fn handle_end(&mut self, name: &str) {
        let Some(depth) = self.frames.iter().rposition(|(open, _)| open == name) else {
            trace!("ignoring unmatched </{name}>");
            return;
        };
        while self.frames.len() > depth {
            if let Some((_, frame)) = self.frames.pop() {
                self.close_frame(frame);
            }
        }
    }

    fn close_frame(&mut self, frame: Frame) {
        match frame {
            Frame::Section => self.close_section(),
            Frame::Transparent => {}
            Frame::InlineCode => self.push_text("`"),
            Frame::CodeBlock(code) => self.target().push_code(&code),
            Frame::Paragraph => self.target().paragraph_break(),
            Frame::Term => self.push_text(": "),
            Frame::Link { href } => self.push_text(&format!("]({href})")),
            Frame::SeeLabel { fallback, mark } => {
                if self.target().visible_len() == mark {
                    self.push_text(&fallback);
                }
            }
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(code) = self.code_buffer() {
            code.push_str(text);
            return;
        }
        self.target().push_text(text);
    }

    fn code_buffer(&mut self) -> Option<&mut String> {
        self.frames.iter_mut().rev().find_map(|(_, frame)| match frame {
            Frame::CodeBlock(code) => Some(code),
            _ => None,
        })
    }

    fn target(&mut self) -> &mut TextBuilder {
        match self.section.as_mut() {
            Some(section) => &mut section.text,
            None => &mut self.loose,
        }
    }

    fn close_section(&mut self) {
        let Some(section) = self.section.take() else {
            return;
        };
        let text = section.text.finish(self.options.normalize_whitespace);
        let comment = &mut self.comment;

        match section.kind {
            SectionKind::Summary => append(&mut comment.summary, text),
            SectionKind::Remarks => append(&mut comment.description, text),
            SectionKind::Value => append(&mut comment.value, text),
            SectionKind::Returns => append(&mut comment.returns, text),
            SectionKind::Example => comment.examples.extend(text),
            SectionKind::Param { name, example } => {
                if text.is_some() || example.is_some() {
                    comment.parameters.push(ParameterComment {
                        name,
                        description: text.unwrap_or_default(),
                        example,
                    });
                }
            }
            SectionKind::TypeParam { name } => {
                if let Some(description) = text {
                    comment.type_parameters.push(ParameterComment {
                        name,
                        description,
                        example: None,
                    });
                }
            }
            SectionKind::Exception { cref } => {
                if !cref.is_empty() || text.is_some() {
                    comment.exceptions.push(ExceptionComment {
                        cref,
                        description: text.unwrap_or_default(),
                    });
                }
            }
            SectionKind::Response { code, example } => {
                if !code.is_empty() {
                    comment.responses.push(ResponseComment {
                        code,
                        description: text.unwrap_or_default(),
                        example,
                    });
                }
            }
            SectionKind::SeeAlso { target, is_link } => {
                let entry = match (text, is_link) {
                    (Some(label), true) => format!("[{label}]({target})"),
                    (Some(label), false) if target.is_empty() => label,
                    _ => target,
                };
                if !entry.is_empty() {
                    comment.see_also.push(entry);
                }
            }
            SectionKind::Deprecated => comment.deprecated = true,
        }
    }

    fn finish(mut self) -> Option<XmlComment> {
        self.close_section();
        let loose = std::mem::take(&mut self.loose).finish(self.options.normalize_whitespace);
        if self.comment.summary.is_none() {
            self.comment.summary = loose;
        }
        if self.comment.is_empty() {
            None
        } else {
            Some(self.comment)
        }
    }
}

fn append(slot: &mut Option<String>, text: Option<String>) {
    let Some(text) = text else {
        return;
    };
    match slot {
        Some(existing) => {
            existing.push_str("\n\n");
            existing.push_str(&text);
        }
        None => *slot = Some(text),
    }
}

fn attribute(e: &BytesStart<'_>, key: &str) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key.as_bytes())
        .map(|attr| match attr.unescape_value() {
            Ok(value) => value.into_owned(),
            Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
        })
}
