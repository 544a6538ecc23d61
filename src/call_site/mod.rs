//! OpenAPI registration call-site classification.
//!
//! A registration call has four overloads. The generator must know which one
//! a call site uses to pick the matching interception template, and that is
//! decided purely from the argument list shape:
//!
//! | arguments | first argument | variant |
//! |---|---|---|
//! | 0 | | [`OverloadVariant::NoArguments`] |
//! | 1 | literal | [`OverloadVariant::DocumentNameOnly`] |
//! | 1 | expression | [`OverloadVariant::ConfigureOptionsOnly`] |
//! | 2 | | [`OverloadVariant::DocumentNameAndConfigureOptions`] |

mod error;
pub mod lexer;
mod location;


use tracing::trace;

use crate::base::constants::ADD_OPENAPI_METHOD;
use lexer::{CallToken, Lexeme, tokenize};

pub use error::ClassifyError;
pub use location::InterceptableLocation;

/// Syntactic shape of one call argument.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Argument {
    /// A literal expression (`"v1"`, `42`, `null`, ...).
    Literal(String),
    /// Any other expression (lambdas, identifiers, invocations, ...).
    Expression(String),
}

impl Argument {
    pub fn is_literal(&self) -> bool {
        matches!(self, Argument::Literal(_))
    }

    /// Source text of the argument.
    pub fn text(&self) -> &str {
        match self {
            Argument::Literal(text) | Argument::Expression(text) => text,
        }
    }
}

/// A matched call expression, reduced to what classification needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallSite {
    /// Source text of the call expression.
    pub text: String,
    pub method_name: String,
    pub arguments: Vec<Argument>,
    pub location: InterceptableLocation,
}

impl CallSite {
    pub fn new(
        method_name: impl Into<String>,
        arguments: Vec<Argument>,
        location: InterceptableLocation,
    ) -> Self {
        let method_name = method_name.into();
        let rendered: Vec<&str> = arguments.iter().map(Argument::text).collect();
        Self {
            text: format!("{method_name}({})", rendered.join(", ")),
            method_name,
            arguments,
            location,
        }
    }

    /// Read a call expression such as `builder.Services.AddOpenApi("v1")`.
    ///
    /// The last top-level argument list is the invocation's, so receivers
    /// such as `GetServices().AddOpenApi()` are skipped.
    /// Named-argument prefixes (`documentName: "v1"`) are dropped before the
    /// shape is decided.
    pub fn parse(text: &str, location: InterceptableLocation) -> Result<Self, ClassifyError> {
        let tokens = tokenize(text);
        let open = invocation_start(&tokens)
            .ok_or_else(|| ClassifyError::MissingArgumentList(text.trim().to_string()))?;

        let method_name = method_name(text, &tokens[..open]);
        let arguments = split_arguments(text, &tokens[open..])?
            .into_iter()
            .map(|arg| shape(text, arg))
            .collect();

        Ok(Self {
            text: text.trim().to_string(),
            method_name,
            arguments,
            location,
        })
    }

    /// True when the call targets the OpenAPI registration entry point.
    pub fn is_add_openapi(&self) -> bool {
        self.method_name == ADD_OPENAPI_METHOD
    }
}

/// Index of the `(` opening the last top-level argument list.
fn invocation_start(tokens: &[Lexeme]) -> Option<usize> {
    let mut depth = 0usize;
    let mut open = None;
    for (idx, token) in tokens.iter().enumerate() {
        match token.kind {
            Some(CallToken::LParen | CallToken::LBracket | CallToken::LBrace) => {
                if depth == 0 && token.is(CallToken::LParen) {
                    open = Some(idx);
                }
                depth += 1;
            }
            Some(CallToken::RParen | CallToken::RBracket | CallToken::RBrace) => {
                depth = depth.saturating_sub(1);
            }
            _ => {}
        }
    }
    open
}

/// Last identifier before the argument list, skipping generic arguments.
fn method_name(text: &str, tokens: &[Lexeme]) -> String {
    let mut depth = 0usize;
    let mut name = "";
    for token in tokens {
        match token.kind {
            Some(CallToken::Operator) if &text[token.span.clone()] == "<" => depth += 1,
            Some(CallToken::Operator) if &text[token.span.clone()] == ">" => {
                depth = depth.saturating_sub(1)
            }
            Some(CallToken::Identifier) if depth == 0 => name = &text[token.span.clone()],
            _ => {}
        }
    }
    name.trim_start_matches('@').to_string()
}

/// Split the argument list starting at `(` into per-argument token slices.
fn split_arguments<'t>(text: &str, tokens: &'t [Lexeme]) -> Result<Vec<&'t [Lexeme]>, ClassifyError> {
    let mut depth = 0usize;
    let mut start = 1;
    let mut arguments = Vec::new();

    for (idx, token) in tokens.iter().enumerate() {
        match token.kind {
            Some(CallToken::LParen | CallToken::LBracket | CallToken::LBrace) => depth += 1,
            Some(CallToken::RParen | CallToken::RBracket | CallToken::RBrace) => {
                depth -= 1;
                if depth == 0 {
                    let last = &tokens[start..idx];
                    if !(arguments.is_empty() && last.is_empty()) {
                        arguments.push(last);
                    }
                    return Ok(arguments);
                }
            }
            Some(CallToken::Comma) if depth == 1 => {
                arguments.push(&tokens[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }

    Err(ClassifyError::UnbalancedArgumentList(text.trim().to_string()))
}

fn shape(text: &str, tokens: &[Lexeme]) -> Argument {
    let tokens = match tokens {
        [name, colon, rest @ ..]
            if name.is(CallToken::Identifier) && colon.is(CallToken::Colon) && !rest.is_empty() =>
        {
            rest
        }
        _ => tokens,
    };

    let source = match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => text[first.span.start..last.span.end].to_string(),
        _ => String::new(),
    };

    match tokens {
        [only] if only.kind.is_some_and(|k| k.is_literal()) => Argument::Literal(source),
        _ => Argument::Expression(source),
    }
}

/// The overload of the registration entry point used at a call site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverloadVariant {
    NoArguments,
    DocumentNameOnly,
    ConfigureOptionsOnly,
    DocumentNameAndConfigureOptions,
}

impl OverloadVariant {
    pub fn argument_count(&self) -> usize {
        match self {
            OverloadVariant::NoArguments => 0,
            OverloadVariant::DocumentNameOnly | OverloadVariant::ConfigureOptionsOnly => 1,
            OverloadVariant::DocumentNameAndConfigureOptions => 2,
        }
    }
}

/// A classified call site, ready for the interceptor generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddOpenApiInvocation {
    pub variant: OverloadVariant,
    pub call: CallSite,
    pub location: InterceptableLocation,
}

/// Map a call site to the overload it uses.
///
/// Argument counts above two match no overload and are rejected rather than
/// guessed.
pub fn classify(call: CallSite) -> Result<AddOpenApiInvocation, ClassifyError> {
    let variant = match call.arguments.as_slice() {
        [] => OverloadVariant::NoArguments,
        [Argument::Literal(_)] => OverloadVariant::DocumentNameOnly,
        [Argument::Expression(_)] => OverloadVariant::ConfigureOptionsOnly,
        [_, _] => OverloadVariant::DocumentNameAndConfigureOptions,
        arguments => return Err(ClassifyError::UnsupportedArgumentCount(arguments.len())),
    };

    trace!(call = %call.text, location = %call.location, ?variant, "classified call site");
    Ok(AddOpenApiInvocation {
        variant,
        location: call.location.clone(),
        call,
    })
}
