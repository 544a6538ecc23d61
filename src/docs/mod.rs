//! XML documentation comment parsing.
//!
//! Turns the raw documentation text the compiler attaches to a declaration
//! into an [`XmlComment`]. The input is assumed to be final: `inheritdoc` and
//! `include` directives have already been expanded by the
//! [`DocumentationSource`](crate::symbols::DocumentationSource).
//!
//! ```text
//! <summary>Gets the <see cref="T:Contoso.Order"/> total.</summary>
//!     │
//!     ▼
//! XmlComment { summary: "Gets the Contoso.Order total.", .. }
//! ```

mod comment;
pub mod cref;
mod options;
mod parser;
mod text;


pub use comment::{ExceptionComment, ParameterComment, ResponseComment, XmlComment};
pub use cref::{CrefKind, CrefTarget, resolve_cref};
pub use options::ParseOptions;
pub use parser::parse;
