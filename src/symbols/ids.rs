//! Documentation comment IDs.
//!
//! IDs follow the compiler's documentation ID grammar so that the same
//! declaration always maps to the same string:
//!
//! ```text
//! T:Contoso.Api.Order            type
//! T:Contoso.Api.Box`1            generic type (arity suffix)
//! T:Contoso.Api.Order.Line       nested type
//! P:Contoso.Api.Order.Total      property
//! M:Contoso.Api.Order.Add(System.String,System.Int32)
//! M:Contoso.Api.Order.#ctor      constructor
//! F:Contoso.Api.Order.Count      field
//! ```

use super::model::{MemberKind, MemberSymbol, TypeSymbol};

/// Join a container path and a simple name with `.`.
pub fn qualify(container: &str, name: &str) -> String {
    if container.is_empty() {
        name.to_string()
    } else {
        format!("{container}.{name}")
    }
}

/// Qualified metadata name of a type inside `container` (arity suffix included).
pub fn type_qualified_name(container: &str, ty: &TypeSymbol) -> String {
    let qualified = qualify(container, &ty.name);
    match ty.type_parameters.len() {
        0 => qualified,
        arity => format!("{qualified}`{arity}"),
    }
}

/// `T:` ID of a type from its qualified name.
pub fn type_id(qualified_name: &str) -> String {
    format!("T:{qualified_name}")
}

/// ID of a member of the type with the given qualified name.
pub fn member_id(type_qualified_name: &str, member: &MemberSymbol) -> String {
    match &member.kind {
        MemberKind::Property { .. } => format!("P:{type_qualified_name}.{}", member.name),
        MemberKind::Field { .. } => format!("F:{type_qualified_name}.{}", member.name),
        MemberKind::Method { parameters } => format!(
            "M:{type_qualified_name}.{}{}",
            member.name,
            parameter_list(parameters)
        ),
        MemberKind::Constructor { parameters } => {
            format!("M:{type_qualified_name}.#ctor{}", parameter_list(parameters))
        }
    }
}

fn parameter_list<P: AsRef<str>>(parameters: &[P]) -> String {
    if parameters.is_empty() {
        return String::new();
    }
    let joined: Vec<&str> = parameters.iter().map(AsRef::as_ref).collect();
    format!("({})", joined.join(","))
}
