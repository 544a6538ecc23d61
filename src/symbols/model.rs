//! Read-only declaration graph handed over by the host compiler.

use std::sync::Arc;

/// Declared accessibility of a type or member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Accessibility {
    #[default]
    Public,
    Internal,
    Protected,
    ProtectedInternal,
    PrivateProtected,
    Private,
}

impl Accessibility {
    pub fn is_public(&self) -> bool {
        matches!(self, Accessibility::Public)
    }
}

/// The kind of a type declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Record,
    Struct,
    RecordStruct,
    Interface,
    Enum,
    Delegate,
}

/// The kind of a member together with its signature data.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// Property with its declared value type.
    Property { ty: Arc<str> },
    /// Ordinary method with fully-qualified parameter types.
    Method { parameters: Vec<Arc<str>> },
    /// Instance constructor with fully-qualified parameter types.
    Constructor { parameters: Vec<Arc<str>> },
    /// Field; never part of the documented surface.
    Field { ty: Arc<str> },
}

/// Broad symbol category, as seen by a [`DocumentationSource`](super::DocumentationSource).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Type,
    Property,
    Method,
    Constructor,
    Field,
}

impl SymbolKind {
    pub fn display(&self) -> &'static str {
        match self {
            SymbolKind::Type => "type",
            SymbolKind::Property => "property",
            SymbolKind::Method => "method",
            SymbolKind::Constructor => "constructor",
            SymbolKind::Field => "field",
        }
    }
}

/// A member declared inside a type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberSymbol {
    pub name: Arc<str>,
    pub kind: MemberKind,
    pub accessibility: Accessibility,
    /// Compiler-synthesized (record constructors, equality members, ...).
    pub is_implicitly_declared: bool,
}

impl MemberSymbol {
    pub fn property(name: impl Into<Arc<str>>, ty: impl Into<Arc<str>>) -> Self {
        Self::new(name, MemberKind::Property { ty: ty.into() })
    }

    pub fn method<P: Into<Arc<str>>>(
        name: impl Into<Arc<str>>,
        parameters: impl IntoIterator<Item = P>,
    ) -> Self {
        Self::new(
            name,
            MemberKind::Method {
                parameters: parameters.into_iter().map(Into::into).collect(),
            },
        )
    }

    pub fn constructor<P: Into<Arc<str>>>(parameters: impl IntoIterator<Item = P>) -> Self {
        Self::new(
            ".ctor",
            MemberKind::Constructor {
                parameters: parameters.into_iter().map(Into::into).collect(),
            },
        )
    }

    pub fn field(name: impl Into<Arc<str>>, ty: impl Into<Arc<str>>) -> Self {
        Self::new(name, MemberKind::Field { ty: ty.into() })
    }

    fn new(name: impl Into<Arc<str>>, kind: MemberKind) -> Self {
        Self {
            name: name.into(),
            kind,
            accessibility: Accessibility::Public,
            is_implicitly_declared: false,
        }
    }

    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    /// Mark the member as compiler-synthesized.
    pub fn implicit(mut self) -> Self {
        self.is_implicitly_declared = true;
        self
    }

    pub fn symbol_kind(&self) -> SymbolKind {
        match self.kind {
            MemberKind::Property { .. } => SymbolKind::Property,
            MemberKind::Method { .. } => SymbolKind::Method,
            MemberKind::Constructor { .. } => SymbolKind::Constructor,
            MemberKind::Field { .. } => SymbolKind::Field,
        }
    }

    /// Declared value type for properties and fields.
    pub fn value_type(&self) -> Option<&Arc<str>> {
        match &self.kind {
            MemberKind::Property { ty } | MemberKind::Field { ty } => Some(ty),
            MemberKind::Method { .. } | MemberKind::Constructor { .. } => None,
        }
    }
}

/// A type declaration, possibly containing nested types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeSymbol {
    pub name: Arc<str>,
    pub kind: TypeKind,
    pub accessibility: Accessibility,
    pub type_parameters: Vec<Arc<str>>,
    pub members: Vec<MemberSymbol>,
    pub nested_types: Vec<TypeSymbol>,
}

impl TypeSymbol {
    pub fn new(name: impl Into<Arc<str>>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            accessibility: Accessibility::Public,
            type_parameters: Vec::new(),
            members: Vec::new(),
            nested_types: Vec::new(),
        }
    }

    pub fn class(name: impl Into<Arc<str>>) -> Self {
        Self::new(name, TypeKind::Class)
    }

    pub fn record(name: impl Into<Arc<str>>) -> Self {
        Self::new(name, TypeKind::Record)
    }

    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    pub fn with_type_parameters<P: Into<Arc<str>>>(
        mut self,
        parameters: impl IntoIterator<Item = P>,
    ) -> Self {
        self.type_parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_member(mut self, member: MemberSymbol) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_nested(mut self, nested: TypeSymbol) -> Self {
        self.nested_types.push(nested);
        self
    }
}

/// A namespace; the global namespace has an empty name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamespaceSymbol {
    /// Simple or dotted name (`Contoso.Api` is accepted as one level).
    pub name: Arc<str>,
    pub namespaces: Vec<NamespaceSymbol>,
    pub types: Vec<TypeSymbol>,
}

impl NamespaceSymbol {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            namespaces: Vec::new(),
            types: Vec::new(),
        }
    }

    pub fn with_namespace(mut self, namespace: NamespaceSymbol) -> Self {
        self.namespaces.push(namespace);
        self
    }

    pub fn with_type(mut self, ty: TypeSymbol) -> Self {
        self.types.push(ty);
        self
    }
}

/// Root of a compiled program's declaration graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Compilation {
    pub assembly_name: Arc<str>,
    pub global_namespace: NamespaceSymbol,
}

impl Compilation {
    pub fn new(assembly_name: impl Into<Arc<str>>) -> Self {
        Self {
            assembly_name: assembly_name.into(),
            global_namespace: NamespaceSymbol::default(),
        }
    }

    pub fn with_namespace(mut self, namespace: NamespaceSymbol) -> Self {
        self.global_namespace.namespaces.push(namespace);
        self
    }

    /// Add a type to the global namespace.
    pub fn with_type(mut self, ty: TypeSymbol) -> Self {
        self.global_namespace.types.push(ty);
        self
    }
}

/// A borrowed handle to a symbol, passed to documentation sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymbolRef<'a> {
    /// Documentation comment ID (`T:Ns.Type`, `P:Ns.Type.Name`, ...).
    pub id: &'a str,
    pub kind: SymbolKind,
}

impl<'a> SymbolRef<'a> {
    pub fn new(id: &'a str, kind: SymbolKind) -> Self {
        Self { id, kind }
    }
}
