//! Depth-first traversal of the declaration graph.

use std::ops::ControlFlow;
use std::sync::Arc;

use rustc_hash::FxHashSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use super::{PublicSurface, SurfaceMember, SurfaceType};
use crate::symbols::{Compilation, MemberKind, NamespaceSymbol, TypeSymbol, ids};

/// Collect the public surface of a compilation.
///
/// Namespaces are visited before the types they declare, each type before its
/// nested types, and members in declaration order. Partial declarations that
/// surface twice under the same ID are merged. Cancellation is checked before
/// every type; a cancelled walk returns what it has with
/// [`PublicSurface::is_complete`] set to false.
pub fn walk<'a>(compilation: &'a Compilation, cancel: &CancellationToken) -> PublicSurface<'a> {
    let mut walker = SurfaceWalker::new(cancel);
    let flow = walker.visit_namespace(&compilation.global_namespace, "");

    let complete = flow.is_continue();
    if !complete {
        debug!(
            assembly = %compilation.assembly_name,
            types = walker.surface.types.len(),
            "surface walk cancelled"
        );
    }

    walker.finish(complete)
}

pub(super) struct SurfaceWalker<'a, 'c> {
    cancel: &'c CancellationToken,
    surface: PublicSurface<'a>,
    seen: FxHashSet<Arc<str>>,
}

impl<'a, 'c> SurfaceWalker<'a, 'c> {
    pub(super) fn new(cancel: &'c CancellationToken) -> Self {
        Self {
            cancel,
            surface: PublicSurface::default(),
            seen: FxHashSet::default(),
        }
    }

    pub(super) fn finish(self, complete: bool) -> PublicSurface<'a> {
        PublicSurface {
            complete,
            ..self.surface
        }
    }

    pub(super) fn visit_namespace(&mut self, namespace: &'a NamespaceSymbol, container: &str) -> ControlFlow<()> {
        let path = if namespace.name.is_empty() {
            container.to_string()
        } else {
            ids::qualify(container, &namespace.name)
        };

        for child in &namespace.namespaces {
            self.visit_namespace(child, &path)?;
        }
        for ty in &namespace.types {
            self.visit_type(ty, &path)?;
        }
        ControlFlow::Continue(())
    }

    pub(super) fn visit_type(&mut self, ty: &'a TypeSymbol, container: &str) -> ControlFlow<()> {
        if self.cancel.is_cancelled() {
            return ControlFlow::Break(());
        }

        // Nested types of a non-public type are unreachable from outside.
        if !ty.accessibility.is_public() {
            trace!(name = %ty.name, accessibility = ?ty.accessibility, "skipping non-public type");
            return ControlFlow::Continue(());
        }

        let qualified_name: Arc<str> = ids::type_qualified_name(container, ty).into();
        let id: Arc<str> = ids::type_id(&qualified_name).into();

        if self.seen.insert(id.clone()) {
            trace!(%id, "public type");
            self.surface.types.push(SurfaceType {
                id: id.clone(),
                qualified_name: qualified_name.clone(),
                symbol: ty,
            });
        }

        for member in &ty.members {
            if !member.accessibility.is_public() {
                continue;
            }
            let member_id: Arc<str> = ids::member_id(&qualified_name, member).into();
            let entry = SurfaceMember {
                containing_type: id.clone(),
                id: member_id.clone(),
                symbol: member,
            };
            match member.kind {
                MemberKind::Property { .. } => {
                    if self.seen.insert(member_id) {
                        self.surface.properties.push(entry);
                    }
                }
                MemberKind::Method { .. } | MemberKind::Constructor { .. } => {
                    if self.seen.insert(member_id) {
                        self.surface.methods.push(entry);
                    }
                }
                MemberKind::Field { .. } => {}
            }
        }

        for nested in &ty.nested_types {
            self.visit_type(nested, &qualified_name)?;
        }
        ControlFlow::Continue(())
    }
}
