//! Common compilations and documentation sources for pipeline tests.

use apidoc::InMemoryDocumentationSource;
use apidoc::symbols::{Accessibility, Compilation, MemberSymbol, NamespaceSymbol, TypeSymbol};

/// A minimal web API: a positional record, a generic page type and an
/// internal helper that must stay hidden.
///
/// ```text
/// namespace TodoApi
///     public record Todo(int Id, string Title)
///     public class Page<T> { T[] Items; int Total; class Cursor { string Token } }
///     internal class TodoCache
/// namespace TodoApi.Endpoints
///     public static class TodoEndpoints { GetTodo(int); CreateTodo(Todo) }
/// ```
pub fn todo_compilation() -> Compilation {
    Compilation::new("TodoApi").with_namespace(
        NamespaceSymbol::new("TodoApi")
            .with_namespace(
                NamespaceSymbol::new("Endpoints").with_type(
                    TypeSymbol::class("TodoEndpoints")
                        .with_member(MemberSymbol::method("GetTodo", ["System.Int32"]))
                        .with_member(MemberSymbol::method("CreateTodo", ["TodoApi.Todo"])),
                ),
            )
            .with_type(
                TypeSymbol::record("Todo")
                    .with_member(
                        MemberSymbol::constructor(["System.Int32", "System.String"]).implicit(),
                    )
                    .with_member(MemberSymbol::property("Id", "System.Int32"))
                    .with_member(MemberSymbol::property("Title", "System.String")),
            )
            .with_type(
                TypeSymbol::class("Page")
                    .with_type_parameters(["T"])
                    .with_member(MemberSymbol::property("Items", "`0[]"))
                    .with_member(MemberSymbol::property("Total", "System.Int32"))
                    .with_member(
                        MemberSymbol::field("cursor", "System.String")
                            .with_accessibility(Accessibility::Private),
                    )
                    .with_nested(
                        TypeSymbol::class("Cursor")
                            .with_member(MemberSymbol::property("Token", "System.String")),
                    ),
            )
            .with_type(
                TypeSymbol::class("TodoCache")
                    .with_accessibility(Accessibility::Internal)
                    .with_member(MemberSymbol::property("Size", "System.Int32")),
            ),
    )
}

/// Documentation for [`todo_compilation`], as a compiler would hand it over.
pub fn todo_documentation() -> InMemoryDocumentationSource {
    InMemoryDocumentationSource::new()
        .with(
            "T:TodoApi.Todo",
            r#"<summary>A single todo item.</summary>
               <param name="Id">Unique identifier.</param>
               <param name="Title">Short description of the work.</param>"#,
        )
        .with(
            "M:TodoApi.Todo.#ctor(System.Int32,System.String)",
            r#"<summary>A single todo item.</summary>
               <param name="Id">Unique identifier.</param>
               <param name="Title">Short description of the work.</param>"#,
        )
        .with("P:TodoApi.Todo.Id", "<summary>Unique identifier.</summary>")
        .with("P:TodoApi.Todo.Title", "<doc />")
        .with(
            "T:TodoApi.Page`1",
            r#"<summary>One page of results.</summary>
               <typeparam name="T">Item type.</typeparam>"#,
        )
        .with(
            "P:TodoApi.Page`1.Items",
            r#"<summary>Items on this page.</summary><value>Never <see langword="null"/>.</value>"#,
        )
        .with("P:TodoApi.Page`1.Total", "")
        .with("T:TodoApi.Page`1.Cursor", "<summary>Opaque continuation token.</summary>")
        .with("P:TodoApi.Page`1.Cursor.Token", "<summary>Token text.</summary>")
        .with("T:TodoApi.TodoCache", "<summary>Internal cache.</summary>")
        .with("P:TodoApi.TodoCache.Size", "<summary>Internal size.</summary>")
        .with(
            "M:TodoApi.Endpoints.TodoEndpoints.GetTodo(System.Int32)",
            r#"<summary>Gets a todo by id.</summary>
               <param name="id">The <see cref="P:TodoApi.Todo.Id"/> to look up.</param>
               <returns>The matching <see cref="T:TodoApi.Todo"/>.</returns>
               <response code="200">Found.</response>
               <response code="404">No such todo.</response>"#,
        )
        .with(
            "M:TodoApi.Endpoints.TodoEndpoints.CreateTodo(TodoApi.Todo)",
            r#"<summary>Creates a todo.</summary>
               <param name="todo" example="{&quot;title&quot;:&quot;milk&quot;}">The new item.</param>
               <exception cref="T:System.ArgumentException">Title is empty.</exception>"#,
        )
}
