//! Documentation collection over the todo API fixture.

use apidoc::{CollectOptions, ParseOptions, collect, collect_parallel, walk};
use rstest::rstest;
use tokio_util::sync::CancellationToken;

use crate::helpers::entry_assertions::{
    assert_absent, assert_no_constructors, entry_ids, get_member, get_type,
};
use crate::helpers::fixtures::{todo_compilation, todo_documentation};

#[test]
fn test_entries_follow_types_properties_methods() {
    let collected = collect(
        &todo_compilation(),
        &todo_documentation(),
        &CollectOptions::default(),
        &CancellationToken::new(),
    );

    assert!(collected.is_complete());
    assert_eq!(
        entry_ids(&collected),
        vec![
            ("T:TodoApi.Todo", None),
            ("T:TodoApi.Page`1", None),
            ("T:TodoApi.Page`1.Cursor", None),
            ("T:TodoApi.Todo", Some("P:TodoApi.Todo.Id")),
            ("T:TodoApi.Page`1", Some("P:TodoApi.Page`1.Items")),
            ("T:TodoApi.Page`1.Cursor", Some("P:TodoApi.Page`1.Cursor.Token")),
            (
                "T:TodoApi.Endpoints.TodoEndpoints",
                Some("M:TodoApi.Endpoints.TodoEndpoints.GetTodo(System.Int32)")
            ),
            (
                "T:TodoApi.Endpoints.TodoEndpoints",
                Some("M:TodoApi.Endpoints.TodoEndpoints.CreateTodo(TodoApi.Todo)")
            ),
        ]
    );
}

#[test]
fn test_surface_excludes_internal_types_and_fields() {
    let compilation = todo_compilation();
    let surface = walk(&compilation, &CancellationToken::new());

    assert!(surface.is_complete());
    assert!(surface.types.iter().all(|t| !t.id.contains("TodoCache")));
    assert!(surface.properties.iter().all(|p| !p.id.starts_with("F:")));
    assert!(
        surface
            .methods
            .iter()
            .any(|m| &*m.id == "M:TodoApi.Todo.#ctor(System.Int32,System.String)")
    );
}

#[test]
fn test_record_constructor_documentation_is_suppressed() {
    let collected = collect(
        &todo_compilation(),
        &todo_documentation(),
        &CollectOptions::default(),
        &CancellationToken::new(),
    );

    assert_no_constructors(&collected);
    let todo = get_type(&collected, "T:TodoApi.Todo");
    assert_eq!(
        todo.record.parameter("Title").map(|p| p.description.as_str()),
        Some("Short description of the work.")
    );
}

#[rstest]
#[case("P:TodoApi.Todo.Title")]
#[case("P:TodoApi.Page`1.Total")]
#[case("T:TodoApi.Endpoints.TodoEndpoints")]
#[case("T:TodoApi.TodoCache")]
#[case("P:TodoApi.TodoCache.Size")]
fn test_undocumented_or_hidden_symbols_are_absent(#[case] id: &str) {
    let collected = collect(
        &todo_compilation(),
        &todo_documentation(),
        &CollectOptions::default(),
        &CancellationToken::new(),
    );
    assert_absent(&collected, id);
}

#[rstest]
#[case("P:TodoApi.Todo.Id", "System.Int32")]
#[case("P:TodoApi.Page`1.Items", "`0[]")]
#[case("P:TodoApi.Page`1.Cursor.Token", "System.String")]
fn test_properties_carry_their_type(#[case] id: &str, #[case] ty: &str) {
    let collected = collect(
        &todo_compilation(),
        &todo_documentation(),
        &CollectOptions::default(),
        &CancellationToken::new(),
    );
    assert_eq!(get_member(&collected, id).record.associated_type(), Some(ty));
}

#[test]
fn test_non_property_records_have_no_type() {
    let collected = collect(
        &todo_compilation(),
        &todo_documentation(),
        &CollectOptions::default(),
        &CancellationToken::new(),
    );

    for entry in &collected.entries {
        if entry.is_type_entry() || entry.member_id.as_deref().is_some_and(|m| m.starts_with("M:")) {
            assert_eq!(entry.record.associated_type(), None);
        }
    }
}

#[test]
fn test_method_documentation_is_rendered() {
    let collected = collect(
        &todo_compilation(),
        &todo_documentation(),
        &CollectOptions::default(),
        &CancellationToken::new(),
    );

    let get = get_member(
        &collected,
        "M:TodoApi.Endpoints.TodoEndpoints.GetTodo(System.Int32)",
    );
    assert_eq!(get.record.summary.as_deref(), Some("Gets a todo by id."));
    assert_eq!(
        get.record.parameter("id").map(|p| p.description.as_str()),
        Some("The TodoApi.Todo.Id to look up.")
    );
    assert_eq!(get.record.returns.as_deref(), Some("The matching TodoApi.Todo."));
    assert_eq!(
        get.record.response("404").map(|r| r.description.as_str()),
        Some("No such todo.")
    );

    let create = get_member(
        &collected,
        "M:TodoApi.Endpoints.TodoEndpoints.CreateTodo(TodoApi.Todo)",
    );
    assert_eq!(
        create.record.parameter("todo").and_then(|p| p.example.as_deref()),
        Some(r#"{"title":"milk"}"#)
    );
    assert_eq!(create.record.exceptions[0].cref, "System.ArgumentException");
}

#[test]
fn test_short_cref_names_option() {
    let options = CollectOptions {
        parse: ParseOptions {
            short_cref_names: true,
            ..ParseOptions::default()
        },
        ..CollectOptions::default()
    };
    let collected = collect(
        &todo_compilation(),
        &todo_documentation(),
        &options,
        &CancellationToken::new(),
    );

    let get = get_member(
        &collected,
        "M:TodoApi.Endpoints.TodoEndpoints.GetTodo(System.Int32)",
    );
    assert_eq!(get.record.returns.as_deref(), Some("The matching Todo."));
}

#[test]
fn test_value_section_renders_langword() {
    let collected = collect(
        &todo_compilation(),
        &todo_documentation(),
        &CollectOptions::default(),
        &CancellationToken::new(),
    );

    let items = get_member(&collected, "P:TodoApi.Page`1.Items");
    assert_eq!(items.record.value.as_deref(), Some("Never `null`."));
}

#[test]
fn test_collection_is_deterministic() {
    let compilation = todo_compilation();
    let source = todo_documentation();
    let options = CollectOptions::default();

    let first = collect(&compilation, &source, &options, &CancellationToken::new());
    let second = collect(&compilation, &source, &options, &CancellationToken::new());
    let parallel = collect_parallel(&compilation, &source, &options, &CancellationToken::new());

    assert_eq!(first, second);
    assert_eq!(first, parallel);
}

#[test]
fn test_cancelled_collection_is_empty_and_incomplete() {
    let cancel = CancellationToken::new();
    cancel.cancel();

    let collected = collect(
        &todo_compilation(),
        &todo_documentation(),
        &CollectOptions::default(),
        &cancel,
    );

    assert!(!collected.is_complete());
    assert!(collected.is_empty());
}
