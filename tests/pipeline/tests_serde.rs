//! JSON shape of collected entries.

use apidoc::{CollectOptions, SurfaceEntry, collect};
use tokio_util::sync::CancellationToken;

use crate::helpers::fixtures::{todo_compilation, todo_documentation};

#[test]
fn test_entries_serialize_to_json() {
    let collected = collect(
        &todo_compilation(),
        &todo_documentation(),
        &CollectOptions::default(),
        &CancellationToken::new(),
    );
    let entry = collected
        .member_entry("P:TodoApi.Todo.Id")
        .expect("property entry");

    let json = serde_json::to_value(entry).expect("serializable entry");
    assert_eq!(json["type_id"], "T:TodoApi.Todo");
    assert_eq!(json["member_id"], "P:TodoApi.Todo.Id");

    let back: SurfaceEntry = serde_json::from_value(json).expect("deserializable entry");
    assert_eq!(&back, entry);
}
