//! Classification of registration calls found in program source.

use apidoc::{CallSite, InterceptableLocation, OverloadVariant, Position, classify};
use rstest::rstest;

/// Startup code with one registration per overload, one per line.
const PROGRAM: &str = r#"builder.Services.AddOpenApi()
builder.Services.AddOpenApi("internal")
builder.Services.AddOpenApi(options => options.AddDocumentTransformer<BearerTransformer>())
builder.Services.AddOpenApi("v2", options => { options.OpenApiVersion = OpenApiSpecVersion.OpenApi3_0; })"#;

#[rstest]
#[case(1, OverloadVariant::NoArguments)]
#[case(2, OverloadVariant::DocumentNameOnly)]
#[case(3, OverloadVariant::ConfigureOptionsOnly)]
#[case(4, OverloadVariant::DocumentNameAndConfigureOptions)]
fn test_program_registrations(#[case] line: usize, #[case] expected: OverloadVariant) {
    let text = PROGRAM.lines().nth(line - 1).expect("line in program");
    let column = text.find("AddOpenApi").expect("registration call") + 1;
    let location = InterceptableLocation::new("Program.cs", Position::new(line, column));

    let call = CallSite::parse(text, location.clone()).expect("parsable call");
    assert!(call.is_add_openapi());

    let invocation = classify(call).expect("classifiable call");
    assert_eq!(invocation.variant, expected);
    assert_eq!(invocation.location, location);
    assert_eq!(
        invocation.location.display_location(),
        format!("Program.cs({line},18)")
    );
}

#[test]
fn test_other_methods_are_not_registrations() {
    let call = CallSite::parse(
        "builder.Services.AddEndpointsApiExplorer()",
        InterceptableLocation::new("Program.cs", Position::new(1, 18)),
    )
    .expect("parsable call");
    assert!(!call.is_add_openapi());
}
