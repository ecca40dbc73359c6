use model_collections::types::kind;
use model_collections::{loc, CollectionError, ErrorDetails, ValidationError};
use serde_json::json;

#[test]
fn serializes_with_engine_field_names() {
    let details = ErrorDetails::new(kind::IS_INSTANCE_OF, "Input should be an instance of User")
        .at(loc![0])
        .with_input(json!({"name": "A"}))
        .with_ctx("class", json!("User"));

    assert_eq!(
        serde_json::to_value(&details).unwrap(),
        json!({
            "type": "is_instance_of",
            "loc": [0],
            "msg": "Input should be an instance of User",
            "input": {"name": "A"},
            "ctx": {"class": "User"},
        })
    );
}

#[test]
fn display_with_and_without_location() {
    let root = ErrorDetails::new(kind::LIST_TYPE, "Input should be a valid list");
    assert_eq!(
        root.to_string(),
        "Input should be a valid list [type=list_type]"
    );
    assert_eq!(
        root.at(loc!["root"]).to_string(),
        "root: Input should be a valid list [type=list_type]"
    );
}

#[test]
fn validation_error_pluralizes() {
    let err = ValidationError::new(
        "Sequence[User]",
        [
            ErrorDetails::new("a", "first").at(loc![0]),
            ErrorDetails::new("b", "second").at(loc![1]),
        ],
    );
    assert!(err
        .to_string()
        .starts_with("2 validation errors for Sequence[User]\n0\n  first [type=a"));
}

#[test]
fn collection_error_messages() {
    assert_eq!(
        CollectionError::Arity {
            expected: 2,
            provided: 3
        }
        .to_string(),
        "attempt to assign sequence of size 3 to slice of size 2"
    );
    assert_eq!(
        CollectionError::KeyNotFound("u9".into()).to_string(),
        "key not found: \"u9\""
    );
    assert!(CollectionError::ConstructionConflict
        .validation_error()
        .is_none());
}
