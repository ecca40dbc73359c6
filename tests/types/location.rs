use model_collections::convert::wrap_errors_with_loc;
use model_collections::{loc, ErrorDetails, LocItem, Location};
use serde_json::json;

#[test]
fn builds_from_mixed_steps() {
    let key = String::from("users");
    let location = loc![&key, 2, "name"];
    assert_eq!(location.len(), 3);
    assert_eq!(location[0], LocItem::Key("users".into()));
    assert_eq!(location[1], LocItem::Index(2));
    assert_eq!(location.to_string(), "users.2.name");
}

#[test]
fn empty_location_displays_nothing() {
    assert!(loc![].is_empty());
    assert_eq!(Location::new().to_string(), "");
}

#[test]
fn prefixing_puts_prefix_first() {
    let inner = loc!["age"];
    assert_eq!(inner.prefixed(&loc![1]), loc![1, "age"]);
    assert_eq!(Location::new().prefixed(&loc!["k"]), loc!["k"]);
}

#[test]
fn wrap_errors_rebases_each_record() {
    let errors = [
        ErrorDetails::new("missing", "Field required").at(loc!["name"]),
        ErrorDetails::new("int_type", "Input should be a valid integer").at(loc!["age"]),
    ];
    let wrapped = wrap_errors_with_loc(errors, &loc!["u1"]);
    assert_eq!(wrapped[0].loc, loc!["u1", "name"]);
    assert_eq!(wrapped[1].loc, loc!["u1", "age"]);
}

#[test]
fn serializes_as_plain_array() {
    assert_eq!(
        serde_json::to_value(loc!["users", 0]).unwrap(),
        json!(["users", 0])
    );
    let back: Location = serde_json::from_value(json!([3, "age"])).unwrap();
    assert_eq!(back, loc![3, "age"]);
}

#[test]
fn collects_from_iterator() {
    let location: Location = ["a", "b"].into_iter().collect();
    assert_eq!(location, loc!["a", "b"]);
}
