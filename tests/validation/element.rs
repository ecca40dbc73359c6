use crate::common::{Pet, User};
use model_collections::types::kind;
use model_collections::{
    loc, Annotation, CollectionClass, CollectionConfig, CollectionKind, Element, ErrorDetails,
    ErrorVec, Input, Model, ModelValidator, ValidateOptions, Validator,
};
use serde_json::json;
use smallvec::smallvec;
use std::sync::Arc;

#[test]
fn admissible_types_come_from_annotation() {
    let element = Element::<Pet>::new(Pet::annotation());
    assert_eq!(element.admissible_types(), ["Cat", "Dog"]);

    let plain = Element::<User>::new(Annotation::of::<User>());
    assert!(plain.admits(&Input::Instance(User::new("A", 1))));
    assert!(!plain.admits(&Input::raw(json!({"name": "A", "age": 1}))));
}

#[test]
fn revalidating_an_instance_is_idempotent() {
    let validator = ModelValidator::<User>::new();
    let user = User::new("A", 1);
    let options = ValidateOptions::assignment(true);
    let once = validator
        .validate(Input::Instance(user.clone()), options)
        .unwrap();
    let twice = validator
        .validate(Input::Instance(once.clone()), options)
        .unwrap();
    assert_eq!(once, user);
    assert_eq!(twice, once);
}

#[test]
fn custom_validator_closure() {
    let upper =
        |input: Input<User>, _options: ValidateOptions| -> Result<User, ErrorVec<ErrorDetails>> {
            match input {
                Input::Instance(mut user) => {
                    user.name = user.name.to_uppercase();
                    Ok(user)
                }
                other => {
                    let details = ErrorDetails::new("model_type", "only instances");
                    Err(smallvec![details.with_input(other.to_value())])
                }
            }
        };
    let element = Arc::new(Element::with_validator(Annotation::of::<User>(), upper));
    let class = CollectionClass::new(CollectionKind::Sequence, element)
        .subclass("Shouting", CollectionConfig::lax());

    let user = class
        .validate_element(Input::Instance(User::new("quiet", 1)), &loc![0])
        .unwrap();
    assert_eq!(user.name, "QUIET");

    let err = class
        .validate_element(Input::raw(json!({"name": "x", "age": 1})), &loc![4])
        .unwrap_err();
    let details = &err.validation_error().unwrap().errors()[0];
    assert_eq!(details.kind, kind::MODEL_TYPE);
    assert_eq!(details.loc, loc![4]);
}

#[test]
fn strict_precheck_runs_before_validator() {
    let never = |_: Input<User>, _: ValidateOptions| -> Result<User, ErrorVec<ErrorDetails>> {
        let details = ErrorDetails::new("unreachable", "validator should not run");
        Err(smallvec![details])
    };
    let element = Arc::new(Element::with_validator(Annotation::of::<User>(), never));
    let class = CollectionClass::new(CollectionKind::Mapping, element);

    let err = class
        .validate_element(Input::raw(json!(1)), &loc!["k"])
        .unwrap_err();
    assert!(err.is_type_error());
    assert_eq!(
        err.validation_error().unwrap().errors()[0].kind,
        kind::IS_INSTANCE_OF
    );
}
