use crate::common::{Pet, User};
use model_collections::{
    cached_classes, specialize, specialize_with, Annotation, CollectionConfig, CollectionKind,
    Input, Mapping, Model, Sequence,
};
use serde_json::json;
use std::sync::Arc;
use std::thread;

#[test]
fn same_key_returns_same_class() {
    let a = specialize::<User>(CollectionKind::Sequence);
    let b = Sequence::<User>::default_class();
    assert!(Arc::ptr_eq(&a, &b));
    assert!(cached_classes() >= 1);
}

#[test]
fn shapes_are_cached_separately() {
    let seq = specialize::<User>(CollectionKind::Sequence);
    let map = Mapping::<User>::default_class();
    assert!(!Arc::ptr_eq(seq.element(), map.element()));
    assert_eq!(map.name(), "Mapping[User]");
}

#[test]
fn union_annotation_is_a_cache_key() {
    let a = specialize::<Pet>(CollectionKind::Sequence);
    let b = specialize_with::<Pet>(CollectionKind::Sequence, Pet::annotation());
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(a.element().admissible_types(), ["Cat", "Dog"]);
}

#[test]
fn unhashable_annotation_bypasses_cache() {
    let literal = Annotation::Literal(json!({"nested": true}));
    let a = specialize_with::<User>(CollectionKind::Sequence, literal.clone());
    let b = specialize_with::<User>(CollectionKind::Sequence, literal);
    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(a.name(), b.name());
}

#[test]
fn concurrent_specialization_builds_once() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                specialize_with::<User>(CollectionKind::Mapping, Annotation::named("SharedUser"))
            })
        })
        .collect();
    let classes: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert!(classes
        .windows(2)
        .all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
}

#[test]
fn specialization_leaves_instances_alone() {
    let mut users = Sequence::<User>::new();
    users.append(User::new("A", 1)).unwrap();
    let _ = specialize_with::<User>(CollectionKind::Sequence, Annotation::named("OtherUser"));
    assert_eq!(users.len(), 1);
    assert_eq!(users.class().name(), "Sequence[User]");
}

#[test]
fn validator_messages_use_the_specialized_annotation() {
    let class = specialize_with::<User>(CollectionKind::Sequence, Annotation::named("Member"));
    let lax = class.subclass("LaxMembers", CollectionConfig::lax());
    let mut members = Sequence::with_class(lax);

    let err = members.append(Input::<User>::raw(json!(5))).unwrap_err();
    let details = &err.validation_error().unwrap().errors()[0];
    assert_eq!(
        details.msg,
        "Input should be a valid dictionary or instance of Member"
    );

    let mut strict = Sequence::with_class(class);
    let err = strict.append(User::new("A", 1)).unwrap_err();
    assert_eq!(
        err.validation_error().unwrap().errors()[0].msg,
        "Input should be an instance of Member"
    );
}
