use crate::common::User;
use model_collections::{CollectionConfig, CollectionError, Input, Sequence, SequenceArgs, Slice};
use proptest::prelude::*;
use serde_json::json;

fn user_strategy() -> impl Strategy<Value = User> {
    ("[a-z]{1,8}", 0i64..1_000).prop_map(|(name, age)| User { name, age })
}

fn sequence_of(users: Vec<User>) -> Sequence<User> {
    let args = SequenceArgs::new().positional(users);
    Sequence::construct(Sequence::default_class(), args).unwrap()
}

proptest! {
    #[test]
    fn appended_elements_are_stored_at_their_index(
        users in prop::collection::vec(user_strategy(), 0..20),
    ) {
        let mut seq = Sequence::<User>::new();
        for (index, user) in users.iter().enumerate() {
            seq.append(user.clone()).unwrap();
            prop_assert_eq!(&seq[index], user);
        }
        prop_assert_eq!(seq.len(), users.len());
    }

    #[test]
    fn non_instances_are_rejected_by_strict_classes(age in any::<i64>(), name in ".*") {
        let mut seq = Sequence::<User>::new();
        let err = seq.append(Input::raw(json!({"name": name, "age": age}))).unwrap_err();
        prop_assert!(err.is_type_error());
        prop_assert!(seq.is_empty());
    }

    #[test]
    fn slice_assignment_arity_mismatch_keeps_store(
        users in prop::collection::vec(user_strategy(), 1..12),
        start in 0usize..12,
        len in 0usize..12,
        extra in 1usize..4,
    ) {
        let mut seq = sequence_of(users);
        let before = seq.clone();
        let start = start.min(seq.len());
        let stop = (start + len).min(seq.len());
        let replacement = vec![User { name: "r".into(), age: 0 }; stop - start + extra];

        let err = seq.set_slice(start..stop, replacement).unwrap_err();
        let is_arity = matches!(err, CollectionError::Arity { .. });
        prop_assert!(is_arity);
        prop_assert_eq!(seq, before);
    }

    #[test]
    fn reverse_then_forward_sort_is_ascending(
        users in prop::collection::vec(user_strategy(), 0..30),
    ) {
        let mut seq = sequence_of(users);
        seq.sort_by_key(|user| user.age, true);
        prop_assert!(seq.as_slice().windows(2).all(|pair| pair[0].age >= pair[1].age));
        seq.sort_by_key(|user| user.age, false);
        prop_assert!(seq.as_slice().windows(2).all(|pair| pair[0].age <= pair[1].age));
    }

    #[test]
    fn json_round_trip(users in prop::collection::vec(user_strategy(), 0..10)) {
        let seq = sequence_of(users);
        let text = seq.to_json(None).unwrap();
        let back = Sequence::<User>::validate_json(Sequence::default_class(), &text).unwrap();
        prop_assert_eq!(back, seq);
    }

    #[test]
    fn lax_revalidation_is_idempotent(users in prop::collection::vec(user_strategy(), 0..10)) {
        let lax = Sequence::<User>::default_class().subclass("LaxUsers", CollectionConfig::lax());
        let seq = sequence_of(users);
        let mut again = Sequence::with_class(lax);
        again.extend(seq.iter().cloned()).unwrap();
        prop_assert_eq!(again.as_slice(), seq.as_slice());
    }

    #[test]
    fn stepped_slices_match_manual_selection(
        users in prop::collection::vec(user_strategy(), 0..15),
        start in 0usize..16,
        step in 1usize..4,
    ) {
        let seq = sequence_of(users.clone());
        let sliced = seq.slice(Slice::from(start..).step_by(step));
        let expected: Vec<User> = users.into_iter().skip(start).step_by(step).collect();
        prop_assert_eq!(sliced.into_inner(), expected);
    }
}
