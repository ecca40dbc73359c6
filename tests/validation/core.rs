use model_collections::validation::Validation;
use model_collections::{loc, ErrorDetails, ResultExt};
use smallvec::SmallVec;

fn bad(at: usize) -> Validation<i32> {
    Validation::invalid(
        ErrorDetails::new("int_type", "Input should be a valid integer").at(loc![at]),
    )
}

#[test]
fn valid_and_invalid_helpers_behave_as_expected() {
    let valid = Validation::valid(5);
    assert!(valid.is_valid());
    assert_eq!(valid.into_value(), Some(5));

    let invalid = bad(0);
    assert!(!invalid.is_valid());
    assert_eq!(invalid.into_errors().unwrap().len(), 1);
}

#[test]
fn map_touches_only_valid_values() {
    assert_eq!(Validation::valid(4).map(|x| x * 2).into_value(), Some(8));

    let errors = bad(1).map(|x| x + 1).into_errors().unwrap();
    assert_eq!(errors[0].loc, loc![1]);
}

#[test]
fn collecting_validations_preserves_all_errors_in_order() {
    let items = vec![Validation::valid(10), bad(1), bad(2)];
    let collected: Validation<Vec<i32>> = items.into_iter().collect();

    let locs: Vec<_> = collected
        .into_errors()
        .unwrap()
        .into_iter()
        .map(|e| e.loc)
        .collect();
    assert_eq!(locs, [loc![1], loc![2]]);
}

#[test]
fn collecting_into_custom_collection_type() {
    let collected: Validation<SmallVec<[i32; 4]>> = (1..=3).map(Validation::valid).collect();
    assert_eq!(collected.into_value().unwrap().as_slice(), [1, 2, 3]);
}

#[test]
fn rebasing_prefixes_locations() {
    let rebased = Validation::<()>::invalid(
        ErrorDetails::new("missing", "Field required").at(loc!["name"]),
    )
    .at(&loc!["users", 3]);
    assert_eq!(
        rebased.into_errors().unwrap()[0].loc.to_string(),
        "users.3.name"
    );
}

#[test]
fn into_result_titles_the_error() {
    let err = bad(7).into_result("Sequence[Item]").unwrap_err();
    assert_eq!(err.title(), "Sequence[Item]");
    assert_eq!(err.error_count(), 1);
}

#[test]
fn result_ext_rebases_engine_output() {
    let engine: Result<(), _> = Err(bad(0).into_errors().unwrap());
    let err = engine
        .at(&loc!["k"])
        .into_validation_error("Mapping[Item]")
        .unwrap_err();
    assert_eq!(err.errors()[0].loc, loc!["k", 0]);
}

#[test]
fn from_result_keeps_engine_errors() {
    let ok: Validation<u8> = Ok(3).into();
    assert_eq!(ok.into_value(), Some(3));

    let failed = Validation::<u8>::from_result(Err(bad(2).into_errors().unwrap()));
    assert_eq!(failed.into_errors().unwrap()[0].loc, loc![2]);
}
