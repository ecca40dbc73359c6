use crate::types::ErrorVec;
use crate::validation::core::Validation;

/// Collects element outcomes into one outcome for the whole collection.
///
/// Every error record from every invalid element is kept, in iteration order.
/// Valid values are only gathered while no error has been seen.
impl<A, C> FromIterator<Validation<A>> for Validation<C>
where
    C: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Validation<A>>>(iter: I) -> Self {
        let mut values = Vec::new();
        let mut errors = ErrorVec::new();

        for item in iter {
            match item {
                Validation::Valid(value) if errors.is_empty() => values.push(value),
                Validation::Valid(_) => {}
                Validation::Invalid(es) => errors.extend(es),
            }
        }

        if errors.is_empty() {
            Validation::Valid(values.into_iter().collect())
        } else {
            Validation::Invalid(errors)
        }
    }
}

