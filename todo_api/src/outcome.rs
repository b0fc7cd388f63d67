//! Two-variant result type returned by every client operation.

/// Either a domain error or a success value.
///
/// The contained value is reached through [`Outcome::fold`], which forces
/// both branches to be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Outcome<E, T> {
    Failure(E),
    Success(T),
}

impl<E, T> Outcome<E, T> {
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Runs `on_failure` or `on_success`, whichever matches the populated
    /// variant, and returns its output.
    pub fn fold<U>(self, on_failure: impl FnOnce(E) -> U, on_success: impl FnOnce(T) -> U) -> U {
        match self {
            Self::Failure(error) => on_failure(error),
            Self::Success(value) => on_success(value),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Transforms the success value, leaving a failure untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<E, U> {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => Outcome::Success(f(value)),
        }
    }

    /// Transforms the failure value, leaving a success untouched.
    pub fn map_failure<F>(self, f: impl FnOnce(E) -> F) -> Outcome<F, T> {
        match self {
            Self::Failure(error) => Outcome::Failure(f(error)),
            Self::Success(value) => Outcome::Success(value),
        }
    }

    pub fn as_ref(&self) -> Outcome<&E, &T> {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(value) => Outcome::Success(value),
        }
    }
}

impl<E, T> From<Result<T, E>> for Outcome<E, T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<E, T> From<Outcome<E, T>> for Result<T, E> {
    fn from(outcome: Outcome<E, T>) -> Self {
        outcome.fold(Err, Ok)
    }
}
