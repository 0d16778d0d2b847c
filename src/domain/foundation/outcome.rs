//! Outcome algebra - explicit success/failure propagation for domain logic.
//!
//! Domain and validation code never throws; it returns an `Outcome` carrying
//! either the validated value or a typed failure. `combine` aggregates every
//! violation from a set of independent checks instead of stopping at the
//! first one, which is what lets composite entities report all invalid
//! fields at once.

/// Two-variant result of a domain operation.
///
/// Unlike `Result`, the force accessors panic with a message naming the
/// misused accessor, so test failures point straight at the bad assumption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<E, V> {
    /// The operation violated a domain rule.
    Failure(E),
    /// The operation produced a valid value.
    Success(V),
}

impl<E, V> Outcome<E, V> {
    /// Wraps a value in the success variant.
    pub fn success(value: V) -> Self {
        Outcome::Success(value)
    }

    /// Wraps an error in the failure variant.
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Returns true if this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns true if this outcome is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure. Calling this on a failure is a
    /// programmer error, not a recoverable condition.
    pub fn force_success(self) -> V
    where
        E: std::fmt::Debug,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => {
                panic!("force_success() called on a Failure outcome: {:?}", error)
            }
        }
    }

    /// Returns the failure value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    pub fn force_failure(self) -> E
    where
        V: std::fmt::Debug,
    {
        match self {
            Outcome::Failure(error) => error,
            Outcome::Success(value) => {
                panic!("force_failure() called on a Success outcome: {:?}", value)
            }
        }
    }

    /// Maps the success value, leaving failures untouched.
    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Outcome<E, U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the failure value, leaving successes untouched.
    pub fn map_failure<F>(self, f: impl FnOnce(E) -> F) -> Outcome<F, V> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Discards the success value, keeping only whether the check passed.
    ///
    /// Used to feed heterogeneous validations into [`Outcome::combine`].
    pub fn check(&self) -> Outcome<E, ()>
    where
        E: Clone,
    {
        match self {
            Outcome::Success(_) => Outcome::Success(()),
            Outcome::Failure(error) => Outcome::Failure(error.clone()),
        }
    }

    /// Converts into a `Result` so callers can use `?` at port seams.
    pub fn into_result(self) -> Result<V, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }

    /// Aggregates independent outcomes.
    ///
    /// If any input failed, the combined outcome is a failure carrying
    /// **every** failure value in input order - validation reports all
    /// violations, it does not short-circuit at the first one.
    pub fn combine(outcomes: Vec<Outcome<E, V>>) -> Outcome<Vec<E>, Vec<V>> {
        let mut failures = Vec::new();
        let mut successes = Vec::new();
        for outcome in outcomes {
            match outcome {
                Outcome::Failure(error) => failures.push(error),
                Outcome::Success(value) => successes.push(value),
            }
        }
        if failures.is_empty() {
            Outcome::Success(successes)
        } else {
            Outcome::Failure(failures)
        }
    }
}

impl<E, V> From<Result<V, E>> for Outcome<E, V> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<E, V> From<Outcome<E, V>> for Result<V, E> {
    fn from(outcome: Outcome<E, V>) -> Self {
        outcome.into_result()
    }
}
