//! The two-variant outcome type and its combinators.

use crate::fault::Fault;

/// Outcome of a fallible operation: a success payload or a structured fault.
///
/// Exactly one variant is active, fixed at construction; the enum layout
/// makes the two payloads mutually exclusive. The value is immutable once
/// built: every method either borrows it or consumes it and hands it back
/// unchanged. No operation on it panics.
///
/// Rust does not narrow types from a boolean check, so code that needs the
/// payload matches on the variant (or goes through [`Outcome::success`],
/// [`Outcome::failure`], [`Outcome::on_success`], [`Outcome::on_failure`])
/// rather than calling [`Outcome::is_success`] and then reaching for a
/// field.
///
/// ```
/// use outcome_core::{Fault, Outcome};
///
/// #[derive(Debug, PartialEq)]
/// enum LookupFault {
///     Missing,
/// }
///
/// impl Fault for LookupFault {}
///
/// let hit: Outcome<u32, LookupFault> = Outcome::Success(42);
/// assert_eq!(hit.success_or(69), 42);
///
/// let miss: Outcome<u32, LookupFault> = Outcome::Failure(LookupFault::Missing);
/// assert_eq!(miss.success_or(69), 69);
/// ```
#[must_use = "an `Outcome` reports success or failure and must be inspected"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<S, F: Fault> {
    /// The operation produced a value.
    Success(S),
    /// The operation failed with a fault payload.
    Failure(F),
}

impl<S, F: Fault> Outcome<S, F> {
    /// Returns `true` iff the active variant is [`Outcome::Success`].
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` iff the active variant is [`Outcome::Failure`].
    pub const fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Returns the success payload, or `None` if this is a failure.
    pub fn success(self) -> Option<S> {
        match self {
            Outcome::Success(data) => Some(data),
            Outcome::Failure(_) => None,
        }
    }

    /// Returns the fault payload, or `None` if this is a success.
    pub fn failure(self) -> Option<F> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Returns the success payload, or `default` if this is a failure.
    ///
    /// `default` is evaluated by the caller before the call; there is no
    /// lazy variant.
    pub fn success_or(self, default: S) -> S {
        match self {
            Outcome::Success(data) => data,
            Outcome::Failure(_) => default,
        }
    }

    /// Borrows both payload positions, leaving the receiver in place.
    pub const fn as_ref(&self) -> Outcome<&S, &F> {
        match self {
            Outcome::Success(data) => Outcome::Success(data),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Calls `action` with the success payload, then returns the receiver.
    ///
    /// `action` runs exactly once when the receiver is a success and zero
    /// times otherwise; the receiver comes back unchanged either way, so
    /// handlers chain. A chained `on_success`/`on_failure` pair runs
    /// exactly one of the two actions, never both, never neither.
    ///
    /// ```
    /// # use outcome_core::{Fault, Outcome};
    /// # #[derive(Debug, PartialEq)]
    /// # struct Broken;
    /// # impl Fault for Broken {}
    /// let fetched: Outcome<u32, Broken> = Outcome::Success(7);
    /// let fetched = fetched
    ///     .on_success(|n| println!("got {n}"))
    ///     .on_failure(|_| println!("never printed"));
    /// assert_eq!(fetched, Outcome::Success(7));
    /// ```
    pub fn on_success(self, action: impl FnOnce(&S)) -> Self {
        if let Outcome::Success(data) = &self {
            action(data);
        }
        self
    }

    /// Calls `action` with the fault payload, then returns the receiver.
    ///
    /// The mirror of [`Outcome::on_success`]: exactly once on a failure,
    /// zero times on a success.
    pub fn on_failure(self, action: impl FnOnce(&F)) -> Self {
        if let Outcome::Failure(error) = &self {
            action(error);
        }
        self
    }

    /// Converts into the standard library result, success to `Ok` and
    /// failure to `Err`.
    pub fn into_result(self) -> Result<S, F> {
        match self {
            Outcome::Success(data) => Ok(data),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<S, F: Fault> From<Outcome<S, F>> for Result<S, F> {
    fn from(outcome: Outcome<S, F>) -> Self {
        outcome.into_result()
    }
}

impl<S, F: Fault> From<Result<S, F>> for Outcome<S, F> {
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(data) => Outcome::Success(data),
            Err(error) => Outcome::Failure(error),
        }
    }
}
