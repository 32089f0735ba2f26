//! Marker capability for failure payloads.

/// Marker for types that can ride in the failure variant of an
/// [`Outcome`](crate::Outcome).
///
/// The trait has no members. Implementing it states that a type describes a
/// failure rather than ordinary data, and it is the only bound the failure
/// parameter of an outcome carries. Producers usually implement it on a
/// closed enum with one variant per named failure mode plus a catch-all
/// variant wrapping an arbitrary underlying cause:
///
/// ```
/// use outcome_core::Fault;
///
/// #[derive(Debug)]
/// enum FetchFault {
///     NotFound,
///     Unexpected { cause: std::io::Error },
/// }
///
/// impl Fault for FetchFault {}
/// ```
pub trait Fault {}

/// A shared reference to a fault is itself a fault, so borrowed views of an
/// outcome keep the bound satisfied.
impl<'a, F: Fault + ?Sized> Fault for &'a F {}
