//! Shape-only equality for tagged enums.
//!
//! Annotating an enum with `#[derive(CaseEquatable)]` synthesizes a
//! payload-free mirror of its cases (`<Name>RawCase`) and lets a full value
//! be compared against one of those raw cases with `==`/`!=`, looking only
//! at which case is active and never at the payload.
//!
//! ```
//! use caseq::CaseEquatable;
//!
//! #[derive(CaseEquatable)]
//! enum Message {
//!     Quit,
//!     Write(String),
//!     Move { x: i32, y: i32 },
//! }
//!
//! let msg = Message::Write("hello".into());
//! assert!(msg == MessageRawCase::Write);
//! assert!(msg != MessageRawCase::Quit);
//!
//! // Payloads never participate: any `Write` matches the `Write` raw case.
//! assert!(Message::Write(String::new()) == MessageRawCase::Write);
//! ```
//!
//! The generated `MessageRawCase` has one unit variant per case, in
//! declaration order, and the comparison is an exhaustive match — adding a
//! case to `Message` can never silently fall through.
//!
//! # Limitations
//!
//! - Only non-generic enums are supported; deriving on anything else is a
//!   compile error at the offending declaration.
//! - Nested enum declarations are not processed.
//! - `RawCase` names are reserved: the companion is always `<Name>RawCase`.
//!
//! The expansion pass also runs outside the compiler: the `caseq` CLI scans
//! listed source files for marked enums and emits the same companion
//! declarations as a build step.

pub use caseq_macros::CaseEquatable;

/// Enums with a shape-only mirror of their cases.
///
/// Implemented by `#[derive(CaseEquatable)]`; the supertrait ties the
/// derived `PartialEq` impl to the companion type, so generic code can
/// require shape comparison:
///
/// ```
/// use caseq::CaseEquatable;
///
/// fn has_shape<T: CaseEquatable>(value: &T, tag: &T::RawCase) -> bool {
///     value == tag
/// }
///
/// #[derive(CaseEquatable)]
/// enum State { Idle, Busy(u32) }
///
/// assert!(has_shape(&State::Busy(7), &StateRawCase::Busy));
/// ```
pub trait CaseEquatable: PartialEq<Self::RawCase> {
    /// Enum listing only the case names, without payloads.
    type RawCase;
}
