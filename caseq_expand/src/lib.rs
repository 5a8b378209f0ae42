//! Core expansion pass for the `CaseEquatable` generator.
//!
//! Given one tagged enum declaration, the pass synthesizes a shape-only
//! companion enum (`<Name>RawCase`, one unit variant per case, declaration
//! order preserved) together with an equality operation that compares a full
//! value against a shape-only tag, ignoring payloads, plus its negation.
//!
//! The pass itself is a pure function over token streams and holds no state
//! between invocations. Two hosts drive it:
//!
//! - the `#[derive(CaseEquatable)]` proc macro in `caseq_macros`, and
//! - the standalone `caseq` code-generation CLI, which uses [`source`] to
//!   scan whole files for marked declarations before the main compile.

mod error;
pub mod expand;
pub mod source;

pub use crate::error::ExtractionError;
pub use crate::expand::expand;
