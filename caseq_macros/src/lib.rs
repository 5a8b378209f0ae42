//! Procedural macro host for the CaseEquatable expansion pass.
//!
//! The pass itself lives in `caseq_expand` so the same code also runs
//! outside the compiler (see the `caseq` CLI). This crate only adapts it to
//! the proc-macro ABI and turns expansion errors into spanned diagnostics.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro generating the shape-only companion of a tagged enum.
///
/// For an enum `Name`, the expansion produces:
/// - an enum `NameRawCase` with one unit variant per case, in declaration
///   order, with no payloads;
/// - `impl PartialEq<NameRawCase> for Name` whose `eq` compares only the
///   active case, ignoring any payload, and whose `ne` is its negation;
/// - `impl caseq::CaseEquatable for Name`.
///
/// # Example
///
/// ```ignore
/// #[derive(CaseEquatable)]
/// enum MyEnum {
///     One(i32),
///     Two(String),
///     Three,
/// }
///
/// assert!(MyEnum::One(1) == MyEnumRawCase::One);
/// assert!(MyEnum::One(1) != MyEnumRawCase::Two);
/// assert!(MyEnum::Three == MyEnumRawCase::Three);
/// ```
///
/// Deriving on anything other than a non-generic enum is a compile error
/// reported at the offending declaration.
#[proc_macro_derive(CaseEquatable)]
pub fn case_equatable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match caseq_expand::expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => syn::Error::from(err).to_compile_error().into(),
    }
}
