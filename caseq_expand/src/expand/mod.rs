//! The expansion pipeline: parse → analyze → lower → codegen.
//!
//! Each stage is a plain function so the pipeline can be exercised without
//! any proc-macro plumbing. `parse` validates the declaration kind, `analyze`
//! extracts the ordered case list (the payloads are discarded there), `lower`
//! derives the generated identifiers and match-arm patterns, and `codegen`
//! assembles the output token tree.

pub mod analyze;
pub mod codegen;
pub mod lower;
pub mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

use crate::ExtractionError;

/// Expand one tagged enum declaration into its companion declarations.
///
/// The output contains the shape-only `<Name>RawCase` enum, an
/// `impl PartialEq<<Name>RawCase>` whose `eq` is an exhaustive match over the
/// value's active case (with `ne` as its negation), and the
/// `caseq::CaseEquatable` conformance.
///
/// Expansion is referentially transparent: the same declaration always
/// yields byte-identical tokens.
///
/// # Errors
///
/// [`ExtractionError::NotAnEnum`] when the declaration is a struct or union,
/// [`ExtractionError::GenericEnum`] when the enum has generic parameters.
pub fn expand(input: &DeriveInput) -> Result<TokenStream, ExtractionError> {
    let ast = parse::parse(input)?;
    let model = analyze::analyze(ast);
    let ir = lower::lower(model);
    Ok(codegen::codegen(&ir))
}
