//! File-level driver for the standalone generator.
//!
//! Scans the top-level items of a parsed source file for the expansion
//! marker and runs the expansion pass on each marked declaration. Marked
//! declarations are processed independently: one failing declaration does
//! not stop the others, and its error is reported alongside the successful
//! expansions.

use itertools::{Either, Itertools};
use proc_macro2::TokenStream;
use syn::{Attribute, DeriveInput, File, Ident, Item, Meta};

use crate::{ExtractionError, expand};

/// Standalone marker attribute recognized on declarations.
///
/// Intended for sources that are preprocessed by the `caseq` CLI rather than
/// compiled with the derive; the generator strips nothing, it only reads.
pub const MARKER: &str = "case_equatable";

/// Derive name recognized inside `#[derive(...)]` lists.
pub const DERIVE: &str = "CaseEquatable";

/// One successfully expanded declaration.
pub struct Expansion {
    /// Name of the source enum.
    pub ident: Ident,
    /// The companion declarations, already round-trip validated.
    pub tokens: TokenStream,
}

/// All outcomes for one source file.
pub struct FileExpansion {
    /// Companion fragments for every cleanly expanded declaration.
    pub generated: Vec<Expansion>,
    /// One error per marked declaration that could not be expanded.
    pub errors: Vec<ExtractionError>,
}

impl FileExpansion {
    /// True when every marked declaration expanded cleanly.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Expand every marked top-level declaration of `file`.
///
/// Unmarked items are skipped, as are item kinds that cannot carry the
/// marker. Nested declarations are not scanned.
pub fn expand_file(file: &File) -> FileExpansion {
    let (generated, errors) = file
        .items
        .iter()
        .filter_map(marked_input)
        .map(|input| expand_validated(&input))
        .partition_map(|outcome| match outcome {
            Ok(expansion) => Either::Left(expansion),
            Err(err) => Either::Right(err),
        });

    FileExpansion { generated, errors }
}

/// Run the expansion pass and round-trip the fragment through the parser.
///
/// The synthesizer builds a token tree rather than strings, but the
/// round-trip keeps a malformed fragment from ever reaching a host.
fn expand_validated(input: &DeriveInput) -> Result<Expansion, ExtractionError> {
    let tokens = expand::expand(input)?;
    syn::parse2::<File>(tokens.clone()).map_err(|source| ExtractionError::Unparseable { source })?;
    Ok(Expansion { ident: input.ident.clone(), tokens })
}

/// Return the item as derive input when it carries the marker.
///
/// Only the three declaration kinds that can legally carry a derive are
/// considered. Marked non-enum declarations are returned as well, so the
/// expansion pass can reject them with a located diagnostic instead of the
/// marker being silently ignored.
fn marked_input(item: &Item) -> Option<DeriveInput> {
    let input = match item {
        Item::Enum(item) => DeriveInput::from(item.clone()),
        Item::Struct(item) => DeriveInput::from(item.clone()),
        Item::Union(item) => DeriveInput::from(item.clone()),
        _ => return None,
    };
    is_marked(&input.attrs).then_some(input)
}

/// Whether the attribute list names the marker or the derive.
fn is_marked(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| {
        if attr.path().is_ident(MARKER) {
            return true;
        }
        if !attr.path().is_ident("derive") {
            return false;
        }

        let mut found = false;
        if let Meta::List(list) = &attr.meta {
            // Derive entries may be qualified (`caseq::CaseEquatable`), so
            // only the final path segment is compared.
            let _ = list.parse_nested_meta(|meta| {
                if meta.path.segments.last().is_some_and(|seg| seg.ident == DERIVE) {
                    found = true;
                }
                Ok(())
            });
        }
        found
    })
}
