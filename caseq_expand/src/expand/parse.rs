//! First phase – validate the declaration kind.

use syn::{Data, DeriveInput, Ident, Variant, Visibility};

use crate::ExtractionError;

/// A validated declaration: a non-generic enum, stripped down to the pieces
/// the later stages need.
#[derive(Debug)]
pub struct Ast {
    /// Visibility of the source enum, reused for the generated companion.
    pub vis: Visibility,
    /// Name of the source enum.
    pub ident: Ident,
    /// Variant list in declaration order, payloads still attached.
    pub variants: Vec<Variant>,
}

/// Check that the input is an enum and strip it down to an [`Ast`].
///
/// # Errors
///
/// Structs and unions are rejected with [`ExtractionError::NotAnEnum`];
/// enums with generic parameters with [`ExtractionError::GenericEnum`]. Both
/// diagnostics point at the declaration's identifier.
pub fn parse(input: &DeriveInput) -> Result<Ast, ExtractionError> {
    let Data::Enum(data) = &input.data else {
        return Err(ExtractionError::NotAnEnum { span: input.ident.span() });
    };

    if !input.generics.params.is_empty() {
        return Err(ExtractionError::GenericEnum { span: input.ident.span() });
    }

    Ok(Ast {
        vis: input.vis.clone(),
        ident: input.ident.clone(),
        variants: data.variants.iter().cloned().collect(),
    })
}
