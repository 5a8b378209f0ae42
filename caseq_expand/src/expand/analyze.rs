//! Second phase – extract the ordered case list.

use syn::{Fields, Ident, Visibility};

use super::parse::Ast;

/// Payload shape of one case.
///
/// The payload itself is dropped during analysis; the shape survives only so
/// the comparison's match arm can name a pattern that ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseShape {
    /// `Case`
    Unit,
    /// `Case(..)`
    Tuple,
    /// `Case { .. }`
    Struct,
}

/// One extracted case, in declaration order.
#[derive(Debug, Clone)]
pub struct Case {
    /// The case's name.
    pub ident: Ident,
    /// Shape of the discarded payload.
    pub shape: CaseShape,
}

/// The extracted declaration: name plus ordered case names.
pub struct Model {
    /// Visibility of the source enum.
    pub vis: Visibility,
    /// Name of the source enum.
    pub ident: Ident,
    /// Cases in declaration order. May be empty.
    pub cases: Vec<Case>,
}

/// Collect the case names in declaration order.
///
/// Payload types and explicit discriminants are discarded here; only the
/// presence of a case matters. Case names are unique per the enum grammar,
/// so no dedup is needed.
pub fn analyze(ast: Ast) -> Model {
    let cases = ast
        .variants
        .into_iter()
        .map(|variant| Case {
            shape: match variant.fields {
                Fields::Unit => CaseShape::Unit,
                Fields::Unnamed(_) => CaseShape::Tuple,
                Fields::Named(_) => CaseShape::Struct,
            },
            ident: variant.ident,
        })
        .collect();

    Model { vis: ast.vis, ident: ast.ident, cases }
}
