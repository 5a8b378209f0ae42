//! Third phase – derive the generated identifiers.

use quote::format_ident;
use syn::{Ident, Visibility};

use super::analyze::{CaseShape, Model};

/// One arm of the generated comparison, in case order.
#[derive(Debug, Clone)]
pub struct Arm {
    /// The case this arm covers.
    pub case: Ident,
    /// Shape of the pattern that ignores the payload.
    pub shape: CaseShape,
}

/// Everything codegen needs, with all names resolved.
pub struct Ir {
    /// Visibility of the generated companion enum.
    pub vis: Visibility,
    /// Name of the source enum.
    pub enum_ident: Ident,
    /// Name of the shape-only companion enum.
    pub raw_ident: Ident,
    /// Match arms in case order.
    pub arms: Vec<Arm>,
}

/// Resolve the generated names.
///
/// The companion enum is always `<Name>RawCase` — a reserved suffix, not
/// user-configurable, so identical inputs always name identical outputs.
pub fn lower(model: Model) -> Ir {
    let arms = model
        .cases
        .into_iter()
        .map(|case| Arm { case: case.ident, shape: case.shape })
        .collect();

    Ir {
        vis: model.vis,
        raw_ident: format_ident!("{}RawCase", model.ident),
        enum_ident: model.ident,
        arms,
    }
}
