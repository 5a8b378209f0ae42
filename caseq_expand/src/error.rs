//! Error taxonomy of the expansion pass.

use proc_macro2::Span;
use thiserror::Error;

/// Reasons one declaration cannot be expanded.
///
/// Expansion is deterministic, so none of these are retryable. No partial
/// output accompanies an error: a declaration yields either a complete
/// companion fragment or nothing.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The marked declaration is not an enum.
    #[error("`CaseEquatable` can only be derived for enums")]
    NotAnEnum {
        /// Location of the declaration's identifier.
        span: Span,
    },

    /// The marked enum carries generic parameters, which are unsupported.
    #[error("`CaseEquatable` does not support generic enums")]
    GenericEnum {
        /// Location of the declaration's identifier.
        span: Span,
    },

    /// A generated fragment failed to round-trip through the parser.
    ///
    /// This guards the synthesizer itself and indicates a bug in it, not a
    /// problem with the input declaration.
    #[error("generated companion declarations failed to parse: {source}")]
    Unparseable {
        /// The parse failure reported by `syn`.
        #[source]
        source: syn::Error,
    },
}

impl ExtractionError {
    /// Source location a diagnostic for this error should point at.
    pub fn span(&self) -> Span {
        match self {
            Self::NotAnEnum { span } | Self::GenericEnum { span } => *span,
            Self::Unparseable { source } => source.span(),
        }
    }
}

impl From<ExtractionError> for syn::Error {
    fn from(err: ExtractionError) -> Self {
        Self::new(err.span(), err.to_string())
    }
}
