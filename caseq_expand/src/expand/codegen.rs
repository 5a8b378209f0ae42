//! Final phase – emit the companion declarations.

use proc_macro2::TokenStream;
use quote::quote;

use super::analyze::CaseShape;
use super::lower::{Arm, Ir};

/// Assemble the companion declarations for one expanded enum.
///
/// Emits, in order: the shape-only companion enum, the
/// `PartialEq<<Name>RawCase>` impl carrying the comparison and its negation,
/// and the `caseq::CaseEquatable` conformance.
pub fn codegen(ir: &Ir) -> TokenStream {
    let vis = &ir.vis;
    let enum_ident = &ir.enum_ident;
    let raw_ident = &ir.raw_ident;

    // --------------------------- companion enum --------------------------
    let raw_doc = format!("Shape-only cases of [`{enum_ident}`], one unit variant per case.");
    let raw_variants = ir.arms.iter().map(|arm| {
        let case = &arm.case;
        quote! { #case }
    });

    // --------------------------- comparison ------------------------------
    let eq_body = if ir.arms.is_empty() {
        // A zero-case enum is uninhabited, and an empty match on an
        // uninhabited place is exhaustive for any return type. The vacuous
        // comparison therefore needs no substitute default branch.
        quote! { match *self {} }
    } else {
        let eq_arms = ir.arms.iter().map(|arm| {
            let case = &arm.case;
            let pattern = arm_pattern(enum_ident, arm);
            quote! { #pattern => *rhs == #raw_ident::#case }
        });
        quote! {
            match self {
                #(#eq_arms ,)*
            }
        }
    };

    // --------------------------- assemble -------------------------------
    quote! {
        #[doc = #raw_doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #vis enum #raw_ident {
            #(#raw_variants ,)*
        }

        #[automatically_derived]
        #[allow(clippy::partialeq_ne_impl)]
        impl ::core::cmp::PartialEq<#raw_ident> for #enum_ident {
            fn eq(&self, rhs: &#raw_ident) -> bool {
                #eq_body
            }

            fn ne(&self, rhs: &#raw_ident) -> bool {
                !self.eq(rhs)
            }
        }

        #[automatically_derived]
        impl ::caseq::CaseEquatable for #enum_ident {
            type RawCase = #raw_ident;
        }
    }
}

/// Pattern matching one case while ignoring its payload.
fn arm_pattern(enum_ident: &syn::Ident, arm: &Arm) -> TokenStream {
    let case = &arm.case;
    match arm.shape {
        CaseShape::Unit => quote! { #enum_ident::#case },
        CaseShape::Tuple => quote! { #enum_ident::#case(..) },
        CaseShape::Struct => quote! { #enum_ident::#case { .. } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::expand;
    use syn::{DeriveInput, parse_quote};

    #[test]
    fn emits_companion_enum_and_impls() {
        let input: DeriveInput = parse_quote! {
            pub enum MyEnum { One(i32), Two(String), Three }
        };
        let code = expand(&input).unwrap().to_string();

        assert!(code.contains("pub enum MyEnumRawCase"));
        assert!(code.contains("impl :: core :: cmp :: PartialEq < MyEnumRawCase > for MyEnum"));
        assert!(code.contains("impl :: caseq :: CaseEquatable for MyEnum"));
        assert!(code.contains("type RawCase = MyEnumRawCase"));
    }

    #[test]
    fn payload_patterns_are_wildcards() {
        let input: DeriveInput = parse_quote! {
            enum Shapes { Unit, Tuple(u8), Struct { x: i32 } }
        };
        let code = expand(&input).unwrap().to_string();

        assert!(code.contains("Shapes :: Unit => * rhs == ShapesRawCase :: Unit"));
        assert!(code.contains("Shapes :: Tuple (..) => * rhs == ShapesRawCase :: Tuple"));
        assert!(code.contains("Shapes :: Struct { .. } => * rhs == ShapesRawCase :: Struct"));
    }

    #[test]
    fn zero_case_enum_gets_vacuous_match() {
        let input: DeriveInput = parse_quote! { enum Never {} };
        let code = expand(&input).unwrap().to_string();

        assert!(code.contains("enum NeverRawCase"));
        assert!(code.contains("match * self { }"));
    }
}
