use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Expr, Fields, Lit, LitFloat, parse_macro_input, spanned::Spanned,
};

/// Variant attribute: #[probability(<expr>)], a percentage of all draws.
///
/// Generates `gachatables::WeightedEnum` with the variants in declaration
/// order, their weights, and a positional `index`.
#[proc_macro_derive(WeightedEnum, attributes(probability))]
pub fn derive_weighted_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let enum_ident = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new(
            input.ident.span(),
            "WeightedEnum can only be derived for enums",
        )
        .to_compile_error()
        .into();
    };

    let mut entries = Vec::new();
    let mut variants = Vec::new();
    let mut index_arms = Vec::new();

    for (position, variant) in data_enum.variants.iter().enumerate() {
        // rarity tiers are C-like
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new(
                variant.span(),
                "WeightedEnum only supports fieldless variants",
            )
            .to_compile_error()
            .into();
        }

        let weight_expr = match probability_of(&variant.attrs) {
            Ok(Some(expr)) => expr,
            Ok(None) => {
                return syn::Error::new(variant.span(), "missing #[probability(...)] on variant")
                    .to_compile_error()
                    .into();
            }
            Err(err) => return err.to_compile_error().into(),
        };

        let ident = &variant.ident;

        // Upgrade integer literals to floats so 1/2 => 1.0/2.0
        let expr_f64 = to_f64_expr(weight_expr);

        entries.push(quote! { (Self::#ident, (#expr_f64)) });
        variants.push(quote! { Self::#ident });
        index_arms.push(quote! { Self::#ident => #position });
    }

    let expanded = quote! {
        impl gachatables::WeightedEnum for #enum_ident {
            const ENTRIES: &'static [(Self, f64)] = &[
                #(#entries),*
            ];
            const VARIANTS: &'static [Self] = &[
                #(#variants),*
            ];

            #[inline]
            fn index(self) -> usize {
                match self {
                    #(#index_arms),*
                }
            }
        }
    };

    expanded.into()
}

fn probability_of(attrs: &[Attribute]) -> syn::Result<Option<Expr>> {
    let mut weight_expr = None;
    for Attribute { meta, .. } in attrs {
        if !meta.path().is_ident("probability") {
            continue;
        }
        let syn::Meta::List(list) = meta else {
            return Err(syn::Error::new(meta.span(), "use #[probability(<expr>)]"));
        };
        // Parse inside as an expression (e.g., 58.5 or 117/2)
        let expr = syn::parse2::<Expr>(list.tokens.clone())
            .map_err(|e| syn::Error::new(list.span(), format!("invalid probability expr: {e}")))?;
        weight_expr = Some(expr);
    }
    Ok(weight_expr)
}

/// Recursively rewrite integer literals to floating-point (e.g., 1 -> 1.0),
/// so that expressions like `1/2` use FP division.
fn to_f64_expr(mut e: Expr) -> Expr {
    match e {
        Expr::Lit(ref mut el) => {
            if let Lit::Int(int) = &el.lit {
                let s = format!("{}{}", int.base10_digits(), ".0");
                el.lit = Lit::Float(LitFloat::new(&s, int.span()));
            }
            e
        }
        Expr::Binary(mut b) => {
            b.left = Box::new(to_f64_expr(*b.left));
            b.right = Box::new(to_f64_expr(*b.right));
            Expr::Binary(b)
        }
        Expr::Paren(mut p) => {
            p.expr = Box::new(to_f64_expr(*p.expr));
            Expr::Paren(p)
        }
        Expr::Unary(mut u) => {
            u.expr = Box::new(to_f64_expr(*u.expr));
            Expr::Unary(u)
        }
        Expr::Group(mut g) => {
            g.expr = Box::new(to_f64_expr(*g.expr));
            Expr::Group(g)
        }
        _ => e,
    }
}
