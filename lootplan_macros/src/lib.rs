use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Expr, Fields, Lit, LitFloat, LitStr, parse_macro_input,
    spanned::Spanned,
};

/// Variant attribute: #[weight(<expr>)]
///
/// The variant identifier becomes the loot name.
#[proc_macro_derive(WeightedLoot, attributes(weight))]
pub fn derive_weighted_loot(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let enum_ident = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new(
            input.ident.span(),
            "WeightedLoot can only be derived for enums",
        ));
    };

    let mut entries = Vec::new();
    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.span(),
                "WeightedLoot only supports fieldless variants",
            ));
        }

        let weight = find_weight(&variant.attrs)?.ok_or_else(|| {
            syn::Error::new(variant.span(), "missing #[weight(...)] on variant")
        })?;
        let weight = to_f64_expr(weight);

        let ident = &variant.ident;
        let name = LitStr::new(&ident.to_string(), ident.span());
        entries.push(quote! { (Self::#ident, #name, (#weight)) });
    }

    if entries.is_empty() {
        return Err(syn::Error::new(
            input.ident.span(),
            "WeightedLoot needs at least one variant",
        ));
    }

    Ok(quote! {
        impl ::lootplan::WeightedLoot for #enum_ident {
            const ENTRIES: &'static [(Self, &'static str, f64)] = &[
                #(#entries),*
            ];
        }
    })
}

fn find_weight(attrs: &[Attribute]) -> syn::Result<Option<Expr>> {
    let mut weight = None;
    for Attribute { meta, .. } in attrs {
        if !meta.path().is_ident("weight") {
            continue;
        }
        let syn::Meta::List(list) = meta else {
            return Err(syn::Error::new(meta.span(), "use #[weight(<expr>)]"));
        };
        // e.g. 0.5, 1/100 or 2.0 * 3.0
        let expr = syn::parse2::<Expr>(list.tokens.clone())
            .map_err(|e| syn::Error::new(list.span(), format!("invalid weight expr: {e}")))?;
        weight = Some(expr);
    }
    Ok(weight)
}

/// Recursively rewrite integer literals to floating-point (e.g., 1 -> 1.0),
/// so that expressions like `1/100` use FP division.
fn to_f64_expr(mut e: Expr) -> Expr {
    match e {
        Expr::Lit(ref mut el) => {
            if let Lit::Int(int) = &el.lit {
                let s = format!("{}.0", int.base10_digits());
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
