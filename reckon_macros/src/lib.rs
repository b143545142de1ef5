use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, FnArg, ItemFn, LitInt, PatType, Type};

enum Param<'a> {
    Scalar(&'a syn::Ident),
    Rest(&'a syn::Ident),
}

fn classify(ty: &Type) -> Option<bool> {
    match ty {
        Type::Path(type_path) => {
            let ident = &type_path.path.segments.last()?.ident;
            (ident == "f64").then_some(false)
        }
        Type::Reference(reference) => match &*reference.elem {
            Type::Slice(slice) => match &*slice.elem {
                Type::Path(inner) if inner.path.is_ident("f64") => Some(true),
                _ => None,
            },
            _ => None,
        },
        _ => None,
    }
}

/// Turns `fn name(a: f64, b: f64) -> Result<f64, EvalError>` (or a single
/// `values: &[f64]` parameter) into a builtin taking `&[f64]`, with the
/// argument count checked before the body runs.
///
/// `#[builtin_fn(min_args = N)]` sets the lower bound for the slice form.
#[proc_macro_attribute]
pub fn builtin_fn(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut min_args: usize = 0;
    let attr_parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("min_args") {
            let value: LitInt = meta.value()?.parse()?;
            min_args = value.base10_parse()?;
            Ok(())
        } else {
            Err(meta.error("unsupported builtin_fn property"))
        }
    });
    parse_macro_input!(attr with attr_parser);

    let input = parse_macro_input!(item as ItemFn);
    let attrs = &input.attrs;
    let vis = &input.vis;
    let fn_name = &input.sig.ident;
    let fn_output = &input.sig.output;
    let fn_body = &input.block;
    let name_str = fn_name.to_string();

    let mut params = Vec::new();
    for arg in &input.sig.inputs {
        let FnArg::Typed(PatType { pat, ty, .. }) = arg else {
            return syn::Error::new_spanned(arg, "builtins cannot take self")
                .to_compile_error()
                .into();
        };
        let syn::Pat::Ident(ref pat_ident) = **pat else {
            return syn::Error::new_spanned(pat, "expected a plain parameter name")
                .to_compile_error()
                .into();
        };
        match classify(ty) {
            Some(false) => params.push(Param::Scalar(&pat_ident.ident)),
            Some(true) => params.push(Param::Rest(&pat_ident.ident)),
            None => {
                return syn::Error::new_spanned(ty, "builtin parameters must be f64 or &[f64]")
                    .to_compile_error()
                    .into()
            }
        }
    }

    let expanded: proc_macro2::TokenStream = match params.as_slice() {
        [Param::Rest(values)] => quote! {
            #(#attrs)*
            #vis fn #fn_name(args: &[f64]) #fn_output {
                if args.len() < #min_args {
                    return Err(crate::error::EvalError::ArgumentCount {
                        function: #name_str.to_string(),
                        expected: crate::error::Arity::AtLeast(#min_args),
                        actual: args.len(),
                    });
                }
                let #values: &[f64] = args;
                #fn_body
            }
        },
        _ if params.iter().all(|p| matches!(p, Param::Scalar(_))) => {
            let arity = params.len();
            let extractions = params.iter().enumerate().map(|(i, param)| {
                let Param::Scalar(ident) = param else {
                    unreachable!()
                };
                quote! { let #ident = args[#i]; }
            });
            quote! {
                #(#attrs)*
                #vis fn #fn_name(args: &[f64]) #fn_output {
                    if args.len() != #arity {
                        return Err(crate::error::EvalError::ArgumentCount {
                            function: #name_str.to_string(),
                            expected: crate::error::Arity::Exactly(#arity),
                            actual: args.len(),
                        });
                    }
                    #(#extractions)*
                    #fn_body
                }
            }
        }
        _ => {
            return syn::Error::new_spanned(
                &input.sig.inputs,
                "a &[f64] parameter must be the only parameter",
            )
            .to_compile_error()
            .into()
        }
    };

    TokenStream::from(expanded)
}
