use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    Error, ExprRange, FnArg, Ident, ItemFn, Path, Token,
    ext::IdentExt,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Arguments of `#[test(CASE)]` and `#[test(CASE, iterations = START..END)]`.
struct TestArgs {
    case: Path,
    iterations: Option<ExprRange>,
}

impl Parse for TestArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let case = input.parse()?;
        let mut iterations = None;
        if input.parse::<Option<Token![,]>>()?.is_some() && !input.is_empty() {
            let key: Ident = input.parse()?;
            if key != "iterations" {
                return Err(Error::new(key.span(), "expected `iterations = START..END`"));
            }
            input.parse::<Token![=]>()?;
            iterations = Some(input.parse()?);
            input.parse::<Option<Token![,]>>()?;
        }
        Ok(Self { case, iterations })
    }
}

/// Declare a test in a case.
///
/// The function takes either no argument or the iteration index as `i32`.
#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as TestArgs);
    let func = parse_macro_input!(item as ItemFn);
    expand_test(args, func)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

fn expand_test(args: TestArgs, func: ItemFn) -> syn::Result<TokenStream2> {
    let name = &func.sig.ident;
    let name_str = name.unraw().to_string();
    let wrapper = format_ident!("__kisuite_test_{}", name_str.to_lowercase());
    let name_uppercase = format_ident!("__KISUITE_TEST_{}", name_str.to_uppercase());
    let case = &args.case;
    let iterations = match &args.iterations {
        Some(range) => quote!(#range),
        None => quote!(0..1),
    };

    let call = match func.sig.inputs.len() {
        0 => quote!(#name()),
        1 if matches!(func.sig.inputs.first(), Some(FnArg::Typed(_))) => quote!(#name(iteration)),
        _ => {
            return Err(Error::new_spanned(
                &func.sig.inputs,
                "a test takes no arguments or the iteration index as `i32`",
            ));
        }
    };
    check_plain(&func)?;

    Ok(quote! {
        #func

        const _: () = {
            fn #wrapper(iteration: i32) {
                let _ = iteration;
                #call
            }

            #[::kisuite::__private::linkme::distributed_slice(::kisuite::registry::TESTS)]
            #[linkme(crate = ::kisuite::__private::linkme)]
            static #name_uppercase: ::kisuite::decl::TestDecl = ::kisuite::decl::TestDecl::new(
                &#case,
                #name_str,
                #wrapper,
                #iterations,
                ::kisuite::location!(),
            );
        };
    })
}

/// Declare a setup hook in a case.
///
/// Setup hooks pair with the teardown hooks of the same case by position.
#[proc_macro_attribute]
pub fn setup(attr: TokenStream, item: TokenStream) -> TokenStream {
    hook(attr, item, quote!(Setup))
}

/// Declare a teardown hook in a case.
#[proc_macro_attribute]
pub fn teardown(attr: TokenStream, item: TokenStream) -> TokenStream {
    hook(attr, item, quote!(Teardown))
}

fn hook(attr: TokenStream, item: TokenStream, role: TokenStream2) -> TokenStream {
    let case = parse_macro_input!(attr as Path);
    let func = parse_macro_input!(item as ItemFn);
    expand_hook(case, func, role)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

fn expand_hook(case: Path, func: ItemFn, role: TokenStream2) -> syn::Result<TokenStream2> {
    if !func.sig.inputs.is_empty() {
        return Err(Error::new_spanned(&func.sig.inputs, "a hook takes no arguments"));
    }
    check_plain(&func)?;

    let name = &func.sig.ident;
    let name_str = name.unraw().to_string();
    let name_uppercase = format_ident!("__KISUITE_HOOK_{}", name_str.to_uppercase());
    Ok(quote! {
        #func

        const _: () = {
            #[::kisuite::__private::linkme::distributed_slice(::kisuite::registry::HOOKS)]
            #[linkme(crate = ::kisuite::__private::linkme)]
            static #name_uppercase: ::kisuite::decl::HookDecl = ::kisuite::decl::HookDecl::new(
                &#case,
                ::kisuite::decl::HookRole::#role,
                #name_str,
                #name,
                ::kisuite::location!(),
            );
        };
    })
}

/// Tests and hooks are stored as plain `fn` pointers.
fn check_plain(func: &ItemFn) -> syn::Result<()> {
    let sig = &func.sig;
    if let Some(asyncness) = &sig.asyncness {
        return Err(Error::new_spanned(asyncness, "tests and hooks cannot be async"));
    }
    if !sig.generics.params.is_empty() {
        return Err(Error::new_spanned(&sig.generics, "tests and hooks cannot be generic"));
    }
    Ok(())
}
