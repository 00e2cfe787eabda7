//! Procedural macros for the unittest framework
//!
//! This crate provides the `#[def_test]` attribute, which turns a plain function into
//! a configured `unittest::Test` run. Nothing is registered: calling the function runs
//! the test and returns its `unittest::TestReport`.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{ItemFn, LitInt, LitStr, parse_macro_input};

#[derive(Default)]
struct TestArgs {
    name: Option<LitStr>,
    timed: bool,
    repeat: Option<LitInt>,
}

impl TestArgs {
    fn parse(&mut self, meta: syn::meta::ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("time") {
            self.timed = true;
            Ok(())
        } else if meta.path.is_ident("repeat") {
            let count: LitInt = meta.value()?.parse()?;
            if !matches!(count.suffix(), "" | "usize") {
                return Err(syn::Error::new(count.span(), "repeat count must be a `usize` literal"));
            }
            if count.base10_parse::<usize>()? == 0 {
                return Err(syn::Error::new(count.span(), "repeat count must be at least 1"));
            }
            self.repeat = Some(count);
            Ok(())
        } else if meta.path.is_ident("name") {
            let name: LitStr = meta.value()?.parse()?;
            if name.value().is_empty() {
                return Err(syn::Error::new(name.span(), "test name must not be empty"));
            }
            self.name = Some(name);
            Ok(())
        } else {
            Err(meta.error("unsupported def_test argument, expected `time`, `repeat` or `name`"))
        }
    }
}

/// Defines a test case.
///
/// # Example
///
/// ```rust
/// use unittest::{assert_eq, def_test};
///
/// #[def_test(time, repeat = 10)]
/// fn addition() {
///     let a = 2 + 2;
///     assert_eq!(a, 4);
/// }
///
/// fn main() {
///     addition();
/// }
/// ```
///
/// The function body becomes the test body, so assertion macros can leave it early
/// with `?`. A body that already returns `unittest::TestResult` is used as is;
/// otherwise `Ok(())` is appended. The generated function takes no arguments and
/// returns the `unittest::TestReport`.
///
/// # Attributes
/// - `#[def_test]` - Single untimed run, named after the function
/// - `#[def_test(time)]` - Measure every iteration
/// - `#[def_test(repeat = N)]` - Run the body `N` times (`N >= 1`)
/// - `#[def_test(name = "...")]` - Display name instead of the function name
#[proc_macro_attribute]
pub fn def_test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut args = TestArgs::default();
    let parser = syn::meta::parser(|meta| args.parse(meta));
    parse_macro_input!(attr with parser);

    let input = parse_macro_input!(item as ItemFn);

    if !input.sig.inputs.is_empty() {
        return syn::Error::new_spanned(&input.sig.inputs, "test functions take no arguments")
            .to_compile_error()
            .into();
    }

    let fn_name = &input.sig.ident;
    let fn_attrs = &input.attrs;
    let fn_vis = &input.vis;
    let fn_block = &input.block;
    let fn_output = &input.sig.output;

    let name = args
        .name
        .unwrap_or_else(|| LitStr::new(&fn_name.to_string(), Span::call_site()));
    let timed = args.timed;
    let repeat = args
        .repeat
        .unwrap_or_else(|| LitInt::new("1", Span::call_site()));

    // Check if function returns TestResult
    let has_return_type = !matches!(input.sig.output, syn::ReturnType::Default);

    let body = if has_return_type {
        quote! {
            || #fn_output #fn_block
        }
    } else {
        quote! {
            || -> unittest::TestResult {
                #fn_block
                ::core::result::Result::Ok(())
            }
        }
    };

    let output = quote! {
        #(#fn_attrs)*
        #fn_vis fn #fn_name() -> unittest::TestReport {
            const REPEAT: ::core::num::NonZeroUsize = match ::core::num::NonZeroUsize::new(#repeat) {
                ::core::option::Option::Some(n) => n,
                ::core::option::Option::None => ::core::panic!("repeat count must be at least 1"),
            };

            unittest::Test::new(#name)
                .with_timing(#timed)
                .repeat_nonzero(REPEAT)
                .run(#body)
        }
    };

    output.into()
}
