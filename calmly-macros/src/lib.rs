use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ItemFn};

/// Wrap a `fn` in the panic-catching adapter at definition time.
///
/// The function's signature, arity and receiver are untouched; only the body
/// is moved inside the adapter, so any panic raised while it runs comes back
/// as a failure instead of unwinding into the caller. Works on free
/// functions, inherent methods and `async fn`s alike.
///
/// The function must return `calmly::Outcome<T, E>` with
/// `E: From<calmly::PanicPayload>`.
///
/// # Usage
/// ```rust,ignore
/// # // this crate cannot depend on calmly, so the example is not compiled
/// # // here; the same code runs in calmly's own tests
/// use calmly::{caught, success, Outcome, PanicPayload};
///
/// struct Calculator;
///
/// impl Calculator {
///     #[caught]
///     fn divide(&self, a: u32, b: u32) -> Outcome<u32, PanicPayload> {
///         success(a / b)
///     }
/// }
///
/// assert!(Calculator.divide(1, 0).is_failure());
/// ```
///
/// Applying the attribute to anything that is not a function is reported as
/// a compile error, never as a panic from the macro itself.
#[proc_macro_attribute]
pub fn caught(args: TokenStream, item: TokenStream) -> TokenStream {
    if !args.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[caught] takes no arguments",
        )
        .to_compile_error()
        .into();
    }

    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = parse_macro_input!(item as ItemFn);

    // the signature is emitted verbatim; only the body moves inside the
    // adapter. async bodies keep their await points, since the catch
    // boundary there is around poll rather than around the whole call.
    let wrapped = if sig.asyncness.is_some() {
        quote! {
            ::calmly::try_caught_future(async move #block).await
        }
    } else {
        quote! {
            ::calmly::try_caught(move || #block)
        }
    };

    quote! {
        #(#attrs)*
        #vis #sig {
            #wrapped
        }
    }
    .into()
}
