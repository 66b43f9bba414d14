use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{ItemFn, LitStr, parse_macro_input};

/// Wraps the function body and logs its wall-clock time at debug level.
/// An optional string literal argument overrides the label; the default
/// label is the function name.
pub fn timer_inner(attr: TokenStream, item: TokenStream) -> TokenStream {
    let func = parse_macro_input!(item as ItemFn);

    let label = if attr.is_empty() {
        func.sig.ident.to_string()
    } else {
        let lit = parse_macro_input!(attr as LitStr);
        lit.value()
    };
    let label_lit = LitStr::new(&label, Span::call_site());

    let attrs = &func.attrs;
    let vis = &func.vis;
    let sig = &func.sig;
    let block = &func.block;

    let expanded = quote! {
        #(#attrs)*
        #vis #sig {
            let __timer_started = std::time::Instant::now();
            let __timer_output = (move || #block)();
            log::debug!("{}: took {:.2?}", #label_lit, __timer_started.elapsed());
            __timer_output
        }
    };

    TokenStream::from(expanded)
}
