//! Procedural macros for ipc-nexus views.
//!
//! `#[view]` turns a struct with a `props` field into a mountable view with a
//! placeholder body. `#[view_kind]` turns a fieldless enum into the typed name
//! table the registry is keyed by.

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Fields, ItemEnum, ItemStruct, LitStr};

/// Attribute macro implementing `Component` and `View` for a placeholder view.
///
/// # Usage
///
/// ```ignore
/// #[view("Usage")]
/// pub struct UsagePage {
///     props: ipc_nexus::Props,
/// }
/// ```
///
/// The macro generates:
/// - `impl Component for UsagePage` rendering a box titled `Usage` that lists the props.
/// - `impl View for UsagePage` building the struct from its props; any other
///   field is initialised with `Default::default()`.
///
/// Without a title argument the struct name is used.
#[proc_macro_attribute]
pub fn view(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    let struct_name = &input.ident;

    let title = if attr.is_empty() {
        struct_name.to_string()
    } else {
        parse_macro_input!(attr as LitStr).value()
    };

    let Fields::Named(fields) = &input.fields else {
        return syn::Error::new_spanned(&input, "#[view] requires a struct with named fields")
            .to_compile_error()
            .into();
    };

    let names: Vec<_> = fields.named.iter().filter_map(|f| f.ident.as_ref()).collect();
    if !names.iter().any(|name| *name == "props") {
        return syn::Error::new_spanned(struct_name, "#[view] requires a `props: ipc_nexus::Props` field")
            .to_compile_error()
            .into();
    }

    let inits = names.iter().map(|name| {
        if *name == "props" {
            quote! { #name: props }
        } else {
            quote! { #name: ::core::default::Default::default() }
        }
    });

    let expanded = quote! {
        #input

        impl ::ipc_nexus::Component for #struct_name {
            fn render(&mut self, frame: &mut ::ratatui::Frame, cx: &mut ::ipc_nexus::Context) {
                ::ipc_nexus::component::placeholder(frame, cx.area, #title, &self.props);
            }
        }

        impl ::ipc_nexus::View for #struct_name {
            fn build(props: ::ipc_nexus::Props) -> Self {
                Self { #(#inits),* }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Attribute macro turning a fieldless enum into a view name table.
///
/// # Usage
///
/// ```ignore
/// #[view_kind]
/// pub enum View {
///     Index,
///     Usage,
/// }
/// ```
///
/// The macro generates:
/// - `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]` on the enum
/// - `View::ALL`, every variant in declaration order
/// - `impl ViewKind`, `Display` and `FromStr`, using the lowercased variant name
///   (`Index` is `"index"`). Parsing an unknown name yields `Error::UnknownView`.
#[proc_macro_attribute]
pub fn view_kind(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemEnum);
    let enum_name = &input.ident;

    if let Some(variant) = input.variants.iter().find(|v| !matches!(v.fields, Fields::Unit)) {
        return syn::Error::new_spanned(variant, "#[view_kind] variants cannot carry data")
            .to_compile_error()
            .into();
    }

    let variants: Vec<_> = input.variants.iter().map(|v| &v.ident).collect();
    let names: Vec<String> = variants.iter().map(|v| v.to_string().to_lowercase()).collect();

    let expanded = quote! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #input

        impl #enum_name {
            pub const ALL: &'static [#enum_name] = &[#(#enum_name::#variants),*];
        }

        impl ::ipc_nexus::ViewKind for #enum_name {
            fn name(&self) -> &'static str {
                match self {
                    #(#enum_name::#variants => #names,)*
                }
            }
        }

        impl ::std::fmt::Display for #enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(::ipc_nexus::ViewKind::name(self))
            }
        }

        impl ::std::str::FromStr for #enum_name {
            type Err = ::ipc_nexus::Error;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    #(#names => Ok(#enum_name::#variants),)*
                    _ => Err(::ipc_nexus::Error::UnknownView { name: s.to_string() }),
                }
            }
        }
    };

    TokenStream::from(expanded)
}
