use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod process;

/// Derives `sqlshape::Describable`.
///
/// * `#[sql(table = "people")]` on the struct overrides the default table.
/// * `#[sql(column = "id")]` on a field sets its column name.
/// * `#[sql(column = "")]` or `#[sql(skip = true)]` leaves the field out of
///   every generated statement.
///
/// Field types must implement `ToValue`, `Default` and `PartialEq`.
#[proc_macro_derive(Describable, attributes(sql))]
pub fn describable_derive(input: TokenStream) -> TokenStream {
    let mut input = parse_macro_input!(input as DeriveInput);

    let container = match process::container_attributes(&mut input) {
        Ok(container) => container,
        Err(err) => return err.to_compile_error().into(),
    };

    let fields = match input.data {
        Data::Struct(ref data) => match data.fields {
            Fields::Named(ref fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(
                    &input.ident,
                    "Describable derive macro only supports structs with named fields",
                )
                .to_compile_error()
                .into()
            }
        },
        _ => {
            return syn::Error::new_spanned(
                &input.ident,
                "Describable derive macro only supports structs",
            )
            .to_compile_error()
            .into()
        }
    };

    let process::Output { field_entries } = match process::process_fields(fields) {
        Ok(output) => output,
        Err(err) => return err.to_compile_error().into(),
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let table_name = container.table.map(|table| {
        quote! {
            fn table_name(&self) -> ::std::string::String {
                ::std::string::String::from(#table)
            }
        }
    });

    let expanded = quote! {
        impl #impl_generics ::sqlshape::Describable for #name #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                stringify!(#name)
            }

            fn fields(&self) -> ::std::vec::Vec<::sqlshape::Field> {
                ::std::vec![#(#field_entries),*]
            }

            #table_name
        }
    };

    expanded.into()
}
