use deluxe::ExtractAttributes;
use proc_macro2::TokenStream;
use quote::quote;

pub struct Output {
    pub field_entries: Vec<TokenStream>,
}

#[derive(ExtractAttributes, Default, Debug)]
#[deluxe(attributes(sql))]
pub struct Container {
    pub table: Option<String>,
}

#[derive(ExtractAttributes, Default, Debug)]
#[deluxe(attributes(sql))]
struct SqlField {
    column: Option<String>,
    skip: Option<bool>,
}

pub fn container_attributes(input: &mut syn::DeriveInput) -> syn::Result<Container> {
    if !input.attrs.iter().any(|attr| attr.path().is_ident("sql")) {
        return Ok(Container::default());
    }
    let container = Container::extract_attributes(input)?;
    if let Some(table) = &container.table {
        check_identifier(&input.ident, table, "table")?;
    }
    Ok(container)
}

pub fn process_fields(
    fields: &syn::punctuated::Punctuated<syn::Field, syn::Token![,]>,
) -> syn::Result<Output> {
    let mut field_entries = Vec::new();

    for field in fields {
        let mut field = field.clone();
        let attributes = if field.attrs.iter().any(|attr| attr.path().is_ident("sql")) {
            SqlField::extract_attributes(&mut field)?
        } else {
            SqlField::default()
        };
        let Some(field_name) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(&field, "field name should be present"));
        };

        let name = field_name.to_string();
        let name = name.strip_prefix("r#").unwrap_or(&name).to_owned();

        let column = match (attributes.skip.unwrap_or(false), attributes.column) {
            (true, _) => quote! { ::std::option::Option::Some("") },
            (false, Some(column)) => {
                if !column.is_empty() {
                    check_identifier(field_name, &column, "column")?;
                }
                quote! { ::std::option::Option::Some(#column) }
            }
            (false, None) => {
                check_identifier(field_name, &snake_case(&name), "column")?;
                quote! { ::std::option::Option::None }
            }
        };

        field_entries.push(quote! {
            ::sqlshape::Field::new(#name, #column, &self.#field_name)
        });
    }

    Ok(Output { field_entries })
}

// Annotated names and snake_case fallbacks are checked at compile time with
// the same allowlist the runtime sanitizer uses.
fn check_identifier(span: &syn::Ident, value: &str, what: &str) -> syn::Result<()> {
    if is_valid_name(value) {
        Ok(())
    } else {
        Err(syn::Error::new_spanned(
            span,
            format!("invalid {what} name {value:?}: only [A-Za-z0-9_] is allowed"),
        ))
    }
}

fn is_valid_name(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// Must agree with `sqlshape::to_snake_case`.
fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
