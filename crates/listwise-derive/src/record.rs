use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Field, Fields, GenericArgument, PathArguments, Type};

// derive_record
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let ident = &input.ident;
    let ident_name = ident.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = if let Data::Struct(data) = &input.data {
        if let Fields::Named(named) = &data.fields {
            &named.named
        } else {
            let err = Error::new_spanned(
                &data.fields,
                "Record can only be derived for structs with named fields",
            );
            return err.to_compile_error();
        }
    } else {
        let err = Error::new_spanned(
            &input.ident,
            "Record can only be derived for structs with named fields",
        );
        return err.to_compile_error();
    };

    let mut model_entries = Vec::with_capacity(fields.len());
    let mut field_arms = Vec::with_capacity(fields.len());

    for field in fields {
        let field_ident = field.ident.as_ref().expect("named field");
        let field_name = field_ident.to_string();

        let nested = match is_nested(field) {
            Ok(nested) => nested,
            Err(err) => return err.to_compile_error(),
        };

        let (model_kind, access_expr) = if nested {
            match nested_exprs(field) {
                Ok(exprs) => exprs,
                Err(err) => return err.to_compile_error(),
            }
        } else {
            scalar_exprs(field_ident)
        };

        model_entries.push(quote! {
            ::listwise::model::FieldModel {
                name: #field_name,
                kind: #model_kind,
            }
        });
        field_arms.push(quote! {
            #field_name => Some(#access_expr),
        });
    }

    quote! {
        impl #impl_generics ::listwise::traits::Record for #ident #ty_generics #where_clause {
            fn model() -> &'static ::listwise::model::RecordModel {
                static MODEL: ::listwise::model::RecordModel = ::listwise::model::RecordModel {
                    name: #ident_name,
                    fields: &[ #(#model_entries),* ],
                };

                &MODEL
            }

            fn field(&self, name: &str) -> Option<::listwise::traits::Field<'_>> {
                match name {
                    #(#field_arms)*
                    _ => None,
                }
            }
        }
    }
}

fn scalar_exprs(field_ident: &syn::Ident) -> (TokenStream, TokenStream) {
    let kind = quote! { ::listwise::model::FieldKind::Scalar };
    let access = quote! {
        ::listwise::traits::Field::Value(
            ::listwise::traits::FieldValue::to_value(&self.#field_ident)
        )
    };

    (kind, access)
}

fn nested_exprs(field: &Field) -> syn::Result<(TokenStream, TokenStream)> {
    let field_ident = field.ident.as_ref().expect("named field");

    match classify_field(&field.ty) {
        FieldCardinality::One => {
            let ty = &field.ty;
            let kind = quote! {
                ::listwise::model::FieldKind::Nested(
                    <#ty as ::listwise::traits::Record>::model
                )
            };
            let access = quote! {
                ::listwise::traits::Field::Record(&self.#field_ident)
            };

            Ok((kind, access))
        }
        FieldCardinality::Opt => {
            let inner = option_inner(&field.ty).ok_or_else(|| {
                Error::new_spanned(&field.ty, "could not extract Option item type")
            })?;
            let kind = quote! {
                ::listwise::model::FieldKind::Nested(
                    <#inner as ::listwise::traits::Record>::model
                )
            };
            let access = quote! {
                match self.#field_ident.as_ref() {
                    Some(inner) => ::listwise::traits::Field::Record(inner),
                    None => ::listwise::traits::Field::Value(::listwise::value::Value::Null),
                }
            };

            Ok((kind, access))
        }
        FieldCardinality::Many => Err(Error::new_spanned(
            &field.ty,
            "#[record(nested)] does not support Vec fields",
        )),
    }
}

// Detect `#[record(nested)]` on a field.
fn is_nested(field: &Field) -> syn::Result<bool> {
    let mut nested = false;

    for attr in &field.attrs {
        if !attr.path().is_ident("record") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("nested") {
                nested = true;
                Ok(())
            } else {
                Err(meta.error("unknown record attribute"))
            }
        })?;
    }

    Ok(nested)
}

///
/// FieldCardinality
///

#[derive(Clone, Copy)]
enum FieldCardinality {
    One,
    Opt,
    Many,
}

fn classify_field(ty: &Type) -> FieldCardinality {
    if is_path_ident(ty, "Option") {
        FieldCardinality::Opt
    } else if is_path_ident(ty, "Vec") {
        FieldCardinality::Many
    } else {
        FieldCardinality::One
    }
}

fn is_path_ident(ty: &Type, ident: &str) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };

    path.path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == ident)
}

fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };

    let segment = path.path.segments.last()?;
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    })
}
