//! Renders tables as Rust source: a `const` array of `(select, value,
//! category)` entries and the category `enum` it refers to.

use proc_macro2::{Literal, TokenStream};
use quote::quote;

use crate::emitter::bits::{to_hex, word_type};
use crate::emitter::traits::TableSyntax;
use crate::emitter::Artifact;
use crate::error::{GenError, GenResult};
use crate::table::CompiledTable;

pub struct RustSyntax;

fn ident(table: &CompiledTable, name: &str) -> GenResult<syn::Ident> {
    syn::parse_str::<syn::Ident>(name).map_err(|_| GenError::InvalidIdentifier {
        table: table.name.clone(),
        name: Box::from(name),
    })
}

fn invalid_output(table: &CompiledTable, err: syn::Error) -> GenError {
    GenError::InvalidOutput {
        table: table.name.clone(),
        message: err.to_string(),
    }
}

// Descriptions end up in a line comment.
fn single_line(description: &str) -> String {
    description.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn category_enum_tokens(table: &CompiledTable) -> GenResult<TokenStream> {
    let category_enum = ident(table, &table.category_enum)?;
    let variants = table
        .categories
        .iter()
        .map(|category| ident(table, category))
        .collect::<GenResult<Vec<_>>>()?;
    let count = Literal::usize_unsuffixed(variants.len());

    Ok(quote! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum #category_enum {
            #(#variants),*
        }

        impl #category_enum {
            pub const ALL: [Self; #count] = [#(Self::#variants),*];
        }
    })
}

impl TableSyntax for RustSyntax {
    // Written by hand rather than through `quote`: the per-entry description
    // comments would not survive a token stream.
    fn render_table(&self, table: &CompiledTable) -> GenResult<String> {
        let name = ident(table, &table.name)?;
        let category_enum = ident(table, &table.category_enum)?;
        let word = word_type(table.width);

        let mut out = format!(
            "pub const {name}: [({word}, {word}, {category_enum}); {}] = [\n",
            table.rules.len()
        );

        for rule in &table.rules {
            let category = ident(table, &rule.category)?;
            let mut line = format!(
                "    ({}, {}, {category_enum}::{category}),",
                to_hex(rule.select_mask, table.width),
                to_hex(rule.value_mask, table.width),
            );

            let description = single_line(&rule.description);
            if !description.is_empty() {
                line.push_str(" // ");
                line.push_str(&description);
            }

            out.push_str(&line);
            out.push('\n');
        }

        out.push_str("];\n");
        Ok(out)
    }

    fn render_categories(&self, table: &CompiledTable) -> GenResult<String> {
        let tokens = category_enum_tokens(table)?;
        let file = syn::parse2::<syn::File>(tokens).map_err(|err| invalid_output(table, err))?;
        Ok(prettyplease::unparse(&file))
    }

    fn check(&self, table: &CompiledTable, artifact: &Artifact) -> GenResult<()> {
        syn::parse_file(&artifact.to_string())
            .map(|_| ())
            .map_err(|err| invalid_output(table, err))
    }
}
