pub mod bits;
pub mod strategies;
pub mod traits;

use std::collections::HashSet;
use std::fmt;

use crate::error::{GenError, GenResult};
use crate::ir::TableDef;
use crate::table::CompiledTable;
use self::traits::TableSyntax;

/// The two rendered fragments of one table. The table fragment refers to the
/// categories declared by the enumeration fragment, so they are only ever
/// handed out together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub table: String,
    pub categories: String,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.table, self.categories)
    }
}

pub fn emit<S: TableSyntax + ?Sized>(table: &CompiledTable, syntax: &S) -> GenResult<Artifact> {
    let artifact = Artifact {
        table: syntax.render_table(table)?,
        categories: syntax.render_categories(table)?,
    };
    syntax.check(table, &artifact)?;

    tracing::info!(table = %table.name, entries = table.rules.len(), "emitted table");
    Ok(artifact)
}

fn ensure_unique<'a>(names: impl Iterator<Item = &'a str>) -> GenResult<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(GenError::DuplicateName { name: Box::from(name) });
        }
    }
    Ok(())
}

/// Builds and emits every table of a batch. Nothing is returned unless every
/// table succeeds.
pub fn generate<S: TableSyntax + ?Sized>(defs: &[TableDef], syntax: &S) -> GenResult<String> {
    ensure_unique(defs.iter().map(|def| &*def.name))?;
    ensure_unique(defs.iter().map(|def| &*def.category_enum))?;

    let mut sections = Vec::with_capacity(defs.len());
    for def in defs {
        let table = CompiledTable::build(def)?;
        let artifact = emit(&table, syntax)?;
        sections.push(format!("{}\n{}", syntax.banner(&table), artifact));
    }

    Ok(sections.join("\n\n"))
}
