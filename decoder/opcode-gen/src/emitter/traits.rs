use crate::emitter::Artifact;
use crate::error::GenResult;
use crate::table::CompiledTable;

/// A target syntax for the emitted table and category enumeration.
pub trait TableSyntax {
    fn render_table(&self, table: &CompiledTable) -> GenResult<String>;

    fn render_categories(&self, table: &CompiledTable) -> GenResult<String>;

    /// Line written before each table when several are emitted together.
    fn banner(&self, table: &CompiledTable) -> String {
        format!("// {}", table.name)
    }

    /// Checks the assembled fragments before they are handed out.
    fn check(&self, _table: &CompiledTable, _artifact: &Artifact) -> GenResult<()> {
        Ok(())
    }
}
