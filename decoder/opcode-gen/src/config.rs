//! Rule tables supplied as TOML instead of the built-in lists.
//!
//! ```toml
//! [[tables]]
//! name = "THUMB_OPCODE_TABLE"
//! category_enum = "ThumbInstrType"
//! width = 16
//! rules = [
//!   { template = "000_____________", category = "MoveShiftedRegister", description = "Move Shifted Register" },
//! ]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GenError, GenResult};
use crate::ir::TableDef;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableFile {
    #[serde(default)]
    pub tables: Vec<TableDef>,
}

pub fn load_from_str(toml_str: &str) -> GenResult<Vec<TableDef>> {
    let file: TableFile = toml::from_str(toml_str)?;
    Ok(file.tables)
}

pub fn load_from_file(path: &Path) -> GenResult<Vec<TableDef>> {
    let content = std::fs::read_to_string(path).map_err(|source| GenError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let tables = load_from_str(&content)?;
    tracing::info!(path = %path.display(), tables = tables.len(), "loaded rule tables");
    Ok(tables)
}
