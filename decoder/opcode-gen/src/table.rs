use crate::compiler::{self, CompiledRule, MAX_WIDTH};
use crate::error::{GenError, GenResult};
use crate::ir::TableDef;
use crate::order;
use crate::registry::{self, CategorySet};

/// A table ready for emission: rules in specificity order plus the category
/// set gathered from the authored order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTable {
    pub name: Box<str>,
    pub category_enum: Box<str>,
    pub width: u32,
    pub rules: Vec<CompiledRule>,
    pub categories: CategorySet,
}

impl CompiledTable {
    /// Compiles every rule of `def`. The first malformed template fails the
    /// whole table.
    pub fn build(def: &TableDef) -> GenResult<Self> {
        if def.width == 0 || def.width > MAX_WIDTH {
            return Err(GenError::UnsupportedWidth {
                table: def.name.clone(),
                width: def.width,
                max: MAX_WIDTH,
            });
        }

        let compiled = def
            .rules
            .iter()
            .enumerate()
            .map(|(index, rule)| compiler::compile_rule(&def.name, index, rule, def.width))
            .collect::<GenResult<Vec<_>>>()?;

        let categories = registry::register(&compiled);
        let rules = order::order(compiled);

        for (first, second) in order::overlapping_ties(&rules) {
            tracing::debug!(
                table = %def.name,
                first = first.index,
                second = second.index,
                significant_bits = first.significant_bits,
                "equally specific rules overlap, authored order decides"
            );
        }

        tracing::info!(
            table = %def.name,
            width = def.width,
            rules = rules.len(),
            categories = categories.len(),
            "built table"
        );

        Ok(Self {
            name: def.name.clone(),
            category_enum: def.category_enum.clone(),
            width: def.width,
            rules,
            categories,
        })
    }

    /// The rule that decides the category of `word`.
    pub fn classify(&self, word: u64) -> Option<&CompiledRule> {
        self.rules.iter().find(|rule| rule.matches(word))
    }
}
