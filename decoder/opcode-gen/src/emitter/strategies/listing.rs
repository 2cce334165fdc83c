//! Column-aligned plain-text listing of a table, for review and diffing.

use crate::emitter::bits::{hex_digits, to_hex};
use crate::emitter::traits::TableSyntax;
use crate::error::GenResult;
use crate::table::CompiledTable;

pub struct ListingSyntax;

impl TableSyntax for ListingSyntax {
    fn render_table(&self, table: &CompiledTable) -> GenResult<String> {
        let mask_width = hex_digits(table.width) + 2;
        let category_width = table
            .rules
            .iter()
            .map(|rule| rule.category.chars().count())
            .chain(std::iter::once("category".chars().count()))
            .max()
            .unwrap_or_default();

        let mut out = format!(
            "{}: {} rules over {}-bit words, categories in {}\n",
            table.name,
            table.rules.len(),
            table.width,
            table.category_enum
        );
        out.push_str(&format!(
            "  {:<mask_width$}  {:<mask_width$}  {:>4}  {:<category_width$}  description\n",
            "select", "value", "bits", "category"
        ));

        for rule in &table.rules {
            out.push_str(&format!(
                "  {:<mask_width$}  {:<mask_width$}  {:>4}  {:<category_width$}  {}\n",
                to_hex(rule.select_mask, table.width),
                to_hex(rule.value_mask, table.width),
                rule.significant_bits,
                rule.category,
                rule.description,
            ));
        }

        Ok(out)
    }

    fn render_categories(&self, table: &CompiledTable) -> GenResult<String> {
        let mut out = format!("{}: {} categories\n", table.category_enum, table.categories.len());
        for (ndx, category) in table.categories.iter().enumerate() {
            out.push_str(&format!("  {ndx:>3}  {category}\n"));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::emit;
    use crate::ir::{RuleDef, TableDef};

    #[test]
    fn test_listing() {
        let table = CompiledTable::build(&TableDef {
            name: Box::from("THUMB_OPCODE_TABLE"),
            category_enum: Box::from("ThumbInstrType"),
            width: 16,
            rules: vec![
                RuleDef::new("1101____________", "ConditionalBranch", "Conditional Branch"),
                RuleDef::new("11011111________", "SoftwareInterrupt", "Software Interrupt"),
            ],
        })
        .unwrap();

        let artifact = emit(&table, &ListingSyntax).unwrap();
        let lines: Vec<_> = artifact.table.lines().collect();

        assert_eq!(lines[0], "THUMB_OPCODE_TABLE: 2 rules over 16-bit words, categories in ThumbInstrType");
        assert_eq!(lines[1], "  select  value   bits  category           description");
        assert_eq!(lines[2], "  0xff00  0xdf00     8  SoftwareInterrupt  Software Interrupt");
        assert_eq!(lines[3], "  0xf000  0xd000     4  ConditionalBranch  Conditional Branch");

        assert_eq!(
            artifact.categories,
            "ThumbInstrType: 2 categories\n    0  ConditionalBranch\n    1  SoftwareInterrupt\n"
        );
    }

    #[test]
    fn test_listing_aligns_non_ascii_categories() {
        let table = CompiledTable::build(&TableDef {
            name: Box::from("T"),
            category_enum: Box::from("TType"),
            width: 8,
            rules: vec![
                RuleDef::new("1111____", "Écriture", "wide"),
                RuleDef::new("0_______", "Ab", "narrow"),
            ],
        })
        .unwrap();

        let artifact = emit(&table, &ListingSyntax).unwrap();
        let columns: Vec<_> = artifact
            .table
            .lines()
            .skip(1)
            .map(|line| line.chars().count() - line.split("  ").last().unwrap().chars().count())
            .collect();

        assert_eq!(columns.len(), 3);
        assert!(columns.iter().all(|column| *column == columns[0]));
    }
}
