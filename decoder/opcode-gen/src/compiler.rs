//! Turns bit templates into select/value masks.

use crate::error::{GenError, GenResult, PatternFault};
use crate::ir::{Bit, BitTemplate, RuleDef};

/// Widest table the masks can represent.
pub const MAX_WIDTH: u32 = u64::BITS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompiledMasks {
    /// Bit set for every position that is not "don't care".
    pub select_mask: u64,
    /// Bit set for every position that must be one. Always a subset of
    /// `select_mask`.
    pub value_mask: u64,
    pub significant_bits: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRule {
    /// Position of the rule in the authored list.
    pub index: usize,
    pub select_mask: u64,
    pub value_mask: u64,
    pub significant_bits: u32,
    pub category: Box<str>,
    pub description: Box<str>,
}

impl CompiledRule {
    pub fn matches(&self, word: u64) -> bool {
        opcode_gen_nostd::matches(word, self.select_mask, self.value_mask)
    }

    /// True when some word matches both rules, i.e. no bit is fixed to
    /// different values by the two.
    pub fn overlaps(&self, other: &CompiledRule) -> bool {
        let shared = self.select_mask & other.select_mask;
        (self.value_mask ^ other.value_mask) & shared == 0
    }
}

/// Compiles one template. Position 0 of the template is bit `width - 1`.
///
/// `width` must not exceed [`MAX_WIDTH`]; tables check this before compiling
/// their rules.
pub fn compile(template: &BitTemplate, width: u32) -> Result<CompiledMasks, PatternFault> {
    debug_assert!(width <= MAX_WIDTH);

    if template.len() != width as usize {
        return Err(PatternFault::LengthMismatch {
            expected: width,
            found: template.len(),
        });
    }

    let mut masks = CompiledMasks {
        select_mask: 0,
        value_mask: 0,
        significant_bits: 0,
    };

    for (offset, bit) in template.bits().iter().enumerate() {
        let Some(bit) = bit else { continue };
        let bit_offset = template.len() - 1 - offset;

        masks.select_mask |= 1u64 << bit_offset;
        if *bit == Bit::One {
            masks.value_mask |= 1u64 << bit_offset;
        }
        masks.significant_bits += 1;
    }

    Ok(masks)
}

/// Compiles the rule at `index` of `table`, attaching the offending template
/// to any failure.
pub fn compile_rule(table: &str, index: usize, rule: &RuleDef, width: u32) -> GenResult<CompiledRule> {
    let masks = BitTemplate::parse(&rule.template)
        .and_then(|template| compile(&template, width))
        .map_err(|fault| GenError::MalformedPattern {
            table: Box::from(table),
            index,
            template: rule.template.clone(),
            fault,
        })?;

    tracing::debug!(
        table,
        index,
        select_mask = masks.select_mask,
        value_mask = masks.value_mask,
        significant_bits = masks.significant_bits,
        category = %rule.category,
        "compiled rule"
    );

    Ok(CompiledRule {
        index,
        select_mask: masks.select_mask,
        value_mask: masks.value_mask,
        significant_bits: masks.significant_bits,
        category: rule.category.clone(),
        description: rule.description.clone(),
    })
}
