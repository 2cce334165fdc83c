use std::cmp::Reverse;

use crate::compiler::CompiledRule;

/// Orders rules most specific first so "first match wins" never lets a
/// general rule shadow a specific one. Equally specific rules keep their
/// authored order.
pub fn order(mut rules: Vec<CompiledRule>) -> Vec<CompiledRule> {
    // sort_by_key is stable
    rules.sort_by_key(|rule| Reverse(rule.significant_bits));
    rules
}

/// Pairs of equally specific rules that some word matches both of. Between
/// those only the authored order decides the winner.
pub fn overlapping_ties(ordered: &[CompiledRule]) -> Vec<(&CompiledRule, &CompiledRule)> {
    let mut ties = vec![];

    for group in ordered.chunk_by(|a, b| a.significant_bits == b.significant_bits) {
        for (ndx, first) in group.iter().enumerate() {
            for second in &group[ndx + 1..] {
                if first.overlaps(second) {
                    ties.push((first, second));
                }
            }
        }
    }

    ties
}
