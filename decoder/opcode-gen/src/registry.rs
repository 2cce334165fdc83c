use std::collections::HashMap;

use crate::compiler::CompiledRule;

/// Distinct categories of a table in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet {
    names: Vec<Box<str>>,
    lookup: HashMap<Box<str>, usize>,
}

impl CategorySet {
    /// Returns false if the category was already present.
    pub fn insert(&mut self, category: &str) -> bool {
        if self.lookup.contains_key(category) {
            return false;
        }

        let name: Box<str> = Box::from(category);
        self.lookup.insert(name.clone(), self.names.len());
        self.names.push(name);
        true
    }

    pub fn contains(&self, category: &str) -> bool {
        self.lookup.contains_key(category)
    }

    pub fn index_of(&self, category: &str) -> Option<usize> {
        self.lookup.get(category).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|name| &**name)
    }
}

/// Walk `rules` in authored order, which must be the order *before*
/// specificity sorting, since that is the order the enumeration is emitted in.
pub fn register(rules: &[CompiledRule]) -> CategorySet {
    let mut set = CategorySet::default();
    for rule in rules {
        set.insert(&rule.category);
    }
    set
}
