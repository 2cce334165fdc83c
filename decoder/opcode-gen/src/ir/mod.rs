use serde::{Deserialize, Serialize};

use crate::error::PatternFault;

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Bit {
    Zero,
    One,
}

/// One position per bit, most significant first. `None` is "don't care".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitTemplate {
    bits: Box<[Option<Bit>]>,
}

impl BitTemplate {
    pub const DONT_CARE: char = '_';

    /// Parses the authoring form: `0`, `1` and `_`, leftmost symbol is the
    /// most significant bit.
    pub fn parse(text: &str) -> Result<Self, PatternFault> {
        let bits = text
            .chars()
            .enumerate()
            .map(|(position, symbol)| match symbol {
                '0' => Ok(Some(Bit::Zero)),
                '1' => Ok(Some(Bit::One)),
                Self::DONT_CARE => Ok(None),
                _ => Err(PatternFault::InvalidSymbol { symbol, position }),
            })
            .collect::<Result<Box<[_]>, _>>()?;

        Ok(Self { bits })
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[Option<Bit>] {
        &self.bits
    }
}

impl From<Vec<Option<Bit>>> for BitTemplate {
    fn from(bits: Vec<Option<Bit>>) -> Self {
        Self { bits: bits.into_boxed_slice() }
    }
}

impl std::fmt::Display for BitTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in self.bits.iter() {
            let symbol = match bit {
                Some(Bit::Zero) => '0',
                Some(Bit::One) => '1',
                None => Self::DONT_CARE,
            };
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// An authored rule, as written in a rule list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDef {
    pub template: Box<str>,
    pub category: Box<str>,
    pub description: Box<str>,
}

impl RuleDef {
    pub fn new(template: &str, category: &str, description: &str) -> Self {
        Self {
            template: Box::from(template),
            category: Box::from(category),
            description: Box::from(description),
        }
    }
}

/// One input table: its rules in authored order plus the names used when it
/// is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDef {
    pub name: Box<str>,
    pub category_enum: Box<str>,
    pub width: u32,
    #[serde(default)]
    pub rules: Vec<RuleDef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbols() {
        let template = BitTemplate::parse("10_").unwrap();
        assert_eq!(template.bits(), &[Some(Bit::One), Some(Bit::Zero), None]);
        assert_eq!(template.to_string(), "10_");
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let err = BitTemplate::parse("911_").unwrap_err();
        assert_eq!(err, PatternFault::InvalidSymbol { symbol: '9', position: 0 });

        let err = BitTemplate::parse("01x1").unwrap_err();
        assert_eq!(err, PatternFault::InvalidSymbol { symbol: 'x', position: 2 });
    }

    #[test]
    fn test_structured_template() {
        let template = BitTemplate::from(vec![None, Some(Bit::One)]);
        assert_eq!(template.len(), 2);
        assert_eq!(template.to_string(), "_1");
    }
}
