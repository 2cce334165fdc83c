//! Built-in ARM and THUMB instruction class tables (ARM7TDMI encodings).

use crate::ir::{RuleDef, TableDef};

pub const ARM_TABLE_NAME: &str = "ARM_OPCODE_TABLE";
pub const THUMB_TABLE_NAME: &str = "THUMB_OPCODE_TABLE";

#[rustfmt::skip]
const ARM_RULES: &[(&str, &str, &str)] = &[
    ("____00__________________________", "DataProcessing",              "Data Processing / PSR Transfer"),
    ("____000000______________1001____", "Multiply",                    "Multiply"),
    ("____00001_______________1001____", "MultiplyLong",                "Multiply Long"),
    ("____00010_00________00001001____", "SingleDataSwap",              "Single Data Swap"),
    ("____000100101111111111110001____", "BranchAndExchange",           "Branch and Exchange"),
    ("____000__0__________00001__1____", "HalfwordDataTransfer",        "Halfword Data Transfer (register offset)"),
    ("____000__1______________1__1____", "HalfwordDataTransfer",        "Halfword Data Transfer (immediate offset)"),
    ("____01__________________________", "SingleDataTransfer",          "Single Data Transfer"),
    ("____011____________________1____", "Undefined",                   "Undefined"),
    ("____100_________________________", "BlockDataTransfer",           "Block Data Transfer"),
    ("____101_________________________", "Branch",                      "Branch"),
    ("____110_________________________", "CoprocessorDataTransfer",     "Coprocessor Data Transfer"),
    ("____1110___________________0____", "CoprocessorDataOperation",    "Coprocessor Data Operation"),
    ("____1110___________________1____", "CoprocessorRegisterTransfer", "Coprocessor Register Transfer"),
    ("____1111________________________", "SoftwareInterrupt",           "Software Interrupt"),
];

#[rustfmt::skip]
const THUMB_RULES: &[(&str, &str, &str)] = &[
    ("000_____________", "MoveShiftedRegister",         "Move Shifted Register"),
    ("00011___________", "AddSubtract",                 "Add / Subtract"),
    ("001_____________", "MoveCompareAddSubtractImm",   "Move/ Compare/ Add/ Subtract Immediate"),
    ("010000__________", "ALUOperations",               "ALU Operations"),
    ("010001__________", "HiRegisterOperations",        "Hi Register Operations / Branch Exchange"),
    ("01001___________", "PCRelativeLoad",              "PC-relative Load"),
    ("0101__0_________", "LoadStoreWithRegisterOffset", "Load/Store with register offset"),
    ("0101__1_________", "LoadStoreSignHalfwordByte",   "Load/Store Sign-Extended Byte/Halfword"),
    ("011_____________", "LoadStoreWithImmOffset",      "Load/Store with Immediate Offset"),
    ("1000____________", "LoadStoreHalfword",           "Load/Store Halfword"),
    ("1001____________", "SPRelativeLoadStore",         "SP-relative Load/Store"),
    ("1010____________", "LoadAddress",                 "Load Address"),
    ("10110000________", "AddOffsetToStackPointer",     "Add Offset to Stack Pointer"),
    ("1011_10_________", "PushPopRegisters",            "Push/Pop Registers"),
    ("1100____________", "MultipleLoadStore",           "Multiple Load/Store"),
    ("1101____________", "ConditionalBranch",           "Conditional Branch"),
    ("11011111________", "SoftwareInterrupt",           "Software Interrupt"),
];

fn table(name: &str, category_enum: &str, width: u32, rules: &[(&str, &str, &str)]) -> TableDef {
    TableDef {
        name: Box::from(name),
        category_enum: Box::from(category_enum),
        width,
        rules: rules
            .iter()
            .map(|(template, category, description)| RuleDef::new(template, category, description))
            .collect(),
    }
}

pub fn arm() -> TableDef {
    table(ARM_TABLE_NAME, "ArmInstrType", 32, ARM_RULES)
}

pub fn thumb() -> TableDef {
    table(THUMB_TABLE_NAME, "ThumbInstrType", 16, THUMB_RULES)
}

pub fn builtin() -> Vec<TableDef> {
    vec![arm(), thumb()]
}
