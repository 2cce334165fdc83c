#![no_std]

pub mod _generated {
    core::include!(core::concat!(env!("OUT_DIR"), "/opcode_tables.rs"));
}

pub use _generated::{ArmInstrType, ThumbInstrType, ARM_OPCODE_TABLE, THUMB_OPCODE_TABLE};

/// Instruction class of an ARM (32-bit) instruction word.
#[inline]
pub fn classify_arm(word: u32) -> Option<ArmInstrType> {
    opcode_gen_nostd::classify(&ARM_OPCODE_TABLE, word).copied()
}

/// Instruction class of a THUMB (16-bit) instruction halfword.
#[inline]
pub fn classify_thumb(halfword: u16) -> Option<ThumbInstrType> {
    opcode_gen_nostd::classify(&THUMB_OPCODE_TABLE, halfword).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_arm() {
        assert_eq!(classify_arm(0xe12f_ff1e), Some(ArmInstrType::BranchAndExchange)); // bx lr
        assert_eq!(classify_arm(0xe080_0001), Some(ArmInstrType::DataProcessing)); // add r0, r0, r1
        assert_eq!(classify_arm(0xe000_0291), Some(ArmInstrType::Multiply)); // mul r0, r1, r2
        assert_eq!(classify_arm(0xe081_0392), Some(ArmInstrType::MultiplyLong)); // umull r0, r1, r2, r3
        assert_eq!(classify_arm(0xe101_0092), Some(ArmInstrType::SingleDataSwap)); // swp r0, r2, [r1]
        assert_eq!(classify_arm(0xe1d1_00b0), Some(ArmInstrType::HalfwordDataTransfer)); // ldrh r0, [r1]
        assert_eq!(classify_arm(0xe591_0000), Some(ArmInstrType::SingleDataTransfer)); // ldr r0, [r1]
        assert_eq!(classify_arm(0xe92d_4000), Some(ArmInstrType::BlockDataTransfer)); // push {lr}
        assert_eq!(classify_arm(0xeaff_fffe), Some(ArmInstrType::Branch)); // b .
        assert_eq!(classify_arm(0xef00_0000), Some(ArmInstrType::SoftwareInterrupt)); // swi 0
        assert_eq!(classify_arm(0xe600_0010), Some(ArmInstrType::Undefined));
    }

    #[test]
    fn test_classify_thumb() {
        assert_eq!(classify_thumb(0xdf01), Some(ThumbInstrType::SoftwareInterrupt)); // swi 1
        assert_eq!(classify_thumb(0xd0fe), Some(ThumbInstrType::ConditionalBranch)); // beq .
        assert_eq!(classify_thumb(0xb082), Some(ThumbInstrType::AddOffsetToStackPointer)); // sub sp, #8
        assert_eq!(classify_thumb(0xb500), Some(ThumbInstrType::PushPopRegisters)); // push {lr}
        assert_eq!(classify_thumb(0x1c08), Some(ThumbInstrType::AddSubtract)); // adds r0, r1, #0
        assert_eq!(classify_thumb(0x6808), Some(ThumbInstrType::LoadStoreWithImmOffset)); // ldr r0, [r1]
        assert_eq!(classify_thumb(0x4770), Some(ThumbInstrType::HiRegisterOperations)); // bx lr
        assert_eq!(classify_thumb(0xe7fe), None); // unconditional branch has no rule
    }

    #[test]
    fn test_categories_in_authored_order() {
        assert_eq!(ArmInstrType::ALL.len(), 14);
        assert_eq!(ArmInstrType::ALL[0], ArmInstrType::DataProcessing);
        assert_eq!(ThumbInstrType::ALL.len(), 17);
        assert_eq!(ThumbInstrType::ALL[0], ThumbInstrType::MoveShiftedRegister);
    }
}
