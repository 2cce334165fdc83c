/// Number of hex digits needed to show every bit of a `width`-bit word.
pub fn hex_digits(width: u32) -> usize {
    width.div_ceil(4) as usize
}

/// `value` as a `0x` literal zero-padded to the table width so every entry of
/// one table lines up.
pub fn to_hex(value: u64, width: u32) -> String {
    format!("0x{value:0digits$x}", digits = hex_digits(width))
}

/// Smallest unsigned integer type that holds a `width`-bit word.
pub fn word_type(width: u32) -> &'static str {
    match width {
        0..=8 => "u8",
        9..=16 => "u16",
        17..=32 => "u32",
        _ => "u64",
    }
}
