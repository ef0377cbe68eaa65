/// Renders `value` as exactly `width` binary digits, most significant first.
/// Bits above `width` are dropped.
pub fn binary(value: u32, width: u32) -> String {
    let value = if width < 32 { value & ((1 << width) - 1) } else { value };
    let width = width as usize;
    format!("{value:0width$b}")
}

/// Lowercase hexadecimal without padding or prefix.
pub fn hex(value: u32) -> String {
    format!("{value:x}")
}

/// Two-line human readable report of a checksum.
pub fn render(value: u32, width: u32) -> String {
    format!("Binary value: 0b{}\nHex value: 0x{}", binary(value, width), hex(value))
}
