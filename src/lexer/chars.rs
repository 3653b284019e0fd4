//! Code-unit classification.
//!
//! Everything below 0x80 is answered by a 128-entry table; the rest goes to
//! the small Unicode predicates here or to the bitsets in `unicode`.

use bitflags::bitflags;

/// Sentinel stored in the cursor once `index` reaches the end of the source.
/// It is outside the UTF-16 range so no real code unit compares equal to it.
pub const END_OF_SOURCE: u32 = 0x11_0000;

pub const LF: u32 = 0x0A;
pub const CR: u32 = 0x0D;
pub const LINE_SEPARATOR: u32 = 0x2028;
pub const PARAGRAPH_SEPARATOR: u32 = 0x2029;
pub const ZWNJ: u32 = 0x200C;
pub const ZWJ: u32 = 0x200D;
pub const BACKSLASH: u32 = 0x5C;

/// The unit as an ASCII byte for matching; 0 for anything else.
#[inline]
pub fn as_ascii(unit: u32) -> u8 {
    if unit < 0x80 { unit as u8 } else { 0 }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct CharFlags: u16 {
        const IDENTIFIER_START = 1 << 0;
        const IDENTIFIER_PART = 1 << 1;
        const WHITESPACE = 1 << 2;
        const LINE_TERMINATOR = 1 << 3;
        const DECIMAL = 1 << 4;
        const OCTAL = 1 << 5;
        const HEX = 1 << 6;
        const BINARY = 1 << 7;
        const QUOTE = 1 << 8;
    }
}

static ASCII_CHAR_FLAGS: [CharFlags; 128] = build_ascii_table();

const fn build_ascii_table() -> [CharFlags; 128] {
    let mut table = [CharFlags::empty(); 128];
    let mut i = 0;
    while i < 128 {
        let c = i as u8;
        let mut bits = 0u16;
        if c.is_ascii_alphabetic() || c == b'$' || c == b'_' {
            bits |= CharFlags::IDENTIFIER_START.bits() | CharFlags::IDENTIFIER_PART.bits();
        }
        if c.is_ascii_digit() {
            bits |= CharFlags::IDENTIFIER_PART.bits()
                | CharFlags::DECIMAL.bits()
                | CharFlags::HEX.bits();
            if c <= b'7' {
                bits |= CharFlags::OCTAL.bits();
            }
            if c <= b'1' {
                bits |= CharFlags::BINARY.bits();
            }
        }
        if c.is_ascii_hexdigit() {
            bits |= CharFlags::HEX.bits();
        }
        if matches!(c, b' ' | b'\t' | 0x0B | 0x0C) {
            bits |= CharFlags::WHITESPACE.bits();
        }
        if matches!(c, b'\n' | b'\r') {
            bits |= CharFlags::LINE_TERMINATOR.bits();
        }
        if matches!(c, b'\'' | b'"') {
            bits |= CharFlags::QUOTE.bits();
        }
        table[i] = CharFlags::from_bits_retain(bits);
        i += 1;
    }
    table
}

#[inline]
pub fn char_flags(unit: u32) -> CharFlags {
    if unit < 0x80 {
        ASCII_CHAR_FLAGS[unit as usize]
    } else {
        CharFlags::empty()
    }
}

#[inline]
pub fn is_ascii_identifier_start(unit: u32) -> bool {
    char_flags(unit).contains(CharFlags::IDENTIFIER_START)
}

#[inline]
pub fn is_ascii_identifier_part(unit: u32) -> bool {
    char_flags(unit).contains(CharFlags::IDENTIFIER_PART)
}

#[inline]
pub fn is_decimal_digit(unit: u32) -> bool {
    char_flags(unit).contains(CharFlags::DECIMAL)
}

#[inline]
pub fn is_octal_digit(unit: u32) -> bool {
    char_flags(unit).contains(CharFlags::OCTAL)
}

#[inline]
pub fn is_line_terminator(unit: u32) -> bool {
    matches!(unit, LF | CR | LINE_SEPARATOR | PARAGRAPH_SEPARATOR)
}

/// WhiteSpace outside ASCII: the Zs category plus the byte order mark.
pub fn is_unicode_whitespace(unit: u32) -> bool {
    matches!(
        unit,
        0x00A0 | 0x1680 | 0x2000..=0x200A | 0x202F | 0x205F | 0x3000 | 0xFEFF
    )
}

pub fn is_whitespace(unit: u32) -> bool {
    char_flags(unit).contains(CharFlags::WHITESPACE) || is_unicode_whitespace(unit)
}

/// Value of `unit` as a digit in `radix` (2, 8, 10 or 16).
#[inline]
pub fn digit_value(unit: u32, radix: u32) -> Option<u32> {
    let flags = char_flags(unit);
    let valid = match radix {
        2 => flags.contains(CharFlags::BINARY),
        8 => flags.contains(CharFlags::OCTAL),
        10 => flags.contains(CharFlags::DECIMAL),
        16 => flags.contains(CharFlags::HEX),
        _ => false,
    };
    if !valid {
        return None;
    }
    let c = unit as u8;
    Some(match c {
        b'0'..=b'9' => u32::from(c - b'0'),
        b'a'..=b'f' => u32::from(c - b'a') + 10,
        _ => u32::from(c - b'A') + 10,
    })
}

#[inline]
pub fn hex_value(unit: u32) -> Option<u32> {
    digit_value(unit, 16)
}
