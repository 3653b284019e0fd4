//! ID_Start / ID_Continue lookup for code points outside ASCII, and the
//! UTF-16 surrogate arithmetic the scanner needs.

use std::sync::LazyLock;

use super::chars::{ZWJ, ZWNJ, is_ascii_identifier_part, is_ascii_identifier_start};

pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// One bit per code point, word index `cp >> 5`.
pub struct CodePointSet {
    words: Box<[u32]>,
}

impl CodePointSet {
    fn build(contains: impl Fn(char) -> bool, extra: &[u32]) -> Self {
        let mut words = vec![0u32; (MAX_CODE_POINT as usize >> 5) + 1];
        for cp in 0x80..=MAX_CODE_POINT {
            if let Some(ch) = char::from_u32(cp)
                && contains(ch)
            {
                words[(cp >> 5) as usize] |= 1 << (cp & 31);
            }
        }
        for &cp in extra {
            words[(cp >> 5) as usize] |= 1 << (cp & 31);
        }
        Self {
            words: words.into_boxed_slice(),
        }
    }

    #[inline]
    pub fn contains(&self, cp: u32) -> bool {
        self.words
            .get((cp >> 5) as usize)
            .is_some_and(|word| word & (1 << (cp & 31)) != 0)
    }
}

// unicode-ident ships the XID variants. These code points are ID_Start but
// not XID_Start (NFKC closure removes them).
const ID_START_NOT_XID: &[u32] = &[
    0x037A, 0x0E33, 0x0EB3, 0x309B, 0x309C, 0xFC5E, 0xFC5F, 0xFC60, 0xFC61, 0xFC62, 0xFC63,
    0xFDFA, 0xFDFB, 0xFE70, 0xFE72, 0xFE74, 0xFE76, 0xFE78, 0xFE7A, 0xFE7C, 0xFE7E, 0xFF9E,
    0xFF9F,
];

const ID_CONTINUE_NOT_XID: &[u32] = &[
    0x037A, 0x309B, 0x309C, 0xFC5E, 0xFC5F, 0xFC60, 0xFC61, 0xFC62, 0xFC63, 0xFDFA, 0xFDFB,
    0xFE70, 0xFE72, 0xFE74, 0xFE76, 0xFE78, 0xFE7A, 0xFE7C, 0xFE7E,
];

static ID_START: LazyLock<CodePointSet> =
    LazyLock::new(|| CodePointSet::build(unicode_ident::is_xid_start, ID_START_NOT_XID));

static ID_CONTINUE: LazyLock<CodePointSet> = LazyLock::new(|| {
    CodePointSet::build(unicode_ident::is_xid_continue, ID_CONTINUE_NOT_XID)
});

/// IdentifierStartChar: `$`, `_`, or ID_Start.
pub fn is_identifier_start(cp: u32) -> bool {
    if cp < 0x80 {
        is_ascii_identifier_start(cp)
    } else {
        ID_START.contains(cp)
    }
}

/// IdentifierPartChar: `$`, ZWNJ, ZWJ, or ID_Continue.
pub fn is_identifier_part(cp: u32) -> bool {
    if cp < 0x80 {
        is_ascii_identifier_part(cp)
    } else {
        cp == ZWNJ || cp == ZWJ || ID_CONTINUE.contains(cp)
    }
}

#[inline]
pub fn is_lead_surrogate(unit: u32) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

#[inline]
pub fn is_trail_surrogate(unit: u32) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

#[inline]
pub fn combine_surrogates(lead: u32, trail: u32) -> u32 {
    0x1_0000 + ((lead - 0xD800) << 10) + (trail - 0xDC00)
}

/// Appends `cp` as one code unit, or as a surrogate pair above U+FFFF.
pub fn push_code_point(buf: &mut Vec<u16>, cp: u32) {
    if cp > 0xFFFF {
        let offset = cp - 0x1_0000;
        buf.push((0xD800 + (offset >> 10)) as u16);
        buf.push((0xDC00 + (offset & 0x3FF)) as u16);
    } else {
        buf.push(cp as u16);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_classes() {
        assert!(is_identifier_start(u32::from('ä')));
        assert!(is_identifier_start(u32::from('℮')));
        assert!(is_identifier_start(0x2_0000));
        assert!(!is_identifier_start(u32::from('·')));
        assert!(is_identifier_part(u32::from('·')));
        assert!(is_identifier_part(ZWJ));
        assert!(!is_identifier_start(ZWJ));
        assert!(!is_identifier_start(0x1F600));
        assert!(is_identifier_start(0xFF9E));
    }

    #[test]
    fn surrogate_round_trip() {
        let mut buf = Vec::new();
        push_code_point(&mut buf, 0x1F600);
        assert_eq!(buf, vec![0xD83D, 0xDE00]);
        let (lead, trail) = (u32::from(buf[0]), u32::from(buf[1]));
        assert!(is_lead_surrogate(lead));
        assert!(is_trail_surrogate(trail));
        assert_eq!(combine_surrogates(lead, trail), 0x1F600);
    }

    #[test]
    fn set_rejects_out_of_range() {
        assert!(!ID_START.contains(MAX_CODE_POINT + 1));
        assert!(!ID_CONTINUE.contains(u32::MAX));
    }
}
