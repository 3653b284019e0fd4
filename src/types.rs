use std::fmt;

// UTF-16 code unit string. Decoded string values keep lone surrogates, which
// a Rust `String` cannot hold.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct JsString {
    pub code_units: Vec<u16>,
}

impl JsString {
    pub fn from_str(s: &str) -> Self {
        Self {
            code_units: s.encode_utf16().collect(),
        }
    }

    pub fn from_code_units(code_units: Vec<u16>) -> Self {
        Self { code_units }
    }

    pub fn is_empty(&self) -> bool {
        self.code_units.is_empty()
    }

    pub fn len(&self) -> usize {
        self.code_units.len()
    }

    pub fn to_rust_string(&self) -> String {
        String::from_utf16_lossy(&self.code_units)
    }

    /// Code points, pairing surrogates where possible. Lone surrogates come
    /// out as their own value.
    pub fn code_points(&self) -> impl Iterator<Item = u32> + '_ {
        char::decode_utf16(self.code_units.iter().copied())
            .map(|r| r.map_or_else(|e| u32::from(e.unpaired_surrogate()), u32::from))
    }
}

impl From<&str> for JsString {
    fn from(s: &str) -> Self {
        JsString::from_str(s)
    }
}

impl PartialEq<str> for JsString {
    fn eq(&self, other: &str) -> bool {
        self.code_units.iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for JsString {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl fmt::Display for JsString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rust_string())
    }
}

// §6.1.6.1.20 Number::toString
pub fn number_to_string(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let mut buf = ryu_js::Buffer::new();
    buf.format(x).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_with_str() {
        let s = JsString::from_str("héllo");
        assert_eq!(s, "héllo");
        assert_eq!(s.len(), 5);
        assert!(JsString::default().is_empty());
    }

    #[test]
    fn lone_surrogates_survive() {
        let s = JsString::from_code_units(vec![0xD800, 0x41]);
        assert_eq!(s.code_points().collect::<Vec<_>>(), vec![0xD800, 0x41]);
        assert_eq!(s.to_rust_string(), "\u{FFFD}A");
    }

    #[test]
    fn pairs_decode_to_one_code_point() {
        let s = JsString::from_code_units(vec![0xD83D, 0xDE00]);
        assert_eq!(s.code_points().collect::<Vec<_>>(), vec![0x1F600]);
    }

    #[test]
    fn number_formatting() {
        assert_eq!(number_to_string(349.0), "349");
        assert_eq!(number_to_string(0.5), "0.5");
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(f64::INFINITY), "Infinity");
        assert_eq!(number_to_string(-0.0), "0");
    }
}
