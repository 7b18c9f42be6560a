//! Session identifier generation and parsing

use std::fmt;
use std::str::FromStr;

use crate::error::IdentifierError;

/// Byte lengths of the five hyphen-separated groups in the text form.
const GROUPS: [usize; 5] = [4, 2, 2, 2, 6];

/// Length of the text form: 32 hex digits plus 4 hyphens.
const TEXT_LEN: usize = 36;

/// A 128-bit session identifier.
///
/// Rendered as five hyphen-separated lowercase hex groups of byte lengths
/// 4-2-2-2-6 (`8f41d9aa-03c2-91b7-44de-5a0c6f1e82bb`). The layout matches a
/// UUID's, but the bytes are raw entropy with no version or variant bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub [u8; 16]);

impl SessionId {
    /// Generate a new identifier from the OS entropy source.
    ///
    /// Entropy failure is returned to the caller; a session must never be
    /// created under a degenerate identifier, since colliding identifiers
    /// silently merge unrelated clients onto one store entry.
    pub fn generate() -> Result<Self, IdentifierError> {
        let mut bytes = [0u8; 16];
        getrandom::fill(&mut bytes)?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut offset = 0;
        for (i, len) in GROUPS.into_iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            for byte in &self.0[offset..offset + len] {
                write!(f, "{byte:02x}")?;
            }
            offset += len;
        }
        Ok(())
    }
}

impl FromStr for SessionId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != TEXT_LEN {
            return Err(IdentifierError::Malformed(s.to_string()));
        }

        let mut bytes = [0u8; 16];
        let mut i = 0;
        for (group, len) in s.split('-').zip(GROUPS) {
            if group.len() != len * 2 {
                return Err(IdentifierError::Malformed(s.to_string()));
            }
            for chunk in group.as_bytes().chunks(2) {
                let high = hex_digit(chunk[0]);
                let low = hex_digit(chunk[1]);
                match (high, low) {
                    (Some(high), Some(low)) => {
                        bytes[i] = (high << 4) | low;
                        i += 1;
                    }
                    _ => return Err(IdentifierError::Malformed(s.to_string())),
                }
            }
        }
        // The length checks above guarantee all five groups were consumed.
        debug_assert_eq!(i, 16);
        Ok(Self(bytes))
    }
}

fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn display_uses_grouped_layout() {
        let id = SessionId([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);
        assert_eq!(id.to_string(), "00010203-0405-0607-0809-0a0b0c0d0e0f");
    }

    #[test]
    fn display_parse_roundtrip() {
        let id = SessionId::generate().unwrap();
        let text = id.to_string();
        assert_eq!(text.len(), 36);
        let parsed: SessionId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        let cases = [
            "",
            "not-an-id",
            "000102030405-0607-0809-0a0b-0c0d0e0f",    // wrong grouping
            "000102030405060708090a0b0c0d0e0f",        // no hyphens
            "00010203-0405-0607-0809-0a0b0c0d0e0g",    // bad digit
            "00010203-0405-0607-0809-0A0B0C0D0E0F",    // uppercase
            "00010203-0405-0607-0809-0a0b0c0d0e0f00",  // too long
            "00010203+0405+0607+0809+0a0b0c0d0e0f",    // wrong separator
        ];
        for case in cases {
            assert!(
                case.parse::<SessionId>().is_err(),
                "expected {case:?} to be rejected"
            );
        }
    }

    #[test]
    fn generated_identifiers_do_not_collide() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let id = SessionId::generate().unwrap();
            assert!(seen.insert(id), "duplicate identifier {id}");
        }
    }
}
