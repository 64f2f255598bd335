//! BIP32 key paths
//!
//! A path is written as slash-separated decimal indices, where a trailing `'`
//! marks a hardened index: `"0/7"`, `"1/4711'"`. There is no leading `m`; the
//! empty string is the root key itself.
//!
//! On the wire every index is a big-endian 32-bit word with the top bit set
//! for hardened derivation.

use std::fmt;
use std::str::FromStr;

use bytes::{BufMut, Bytes, BytesMut};

use crate::constants::HARDENED_BIT;
use crate::error::{FormatError, Result};

/// Ordered sequence of derivation indices relative to the stored master key
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    /// Indices with the hardened bit already applied
    components: Vec<u32>,
}

impl KeyPath {
    /// The root path, addressing the master key itself
    pub const fn root() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Build a path from raw indices (hardened bit included)
    pub fn from_indices(indices: impl IntoIterator<Item = u32>) -> Self {
        Self {
            components: indices.into_iter().collect(),
        }
    }

    /// Raw indices with the hardened bit applied
    pub fn components(&self) -> &[u32] {
        &self.components
    }

    /// Number of derivation steps
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether this is the root path
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Append a normal child index
    pub fn child(mut self, index: u32) -> Self {
        self.components.push(index);
        self
    }

    /// Append a hardened child index
    pub fn hardened_child(mut self, index: u32) -> Self {
        self.components.push(index | HARDENED_BIT);
        self
    }

    /// Encode as concatenated big-endian words
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.components.len() * 4);
        for component in &self.components {
            buf.put_u32(*component);
        }
        buf.freeze()
    }

    /// Decode concatenated big-endian words
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() % 4 != 0 {
            return Err(FormatError::InvalidPathLength(data.len()).into());
        }

        let components = data
            .chunks_exact(4)
            .map(|word| u32::from_be_bytes([word[0], word[1], word[2], word[3]]))
            .collect();

        Ok(Self { components })
    }
}

/// Whether an index is hardened
pub const fn is_hardened(index: u32) -> bool {
    index & HARDENED_BIT != 0
}

fn parse_component(text: &str) -> Result<u32> {
    let invalid = || FormatError::InvalidPathComponent(text.to_string());

    let (digits, hardened) = match text.strip_suffix('\'') {
        Some(digits) => (digits, true),
        None => (text, false),
    };

    // `u32::from_str` would also take a leading '+'.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid().into());
    }

    let index: u32 = digits.parse().map_err(|_| invalid())?;

    Ok(if hardened { index | HARDENED_BIT } else { index })
}

impl FromStr for KeyPath {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(Self::root());
        }

        let components = s.split('/').map(parse_component).collect::<Result<_>>()?;

        Ok(Self { components })
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            if is_hardened(*component) {
                write!(f, "{}'", component & !HARDENED_BIT)?;
            } else {
                write!(f, "{component}")?;
            }
        }
        Ok(())
    }
}

/// Encode a textual key path into its wire form
pub fn encode_path(path: &str) -> Result<Bytes> {
    Ok(path.parse::<KeyPath>()?.to_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_encode_simple_path() {
        assert_eq!(
            encode_path("0/7").unwrap().as_ref(),
            &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07]
        );
    }

    #[test]
    fn test_encode_hardened_path() {
        assert_eq!(
            encode_path("1/4711'").unwrap().as_ref(),
            &[0x00, 0x00, 0x00, 0x01, 0x80, 0x00, 0x12, 0x67]
        );
    }

    #[test]
    fn test_empty_path_is_root() {
        assert!(encode_path("").unwrap().is_empty());
        assert_eq!("".parse::<KeyPath>().unwrap(), KeyPath::root());
    }

    #[test]
    fn test_max_index() {
        assert_eq!(
            encode_path("4294967295").unwrap().as_ref(),
            &[0xFF, 0xFF, 0xFF, 0xFF]
        );
        assert!(encode_path("4294967296").is_err());
    }

    #[test]
    fn test_rejects_malformed_components() {
        for path in ["a", "-1", "+1", "1//2", "/1", "1/", " 1", "1 ", "1''", "'", "0x10", "m/0"] {
            let err = encode_path(path).unwrap_err();
            assert!(
                matches!(err, Error::Format(FormatError::InvalidPathComponent(_))),
                "{path:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_display_round_trip() {
        let path: KeyPath = "44'/0'/0'/0/12".parse().unwrap();
        assert_eq!(path.to_string(), "44'/0'/0'/0/12");
        assert_eq!(path.len(), 5);
        assert_eq!(KeyPath::root().to_string(), "");
    }

    #[test]
    fn test_builder_matches_parser() {
        let built = KeyPath::root().child(1).hardened_child(4711);
        assert_eq!(built, "1/4711'".parse::<KeyPath>().unwrap());
        assert!(is_hardened(built.components()[1]));
        assert!(!is_hardened(built.components()[0]));
    }

    #[test]
    fn test_from_bytes() {
        let path = KeyPath::from_bytes(&[0x80, 0x00, 0x00, 0x2C, 0x00, 0x00, 0x00, 0x01]).unwrap();
        assert_eq!(path.to_string(), "44'/1");

        assert_eq!(
            KeyPath::from_bytes(&[0x00, 0x00, 0x01]),
            Err(Error::Format(FormatError::InvalidPathLength(3)))
        );
    }
}
