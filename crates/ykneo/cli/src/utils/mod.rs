//! Utility functions for the ykneo-bitcoin CLI

pub(crate) mod display;
pub(crate) mod session;

use std::error::Error;

/// Parse a hex string, tolerating a `0x` prefix and surrounding whitespace
pub(crate) fn parse_hex(input: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    Ok(hex::decode(digits)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("0x00ff").unwrap(), vec![0x00, 0xff]);
        assert_eq!(parse_hex(" ABCD\n").unwrap(), vec![0xab, 0xcd]);
        assert!(parse_hex("xyz").is_err());
    }
}
