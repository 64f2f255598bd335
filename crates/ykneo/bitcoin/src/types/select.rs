use std::fmt;

use crate::constants::SELECT_RESPONSE_LEN;
use crate::types::AppletVersion;

/// Payload of a successful SELECT
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectResponse {
    /// Applet version
    pub version: AppletVersion,
    /// Whether a master key pair is stored
    pub key_loaded: bool,
}

impl fmt::Display for SelectResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Applet version: {}", self.version)?;
        write!(f, "Key loaded: {}", self.key_loaded)
    }
}

impl TryFrom<&[u8]> for SelectResponse {
    type Error = crate::Error;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        // Version triple followed by the key-loaded flag; later applets may append more.
        if data.len() < SELECT_RESPONSE_LEN {
            return Err(Self::Error::InvalidResponse(
                "SELECT response shorter than 4 bytes",
            ));
        }

        Ok(Self {
            version: AppletVersion::new(data[0], data[1], data[2]),
            key_loaded: data[3] == 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_parse() {
        let parsed = SelectResponse::try_from([1u8, 0, 3, 0].as_slice()).unwrap();
        assert_eq!(parsed.version, AppletVersion::new(1, 0, 3));
        assert!(!parsed.key_loaded);

        let parsed = SelectResponse::try_from([1u8, 0, 3, 1, 0xAA].as_slice()).unwrap();
        assert!(parsed.key_loaded);
    }

    #[test]
    fn test_key_flag_must_be_one() {
        let parsed = SelectResponse::try_from([1u8, 0, 3, 0xFF].as_slice()).unwrap();
        assert!(!parsed.key_loaded);
    }

    #[test]
    fn test_short_payload() {
        assert!(matches!(
            SelectResponse::try_from([1u8, 0, 3].as_slice()),
            Err(Error::InvalidResponse(_))
        ));
    }
}
