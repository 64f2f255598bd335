use derive_more::Display;

/// Applet version (major.minor.patch)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("{}.{}.{}", major, minor, patch)]
pub struct AppletVersion {
    /// Major version
    pub major: u8,
    /// Minor version
    pub minor: u8,
    /// Patch version
    pub patch: u8,
}

impl AppletVersion {
    /// Create a version
    pub const fn new(major: u8, minor: u8, patch: u8) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl From<[u8; 3]> for AppletVersion {
    fn from([major, minor, patch]: [u8; 3]) -> Self {
        Self::new(major, minor, patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(AppletVersion::new(1, 0, 3).to_string(), "1.0.3");
        assert_eq!(AppletVersion::from([0, 12, 255]).to_string(), "0.12.255");
    }

    #[test]
    fn test_ordering() {
        assert!(AppletVersion::new(1, 0, 3) < AppletVersion::new(1, 1, 0));
    }
}
