//! Connection options for the PC/SC transport

use pcsc::{Protocols, ShareMode as PcscShareMode};

/// Sharing mode for card connections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShareMode {
    /// Exclusive access to the card
    Exclusive,
    /// Shared access to the card
    #[default]
    Shared,
    /// Direct connection to the reader
    Direct,
}

impl From<ShareMode> for PcscShareMode {
    fn from(mode: ShareMode) -> Self {
        match mode {
            ShareMode::Exclusive => Self::Exclusive,
            ShareMode::Shared => Self::Shared,
            ShareMode::Direct => Self::Direct,
        }
    }
}

/// Configuration options for PC/SC transport
#[derive(Debug, Clone)]
pub struct PcscConfig {
    /// Sharing mode for card connections
    pub share_mode: ShareMode,

    /// Preferred protocols for card communication
    pub protocols: Protocols,

    /// Reconnect if the card reports a reset
    ///
    /// The interrupted frame still fails with a reset error and is never
    /// resent.
    pub auto_reconnect: bool,
}

impl Default for PcscConfig {
    fn default() -> Self {
        Self {
            share_mode: ShareMode::Shared,
            protocols: Protocols::ANY,
            auto_reconnect: false,
        }
    }
}

impl PcscConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sharing mode
    pub const fn with_share_mode(mut self, mode: ShareMode) -> Self {
        self.share_mode = mode;
        self
    }

    /// Set the preferred protocols
    pub const fn with_protocols(mut self, protocols: Protocols) -> Self {
        self.protocols = protocols;
        self
    }

    /// Set whether to automatically reconnect
    pub const fn with_auto_reconnect(mut self, auto_reconnect: bool) -> Self {
        self.auto_reconnect = auto_reconnect;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PcscConfig::new();
        assert_eq!(config.share_mode, ShareMode::Shared);
        assert_eq!(config.protocols, Protocols::ANY);
        assert!(!config.auto_reconnect);
    }

    #[test]
    fn test_builder() {
        let config = PcscConfig::new()
            .with_share_mode(ShareMode::Exclusive)
            .with_protocols(Protocols::T1)
            .with_auto_reconnect(true);

        assert_eq!(config.share_mode, ShareMode::Exclusive);
        assert_eq!(config.protocols, Protocols::T1);
        assert!(config.auto_reconnect);
    }

    #[test]
    fn test_share_mode_conversion() {
        assert_eq!(PcscShareMode::from(ShareMode::Exclusive), PcscShareMode::Exclusive);
        assert_eq!(PcscShareMode::from(ShareMode::Shared), PcscShareMode::Shared);
        assert_eq!(PcscShareMode::from(ShareMode::Direct), PcscShareMode::Direct);
    }
}
