use crate::types::{AppletVersion, PinMode, SelectResponse};

/// Snapshot of what a session knows about the applet
///
/// Unlock flags reflect only the outcome of verifications made in this
/// session; they always start out cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Applet version reported on selection
    pub version: AppletVersion,
    /// Whether a master key pair is stored
    pub key_loaded: bool,
    /// Whether the user PIN has been verified
    pub user_unlocked: bool,
    /// Whether the admin PIN has been verified
    pub admin_unlocked: bool,
}

impl SessionState {
    pub(crate) const fn selected(info: SelectResponse) -> Self {
        Self {
            version: info.version,
            key_loaded: info.key_loaded,
            user_unlocked: false,
            admin_unlocked: false,
        }
    }

    /// Whether the given credential has been verified
    pub const fn is_unlocked(&self, mode: PinMode) -> bool {
        match mode {
            PinMode::User => self.user_unlocked,
            PinMode::Admin => self.admin_unlocked,
        }
    }

    pub(crate) const fn set_unlocked(&mut self, mode: PinMode, unlocked: bool) {
        match mode {
            PinMode::User => self.user_unlocked = unlocked,
            PinMode::Admin => self.admin_unlocked = unlocked,
        }
    }
}
