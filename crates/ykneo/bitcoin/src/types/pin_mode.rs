use derive_more::Display;

/// Which of the two PIN credentials a command addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PinMode {
    /// User PIN, gating key use
    #[display("user")]
    User,
    /// Admin PIN, gating key management and PIN administration
    #[display("admin")]
    Admin,
}

impl PinMode {
    /// Build from an `admin` flag
    pub const fn from_admin(admin: bool) -> Self {
        if admin { Self::Admin } else { Self::User }
    }

    /// Whether this is the admin credential
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// P2 value selecting this credential
    pub const fn p2(self) -> u8 {
        match self {
            Self::User => 0x00,
            Self::Admin => 0x01,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_p2() {
        assert_eq!(PinMode::User.p2(), 0);
        assert_eq!(PinMode::Admin.p2(), 1);
        assert_eq!(PinMode::from_admin(true), PinMode::Admin);
        assert_eq!(PinMode::Admin.to_string(), "admin");
    }
}
