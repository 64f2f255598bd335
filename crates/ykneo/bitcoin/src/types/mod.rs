mod pin_mode;
mod select;
mod state;
mod version;

pub use pin_mode::PinMode;
pub use select::SelectResponse;
pub use state::SessionState;
pub use version::AppletVersion;
