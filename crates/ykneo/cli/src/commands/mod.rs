//! Command implementations for the ykneo-bitcoin CLI

mod applet;
mod credentials;
mod key_operations;

pub(crate) use applet::*;
pub(crate) use credentials::*;
pub(crate) use key_operations::*;
