// libpn532/src/device/mod.rs

pub mod builder;
pub mod handle;

pub use builder::Pn532Builder;
pub use handle::{Initialized, Pn532, Uninitialized};
