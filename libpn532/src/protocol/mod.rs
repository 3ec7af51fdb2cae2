// libpn532/src/protocol/mod.rs

pub mod ack;
pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use ack::is_ack;
pub use checksum::{dcs, lcs};
pub use commands::*;
pub use frame::Frame;
pub use responses::*;
