// libpn532/src/protocol/responses/mod.rs

pub mod exchange;
pub mod firmware;
pub mod inlist;

pub use exchange::decode_in_data_exchange;
pub use firmware::decode_firmware_version;
pub use inlist::decode_in_list_passive_target;

use crate::card::CardInfo;
use crate::constants::{
    CMD_GET_FIRMWARE_VERSION, CMD_IN_DATA_EXCHANGE, CMD_IN_LIST_PASSIVE_TARGET,
    CMD_SAM_CONFIGURATION,
};
use crate::protocol::parser;
use crate::types::FirmwareVersion;

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    FirmwareVersion(FirmwareVersion),
    SamConfiguration,
    InListPassiveTarget {
        /// Number of targets the chip reported
        count: u8,
        /// First target, `None` when `count` is zero
        target: Option<CardInfo>,
    },
    InDataExchange {
        status: u8,
        data: Vec<u8>,
    },
}

impl Response {
    /// Decode response data (starting with the echoed command byte) for the
    /// given command code.
    pub fn decode(expected_cmd: u8, data: &[u8]) -> crate::Result<Self> {
        // Central echo check: every decoder below may assume data[0] is
        // expected_cmd + 1.
        let expected_response = expected_cmd.wrapping_add(1);
        parser::expect_response_code(data, expected_response)?;

        match expected_cmd {
            CMD_GET_FIRMWARE_VERSION => Ok(Self::FirmwareVersion(decode_firmware_version(data)?)),
            CMD_SAM_CONFIGURATION => Ok(Self::SamConfiguration),
            CMD_IN_LIST_PASSIVE_TARGET => {
                let (count, target) = decode_in_list_passive_target(data)?;
                Ok(Self::InListPassiveTarget { count, target })
            }
            CMD_IN_DATA_EXCHANGE => {
                let (status, data) = decode_in_data_exchange(data)?;
                Ok(Self::InDataExchange { status, data })
            }
            _ => Err(crate::Error::UnexpectedResponse {
                expected: expected_response,
                actual: data[0],
            }),
        }
    }

    /// Return the echoed response code associated with this variant.
    pub fn response_code(&self) -> u8 {
        match self {
            Response::FirmwareVersion(_) => CMD_GET_FIRMWARE_VERSION + 1,
            Response::SamConfiguration => CMD_SAM_CONFIGURATION + 1,
            Response::InListPassiveTarget { .. } => CMD_IN_LIST_PASSIVE_TARGET + 1,
            Response::InDataExchange { .. } => CMD_IN_DATA_EXCHANGE + 1,
        }
    }
}
