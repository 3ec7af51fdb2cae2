// libpn532/src/protocol/commands/mod.rs

pub mod exchange;
pub mod firmware;
pub mod inlist;
pub mod mifare;
pub mod sam;

pub use exchange::encode_in_data_exchange;
pub use firmware::encode_get_firmware_version;
pub use inlist::encode_in_list_passive_target;
pub use mifare::MifareCommand;
pub use sam::encode_sam_configuration;

use crate::constants::{
    CMD_GET_FIRMWARE_VERSION, CMD_IN_DATA_EXCHANGE, CMD_IN_LIST_PASSIVE_TARGET,
    CMD_SAM_CONFIGURATION,
};

/// High-level chip command. New commands should be added here and their
/// per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    GetFirmwareVersion,
    SamConfiguration {
        mode: u8,
        timeout: u8,
        use_irq: bool,
    },
    InListPassiveTarget {
        max_targets: u8,
        baud: u8,
    },
    InDataExchange {
        target: u8,
        data: Vec<u8>,
    },
}

impl Command {
    /// SAMConfiguration in normal mode with a 1 s virtual card timeout.
    pub fn sam_normal() -> Self {
        Self::SamConfiguration {
            mode: sam::MODE_NORMAL,
            timeout: sam::TIMEOUT_1S,
            use_irq: true,
        }
    }

    /// Detect a single 106 kbps type A target.
    pub fn detect_single_type_a() -> Self {
        Self::InListPassiveTarget {
            max_targets: 1,
            baud: crate::constants::BRTY_106K_TYPE_A,
        }
    }

    /// Wrap a MIFARE sub-command addressed to target 1.
    pub fn mifare(sub: &MifareCommand) -> Self {
        Self::InDataExchange {
            target: 1,
            data: sub.encode(),
        }
    }

    /// Return the chip command code.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::GetFirmwareVersion => CMD_GET_FIRMWARE_VERSION,
            Self::SamConfiguration { .. } => CMD_SAM_CONFIGURATION,
            Self::InListPassiveTarget { .. } => CMD_IN_LIST_PASSIVE_TARGET,
            Self::InDataExchange { .. } => CMD_IN_DATA_EXCHANGE,
        }
    }

    /// Code the chip echoes in its response frame.
    pub fn response_code(&self) -> u8 {
        self.command_code().wrapping_add(1)
    }

    /// Encode the command into the frame payload (command code + params).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::GetFirmwareVersion => encode_get_firmware_version(),
            Self::SamConfiguration {
                mode,
                timeout,
                use_irq,
            } => encode_sam_configuration(*mode, *timeout, *use_irq),
            Self::InListPassiveTarget { max_targets, baud } => {
                encode_in_list_passive_target(*max_targets, *baud)
            }
            Self::InDataExchange { target, data } => encode_in_data_exchange(*target, data),
        }
    }
}
