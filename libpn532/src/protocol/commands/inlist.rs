// libpn532/src/protocol/commands/inlist.rs

/// Encode InListPassiveTarget payload (command code 0x4A). `baud`
/// selects bit rate and modulation (0x00 = 106 kbps type A).
pub fn encode_in_list_passive_target(max_targets: u8, baud: u8) -> Vec<u8> {
    vec![
        crate::constants::CMD_IN_LIST_PASSIVE_TARGET,
        max_targets,
        baud,
    ]
}
