// libpn532/src/protocol/codec.rs

use crate::Result;

use super::Frame;
use super::commands::Command;
use super::responses::Response;

/// Encode a Command into a full command frame (header, TFI, checksums).
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    Frame::encode_command(&cmd.encode())
}

/// Decode a full response frame and parse the contained data for the
/// command that was sent.
pub fn decode_response_frame(cmd: &Command, frame: &[u8]) -> Result<Response> {
    let data = Frame::decode_response(frame)?;
    Response::decode(cmd.command_code(), &data)
}
