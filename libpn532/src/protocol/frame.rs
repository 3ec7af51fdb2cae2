// libpn532/src/protocol/frame.rs

use crate::constants::{
    FRAME_HEADER_LEN, FRAME_MAX_LEN, FRAME_MIN_LEN, FRAME_POSTAMBLE, FRAME_START,
    TFI_CHIP_TO_HOST, TFI_HOST_TO_CHIP,
};
use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// PN532 normal information frame helper.
/// Format: [Preamble+Start(3)] [LEN(1)] [LCS(1)] [TFI(1)] [Data(n)] [DCS(1)] [Postamble(1)]
/// Preamble: 0x00, start codes: 0x00 0xFF, postamble: 0x00
/// LEN counts TFI plus data, so LEN = n + 1.
pub struct Frame;

impl Frame {
    /// Encode a host -> chip command frame around `payload` (command code
    /// followed by its arguments).
    pub fn encode_command(payload: &[u8]) -> Result<Vec<u8>> {
        Self::encode_with(TFI_HOST_TO_CHIP, payload)
    }

    /// Decode a chip -> host response frame and return its data bytes,
    /// starting with the echoed command byte.
    pub fn decode_response(frame: &[u8]) -> Result<Vec<u8>> {
        Self::decode_with(TFI_CHIP_TO_HOST, frame)
    }

    /// Encode a frame with an explicit frame identifier.
    pub fn encode_with(tfi: u8, payload: &[u8]) -> Result<Vec<u8>> {
        if payload.is_empty() || payload.len() + 1 > FRAME_MAX_LEN {
            return Err(Error::InvalidLength {
                expected: FRAME_MAX_LEN - 1,
                actual: payload.len(),
            });
        }

        let len = (payload.len() + 1) as u8;
        let mut out = Vec::with_capacity(FRAME_MIN_LEN + payload.len());
        out.extend_from_slice(&FRAME_START);
        out.push(len);
        out.push(lcs(len));
        out.push(tfi);
        out.extend_from_slice(payload);
        out.push(dcs(tfi, payload));
        out.push(FRAME_POSTAMBLE);
        Ok(out)
    }

    /// Validate the five header bytes (start sequence, LEN, LCS) and return
    /// LEN. Streaming readers use this to stop before clocking out a body
    /// whose length cannot be trusted.
    pub fn parse_header(header: &[u8]) -> Result<u8> {
        if header.len() < FRAME_HEADER_LEN {
            return Err(Error::InvalidLength {
                expected: FRAME_HEADER_LEN,
                actual: header.len(),
            });
        }

        if header[..3] != FRAME_START {
            return Err(Error::FrameFormat("invalid start sequence".into()));
        }

        let len = header[3];
        let lcs_actual = header[4];
        let lcs_expected = lcs(len);
        if lcs_actual != lcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: lcs_expected,
                actual: lcs_actual,
            });
        }

        // LEN = 0 would not even carry a TFI
        if len == 0 {
            return Err(Error::FrameFormat("empty frame body".into()));
        }

        Ok(len)
    }

    /// Decode a frame expecting frame identifier `tfi`; returns the data
    /// bytes that follow the TFI.
    pub fn decode_with(tfi: u8, frame: &[u8]) -> Result<Vec<u8>> {
        if frame.len() < FRAME_MIN_LEN {
            return Err(Error::InvalidLength {
                expected: FRAME_MIN_LEN,
                actual: frame.len(),
            });
        }

        let len = Self::parse_header(frame)? as usize;

        let required_len = FRAME_HEADER_LEN + len + 2; // body + DCS + postamble
        if frame.len() != required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: frame.len(),
            });
        }

        let tfi_actual = frame[FRAME_HEADER_LEN];
        if tfi_actual != tfi {
            return Err(Error::UnexpectedResponse {
                expected: tfi,
                actual: tfi_actual,
            });
        }

        let data_start = FRAME_HEADER_LEN + 1;
        let data_end = FRAME_HEADER_LEN + len;
        let data = &frame[data_start..data_end];

        let dcs_actual = frame[data_end];
        let dcs_expected = dcs(tfi, data);
        if dcs_actual != dcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: dcs_expected,
                actual: dcs_actual,
            });
        }

        if frame[data_end + 1] != FRAME_POSTAMBLE {
            return Err(Error::FrameFormat("invalid postamble".into()));
        }

        Ok(data.to_vec())
    }
}
