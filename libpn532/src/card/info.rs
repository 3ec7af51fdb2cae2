use crate::types::Uid;

/// What InListPassiveTarget reported about a 106 kbps type A target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardInfo {
    target_number: u8,
    sens_res: [u8; 2],
    sel_res: u8,
    uid: Uid,
}

impl CardInfo {
    pub fn new(target_number: u8, sens_res: [u8; 2], sel_res: u8, uid: Uid) -> Self {
        Self {
            target_number,
            sens_res,
            sel_res,
            uid,
        }
    }

    /// Logical target number assigned by the chip (normally 1)
    pub fn target_number(&self) -> u8 {
        self.target_number
    }

    pub fn sens_res(&self) -> [u8; 2] {
        self.sens_res
    }

    /// SAK; 0x08 for MIFARE Classic 1K
    pub fn sel_res(&self) -> u8 {
        self.sel_res
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn into_uid(self) -> Uid {
        self.uid
    }
}
