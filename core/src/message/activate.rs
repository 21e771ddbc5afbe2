// Activate message — make a previously initiated update live

use super::base::{MessageCore, SrupMessage};
use super::MessageType;
use crate::wire::Cursor;
use crate::SrupError;

/// Instructs a device to activate the update announced by an earlier
/// Initiate exchange.  The token ties the activation back to that exchange;
/// there is no payload of its own.
#[derive(Debug)]
pub struct SrupActivate {
    core: MessageCore,
}

impl SrupActivate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for SrupActivate {
    fn default() -> Self {
        Self {
            core: MessageCore::new(MessageType::Activate),
        }
    }
}

impl SrupMessage for SrupActivate {
    const MSG_TYPE: MessageType = MessageType::Activate;

    fn core(&self) -> &MessageCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MessageCore {
        &mut self.core
    }

    fn data_check(&self) -> Result<(), SrupError> {
        self.core.check_ids()
    }

    fn encode_payload(&self, _out: &mut Vec<u8>) -> Result<(), SrupError> {
        Ok(())
    }

    fn decode_payload(&mut self, _cur: &mut Cursor<'_>) -> Result<(), SrupError> {
        Ok(())
    }
}
