// Generic message — the minimal concrete instantiation of the base contract

use super::base::{MessageCore, SrupMessage};
use super::MessageType;
use crate::wire::Cursor;
use crate::SrupError;

/// A header-only message: no payload beyond the common fields.
///
/// Useful for liveness checks and as the simplest signed envelope a pair of
/// endpoints can exchange.
#[derive(Debug)]
pub struct SrupGeneric {
    core: MessageCore,
}

impl SrupGeneric {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for SrupGeneric {
    fn default() -> Self {
        Self {
            core: MessageCore::new(MessageType::Generic),
        }
    }
}

impl SrupMessage for SrupGeneric {
    const MSG_TYPE: MessageType = MessageType::Generic;

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
