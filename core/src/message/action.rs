// Action message — invoke a named device-side action

use super::base::{MessageCore, SrupMessage};
use super::MessageType;
use crate::wire::Cursor;
use crate::SrupError;

/// Invokes one of a device's predefined actions by its one-byte identifier.
///
/// What an action ID means is agreed between the C2 and the device out of
/// band; the protocol only carries the selector.
#[derive(Debug)]
pub struct SrupAction {
    core: MessageCore,
    action_id: Option<u8>,
}

impl SrupAction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action_id(&self) -> Option<u8> {
        self.action_id
    }

    pub fn set_action_id(&mut self, action_id: u8) {
        self.action_id = Some(action_id);
        self.core.touch();
    }
}

impl Default for SrupAction {
    fn default() -> Self {
        Self {
            core: MessageCore::new(MessageType::Action),
            action_id: None,
        }
    }
}

impl SrupMessage for SrupAction {
    const MSG_TYPE: MessageType = MessageType::Action;

    fn core(&self) -> &MessageCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MessageCore {
        &mut self.core
    }

    fn data_check(&self) -> Result<(), SrupError> {
        self.core.check_ids()?;
        if self.action_id.is_none() {
            return Err(SrupError::MissingField("action_id"));
        }
        Ok(())
    }

    fn encode_payload(&self, out: &mut Vec<u8>) -> Result<(), SrupError> {
        let action_id = self.action_id.ok_or(SrupError::MissingField("action_id"))?;
        out.push(action_id);
        Ok(())
    }

    fn decode_payload(&mut self, cur: &mut Cursor<'_>) -> Result<(), SrupError> {
        self.action_id = Some(cur.read_u8()?);
        Ok(())
    }
}
