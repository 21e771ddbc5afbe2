// Response message — outcome of a prior request

use super::base::{MessageCore, SrupMessage};
use super::status::StatusCode;
use super::MessageType;
use crate::wire::Cursor;
use crate::SrupError;

/// Carries the outcome of any prior exchange, correlated by token.
///
/// The status byte is stored and transported as-is; interpreting it belongs
/// to the application layer.  Codes this build does not know about decode
/// fine — the vocabulary is append-only.
#[derive(Debug)]
pub struct SrupResponse {
    core: MessageCore,
    status: Option<StatusCode>,
}

impl SrupResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    pub fn set_status(&mut self, status: StatusCode) {
        self.status = Some(status);
        self.core.touch();
    }
}

impl Default for SrupResponse {
    fn default() -> Self {
        Self {
            core: MessageCore::new(MessageType::Response),
            status: None,
        }
    }
}

impl SrupMessage for SrupResponse {
    const MSG_TYPE: MessageType = MessageType::Response;

    fn core(&self) -> &MessageCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MessageCore {
        &mut self.core
    }

    fn data_check(&self) -> Result<(), SrupError> {
        self.core.check_ids()?;
        if self.status.is_none() {
            return Err(SrupError::MissingField("status"));
        }
        Ok(())
    }

    fn encode_payload(&self, out: &mut Vec<u8>) -> Result<(), SrupError> {
        let status = self.status.ok_or(SrupError::MissingField("status"))?;
        out.push(status.value());
        Ok(())
    }

    fn decode_payload(&mut self, cur: &mut Cursor<'_>) -> Result<(), SrupError> {
        self.status = Some(StatusCode::from_wire(cur.read_u8()?));
        Ok(())
    }
}
