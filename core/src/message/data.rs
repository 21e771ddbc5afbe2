// Data message — typed telemetry and query results

use super::base::{MessageCore, SrupMessage};
use super::MessageType;
use crate::wire::{self, Cursor};
use crate::SrupError;

/// The one active payload of a Data message.
///
/// The wire encoding carries the discriminator byte ahead of the value, so
/// the receiver knows how many bytes to consume and how to reinterpret
/// them.  The discriminators are part of the wire contract.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    Bytes(Vec<u8>),
    Uint8(u8),
    Int8(i8),
    Uint16(u16),
    Int16(i16),
    Uint32(u32),
    Int32(i32),
    Uint64(u64),
    Int64(i64),
    Float(f32),
    Double(f64),
}

impl DataValue {
    /// The wire discriminator for this payload kind.
    pub const fn wire_tag(&self) -> u8 {
        match self {
            DataValue::Bytes(_) => 0x00,
            DataValue::Uint8(_) => 0x01,
            DataValue::Int8(_) => 0x02,
            DataValue::Uint16(_) => 0x03,
            DataValue::Int16(_) => 0x04,
            DataValue::Uint32(_) => 0x05,
            DataValue::Int32(_) => 0x06,
            DataValue::Uint64(_) => 0x07,
            DataValue::Int64(_) => 0x08,
            DataValue::Float(_) => 0x09,
            DataValue::Double(_) => 0x0A,
        }
    }

    fn encode(&self, out: &mut Vec<u8>) -> Result<(), SrupError> {
        out.push(self.wire_tag());
        match self {
            DataValue::Bytes(b) => wire::put_field(out, "data", b)?,
            DataValue::Uint8(v) => out.push(*v),
            DataValue::Int8(v) => out.push(*v as u8),
            DataValue::Uint16(v) => out.extend_from_slice(&v.to_be_bytes()),
            DataValue::Int16(v) => out.extend_from_slice(&v.to_be_bytes()),
            DataValue::Uint32(v) => out.extend_from_slice(&v.to_be_bytes()),
            DataValue::Int32(v) => out.extend_from_slice(&v.to_be_bytes()),
            DataValue::Uint64(v) => out.extend_from_slice(&v.to_be_bytes()),
            DataValue::Int64(v) => out.extend_from_slice(&v.to_be_bytes()),
            // IEEE-754 bit patterns, big-endian like every other field.
            DataValue::Float(v) => out.extend_from_slice(&v.to_be_bytes()),
            DataValue::Double(v) => out.extend_from_slice(&v.to_be_bytes()),
        }
        Ok(())
    }

    fn decode(tag: u8, cur: &mut Cursor<'_>) -> Result<DataValue, SrupError> {
        Ok(match tag {
            0x00 => DataValue::Bytes(cur.read_field()?.to_vec()),
            0x01 => DataValue::Uint8(cur.read_u8()?),
            0x02 => DataValue::Int8(cur.read_u8()? as i8),
            0x03 => DataValue::Uint16(cur.read_u16()?),
            0x04 => DataValue::Int16(cur.read_u16()? as i16),
            0x05 => DataValue::Uint32(cur.read_u32()?),
            0x06 => DataValue::Int32(cur.read_u32()? as i32),
            0x07 => DataValue::Uint64(cur.read_u64()?),
            0x08 => DataValue::Int64(cur.read_u64()? as i64),
            0x09 => DataValue::Float(f32::from_be_bytes(cur.read_u32()?.to_be_bytes())),
            0x0A => DataValue::Double(f64::from_be_bytes(cur.read_u64()?.to_be_bytes())),
            other => return Err(SrupError::UnknownDataType(other)),
        })
    }
}

/// Telemetry or a query result: a data identifier plus exactly one typed
/// payload.  Setting any payload kind replaces whatever was set before —
/// the message never carries two interpretations at once.
#[derive(Debug)]
pub struct SrupData {
    core: MessageCore,
    data_id: Option<u32>,
    value: Option<DataValue>,
}

impl SrupData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data_id(&self) -> Option<u32> {
        self.data_id
    }

    pub fn set_data_id(&mut self, data_id: u32) {
        self.data_id = Some(data_id);
        self.core.touch();
    }

    /// The active payload, whatever its kind.
    pub fn value(&self) -> Option<&DataValue> {
        self.value.as_ref()
    }

    fn replace_value(&mut self, value: DataValue) {
        self.value = Some(value);
        self.core.touch();
    }

    pub fn bytes_data(&self) -> Option<&[u8]> {
        match &self.value {
            Some(DataValue::Bytes(b)) => Some(b.as_slice()),
            _ => None,
        }
    }

    pub fn set_bytes_data(&mut self, data: &[u8]) -> Result<(), SrupError> {
        wire::check_len("data", data.len())?;
        self.replace_value(DataValue::Bytes(data.to_vec()));
        Ok(())
    }

    pub fn uint8_data(&self) -> Option<u8> {
        match self.value {
            Some(DataValue::Uint8(v)) => Some(v),
            _ => None,
        }
    }

    pub fn set_uint8_data(&mut self, v: u8) {
        self.replace_value(DataValue::Uint8(v));
    }

    pub fn int8_data(&self) -> Option<i8> {
        match self.value {
            Some(DataValue::Int8(v)) => Some(v),
            _ => None,
        }
    }

    pub fn set_int8_data(&mut self, v: i8) {
        self.replace_value(DataValue::Int8(v));
    }

    pub fn uint16_data(&self) -> Option<u16> {
        match self.value {
            Some(DataValue::Uint16(v)) => Some(v),
            _ => None,
        }
    }

    pub fn set_uint16_data(&mut self, v: u16) {
        self.replace_value(DataValue::Uint16(v));
    }

    pub fn int16_data(&self) -> Option<i16> {
        match self.value {
            Some(DataValue::Int16(v)) => Some(v),
            _ => None,
        }
    }

    pub fn set_int16_data(&mut self, v: i16) {
        self.replace_value(DataValue::Int16(v));
    }

    pub fn uint32_data(&self) -> Option<u32> {
        match self.value {
            Some(DataValue::Uint32(v)) => Some(v),
            _ => None,
        }
    }

    pub fn set_uint32_data(&mut self, v: u32) {
        self.replace_value(DataValue::Uint32(v));
    }

    pub fn int32_data(&self) -> Option<i32> {
        match self.value {
            Some(DataValue::Int32(v)) => Some(v),
            _ => None,
        }
    }

    pub fn set_int32_data(&mut self, v: i32) {
        self.replace_value(DataValue::Int32(v));
    }

    pub fn uint64_data(&self) -> Option<u64> {
        match self.value {
            Some(DataValue::Uint64(v)) => Some(v),
            _ => None,
        }
    }

    pub fn set_uint64_data(&mut self, v: u64) {
        self.replace_value(DataValue::Uint64(v));
    }

    pub fn int64_data(&self) -> Option<i64> {
        match self.value {
            Some(DataValue::Int64(v)) => Some(v),
            _ => None,
        }
    }

    pub fn set_int64_data(&mut self, v: i64) {
        self.replace_value(DataValue::Int64(v));
    }

    pub fn float_data(&self) -> Option<f32> {
        match self.value {
            Some(DataValue::Float(v)) => Some(v),
            _ => None,
        }
    }

    pub fn set_float_data(&mut self, v: f32) {
        self.replace_value(DataValue::Float(v));
    }

    pub fn double_data(&self) -> Option<f64> {
        match self.value {
            Some(DataValue::Double(v)) => Some(v),
            _ => None,
        }
    }

    pub fn set_double_data(&mut self, v: f64) {
        self.replace_value(DataValue::Double(v));
    }
}

impl Default for SrupData {
    fn default() -> Self {
        Self {
            core: MessageCore::new(MessageType::Data),
            data_id: None,
            value: None,
        }
    }
}

impl SrupMessage for SrupData {
    const MSG_TYPE: MessageType = MessageType::Data;

    fn core(&self) -> &MessageCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MessageCore {
        &mut self.core
    }

    fn data_check(&self) -> Result<(), SrupError> {
        self.core.check_ids()?;
        if self.data_id.is_none() {
            return Err(SrupError::MissingField("data_id"));
        }
        if self.value.is_none() {
            return Err(SrupError::MissingField("data"));
        }
        Ok(())
    }

    fn encode_payload(&self, out: &mut Vec<u8>) -> Result<(), SrupError> {
        let data_id = self.data_id.ok_or(SrupError::MissingField("data_id"))?;
        let value = self.value.as_ref().ok_or(SrupError::MissingField("data"))?;
        out.extend_from_slice(&data_id.to_be_bytes());
        value.encode(out)
    }

    fn decode_payload(&mut self, cur: &mut Cursor<'_>) -> Result<(), SrupError> {
        self.data_id = Some(cur.read_u32()?);
        let tag = cur.read_u8()?;
        self.value = Some(DataValue::decode(tag, cur)?);
        Ok(())
    }
}
