// Status vocabulary — outcome codes carried by Response messages
//
// The table is append-only: new codes take the next free value, existing
// values are never reassigned.  Several families (group membership, join,
// resign, deregister) describe exchanges whose message kinds are not part
// of this library yet; their codes are reserved here so devices built
// against this table stay wire-compatible when those kinds land.

use std::fmt;

/// A Response outcome code.
///
/// Modeled as a thin wrapper over the wire byte rather than a closed enum so
/// a build of this library can transport codes appended after it shipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(u8);

/// The action family a status code reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFamily {
    Update,
    Activate,
    Action,
    Data,
    Group,
    Join,
    ObservedJoin,
    Resign,
    Deregister,
    Unknown,
}

impl StatusCode {
    // Software update outcomes
    pub const UPDATE_SUCCESS: StatusCode = StatusCode(0x00);
    pub const UPDATE_FAIL_SERVER: StatusCode = StatusCode(0x01);
    pub const UPDATE_FAIL_FILE: StatusCode = StatusCode(0x02);
    pub const UPDATE_FAIL_DIGEST: StatusCode = StatusCode(0x03);
    pub const UPDATE_FAIL_HTTP: StatusCode = StatusCode(0x04);

    // Activation outcomes
    pub const ACTIVATE_SUCCESS: StatusCode = StatusCode(0x05);
    pub const ACTIVATE_FAIL: StatusCode = StatusCode(0x06);

    // Action outcomes
    pub const ACTION_SUCCESS: StatusCode = StatusCode(0x07);
    pub const ACTION_UNKNOWN: StatusCode = StatusCode(0x08);
    pub const ACTION_FAIL: StatusCode = StatusCode(0x09);

    // Data outcomes
    pub const DATA_TYPE_UNKNOWN: StatusCode = StatusCode(0x0A);

    // Group membership outcomes
    pub const GROUP_ADD_SUCCESS: StatusCode = StatusCode(0x0B);
    pub const GROUP_DELETE_SUCCESS: StatusCode = StatusCode(0x0C);
    pub const GROUP_DELETE_INVALID: StatusCode = StatusCode(0x0D);
    pub const GROUP_DELETE_FAIL: StatusCode = StatusCode(0x0E);
    pub const GROUP_ADD_FAIL_LIMIT: StatusCode = StatusCode(0x0F);
    pub const GROUP_ADD_FAIL: StatusCode = StatusCode(0x10);

    // Join outcomes
    pub const JOIN_SUCCESS: StatusCode = StatusCode(0x11);
    pub const JOIN_REFUSED: StatusCode = StatusCode(0x12);
    pub const JOIN_FAIL: StatusCode = StatusCode(0x13);

    // Observed-join outcomes
    pub const OBSERVED_JOIN_VALID: StatusCode = StatusCode(0x14);
    pub const OBSERVED_JOIN_INVALID: StatusCode = StatusCode(0x15);
    pub const OBSERVED_JOIN_FAIL: StatusCode = StatusCode(0x16);

    // Resign outcomes
    pub const RESIGN_SUCCESS: StatusCode = StatusCode(0x17);
    pub const RESIGN_FAIL: StatusCode = StatusCode(0x18);

    // Deregister outcomes
    pub const DEREGISTER_SUCCESS: StatusCode = StatusCode(0x19);
    pub const DEREGISTER_FAIL: StatusCode = StatusCode(0x1A);

    /// The raw wire byte.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Wrap a wire byte.  Every byte is a valid code to transport; whether
    /// it means anything is the application's concern.
    pub const fn from_wire(raw: u8) -> StatusCode {
        StatusCode(raw)
    }

    /// Which action family this code belongs to.
    pub fn family(self) -> StatusFamily {
        match self.0 {
            0x00..=0x04 => StatusFamily::Update,
            0x05..=0x06 => StatusFamily::Activate,
            0x07..=0x09 => StatusFamily::Action,
            0x0A => StatusFamily::Data,
            0x0B..=0x10 => StatusFamily::Group,
            0x11..=0x13 => StatusFamily::Join,
            0x14..=0x16 => StatusFamily::ObservedJoin,
            0x17..=0x18 => StatusFamily::Resign,
            0x19..=0x1A => StatusFamily::Deregister,
            _ => StatusFamily::Unknown,
        }
    }

    /// Does this code report a successful outcome?
    pub fn is_success(self) -> bool {
        matches!(
            self,
            StatusCode::UPDATE_SUCCESS
                | StatusCode::ACTIVATE_SUCCESS
                | StatusCode::ACTION_SUCCESS
                | StatusCode::GROUP_ADD_SUCCESS
                | StatusCode::GROUP_DELETE_SUCCESS
                | StatusCode::JOIN_SUCCESS
                | StatusCode::OBSERVED_JOIN_VALID
                | StatusCode::RESIGN_SUCCESS
                | StatusCode::DEREGISTER_SUCCESS
        )
    }

    fn name(self) -> Option<&'static str> {
        Some(match self {
            StatusCode::UPDATE_SUCCESS => "update_success",
            StatusCode::UPDATE_FAIL_SERVER => "update_fail_server",
            StatusCode::UPDATE_FAIL_FILE => "update_fail_file",
            StatusCode::UPDATE_FAIL_DIGEST => "update_fail_digest",
            StatusCode::UPDATE_FAIL_HTTP => "update_fail_http",
            StatusCode::ACTIVATE_SUCCESS => "activate_success",
            StatusCode::ACTIVATE_FAIL => "activate_fail",
            StatusCode::ACTION_SUCCESS => "action_success",
            StatusCode::ACTION_UNKNOWN => "action_unknown",
            StatusCode::ACTION_FAIL => "action_fail",
            StatusCode::DATA_TYPE_UNKNOWN => "data_type_unknown",
            StatusCode::GROUP_ADD_SUCCESS => "group_add_success",
            StatusCode::GROUP_DELETE_SUCCESS => "group_delete_success",
            StatusCode::GROUP_DELETE_INVALID => "group_delete_invalid",
            StatusCode::GROUP_DELETE_FAIL => "group_delete_fail",
            StatusCode::GROUP_ADD_FAIL_LIMIT => "group_add_fail_limit",
            StatusCode::GROUP_ADD_FAIL => "group_add_fail",
            StatusCode::JOIN_SUCCESS => "join_success",
            StatusCode::JOIN_REFUSED => "join_refused",
            StatusCode::JOIN_FAIL => "join_fail",
            StatusCode::OBSERVED_JOIN_VALID => "observed_join_valid",
            StatusCode::OBSERVED_JOIN_INVALID => "observed_join_invalid",
            StatusCode::OBSERVED_JOIN_FAIL => "observed_join_fail",
            StatusCode::RESIGN_SUCCESS => "resign_success",
            StatusCode::RESIGN_FAIL => "resign_fail",
            StatusCode::DEREGISTER_SUCCESS => "deregister_success",
            StatusCode::DEREGISTER_FAIL => "deregister_fail",
            _ => return None,
        })
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "status({:#04x})", self.0),
        }
    }
}
