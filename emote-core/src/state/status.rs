//! Host status strings to operating states

use super::machine::OperatingState;
use crate::config::StatusTokens;

/// Operating state the host status `status` asks for
///
/// `None` means the status is deliberately ignored (connecting). Statuses
/// the display has no mode for fall back to [`OperatingState::System`].
pub fn target_for_status(status: &str, tokens: &StatusTokens) -> Option<OperatingState> {
    if status == tokens.listening.as_str() {
        Some(OperatingState::Listening)
    } else if status == tokens.standby.as_str() {
        Some(OperatingState::Idle)
    } else if status == tokens.speaking.as_str() {
        Some(OperatingState::Speaking)
    } else if status == tokens.connecting.as_str() {
        None
    } else {
        Some(OperatingState::System)
    }
}
