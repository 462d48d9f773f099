//! Simulator-owned control schema: command ids, the status convention, and
//! the radio-state payload object. The wire layer carries all of this as
//! opaque bytes.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Loop the request straight back, header and payload unchanged.
pub const CMD_ECHO: u32 = 0;
/// Ask the simulator for its current radio state.
pub const CMD_GET_RADIO_STATE: u32 = 1;
/// Move the simulator to a new radio state.
pub const CMD_SET_RADIO_STATE: u32 = 2;

/// Request completed. Non-zero statuses are responder-defined error codes
/// and are carried through without interpretation.
pub const STATUS_OK: u32 = 0;

/// Radio power and SIM readiness states, in the simulator's numbering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RadioState {
    Off,
    Unavailable,
    SimNotReady,
    SimLockedOrAbsent,
    SimReady,
    RuimNotReady,
    RuimReady,
    RuimLockedOrAbsent,
    NvNotReady,
    NvReady,
}

impl RadioState {
    pub fn as_u32(self) -> u32 {
        match self {
            RadioState::Off => 0,
            RadioState::Unavailable => 1,
            RadioState::SimNotReady => 2,
            RadioState::SimLockedOrAbsent => 3,
            RadioState::SimReady => 4,
            RadioState::RuimNotReady => 5,
            RadioState::RuimReady => 6,
            RadioState::RuimLockedOrAbsent => 7,
            RadioState::NvNotReady => 8,
            RadioState::NvReady => 9,
        }
    }

    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(RadioState::Off),
            1 => Some(RadioState::Unavailable),
            2 => Some(RadioState::SimNotReady),
            3 => Some(RadioState::SimLockedOrAbsent),
            4 => Some(RadioState::SimReady),
            5 => Some(RadioState::RuimNotReady),
            6 => Some(RadioState::RuimReady),
            7 => Some(RadioState::RuimLockedOrAbsent),
            8 => Some(RadioState::NvNotReady),
            9 => Some(RadioState::NvReady),
            _ => None,
        }
    }
}

/// Payload object for radio-state requests and replies, serialized as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioStateReport {
    pub state: u32,
}

impl RadioStateReport {
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Human-readable name for the carried state, if it is a known one.
    pub fn state_name(&self) -> String {
        match RadioState::from_u32(self.state) {
            Some(state) => format!("{state:?}"),
            None => format!("Unknown({})", self.state),
        }
    }
}

pub fn command_name(command: u32) -> &'static str {
    match command {
        CMD_ECHO => "ECHO",
        CMD_GET_RADIO_STATE => "GET_RADIO_STATE",
        CMD_SET_RADIO_STATE => "SET_RADIO_STATE",
        _ => "USER",
    }
}
