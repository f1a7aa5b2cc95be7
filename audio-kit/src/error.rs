//! Error types for configuration, board lookup, codec and transport control.
//!
//! Every error names the step that failed and nothing more. Vendor error
//! payloads are logged at the call site and then dropped, so all of these
//! types are `Copy` and comparable in tests.

use thiserror::Error;

use crate::hal::CtrlCmd;
use crate::kit::KitState;

/// A settings value outside the supported enumerations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Sample rate is not one of the eight supported rates.
    #[error("unsupported sample rate: {0} Hz")]
    UnsupportedSampleRate(u32),
    /// Bit depth is not 16, 24 or 32.
    #[error("unsupported bits per sample: {0}")]
    UnsupportedBitsPerSample(u32),
    /// The ESP32 only has I2S0 and I2S1.
    #[error("unsupported I2S port: {0}")]
    UnsupportedPort(u8),
}

/// The board descriptor has no entry for the requested line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardLookupError {
    /// No I2S pin table for this port.
    #[error("board {board} has no I2S pin table for port {port}")]
    NoPinTable {
        /// Board name.
        board: &'static str,
        /// Requested I2S port number.
        port: u8,
    },
    /// The board does not wire the requested auxiliary line.
    #[error("board {board} has no {line} line")]
    MissingPin {
        /// Board name.
        board: &'static str,
        /// Human-readable line name, e.g. `"PA enable"`.
        line: &'static str,
    },
}

/// A codec control operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    /// No codec session is open.
    #[error("codec not started")]
    NotStarted,
    /// A session is already open; stop it first.
    #[error("codec already started")]
    AlreadyStarted,
    /// Vendor codec init failed.
    #[error("codec init failed")]
    Init,
    /// Vendor interface configuration failed.
    #[error("codec interface configuration failed")]
    InterfaceConfig,
    /// Vendor start/stop command failed.
    #[error("codec {0} command failed")]
    Control(CtrlCmd),
    /// Vendor mute call failed.
    #[error("codec mute failed")]
    Mute,
    /// Vendor set-volume call failed.
    #[error("codec set volume failed")]
    Volume,
    /// Rejected locally before reaching the vendor layer.
    #[error("invalid argument: volume {0} must be positive")]
    InvalidArgument(i32),
}

/// An I2S peripheral operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The peripheral is not installed.
    #[error("I2S peripheral not installed")]
    NotInstalled,
    /// The peripheral is already installed; stop it first.
    #[error("I2S peripheral already installed")]
    AlreadyInstalled,
    /// The kit is not in the running state.
    #[error("audio kit is not running")]
    NotRunning,
    /// Vendor driver install failed.
    #[error("I2S driver install failed")]
    Install,
    /// The board has no pin table for the configured port.
    #[error(transparent)]
    Board(#[from] BoardLookupError),
    /// Vendor pin configuration failed.
    #[error("I2S pin configuration failed")]
    SetPins,
    /// Vendor MCLK selection failed.
    #[error("I2S MCLK selection failed")]
    MasterClock,
    /// Vendor write failed (a timeout is not a failure).
    #[error("I2S write failed")]
    Write,
    /// Vendor read failed (a timeout is not a failure).
    #[error("I2S read failed")]
    Read,
}

/// Why [`AudioKit::begin`](crate::AudioKit::begin) did not reach the running state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartupError {
    /// `begin` is only valid from [`KitState::Stopped`].
    #[error("begin called in state {0:?}")]
    InvalidState(KitState),
    /// The codec startup sequence failed.
    #[error(transparent)]
    Codec(#[from] CodecError),
    /// The I2S startup sequence failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
