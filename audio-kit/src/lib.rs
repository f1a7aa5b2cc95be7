//! # audio-kit
//!
//! A `no_std` control layer for ESP32 audio development boards (AI-Thinker
//! Audio Kit, ESP32-LyraT, LyraT-Mini). It brings an audio codec and an I2S
//! peripheral up and down in the right order, exposes volume/mute/active
//! controls, and moves PCM bytes over I2S with a caller-chosen wait budget.
//!
//! The codec chip driver and the I2S peripheral driver are *not* part of this
//! crate: they are plugged in through the [`hal::CodecHal`] and
//! [`hal::I2sHal`] traits.
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Settings | [`settings`] | `AudioKitConfig` and the I2S descriptors derived from it |
//! | Board | [`board`] | Per-board I2S pin tables and auxiliary lines |
//! | Vendor seam | [`hal`] | Codec and I2S driver traits |
//! | Control | [`codec`] / [`control`] | Codec lifecycle and `AudioControl` |
//! | Transport | [`io`] | I2S install/uninstall and blocking read/write |
//! | Facade | [`kit`] | `AudioKit`: `begin` / `end` / `config` |
//!
//! ## Quick start
//!
//! ```ignore
//! use audio_kit::{board, AudioControl, AudioKit, AudioKitConfig, Ticks};
//!
//! let mut kit = AudioKit::new(board::AI_THINKER_ES8388, es8388_driver, i2s_driver);
//! kit.begin(AudioKitConfig::default_output())?;
//! kit.set_volume(70)?;
//!
//! let pcm = [0u8; 1024];
//! let written = kit.write(&pcm, Ticks::BLOCK)?;
//!
//! kit.end();
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `board-io` | yes | Speaker-amp and headphone-jack helpers (requires `embedded-hal`) |
//!
//! ## Logging
//!
//! Lifecycle steps are reported through the [`log`] facade (`info` for
//! begin/end, `debug` per step, `warn` for vendor failures). Install a
//! logger in the application to see them.

#![no_std]

pub mod constants;
pub mod error;
pub mod hal;
pub mod settings;
pub mod board;
pub mod control;
pub mod codec;
pub mod io;
pub mod kit;

#[cfg(test)]
mod mock;


pub use codec::CodecController;
pub use control::AudioControl;
pub use error::{BoardLookupError, CodecError, ConfigError, StartupError, TransportError};
pub use hal::{CodecHal, Gpio, I2sHal, I2sPort, Ticks};
pub use io::I2sTransport;
pub use kit::{AudioKit, KitState};
pub use settings::AudioKitConfig;
