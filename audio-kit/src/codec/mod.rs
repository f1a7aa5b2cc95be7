//! Codec controller module.
//!
//! [`CodecController`] drives any vendor codec driver implementing
//! [`CodecHal`](crate::hal::CodecHal) through the start/stop lifecycle and
//! exposes the runtime controls of [`AudioControl`](crate::control::AudioControl).
//! The chip drivers themselves (ES8388, ES8311, AC101, ...) live outside
//! this crate.

mod controller;

pub use controller::CodecController;
