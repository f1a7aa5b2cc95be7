//! I2S transport.
//!
//! [`I2sTransport`] installs the I2S peripheral on the configured port,
//! binds it to the board's pins and moves raw PCM bytes in and out with a
//! caller-chosen wait budget.
//!
//! ## Buffer layout
//!
//! The peripheral always runs stereo (right/left slots), so a transfer
//! buffer holds interleaved frames of `2 × bits_per_sample / 8` bytes:
//!
//! ```text
//! 16-bit:  [L lo][L hi][R lo][R hi] [L lo][L hi][R lo][R hi] ...
//! ```
//!
//! The DMA engine is installed with 8 buffers of 64 frames
//! ([`DMA_BUF_COUNT`](crate::constants::DMA_BUF_COUNT),
//! [`DMA_BUF_LEN`](crate::constants::DMA_BUF_LEN)); a write blocks only
//! while all of them are full.

mod transport;

pub use transport::I2sTransport;
