//! The `AudioKit` facade: one object that brings the codec and the I2S
//! peripheral up and down together.
//!
//! ## States
//!
//! ```text
//!            begin ok
//! Stopped ───────────────► Running
//!    ▲  │                     │
//!    │  │ begin fails after   │ end
//!    │  │ a vendor step ran   │
//!    │  ▼                     │
//!    │ PartiallyStarted       │
//!    │  │ end                 │
//!    └──┴─────────────────────┘
//! ```
//!
//! `begin` is accepted only in `Stopped`. A failed `begin` never rolls
//! back the steps that already ran; if any did, the kit is left in
//! `PartiallyStarted`, where `begin` and the transport are refused and the
//! codec controls act on whatever codec session exists. `end` tears the
//! transport down first, then the codec, and is valid in every state.
//!
//! ## Example
//!
//! ```ignore
//! let mut kit = AudioKit::new(board::AI_THINKER_ES8388, es8388, i2s);
//! kit.begin(AudioKitConfig::default_output())?;
//! kit.set_volume(60)?;
//! let n = kit.write(&pcm, Ticks::BLOCK)?;
//! kit.end();
//! ```
//!
//! The kit has no internal locking; drive it from one task.

use log::info;

use crate::board::BoardDescriptor;
use crate::codec::CodecController;
use crate::control::AudioControl;
use crate::error::{CodecError, StartupError, TransportError};
use crate::hal::{CodecHal, I2sHal, Ticks};
use crate::io::I2sTransport;
use crate::settings::AudioKitConfig;

/// Lifecycle state of an [`AudioKit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KitState {
    /// Nothing is running.
    #[default]
    Stopped,
    /// `begin` failed after at least one vendor step succeeded; call `end`.
    PartiallyStarted,
    /// Codec and I2S are both up.
    Running,
}

/// Codec + I2S lifecycle facade for an ESP32 audio board.
pub struct AudioKit<C, P> {
    board: BoardDescriptor,
    codec: CodecController<C>,
    transport: I2sTransport<P>,
    cfg: AudioKitConfig,
    state: KitState,
}

impl<C, P> AudioKit<C, P>
where
    C: CodecHal,
    P: I2sHal,
{
    /// Bind a board description and the two vendor drivers.
    pub fn new(board: BoardDescriptor, codec: C, i2s: P) -> Self {
        Self {
            board,
            codec: CodecController::new(codec),
            transport: I2sTransport::new(i2s),
            cfg: AudioKitConfig::default(),
            state: KitState::Stopped,
        }
    }

    /// Full-duplex preset.
    pub fn default_config(&self) -> AudioKitConfig {
        AudioKitConfig::default_both()
    }

    /// Playback-only (`true`) or capture-only (`false`) preset.
    pub fn default_config_for(&self, is_output: bool) -> AudioKitConfig {
        AudioKitConfig::default_for(is_output)
    }

    /// Start the codec, then the I2S peripheral.
    pub fn begin(&mut self, cfg: AudioKitConfig) -> Result<(), StartupError> {
        if self.state != KitState::Stopped {
            return Err(StartupError::InvalidState(self.state));
        }
        self.cfg = cfg;
        info!(
            "audio kit begin on {}: {:?}, {} Hz, {} bit",
            self.board.name,
            cfg.codec_mode,
            cfg.sample_rate(),
            cfg.bits_per_sample()
        );

        if let Err(e) = self.codec.start(&cfg) {
            self.state = if self.codec.is_initialized() {
                KitState::PartiallyStarted
            } else {
                KitState::Stopped
            };
            return Err(e.into());
        }

        if let Err(e) = self.transport.start(&cfg, &self.board) {
            self.state = KitState::PartiallyStarted;
            return Err(e.into());
        }

        self.state = KitState::Running;
        Ok(())
    }

    /// Stop the I2S peripheral, then the codec. Never fails.
    pub fn end(&mut self) {
        if self.state != KitState::Stopped {
            info!("audio kit end ({:?})", self.state);
        }
        self.transport.stop();
        self.codec.stop();
        self.state = KitState::Stopped;
    }

    /// Settings passed to the last `begin` (the default preset before any).
    pub fn config(&self) -> AudioKitConfig {
        self.cfg
    }

    /// Current lifecycle state.
    pub fn state(&self) -> KitState {
        self.state
    }

    /// `true` in [`KitState::Running`].
    pub fn is_running(&self) -> bool {
        self.state == KitState::Running
    }

    /// Board this kit was built for.
    pub fn board(&self) -> &BoardDescriptor {
        &self.board
    }

    /// Write PCM bytes to the DAC, waiting at most `wait`.
    ///
    /// Returns the number of bytes accepted; shorter than `src` if the
    /// budget ran out.
    pub fn write(&mut self, src: &[u8], wait: Ticks) -> Result<usize, TransportError> {
        if src.is_empty() {
            return Ok(0);
        }
        self.require_running()?;
        self.transport.write(src, wait)
    }

    /// Read PCM bytes from the ADC, waiting at most `wait`.
    pub fn read(&mut self, dest: &mut [u8], wait: Ticks) -> Result<usize, TransportError> {
        if dest.is_empty() {
            return Ok(0);
        }
        self.require_running()?;
        self.transport.read(dest, wait)
    }

    /// Aux-in detect GPIO, or -1.
    pub fn pin_auxin(&self) -> i8 {
        self.board.pin_auxin()
    }

    /// Headphone detect GPIO, or -1.
    pub fn pin_headphone_detect(&self) -> i8 {
        self.board.pin_headphone_detect()
    }

    /// Amplifier enable GPIO, or -1.
    pub fn pin_pa_enable(&self) -> i8 {
        self.board.pin_pa_enable()
    }

    /// ADC button detect GPIO, or -1.
    pub fn pin_adc_detect(&self) -> i8 {
        self.board.pin_adc_detect()
    }

    /// ES7243 MCLK GPIO, or -1.
    pub fn pin_es7243_mclk(&self) -> i8 {
        self.board.pin_es7243_mclk()
    }

    /// Record button id, or -1.
    pub fn pin_input_rec(&self) -> i8 {
        self.board.pin_input_rec()
    }

    /// Mode button id, or -1.
    pub fn pin_input_mode(&self) -> i8 {
        self.board.pin_input_mode()
    }

    /// Set button id, or -1.
    pub fn pin_input_set(&self) -> i8 {
        self.board.pin_input_set()
    }

    /// Play button id, or -1.
    pub fn pin_input_play(&self) -> i8 {
        self.board.pin_input_play()
    }

    /// Volume-up button id, or -1.
    pub fn pin_volume_up(&self) -> i8 {
        self.board.pin_volume_up()
    }

    /// Volume-down button id, or -1.
    pub fn pin_volume_down(&self) -> i8 {
        self.board.pin_volume_down()
    }

    /// Codec reset GPIO, or -1.
    pub fn pin_reset_codec(&self) -> i8 {
        self.board.pin_reset_codec()
    }

    /// Board reset GPIO, or -1.
    pub fn pin_reset_board(&self) -> i8 {
        self.board.pin_reset_board()
    }

    /// Green LED GPIO, or -1.
    pub fn pin_green_led(&self) -> i8 {
        self.board.pin_green_led()
    }

    /// Blue LED GPIO, or -1.
    pub fn pin_blue_led(&self) -> i8 {
        self.board.pin_blue_led()
    }

    /// Consume the kit and return the board and both vendor drivers.
    /// Call [`end()`](Self::end) first if anything is running.
    pub fn release(self) -> (BoardDescriptor, C, P) {
        (self.board, self.codec.release(), self.transport.release())
    }

    #[cfg(test)]
    pub(crate) fn codec_driver(&self) -> &C {
        self.codec.driver()
    }

    #[cfg(test)]
    pub(crate) fn i2s_driver(&self) -> &P {
        self.transport.driver()
    }

    fn require_running(&self) -> Result<(), TransportError> {
        if self.state == KitState::Running {
            Ok(())
        } else {
            Err(TransportError::NotRunning)
        }
    }
}

impl<C, P> AudioControl for AudioKit<C, P>
where
    C: CodecHal,
    P: I2sHal,
{
    type Error = CodecError;

    fn set_active(&mut self, active: bool) -> Result<(), Self::Error> {
        self.codec.set_active(active)
    }

    fn set_mute(&mut self, mute: bool) -> Result<(), Self::Error> {
        self.codec.set_mute(mute)
    }

    fn set_volume(&mut self, percent: i32) -> Result<(), Self::Error> {
        self.codec.set_volume(percent)
    }

    fn volume(&mut self) -> i32 {
        self.codec.volume()
    }
}
