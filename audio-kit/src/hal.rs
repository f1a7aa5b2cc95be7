//! Vendor driver capability traits and the descriptors passed across them.
//!
//! The codec chip driver and the I2S peripheral driver are external
//! collaborators. Both are reached only through the two traits below, so the
//! controllers can be exercised on the host with mock drivers and bound to
//! ESP-IDF (or any other HAL) on target.
//!
//! Like `embedded-hal`, each trait carries an associated `Error` type. The
//! controllers treat *any* `Err` as failure of the step; they never inspect
//! vendor error codes.

use core::fmt;
use core::ops::{BitOr, BitOrAssign};

use crate::constants::I2S_PORT_COUNT;
use crate::error::ConfigError;
use crate::settings::{AdcInput, BitsPerSample, CodecMode, DacOutput, IfaceFormat, IfaceMode, SampleRate};

// ── Primitive identifiers ──────────────────────────────────────────────────

/// ESP32 I2S controller number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct I2sPort(u8);

impl I2sPort {
    /// I2S controller 0.
    pub const I2S0: Self = I2sPort(0);
    /// I2S controller 1.
    pub const I2S1: Self = I2sPort(1);

    /// Validate a raw port number.
    pub const fn new(port: u8) -> Result<Self, ConfigError> {
        if (port as usize) < I2S_PORT_COUNT {
            Ok(I2sPort(port))
        } else {
            Err(ConfigError::UnsupportedPort(port))
        }
    }

    /// Raw controller number.
    pub const fn number(self) -> u8 {
        self.0
    }
}

/// GPIO number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gpio(pub u8);

/// Wait budget for blocking transfers, in RTOS ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticks(pub u32);

impl Ticks {
    /// Wait indefinitely (`portMAX_DELAY`).
    pub const BLOCK: Self = Ticks(u32::MAX);
    /// Do not wait at all.
    pub const NON_BLOCK: Self = Ticks(0);
}

impl Default for Ticks {
    fn default() -> Self {
        Self::BLOCK
    }
}

// ── Codec descriptors ──────────────────────────────────────────────────────

/// Codec start/stop command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtrlCmd {
    /// Power up the configured signal path.
    Start,
    /// Power down the configured signal path.
    Stop,
}

impl CtrlCmd {
    /// `Start` for `true`, `Stop` for `false`.
    pub const fn from_active(active: bool) -> Self {
        if active {
            CtrlCmd::Start
        } else {
            CtrlCmd::Stop
        }
    }
}

impl fmt::Display for CtrlCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CtrlCmd::Start => f.write_str("start"),
            CtrlCmd::Stop => f.write_str("stop"),
        }
    }
}

/// Init descriptor handed to [`CodecHal::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// ADC input channel.
    pub adc_input: AdcInput,
    /// DAC output channel.
    pub dac_output: DacOutput,
    /// Signal paths to power.
    pub codec_mode: CodecMode,
}

/// Digital interface descriptor handed to [`CodecHal::iface_config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I2sIface {
    /// Which side generates the bus clocks.
    pub mode: IfaceMode,
    /// Frame format.
    pub fmt: IfaceFormat,
    /// Sample rate.
    pub samples: SampleRate,
    /// Bit depth.
    pub bits: BitsPerSample,
}

// ── I2S peripheral descriptors ─────────────────────────────────────────────

/// I2S peripheral mode bits (`i2s_mode_t`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct I2sModeFlags(u32);

impl I2sModeFlags {
    /// Peripheral drives BCK/WS.
    pub const MASTER: Self = I2sModeFlags(1 << 0);
    /// Peripheral follows external BCK/WS.
    pub const SLAVE: Self = I2sModeFlags(1 << 1);
    /// Transmit (playback) path enabled.
    pub const TX: Self = I2sModeFlags(1 << 2);
    /// Receive (capture) path enabled.
    pub const RX: Self = I2sModeFlags(1 << 3);

    /// Raw register bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// `true` if every bit of `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for I2sModeFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        I2sModeFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for I2sModeFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Slot layout of the I2S frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelFormat {
    /// Separate left and right slots.
    RightLeft,
    /// Both slots carry the right channel.
    AllRight,
    /// Both slots carry the left channel.
    AllLeft,
    /// Right slot only.
    OnlyRight,
    /// Left slot only.
    OnlyLeft,
}

/// Communication format on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommFormat {
    /// Philips I2S.
    StandI2s,
    /// MSB (left-justified).
    StandMsb,
    /// PCM short frame sync.
    StandPcmShort,
    /// PCM long frame sync.
    StandPcmLong,
}

/// Peripheral configuration handed to [`I2sHal::install`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I2sConfig {
    /// Master/slave and TX/RX bits.
    pub mode: I2sModeFlags,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u32,
    /// Slot layout.
    pub channel_format: ChannelFormat,
    /// Wire format.
    pub comm_format: CommFormat,
    /// Interrupt allocation flags (0 = default priority).
    pub intr_alloc_flags: u32,
    /// Number of DMA buffers.
    pub dma_buf_count: u32,
    /// Frames per DMA buffer.
    pub dma_buf_len: u32,
    /// Clock from the audio PLL.
    pub use_apll: bool,
}

/// I2S pin assignment handed to [`I2sHal::set_pin`]. `None` leaves a line unrouted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct I2sPinConfig {
    /// Master clock output.
    pub mck: Option<Gpio>,
    /// Bit clock.
    pub bck: Option<Gpio>,
    /// Word select (LRCK).
    pub ws: Option<Gpio>,
    /// Serial data out (to the DAC).
    pub data_out: Option<Gpio>,
    /// Serial data in (from the ADC).
    pub data_in: Option<Gpio>,
}

// ── Capability traits ──────────────────────────────────────────────────────

/// Vendor codec driver (ES8388, ES8311, AC101, ...).
pub trait CodecHal {
    /// Vendor error type.
    type Error: fmt::Debug;

    /// Power up the chip and route the requested channels.
    fn init(&mut self, config: &CodecConfig) -> Result<(), Self::Error>;

    /// Program the digital audio interface.
    fn iface_config(&mut self, mode: CodecMode, iface: &I2sIface) -> Result<(), Self::Error>;

    /// Start or stop the signal paths selected by `mode`.
    fn ctrl(&mut self, mode: CodecMode, cmd: CtrlCmd) -> Result<(), Self::Error>;

    /// Release the chip.
    fn deinit(&mut self) -> Result<(), Self::Error>;

    /// Mute or unmute the output.
    fn set_mute(&mut self, mute: bool) -> Result<(), Self::Error>;

    /// Set the output volume in percent.
    fn set_volume(&mut self, percent: i32) -> Result<(), Self::Error>;

    /// Current output volume in percent.
    fn get_volume(&mut self) -> Result<i32, Self::Error>;
}

/// Vendor I2S peripheral driver.
///
/// `write` and `read` block for at most `wait` and return the number of bytes
/// actually moved. Running out of budget is not an error: the driver returns
/// `Ok(n)` with `n` shorter than the buffer.
pub trait I2sHal {
    /// Vendor error type.
    type Error: fmt::Debug;

    /// Allocate the DMA engine for `port`.
    fn install(&mut self, port: I2sPort, config: &I2sConfig, queue_depth: u32) -> Result<(), Self::Error>;

    /// Route the I2S signals to GPIOs.
    fn set_pin(&mut self, port: I2sPort, pins: &I2sPinConfig) -> Result<(), Self::Error>;

    /// Route the master clock to `gpio`.
    fn mclk_gpio_select(&mut self, port: I2sPort, gpio: Gpio) -> Result<(), Self::Error>;

    /// Free the DMA engine for `port`.
    fn uninstall(&mut self, port: I2sPort) -> Result<(), Self::Error>;

    /// Queue `src` for transmission.
    fn write(&mut self, port: I2sPort, src: &[u8], wait: Ticks) -> Result<usize, Self::Error>;

    /// Fill `dest` with received data.
    fn read(&mut self, port: I2sPort, dest: &mut [u8], wait: Ticks) -> Result<usize, Self::Error>;
}
