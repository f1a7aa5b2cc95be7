//! Declarative audio settings and the hardware descriptors derived from them.
//!
//! [`AudioKitConfig`] is a plain `Copy` value built once by the application
//! (usually from one of the presets) and handed to
//! [`AudioKit::begin`](crate::AudioKit::begin). The peripheral configuration
//! and pin assignment are derived on demand, never cached.
//!
//! ```ignore
//! let cfg = AudioKitConfig::default_output()
//!     .with_sample_rate_hz(48_000)?
//!     .with_bits(32)?
//!     .with_iface_mode(IfaceMode::Master);
//! let i2s = cfg.i2s_config();
//! ```

use crate::board::BoardDescriptor;
use crate::constants::{DMA_BUF_COUNT, DMA_BUF_LEN, USE_APLL};
use crate::error::{BoardLookupError, ConfigError};
use crate::hal::{
    ChannelFormat, CodecConfig, CommFormat, Gpio, I2sConfig, I2sIface, I2sModeFlags, I2sPinConfig, I2sPort,
};

// ── Enumerations ───────────────────────────────────────────────────────────

/// Codec ADC input channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdcInput {
    /// Line input 1 (on-board microphones on most kits).
    #[default]
    Line1,
    /// Line input 2 (aux-in jack on most kits).
    Line2,
    /// Both line inputs.
    All,
    /// Differential input.
    Difference,
}

/// Codec DAC output channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DacOutput {
    /// Both line outputs.
    #[default]
    All,
    /// Line output 1 (speaker amplifier).
    Line1,
    /// Line output 2 (headphone jack).
    Line2,
}

/// Which signal paths the codec and peripheral run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodecMode {
    /// ADC only (capture, I2S RX).
    Encode,
    /// DAC only (playback, I2S TX).
    Decode,
    /// ADC and DAC (full duplex).
    #[default]
    Both,
}

/// Which side of the bus generates BCK/WS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IfaceMode {
    /// The processor drives the bus clocks.
    Master,
    /// The codec drives the bus clocks.
    #[default]
    Slave,
}

/// Codec-side interface frame format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IfaceFormat {
    /// Philips I2S.
    #[default]
    I2sNormal,
    /// Left-justified.
    I2sLeft,
    /// Right-justified.
    I2sRight,
    /// DSP/PCM mode.
    Dsp,
}

/// Supported sample rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleRate {
    /// 8 kHz.
    Rate8k,
    /// 11.025 kHz.
    Rate11k,
    /// 16 kHz.
    Rate16k,
    /// 22.05 kHz.
    Rate22k,
    /// 24 kHz.
    Rate24k,
    /// 32 kHz.
    Rate32k,
    /// 44.1 kHz.
    #[default]
    Rate44k,
    /// 48 kHz.
    Rate48k,
}

impl SampleRate {
    /// Every supported rate, ascending.
    pub const ALL: [SampleRate; 8] = [
        SampleRate::Rate8k,
        SampleRate::Rate11k,
        SampleRate::Rate16k,
        SampleRate::Rate22k,
        SampleRate::Rate24k,
        SampleRate::Rate32k,
        SampleRate::Rate44k,
        SampleRate::Rate48k,
    ];

    /// Rate in Hz as programmed into the I2S peripheral. The 11k, 22k and
    /// 44k members use the rounded 11000, 22000 and 44000.
    pub const fn hz(self) -> u32 {
        match self {
            SampleRate::Rate8k => 8_000,
            SampleRate::Rate11k => 11_000,
            SampleRate::Rate16k => 16_000,
            SampleRate::Rate22k => 22_000,
            SampleRate::Rate24k => 24_000,
            SampleRate::Rate32k => 32_000,
            SampleRate::Rate44k => 44_000,
            SampleRate::Rate48k => 48_000,
        }
    }

    /// Parse a rate in Hz. The exact 11025, 22050 and 44100 spellings are
    /// accepted as aliases of the 11k, 22k and 44k members.
    pub const fn from_hz(hz: u32) -> Result<Self, ConfigError> {
        match hz {
            8_000 => Ok(SampleRate::Rate8k),
            11_000 | 11_025 => Ok(SampleRate::Rate11k),
            16_000 => Ok(SampleRate::Rate16k),
            22_000 | 22_050 => Ok(SampleRate::Rate22k),
            24_000 => Ok(SampleRate::Rate24k),
            32_000 => Ok(SampleRate::Rate32k),
            44_000 | 44_100 => Ok(SampleRate::Rate44k),
            48_000 => Ok(SampleRate::Rate48k),
            other => Err(ConfigError::UnsupportedSampleRate(other)),
        }
    }
}

impl TryFrom<u32> for SampleRate {
    type Error = ConfigError;

    fn try_from(hz: u32) -> Result<Self, Self::Error> {
        Self::from_hz(hz)
    }
}

/// Supported bit depths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitsPerSample {
    /// 16-bit samples.
    #[default]
    Bits16,
    /// 24-bit samples.
    Bits24,
    /// 32-bit samples.
    Bits32,
}

impl BitsPerSample {
    /// Every supported depth, ascending.
    pub const ALL: [BitsPerSample; 3] = [BitsPerSample::Bits16, BitsPerSample::Bits24, BitsPerSample::Bits32];

    /// Depth in bits.
    pub const fn bits(self) -> u32 {
        match self {
            BitsPerSample::Bits16 => 16,
            BitsPerSample::Bits24 => 24,
            BitsPerSample::Bits32 => 32,
        }
    }

    /// Parse a depth in bits.
    pub const fn from_bits(bits: u32) -> Result<Self, ConfigError> {
        match bits {
            16 => Ok(BitsPerSample::Bits16),
            24 => Ok(BitsPerSample::Bits24),
            32 => Ok(BitsPerSample::Bits32),
            other => Err(ConfigError::UnsupportedBitsPerSample(other)),
        }
    }
}

impl TryFrom<u32> for BitsPerSample {
    type Error = ConfigError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

// ── Settings record ────────────────────────────────────────────────────────

/// Audio settings for one [`AudioKit`](crate::AudioKit) session.
///
/// Fields are public for direct assignment before `begin`; the enumerated
/// types make an out-of-range rate or depth unrepresentable, and the
/// `with_*_hz` / `with_bits` setters validate raw numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AudioKitConfig {
    /// I2S controller.
    pub i2s_num: I2sPort,
    /// GPIO that carries MCLK to the codec.
    pub mclk_gpio: Gpio,
    /// Codec ADC input.
    pub adc_input: AdcInput,
    /// Codec DAC output.
    pub dac_output: DacOutput,
    /// Capture, playback or both.
    pub codec_mode: CodecMode,
    /// Bus clock ownership.
    pub master_slave_mode: IfaceMode,
    /// Codec-side frame format.
    pub fmt: IfaceFormat,
    /// Sample rate.
    pub sample_rate: SampleRate,
    /// Bit depth.
    pub bits_per_sample: BitsPerSample,
}

impl AudioKitConfig {
    /// Full-duplex preset (same as `Default`).
    pub fn default_both() -> Self {
        Self::default()
    }

    /// Playback-only preset.
    pub fn default_output() -> Self {
        Self { codec_mode: CodecMode::Decode, ..Self::default() }
    }

    /// Capture-only preset.
    pub fn default_input() -> Self {
        Self { codec_mode: CodecMode::Encode, ..Self::default() }
    }

    /// Single-direction preset: playback if `is_output`, capture otherwise.
    pub fn default_for(is_output: bool) -> Self {
        if is_output {
            Self::default_output()
        } else {
            Self::default_input()
        }
    }

    /// Set the I2S controller.
    pub fn with_port(self, i2s_num: I2sPort) -> Self {
        Self { i2s_num, ..self }
    }

    /// Set the MCLK GPIO.
    pub fn with_mclk_gpio(self, mclk_gpio: Gpio) -> Self {
        Self { mclk_gpio, ..self }
    }

    /// Set the codec input channel.
    pub fn with_adc_input(self, adc_input: AdcInput) -> Self {
        Self { adc_input, ..self }
    }

    /// Set the codec output channel.
    pub fn with_dac_output(self, dac_output: DacOutput) -> Self {
        Self { dac_output, ..self }
    }

    /// Set the signal paths.
    pub fn with_codec_mode(self, codec_mode: CodecMode) -> Self {
        Self { codec_mode, ..self }
    }

    /// Set bus clock ownership.
    pub fn with_iface_mode(self, master_slave_mode: IfaceMode) -> Self {
        Self { master_slave_mode, ..self }
    }

    /// Set the codec frame format.
    pub fn with_format(self, fmt: IfaceFormat) -> Self {
        Self { fmt, ..self }
    }

    /// Set the sample rate.
    pub fn with_sample_rate(self, sample_rate: SampleRate) -> Self {
        Self { sample_rate, ..self }
    }

    /// Set the sample rate from a raw value in Hz.
    pub fn with_sample_rate_hz(self, hz: u32) -> Result<Self, ConfigError> {
        Ok(self.with_sample_rate(SampleRate::from_hz(hz)?))
    }

    /// Set the bit depth.
    pub fn with_bits_per_sample(self, bits_per_sample: BitsPerSample) -> Self {
        Self { bits_per_sample, ..self }
    }

    /// Set the bit depth from a raw bit count.
    pub fn with_bits(self, bits: u32) -> Result<Self, ConfigError> {
        Ok(self.with_bits_per_sample(BitsPerSample::from_bits(bits)?))
    }

    /// `true` if the processor drives the bus clocks.
    pub fn is_master(&self) -> bool {
        self.master_slave_mode == IfaceMode::Master
    }

    /// Bit depth as a number.
    pub fn bits_per_sample(&self) -> u32 {
        self.bits_per_sample.bits()
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate.hz()
    }

    /// Codec init descriptor.
    pub fn codec_config(&self) -> CodecConfig {
        CodecConfig {
            adc_input: self.adc_input,
            dac_output: self.dac_output,
            codec_mode: self.codec_mode,
        }
    }

    /// Codec interface descriptor.
    pub fn codec_iface(&self) -> I2sIface {
        I2sIface {
            mode: self.master_slave_mode,
            fmt: self.fmt,
            samples: self.sample_rate,
            bits: self.bits_per_sample,
        }
    }

    /// I2S peripheral mode bits for this configuration.
    pub fn i2s_mode(&self) -> I2sModeFlags {
        let mut mode = if self.is_master() {
            I2sModeFlags::MASTER
        } else {
            I2sModeFlags::SLAVE
        };
        mode |= match self.codec_mode {
            CodecMode::Decode => I2sModeFlags::TX,
            CodecMode::Encode => I2sModeFlags::RX,
            CodecMode::Both => I2sModeFlags::RX | I2sModeFlags::TX,
        };
        mode
    }

    /// Peripheral configuration: always stereo, standard I2S framing,
    /// fixed DMA geometry, APLL clocking.
    pub fn i2s_config(&self) -> I2sConfig {
        I2sConfig {
            mode: self.i2s_mode(),
            sample_rate: self.sample_rate(),
            bits_per_sample: self.bits_per_sample(),
            channel_format: ChannelFormat::RightLeft,
            comm_format: CommFormat::StandI2s,
            intr_alloc_flags: 0,
            dma_buf_count: DMA_BUF_COUNT,
            dma_buf_len: DMA_BUF_LEN,
            use_apll: USE_APLL,
        }
    }

    /// Pin assignment for the configured port on `board`.
    pub fn i2s_pins(&self, board: &BoardDescriptor) -> Result<I2sPinConfig, BoardLookupError> {
        board.i2s_pins(self.i2s_num)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board;

    #[test]
    fn defaults_match_board_defaults() {
        let cfg = AudioKitConfig::default();
        assert_eq!(cfg.i2s_num, I2sPort::I2S0);
        assert_eq!(cfg.mclk_gpio, Gpio(0));
        assert_eq!(cfg.adc_input, AdcInput::Line1);
        assert_eq!(cfg.dac_output, DacOutput::All);
        assert_eq!(cfg.codec_mode, CodecMode::Both);
        assert!(!cfg.is_master());
        assert_eq!(cfg.fmt, IfaceFormat::I2sNormal);
        assert_eq!(cfg.sample_rate(), 44_000);
        assert_eq!(cfg.bits_per_sample(), 16);
    }

    #[test]
    fn presets_select_direction() {
        assert_eq!(AudioKitConfig::default_both().codec_mode, CodecMode::Both);
        assert_eq!(AudioKitConfig::default_output().codec_mode, CodecMode::Decode);
        assert_eq!(AudioKitConfig::default_input().codec_mode, CodecMode::Encode);
        assert_eq!(AudioKitConfig::default_for(true), AudioKitConfig::default_output());
        assert_eq!(AudioKitConfig::default_for(false), AudioKitConfig::default_input());
    }

    #[test]
    fn sample_rate_accepts_exact_aliases() {
        assert_eq!(SampleRate::from_hz(44_000), Ok(SampleRate::Rate44k));
        assert_eq!(SampleRate::from_hz(44_100), Ok(SampleRate::Rate44k));
        assert_eq!(SampleRate::from_hz(22_000), Ok(SampleRate::Rate22k));
        assert_eq!(SampleRate::from_hz(11_025), Ok(SampleRate::Rate11k));
        for rate in SampleRate::ALL {
            assert_eq!(SampleRate::from_hz(rate.hz()), Ok(rate));
        }
    }

    #[test]
    fn rounded_rates_reach_the_peripheral() {
        let cfg = AudioKitConfig::default().with_sample_rate_hz(44_000).unwrap();
        assert_eq!(cfg.sample_rate(), 44_000);
        assert_eq!(cfg.i2s_config().sample_rate, 44_000);

        let cfg = AudioKitConfig::default().with_sample_rate_hz(44_100).unwrap();
        assert_eq!(cfg.sample_rate(), 44_000);
        assert_eq!(SampleRate::Rate22k.hz(), 22_000);
        assert_eq!(SampleRate::Rate11k.hz(), 11_000);
    }

    #[test]
    fn out_of_set_values_are_config_errors() {
        assert_eq!(SampleRate::try_from(96_000), Err(ConfigError::UnsupportedSampleRate(96_000)));
        assert_eq!(BitsPerSample::try_from(8), Err(ConfigError::UnsupportedBitsPerSample(8)));

        let cfg = AudioKitConfig::default();
        assert_eq!(cfg.with_sample_rate_hz(0), Err(ConfigError::UnsupportedSampleRate(0)));
        assert_eq!(cfg.with_bits(20), Err(ConfigError::UnsupportedBitsPerSample(20)));
    }

    #[test]
    fn raw_setters_store_validated_values() {
        let cfg = AudioKitConfig::default()
            .with_sample_rate_hz(48_000)
            .unwrap()
            .with_bits(24)
            .unwrap();
        assert_eq!(cfg.sample_rate, SampleRate::Rate48k);
        assert_eq!(cfg.bits_per_sample, BitsPerSample::Bits24);
    }

    #[test]
    fn mode_flags_follow_codec_mode_for_every_rate_and_depth() {
        for rate in SampleRate::ALL {
            for bits in BitsPerSample::ALL {
                for (mode, expected) in [
                    (CodecMode::Encode, I2sModeFlags::RX),
                    (CodecMode::Decode, I2sModeFlags::TX),
                    (CodecMode::Both, I2sModeFlags::RX | I2sModeFlags::TX),
                ] {
                    let cfg = AudioKitConfig::default()
                        .with_sample_rate(rate)
                        .with_bits_per_sample(bits)
                        .with_codec_mode(mode);
                    let i2s = cfg.i2s_config();
                    assert_eq!(i2s.mode, I2sModeFlags::SLAVE | expected);
                    assert_eq!(i2s.sample_rate, rate.hz());
                    assert_eq!(i2s.bits_per_sample, bits.bits());
                }
            }
        }
    }

    #[test]
    fn master_flag_selects_peripheral_master() {
        let cfg = AudioKitConfig::default_output().with_iface_mode(IfaceMode::Master);
        let mode = cfg.i2s_config().mode;
        assert!(mode.contains(I2sModeFlags::MASTER | I2sModeFlags::TX));
        assert!(!mode.contains(I2sModeFlags::SLAVE));
        assert!(!mode.contains(I2sModeFlags::RX));
    }

    #[test]
    fn fixed_peripheral_fields() {
        let i2s = AudioKitConfig::default().i2s_config();
        assert_eq!(i2s.channel_format, ChannelFormat::RightLeft);
        assert_eq!(i2s.comm_format, CommFormat::StandI2s);
        assert_eq!(i2s.intr_alloc_flags, 0);
        assert_eq!(i2s.dma_buf_count, 8);
        assert_eq!(i2s.dma_buf_len, 64);
        assert!(i2s.use_apll);
    }

    #[test]
    fn codec_descriptors_copy_settings() {
        let cfg = AudioKitConfig::default_input()
            .with_adc_input(AdcInput::Line2)
            .with_format(IfaceFormat::Dsp)
            .with_sample_rate(SampleRate::Rate16k);
        let init = cfg.codec_config();
        assert_eq!(init.adc_input, AdcInput::Line2);
        assert_eq!(init.codec_mode, CodecMode::Encode);
        let iface = cfg.codec_iface();
        assert_eq!(iface.fmt, IfaceFormat::Dsp);
        assert_eq!(iface.samples, SampleRate::Rate16k);
        assert_eq!(iface.mode, IfaceMode::Slave);
    }

    #[test]
    fn pins_come_from_board_table() {
        let cfg = AudioKitConfig::default();
        let pins = cfg.i2s_pins(&board::AI_THINKER_ES8388).unwrap();
        assert_eq!(pins.bck, Some(Gpio(27)));

        let cfg = cfg.with_port(I2sPort::I2S1);
        assert_eq!(
            cfg.i2s_pins(&board::AI_THINKER_ES8388),
            Err(BoardLookupError::NoPinTable { board: "ai-thinker-es8388", port: 1 })
        );
    }
}
