//! Board pin registry.
//!
//! A [`BoardDescriptor`] describes one development board: the I2S pin table
//! for each port and the auxiliary lines (jack detect, amplifier enable,
//! buttons, LEDs). It is a plain value picked once at startup and handed to
//! [`AudioKit::new`](crate::AudioKit::new); nothing in the crate reads a
//! global board selection.
//!
//! The `pin_*` accessors return `-1` when the board does not have the line.
//!
//! | Board | Codec | Constant |
//! |-------|-------|----------|
//! | AI-Thinker ESP32-A1S Audio Kit v2.2 | ES8388 | [`AI_THINKER_ES8388`] |
//! | Espressif ESP32-LyraT v4.3 | ES8388 | [`LYRAT_V4_3`] |
//! | Espressif ESP32-LyraT-Mini v1.2 | ES8311 + ES7243 | [`LYRAT_MINI_V1_2`] |

#[cfg(feature = "board-io")]
pub mod io;

use crate::constants::I2S_PORT_COUNT;
use crate::error::BoardLookupError;
use crate::hal::{Gpio, I2sPinConfig, I2sPort};

/// Auxiliary lines of a board. Buttons are identifiers (GPIO, touch pad or
/// ADC-ladder index, depending on the board), not necessarily GPIO numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuxPins {
    /// Aux-in jack detect.
    pub auxin_detect: Option<Gpio>,
    /// Headphone jack detect.
    pub headphone_detect: Option<Gpio>,
    /// Speaker amplifier enable.
    pub pa_enable: Option<Gpio>,
    /// ADC button ladder input.
    pub adc_detect: Option<Gpio>,
    /// MCLK of the secondary ES7243 ADC.
    pub es7243_mclk: Option<Gpio>,
    /// Record button.
    pub input_rec: Option<u8>,
    /// Mode button.
    pub input_mode: Option<u8>,
    /// Set button.
    pub input_set: Option<u8>,
    /// Play button.
    pub input_play: Option<u8>,
    /// Volume-up button.
    pub volume_up: Option<u8>,
    /// Volume-down button.
    pub volume_down: Option<u8>,
    /// Codec reset line.
    pub reset_codec: Option<Gpio>,
    /// Board (DSP) reset line.
    pub reset_board: Option<Gpio>,
    /// Green LED.
    pub green_led: Option<Gpio>,
    /// Blue LED.
    pub blue_led: Option<Gpio>,
}

impl AuxPins {
    /// A board with no auxiliary lines.
    pub const NONE: Self = AuxPins {
        auxin_detect: None,
        headphone_detect: None,
        pa_enable: None,
        adc_detect: None,
        es7243_mclk: None,
        input_rec: None,
        input_mode: None,
        input_set: None,
        input_play: None,
        volume_up: None,
        volume_down: None,
        reset_codec: None,
        reset_board: None,
        green_led: None,
        blue_led: None,
    };
}

/// Static description of a development board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardDescriptor {
    /// Short board name, used in errors and logs.
    pub name: &'static str,
    /// I2S pin table per port; `None` if the port is not wired.
    pub i2s: [Option<I2sPinConfig>; I2S_PORT_COUNT],
    /// Auxiliary lines.
    pub aux: AuxPins,
}

impl BoardDescriptor {
    /// A board with no I2S tables and no auxiliary lines.
    pub const fn new(name: &'static str) -> Self {
        BoardDescriptor {
            name,
            i2s: [None; I2S_PORT_COUNT],
            aux: AuxPins::NONE,
        }
    }

    /// Add or replace the pin table for `port`.
    pub const fn with_i2s_pins(mut self, port: I2sPort, pins: I2sPinConfig) -> Self {
        self.i2s[port.number() as usize] = Some(pins);
        self
    }

    /// Replace the auxiliary lines.
    pub const fn with_aux(mut self, aux: AuxPins) -> Self {
        self.aux = aux;
        self
    }

    /// I2S pin table for `port`.
    pub fn i2s_pins(&self, port: I2sPort) -> Result<I2sPinConfig, BoardLookupError> {
        self.i2s
            .get(usize::from(port.number()))
            .copied()
            .flatten()
            .ok_or(BoardLookupError::NoPinTable {
                board: self.name,
                port: port.number(),
            })
    }

    /// Look up an auxiliary GPIO, naming it in the error if absent.
    pub fn require(&self, line: Option<Gpio>, name: &'static str) -> Result<Gpio, BoardLookupError> {
        line.ok_or(BoardLookupError::MissingPin { board: self.name, line: name })
    }

    /// Aux-in detect GPIO, or -1.
    pub fn pin_auxin(&self) -> i8 {
        gpio_or_absent(self.aux.auxin_detect)
    }

    /// Headphone detect GPIO, or -1.
    pub fn pin_headphone_detect(&self) -> i8 {
        gpio_or_absent(self.aux.headphone_detect)
    }

    /// Amplifier enable GPIO, or -1.
    pub fn pin_pa_enable(&self) -> i8 {
        gpio_or_absent(self.aux.pa_enable)
    }

    /// ADC button detect GPIO, or -1.
    pub fn pin_adc_detect(&self) -> i8 {
        gpio_or_absent(self.aux.adc_detect)
    }

    /// ES7243 MCLK GPIO, or -1.
    pub fn pin_es7243_mclk(&self) -> i8 {
        gpio_or_absent(self.aux.es7243_mclk)
    }

    /// Record button id, or -1.
    pub fn pin_input_rec(&self) -> i8 {
        id_or_absent(self.aux.input_rec)
    }

    /// Mode button id, or -1.
    pub fn pin_input_mode(&self) -> i8 {
        id_or_absent(self.aux.input_mode)
    }

    /// Set button id, or -1.
    pub fn pin_input_set(&self) -> i8 {
        id_or_absent(self.aux.input_set)
    }

    /// Play button id, or -1.
    pub fn pin_input_play(&self) -> i8 {
        id_or_absent(self.aux.input_play)
    }

    /// Volume-up button id, or -1.
    pub fn pin_volume_up(&self) -> i8 {
        id_or_absent(self.aux.volume_up)
    }

    /// Volume-down button id, or -1.
    pub fn pin_volume_down(&self) -> i8 {
        id_or_absent(self.aux.volume_down)
    }

    /// Codec reset GPIO, or -1.
    pub fn pin_reset_codec(&self) -> i8 {
        gpio_or_absent(self.aux.reset_codec)
    }

    /// Board reset GPIO, or -1.
    pub fn pin_reset_board(&self) -> i8 {
        gpio_or_absent(self.aux.reset_board)
    }

    /// Green LED GPIO, or -1.
    pub fn pin_green_led(&self) -> i8 {
        gpio_or_absent(self.aux.green_led)
    }

    /// Blue LED GPIO, or -1.
    pub fn pin_blue_led(&self) -> i8 {
        gpio_or_absent(self.aux.blue_led)
    }
}

fn gpio_or_absent(line: Option<Gpio>) -> i8 {
    id_or_absent(line.map(|gpio| gpio.0))
}

// Identifiers above i8::MAX cannot be reported; treat them as absent
// rather than returning a negative look-alike.
fn id_or_absent(id: Option<u8>) -> i8 {
    id.and_then(|n| i8::try_from(n).ok()).unwrap_or(-1)
}

const fn gpio(n: u8) -> Option<Gpio> {
    Some(Gpio(n))
}

// ── Built-in boards ────────────────────────────────────────────────────────

/// AI-Thinker ESP32-A1S Audio Kit v2.2 (ES8388).
pub const AI_THINKER_ES8388: BoardDescriptor = BoardDescriptor::new("ai-thinker-es8388")
    .with_i2s_pins(
        I2sPort::I2S0,
        I2sPinConfig {
            mck: gpio(0),
            bck: gpio(27),
            ws: gpio(25),
            data_out: gpio(26),
            data_in: gpio(35),
        },
    )
    .with_aux(AuxPins {
        headphone_detect: gpio(39),
        pa_enable: gpio(21),
        input_rec: Some(36),
        input_mode: Some(13),
        input_set: Some(19),
        input_play: Some(23),
        volume_up: Some(18),
        volume_down: Some(5),
        green_led: gpio(22),
        blue_led: gpio(19),
        ..AuxPins::NONE
    });

/// Espressif ESP32-LyraT v4.3 (ES8388). Set/play/volume are touch pads.
pub const LYRAT_V4_3: BoardDescriptor = BoardDescriptor::new("lyrat-v4.3")
    .with_i2s_pins(
        I2sPort::I2S0,
        I2sPinConfig {
            mck: gpio(0),
            bck: gpio(5),
            ws: gpio(25),
            data_out: gpio(26),
            data_in: gpio(35),
        },
    )
    .with_aux(AuxPins {
        auxin_detect: gpio(12),
        headphone_detect: gpio(19),
        pa_enable: gpio(21),
        input_rec: Some(36),
        input_mode: Some(39),
        input_set: Some(9),
        input_play: Some(8),
        volume_up: Some(7),
        volume_down: Some(4),
        green_led: gpio(22),
        ..AuxPins::NONE
    });

/// Espressif ESP32-LyraT-Mini v1.2 (ES8311 DAC on I2S0, ES7243 ADC on I2S1).
/// Buttons sit on an ADC ladder and are reported as ladder indices.
pub const LYRAT_MINI_V1_2: BoardDescriptor = BoardDescriptor::new("lyrat-mini-v1.2")
    .with_i2s_pins(
        I2sPort::I2S0,
        I2sPinConfig {
            mck: gpio(0),
            bck: gpio(5),
            ws: gpio(25),
            data_out: gpio(26),
            data_in: gpio(35),
        },
    )
    .with_i2s_pins(
        I2sPort::I2S1,
        I2sPinConfig {
            mck: None,
            bck: gpio(32),
            ws: gpio(33),
            data_out: None,
            data_in: gpio(36),
        },
    )
    .with_aux(AuxPins {
        headphone_detect: gpio(19),
        pa_enable: gpio(21),
        adc_detect: gpio(39),
        es7243_mclk: gpio(0),
        volume_up: Some(0),
        volume_down: Some(1),
        input_set: Some(2),
        input_play: Some(3),
        input_mode: Some(4),
        input_rec: Some(5),
        green_led: gpio(27),
        ..AuxPins::NONE
    });
