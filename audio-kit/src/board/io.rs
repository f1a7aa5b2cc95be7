//! Speaker amplifier and headphone jack lines, driven through `embedded-hal`.
//!
//! Both helpers are built from a [`BoardDescriptor`] and refuse to exist on a
//! board that does not wire the line. The application still owns the GPIO
//! driver and passes it in; the descriptor only says which one it should be.
//!
//! ```ignore
//! let mut amp = SpeakerAmp::new(&board::LYRAT_V4_3, pa_pin)?;
//! let mut jack = HeadphoneDetect::new(&board::LYRAT_V4_3, hp_pin)?;
//! amp.set_active(!jack.is_inserted()?)?;
//! ```

use embedded_hal::digital::{InputPin, OutputPin};
use thiserror::Error;

use super::BoardDescriptor;
use crate::error::BoardLookupError;
use crate::hal::Gpio;

/// Power amplifier enable line (active high).
pub struct SpeakerAmp<P> {
    pin: P,
    gpio: Gpio,
    active: bool,
}

impl<P: OutputPin> SpeakerAmp<P> {
    /// Wrap `pin` as the board's PA enable line. The amplifier starts off.
    pub fn new(board: &BoardDescriptor, mut pin: P) -> Result<Self, AmpInitError<P::Error>> {
        let gpio = board
            .require(board.aux.pa_enable, "PA enable")
            .map_err(AmpInitError::Board)?;
        pin.set_low().map_err(AmpInitError::Pin)?;
        Ok(Self { pin, gpio, active: false })
    }

    /// Switch the amplifier on or off.
    pub fn set_active(&mut self, active: bool) -> Result<(), P::Error> {
        if active {
            self.pin.set_high()?;
        } else {
            self.pin.set_low()?;
        }
        log::debug!("speaker amp on GPIO{} {}", self.gpio.0, if active { "on" } else { "off" });
        self.active = active;
        Ok(())
    }

    /// Last state written.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// GPIO the amplifier is wired to.
    pub fn gpio(&self) -> Gpio {
        self.gpio
    }

    /// Consume the helper and return the pin.
    pub fn release(self) -> P {
        self.pin
    }
}

/// Failure to set up [`SpeakerAmp`].
#[derive(Debug, Error)]
pub enum AmpInitError<E> {
    /// The board has no PA enable line.
    #[error("speaker amp unavailable")]
    Board(#[source] BoardLookupError),
    /// Driving the line low failed.
    #[error("PA enable pin failed: {0:?}")]
    Pin(E),
}

/// Headphone jack switch (reads low when a plug is inserted).
pub struct HeadphoneDetect<P> {
    pin: P,
    gpio: Gpio,
}

impl<P: InputPin> HeadphoneDetect<P> {
    /// Wrap `pin` as the board's headphone detect line.
    pub fn new(board: &BoardDescriptor, pin: P) -> Result<Self, BoardLookupError> {
        let gpio = board.require(board.aux.headphone_detect, "headphone detect")?;
        Ok(Self { pin, gpio })
    }

    /// `true` while a plug is in the jack.
    pub fn is_inserted(&mut self) -> Result<bool, P::Error> {
        self.pin.is_low()
    }

    /// GPIO the switch is wired to.
    pub fn gpio(&self) -> Gpio {
        self.gpio
    }

    /// Consume the helper and return the pin.
    pub fn release(self) -> P {
        self.pin
    }
}
