//! I2S peripheral lifecycle and blocking buffered transfers.
//!
//! [`I2sTransport`] owns a vendor I2S driver. Startup is a fixed sequence,
//! each step assuming the previous one created the peripheral state it
//! configures:
//!
//! ```text
//! i2s_config() ──► install ──► i2s_pins(board) ──► set_pin ──► mclk_gpio_select
//! ```
//!
//! The first failing step is returned; an installed peripheral stays
//! installed until [`stop()`](I2sTransport::stop).
//!
//! ## Transfers
//!
//! [`write()`](I2sTransport::write) and [`read()`](I2sTransport::read) block
//! for at most the given [`Ticks`] budget and return the byte count actually
//! moved, which is shorter than the buffer when the budget runs out.
//! Empty buffers return `Ok(0)` without reaching the driver.

use log::{debug, warn};

use crate::board::BoardDescriptor;
use crate::constants::I2S_EVENT_QUEUE_DEPTH;
use crate::error::TransportError;
use crate::hal::{I2sHal, I2sPort, Ticks};
use crate::settings::AudioKitConfig;

/// Installed peripheral bound to a port.
#[derive(Debug, Clone, Copy)]
struct TransportSession {
    port: I2sPort,
}

/// Owns a vendor I2S driver for the lifetime of a session.
pub struct I2sTransport<P> {
    hal: P,
    session: Option<TransportSession>,
}

impl<P: I2sHal> I2sTransport<P> {
    /// Wrap a vendor driver. No vendor call is made until [`start()`](Self::start).
    pub fn new(hal: P) -> Self {
        Self { hal, session: None }
    }

    /// Install the peripheral, bind its pins and route MCLK.
    pub fn start(&mut self, cfg: &AudioKitConfig, board: &BoardDescriptor) -> Result<(), TransportError> {
        if self.session.is_some() {
            return Err(TransportError::AlreadyInstalled);
        }
        let port = cfg.i2s_num;

        let i2s_config = cfg.i2s_config();
        debug!("i2s{} install: {:?}", port.number(), i2s_config);
        self.hal
            .install(port, &i2s_config, I2S_EVENT_QUEUE_DEPTH)
            .map_err(|e| {
                warn!("i2s{} install failed: {:?}", port.number(), e);
                TransportError::Install
            })?;
        self.session = Some(TransportSession { port });

        let pins = cfg.i2s_pins(board)?;
        debug!("i2s{} pins: {:?}", port.number(), pins);
        self.hal.set_pin(port, &pins).map_err(|e| {
            warn!("i2s{} set pin failed: {:?}", port.number(), e);
            TransportError::SetPins
        })?;

        self.hal.mclk_gpio_select(port, cfg.mclk_gpio).map_err(|e| {
            warn!("i2s{} mclk select on GPIO{} failed: {:?}", port.number(), cfg.mclk_gpio.0, e);
            TransportError::MasterClock
        })
    }

    /// Uninstall the peripheral. Vendor failures are logged and ignored;
    /// without an installed peripheral this is a no-op.
    pub fn stop(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        if let Err(e) = self.hal.uninstall(session.port) {
            warn!("i2s{} uninstall failed during teardown: {:?}", session.port.number(), e);
        }
        debug!("i2s{} released", session.port.number());
    }

    /// `true` between a successful install and [`stop()`](Self::stop).
    pub fn is_installed(&self) -> bool {
        self.session.is_some()
    }

    /// Write `src` to the peripheral, waiting at most `wait`.
    pub fn write(&mut self, src: &[u8], wait: Ticks) -> Result<usize, TransportError> {
        if src.is_empty() {
            return Ok(0);
        }
        let port = self.port()?;
        self.hal.write(port, src, wait).map_err(|e| {
            warn!("i2s{} write failed: {:?}", port.number(), e);
            TransportError::Write
        })
    }

    /// Read into `dest` from the peripheral, waiting at most `wait`.
    pub fn read(&mut self, dest: &mut [u8], wait: Ticks) -> Result<usize, TransportError> {
        if dest.is_empty() {
            return Ok(0);
        }
        let port = self.port()?;
        self.hal.read(port, dest, wait).map_err(|e| {
            warn!("i2s{} read failed: {:?}", port.number(), e);
            TransportError::Read
        })
    }

    /// Consume the controller and return the vendor driver.
    pub fn release(self) -> P {
        self.hal
    }

    #[cfg(test)]
    pub(crate) fn driver(&self) -> &P {
        &self.hal
    }

    fn port(&self) -> Result<I2sPort, TransportError> {
        self.session.map(|s| s.port).ok_or(TransportError::NotInstalled)
    }
}
