//! Codec lifecycle and runtime control.
//!
//! The controller owns the vendor codec driver and sequences it against an
//! [`AudioKitConfig`]:
//!
//! 1. `init` with the input/output/mode descriptor
//! 2. `iface_config` with mode, format, rate and depth
//! 3. `ctrl(Start)` for the configured mode
//!
//! Each step runs only if the previous one succeeded. The first failure is
//! returned and nothing is rolled back; once `init` has succeeded the
//! session stays open until [`stop()`](CodecController::stop).
//!
//! # Example
//!
//! ```ignore
//! let mut codec = CodecController::new(es8388);
//! codec.start(&AudioKitConfig::default_output())?;
//! codec.set_volume(60)?;
//! codec.stop();
//! ```

use log::{debug, warn};

use crate::control::AudioControl;
use crate::error::CodecError;
use crate::hal::{CodecHal, CtrlCmd};
use crate::settings::{AudioKitConfig, CodecMode};

/// Live codec session: the vendor handle has been initialized.
#[derive(Debug, Clone, Copy)]
struct CodecSession {
    mode: CodecMode,
}

/// Owns a vendor codec driver for the lifetime of a session.
pub struct CodecController<C> {
    hal: C,
    session: Option<CodecSession>,
}

impl<C: CodecHal> CodecController<C> {
    /// Wrap a vendor driver. No vendor call is made until [`start()`](Self::start).
    pub fn new(hal: C) -> Self {
        Self { hal, session: None }
    }

    /// Run the init → interface → start sequence.
    pub fn start(&mut self, cfg: &AudioKitConfig) -> Result<(), CodecError> {
        if self.session.is_some() {
            return Err(CodecError::AlreadyStarted);
        }

        debug!("codec init: {:?}", cfg.codec_config());
        self.hal.init(&cfg.codec_config()).map_err(|e| {
            warn!("codec init failed: {:?}", e);
            CodecError::Init
        })?;
        self.session = Some(CodecSession { mode: cfg.codec_mode });

        let iface = cfg.codec_iface();
        debug!("codec iface: {:?}", iface);
        self.hal.iface_config(cfg.codec_mode, &iface).map_err(|e| {
            warn!("codec interface configuration failed: {:?}", e);
            CodecError::InterfaceConfig
        })?;

        self.control(cfg.codec_mode, CtrlCmd::Start)
    }

    /// Stop and release the codec. Vendor failures are logged and ignored;
    /// without an open session this is a no-op.
    pub fn stop(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        if let Err(e) = self.hal.ctrl(session.mode, CtrlCmd::Stop) {
            warn!("codec stop failed during teardown: {:?}", e);
        }
        if let Err(e) = self.hal.deinit() {
            warn!("codec deinit failed during teardown: {:?}", e);
        }
        debug!("codec released");
    }

    /// `true` once vendor init has succeeded and until [`stop()`](Self::stop).
    pub fn is_initialized(&self) -> bool {
        self.session.is_some()
    }

    /// Consume the controller and return the vendor driver.
    pub fn release(self) -> C {
        self.hal
    }

    #[cfg(test)]
    pub(crate) fn driver(&self) -> &C {
        &self.hal
    }

    fn mode(&self) -> Result<CodecMode, CodecError> {
        self.session.map(|s| s.mode).ok_or(CodecError::NotStarted)
    }

    fn control(&mut self, mode: CodecMode, cmd: CtrlCmd) -> Result<(), CodecError> {
        self.hal.ctrl(mode, cmd).map_err(|e| {
            warn!("codec {} failed: {:?}", cmd, e);
            CodecError::Control(cmd)
        })
    }
}

impl<C: CodecHal> AudioControl for CodecController<C> {
    type Error = CodecError;

    fn set_active(&mut self, active: bool) -> Result<(), Self::Error> {
        let mode = self.mode()?;
        self.control(mode, CtrlCmd::from_active(active))
    }

    fn set_mute(&mut self, mute: bool) -> Result<(), Self::Error> {
        self.mode()?;
        self.hal.set_mute(mute).map_err(|e| {
            warn!("codec mute failed: {:?}", e);
            CodecError::Mute
        })
    }

    fn set_volume(&mut self, percent: i32) -> Result<(), Self::Error> {
        if percent <= 0 {
            return Err(CodecError::InvalidArgument(percent));
        }
        self.mode()?;
        self.hal.set_volume(percent).map_err(|e| {
            warn!("codec set volume failed: {:?}", e);
            CodecError::Volume
        })
    }

    fn volume(&mut self) -> i32 {
        if self.session.is_none() {
            return -1;
        }
        self.hal.get_volume().unwrap_or_else(|e| {
            warn!("codec get volume failed: {:?}", e);
            -1
        })
    }
}
