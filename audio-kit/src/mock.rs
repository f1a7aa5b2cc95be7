//! Mock vendor drivers for host tests.
//!
//! Each mock keeps a fixed-size call log in chronological order and can be
//! told to fail one kind of call.

use crate::hal::{
    CodecConfig, CodecHal, CtrlCmd, Gpio, I2sConfig, I2sHal, I2sIface, I2sPinConfig, I2sPort, Ticks,
};
use crate::settings::CodecMode;

const LOG_LEN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

// ── Codec ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecCall {
    Init(CodecConfig),
    IfaceConfig(CodecMode, I2sIface),
    Ctrl(CodecMode, CtrlCmd),
    Deinit,
    SetMute(bool),
    SetVolume(i32),
    GetVolume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecOp {
    Init,
    IfaceConfig,
    Start,
    Stop,
    Deinit,
    Mute,
    Volume,
    GetVolume,
}

impl CodecCall {
    fn op(&self) -> CodecOp {
        match self {
            CodecCall::Init(_) => CodecOp::Init,
            CodecCall::IfaceConfig(..) => CodecOp::IfaceConfig,
            CodecCall::Ctrl(_, CtrlCmd::Start) => CodecOp::Start,
            CodecCall::Ctrl(_, CtrlCmd::Stop) => CodecOp::Stop,
            CodecCall::Deinit => CodecOp::Deinit,
            CodecCall::SetMute(_) => CodecOp::Mute,
            CodecCall::SetVolume(_) => CodecOp::Volume,
            CodecCall::GetVolume => CodecOp::GetVolume,
        }
    }
}

pub struct MockCodec {
    log: [Option<CodecCall>; LOG_LEN],
    pub log_count: usize,
    pub fail_on: Option<CodecOp>,
    pub initialized: bool,
    pub running: bool,
    pub muted: bool,
    pub volume: i32,
}

impl MockCodec {
    pub fn new() -> Self {
        Self {
            log: [None; LOG_LEN],
            log_count: 0,
            fail_on: None,
            initialized: false,
            running: false,
            muted: false,
            volume: 70,
        }
    }

    pub fn failing(op: CodecOp) -> Self {
        Self { fail_on: Some(op), ..Self::new() }
    }

    pub fn call_at(&self, idx: usize) -> CodecCall {
        self.log[idx].unwrap()
    }

    pub fn count(&self, op: CodecOp) -> usize {
        self.log[..self.log_count]
            .iter()
            .flatten()
            .filter(|call| call.op() == op)
            .count()
    }

    fn record(&mut self, call: CodecCall) -> Result<(), MockError> {
        if self.log_count < LOG_LEN {
            self.log[self.log_count] = Some(call);
            self.log_count += 1;
        }
        if self.fail_on == Some(call.op()) {
            Err(MockError)
        } else {
            Ok(())
        }
    }
}

impl CodecHal for MockCodec {
    type Error = MockError;

    fn init(&mut self, config: &CodecConfig) -> Result<(), Self::Error> {
        self.record(CodecCall::Init(*config))?;
        self.initialized = true;
        Ok(())
    }

    fn iface_config(&mut self, mode: CodecMode, iface: &I2sIface) -> Result<(), Self::Error> {
        self.record(CodecCall::IfaceConfig(mode, *iface))
    }

    fn ctrl(&mut self, mode: CodecMode, cmd: CtrlCmd) -> Result<(), Self::Error> {
        self.record(CodecCall::Ctrl(mode, cmd))?;
        self.running = cmd == CtrlCmd::Start;
        Ok(())
    }

    fn deinit(&mut self) -> Result<(), Self::Error> {
        self.record(CodecCall::Deinit)?;
        self.initialized = false;
        Ok(())
    }

    fn set_mute(&mut self, mute: bool) -> Result<(), Self::Error> {
        self.record(CodecCall::SetMute(mute))?;
        self.muted = mute;
        Ok(())
    }

    fn set_volume(&mut self, percent: i32) -> Result<(), Self::Error> {
        self.record(CodecCall::SetVolume(percent))?;
        self.volume = percent.min(100);
        Ok(())
    }

    fn get_volume(&mut self) -> Result<i32, Self::Error> {
        self.record(CodecCall::GetVolume)?;
        Ok(self.volume)
    }
}

// ── I2S ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum I2sCall {
    Install(I2sPort, I2sConfig, u32),
    SetPin(I2sPort, I2sPinConfig),
    MclkSelect(I2sPort, Gpio),
    Uninstall(I2sPort),
    Write(I2sPort, usize, Ticks),
    Read(I2sPort, usize, Ticks),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum I2sOp {
    Install,
    SetPin,
    MclkSelect,
    Uninstall,
    Write,
    Read,
}

impl I2sCall {
    fn op(&self) -> I2sOp {
        match self {
            I2sCall::Install(..) => I2sOp::Install,
            I2sCall::SetPin(..) => I2sOp::SetPin,
            I2sCall::MclkSelect(..) => I2sOp::MclkSelect,
            I2sCall::Uninstall(_) => I2sOp::Uninstall,
            I2sCall::Write(..) => I2sOp::Write,
            I2sCall::Read(..) => I2sOp::Read,
        }
    }
}

pub struct MockI2s {
    log: [Option<I2sCall>; LOG_LEN],
    pub log_count: usize,
    pub fail_on: Option<I2sOp>,
    pub installed: Option<I2sPort>,
    /// Bytes accepted per transfer before the wait budget "expires".
    pub accept_limit: Option<usize>,
    /// Byte pattern returned by `read`.
    pub fill: u8,
    pub bytes_written: usize,
}

impl MockI2s {
    pub fn new() -> Self {
        Self {
            log: [None; LOG_LEN],
            log_count: 0,
            fail_on: None,
            installed: None,
            accept_limit: None,
            fill: 0x5A,
            bytes_written: 0,
        }
    }

    pub fn failing(op: I2sOp) -> Self {
        Self { fail_on: Some(op), ..Self::new() }
    }

    pub fn call_at(&self, idx: usize) -> I2sCall {
        self.log[idx].unwrap()
    }

    pub fn count(&self, op: I2sOp) -> usize {
        self.log[..self.log_count]
            .iter()
            .flatten()
            .filter(|call| call.op() == op)
            .count()
    }

    fn record(&mut self, call: I2sCall) -> Result<(), MockError> {
        if self.log_count < LOG_LEN {
            self.log[self.log_count] = Some(call);
            self.log_count += 1;
        }
        if self.fail_on == Some(call.op()) {
            Err(MockError)
        } else {
            Ok(())
        }
    }

    fn accepted(&self, len: usize) -> usize {
        self.accept_limit.map_or(len, |limit| len.min(limit))
    }
}

impl I2sHal for MockI2s {
    type Error = MockError;

    fn install(&mut self, port: I2sPort, config: &I2sConfig, queue_depth: u32) -> Result<(), Self::Error> {
        self.record(I2sCall::Install(port, *config, queue_depth))?;
        self.installed = Some(port);
        Ok(())
    }

    fn set_pin(&mut self, port: I2sPort, pins: &I2sPinConfig) -> Result<(), Self::Error> {
        self.record(I2sCall::SetPin(port, *pins))
    }

    fn mclk_gpio_select(&mut self, port: I2sPort, gpio: Gpio) -> Result<(), Self::Error> {
        self.record(I2sCall::MclkSelect(port, gpio))
    }

    fn uninstall(&mut self, port: I2sPort) -> Result<(), Self::Error> {
        self.record(I2sCall::Uninstall(port))?;
        self.installed = None;
        Ok(())
    }

    fn write(&mut self, port: I2sPort, src: &[u8], wait: Ticks) -> Result<usize, Self::Error> {
        self.record(I2sCall::Write(port, src.len(), wait))?;
        let n = self.accepted(src.len());
        self.bytes_written += n;
        Ok(n)
    }

    fn read(&mut self, port: I2sPort, dest: &mut [u8], wait: Ticks) -> Result<usize, Self::Error> {
        self.record(I2sCall::Read(port, dest.len(), wait))?;
        let n = self.accepted(dest.len());
        dest[..n].fill(self.fill);
        Ok(n)
    }
}
