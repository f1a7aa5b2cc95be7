/// Runtime controls of a running codec session.
pub trait AudioControl {
    /// Error type for control operations.
    type Error;

    /// Start (`true`) or stop (`false`) the configured signal paths.
    fn set_active(&mut self, active: bool) -> Result<(), Self::Error>;

    /// Mute or unmute the output.
    fn set_mute(&mut self, mute: bool) -> Result<(), Self::Error>;

    /// Set the output volume in percent. Non-positive values are rejected.
    fn set_volume(&mut self, percent: i32) -> Result<(), Self::Error>;

    /// Current output volume in percent, or -1 if it cannot be read.
    fn volume(&mut self) -> i32;
}
