/// Number of DMA buffers allocated when the I2S peripheral is installed.
pub const DMA_BUF_COUNT: u32 = 8;

/// Length of each DMA buffer, in frames.
pub const DMA_BUF_LEN: u32 = 64;

/// Clock the I2S peripheral from the audio PLL rather than the main PLL.
pub const USE_APLL: bool = true;

/// Event queue depth requested at install time (no event queue).
pub const I2S_EVENT_QUEUE_DEPTH: u32 = 0;

/// Number of I2S controllers on the ESP32.
pub const I2S_PORT_COUNT: usize = 2;
