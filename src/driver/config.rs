//! Configuration types for the SPI transmit engine
//!
//! Frame width, bit order and clock mode are fixed by the slave device and
//! are not configurable: 16-bit frames, MSB first, SCK idle low, data
//! captured on the falling (second) edge. What remains is timing: the SCK
//! divider and the idle gaps the hardware inserts around each frame.

use crate::driver::error::{ConfigError, ConfigResult};
use crate::internal::constants::{
    DEFAULT_KERNEL_CLOCK_HZ, DEFAULT_MID_FRAME_IDLE, DEFAULT_SS_SETUP_IDLE, MAX_IDLE_CYCLES,
    MIN_DESELECT_NS, MIN_PULSED_MID_FRAME_IDLE,
};

/// Master baud rate divider (SCK = kernel clock / divider)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BaudDivider {
    /// Kernel clock / 2
    Div2 = 0,
    /// Kernel clock / 4
    Div4 = 1,
    /// Kernel clock / 8
    Div8 = 2,
    /// Kernel clock / 16
    Div16 = 3,
    /// Kernel clock / 32
    #[default]
    Div32 = 4,
    /// Kernel clock / 64
    Div64 = 5,
    /// Kernel clock / 128
    Div128 = 6,
    /// Kernel clock / 256
    Div256 = 7,
}

impl BaudDivider {
    /// Division factor
    #[must_use]
    pub const fn divisor(self) -> u32 {
        2 << (self as u32)
    }

    /// Value for the MBR register field
    #[must_use]
    pub const fn to_reg_value(self) -> u32 {
        self as u32
    }

    /// Smallest divider that keeps SCK at or below `max_sck_hz`
    #[must_use]
    pub const fn for_max_sck(kernel_clock_hz: u32, max_sck_hz: u32) -> Self {
        const ALL: [BaudDivider; 8] = [
            BaudDivider::Div2,
            BaudDivider::Div4,
            BaudDivider::Div8,
            BaudDivider::Div16,
            BaudDivider::Div32,
            BaudDivider::Div64,
            BaudDivider::Div128,
            BaudDivider::Div256,
        ];
        let mut i = 0;
        while i < ALL.len() {
            if kernel_clock_hz / ALL[i].divisor() <= max_sck_hz {
                return ALL[i];
            }
            i += 1;
        }
        BaudDivider::Div256
    }
}

/// Transmit engine configuration
///
/// # Example
///
/// ```ignore
/// let config = SpiTxConfig::new()
///     .with_kernel_clock_hz(250_000_000)
///     .with_baud_divider(BaudDivider::Div32)
///     .with_mid_frame_idle(15);
/// config.validate()?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiTxConfig {
    /// SPI kernel clock frequency, used to check deselect timing
    pub kernel_clock_hz: u32,
    /// SCK divider
    pub baud_divider: BaudDivider,
    /// Idle SCK cycles between frames (MIDI); SS is pulsed high during this gap
    pub mid_frame_idle: u8,
    /// Idle SCK cycles between SS assertion and the first clock edge (MSSI)
    pub ss_setup_idle: u8,
}

impl Default for SpiTxConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SpiTxConfig {
    /// Configuration that satisfies the DRV832x timing at the default kernel clock
    #[must_use]
    pub const fn new() -> Self {
        Self {
            kernel_clock_hz: DEFAULT_KERNEL_CLOCK_HZ,
            baud_divider: BaudDivider::Div32,
            mid_frame_idle: DEFAULT_MID_FRAME_IDLE,
            ss_setup_idle: DEFAULT_SS_SETUP_IDLE,
        }
    }

    /// Set the SPI kernel clock frequency
    #[must_use]
    pub const fn with_kernel_clock_hz(mut self, hz: u32) -> Self {
        self.kernel_clock_hz = hz;
        self
    }

    /// Set the SCK divider
    #[must_use]
    pub const fn with_baud_divider(mut self, divider: BaudDivider) -> Self {
        self.baud_divider = divider;
        self
    }

    /// Set the inter-frame idle cycles
    #[must_use]
    pub const fn with_mid_frame_idle(mut self, cycles: u8) -> Self {
        self.mid_frame_idle = cycles;
        self
    }

    /// Set the SS-to-first-edge idle cycles
    #[must_use]
    pub const fn with_ss_setup_idle(mut self, cycles: u8) -> Self {
        self.ss_setup_idle = cycles;
        self
    }

    /// Resulting SCK frequency in Hz
    #[must_use]
    pub const fn sck_hz(&self) -> u32 {
        self.kernel_clock_hz / self.baud_divider.divisor()
    }

    /// Time SS stays deselected between consecutive frames, in nanoseconds
    #[must_use]
    pub const fn deselect_ns(&self) -> u32 {
        let sck = self.sck_hz();
        if sck == 0 {
            return 0;
        }
        let ns = (self.mid_frame_idle as u64 * 1_000_000_000) / sck as u64;
        if ns > u32::MAX as u64 {
            u32::MAX
        } else {
            ns as u32
        }
    }

    /// Check the configuration against the hardware fields and the slave's timing.
    pub const fn validate(&self) -> ConfigResult<()> {
        if self.kernel_clock_hz == 0 {
            return Err(ConfigError::InvalidConfig);
        }
        if self.mid_frame_idle > MAX_IDLE_CYCLES || self.ss_setup_idle > MAX_IDLE_CYCLES {
            return Err(ConfigError::InvalidIdleCycles);
        }
        // SS only toggles between frames when MIDI > 1
        if self.mid_frame_idle < MIN_PULSED_MID_FRAME_IDLE {
            return Err(ConfigError::InvalidConfig);
        }
        if self.deselect_ns() < MIN_DESELECT_NS {
            return Err(ConfigError::DeselectTooShort);
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
