//! DRV832x gate driver command frames
//!
//! Every frame is 16 bits, MSB first:
//!
//! ```text
//!  15   14..11   10..0
//! R/W   address  data
//! ```
//!
//! R/W is 0 for a write and 1 for a read. A read carries no data; the
//! device answers in the following frame with five don't-care bits and the
//! 11-bit register value. Decoding that answer is left to the caller.

use crate::internal::constants::{DATA_BITS, DATA_MASK};

/// Read/write flag (bit 15)
const READ_FLAG: u16 = 1 << 15;

/// Address field width
const ADDRESS_MASK: u16 = 0x0F;

/// DRV832x register map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Fault Status 1 (read only)
    FaultStatus1 = 0x00,
    /// VGS Status 2 (read only)
    VgsStatus2 = 0x01,
    /// Driver Control
    DriverControl = 0x02,
    /// Gate Drive HS
    GateDriveHs = 0x03,
    /// Gate Drive LS
    GateDriveLs = 0x04,
    /// OCP Control
    OcpControl = 0x05,
    /// CSA Control (DRV8323 only)
    CsaControl = 0x06,
}

impl Register {
    /// 4-bit register address
    #[must_use]
    pub const fn address(self) -> u8 {
        self as u8
    }

    /// Whether the register accepts writes
    #[must_use]
    pub const fn is_writable(self) -> bool {
        !matches!(self, Register::FaultStatus1 | Register::VgsStatus2)
    }
}

/// One outbound command frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command(u16);

impl Command {
    /// Write `data` to `reg`. Bits above the 11-bit data field are dropped.
    #[must_use]
    pub const fn write(reg: Register, data: u16) -> Self {
        Self(Self::address_bits(reg) | (data & DATA_MASK))
    }

    /// Read `reg`; the value arrives in the next frame
    #[must_use]
    pub const fn read(reg: Register) -> Self {
        Self(READ_FLAG | Self::address_bits(reg))
    }

    /// The 16-bit word to queue
    #[must_use]
    pub const fn to_word(self) -> u16 {
        self.0
    }

    /// Whether this is a read command
    #[must_use]
    pub const fn is_read(self) -> bool {
        self.0 & READ_FLAG != 0
    }

    /// Addressed register field
    #[must_use]
    pub const fn address(self) -> u8 {
        ((self.0 >> DATA_BITS) & ADDRESS_MASK) as u8
    }

    /// 11-bit data field
    #[must_use]
    pub const fn data(self) -> u16 {
        self.0 & DATA_MASK
    }

    const fn address_bits(reg: Register) -> u16 {
        ((reg.address() as u16) & ADDRESS_MASK) << DATA_BITS
    }
}

impl From<Command> for u16 {
    fn from(cmd: Command) -> Self {
        cmd.to_word()
    }
}
