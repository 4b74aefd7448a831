//! Slave Device Support
//!
//! Frame encoders for the devices this engine talks to. The engine itself
//! moves opaque 16-bit words; these helpers build those words.
//!
//! # Supported Devices
//!
//! - [`drv832x`]: TI DRV8320/DRV8323 family of three-phase gate drivers
//!
//! # Example
//!
//! ```ignore
//! use ph_spi_dma_tx::device::drv832x::{Command, Register};
//!
//! let frames = [
//!     Command::write(Register::DriverControl, 0x000).to_word(),
//!     Command::write(Register::CsaControl, 0x283).to_word(),
//! ];
//! TX.write(&frames)?;
//! ```

pub mod drv832x;

pub use drv832x::{Command, Register};
