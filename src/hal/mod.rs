//! Hardware Abstraction Layer
//!
//! The transmit engine touches hardware only through two small traits, so the
//! ring, chunker and completion logic run unchanged against test doubles.
//!
//! # Modules
//!
//! - [`spi`]: [`SpiPeripheral`] and the register-backed [`Spi`]
//! - [`dma`]: [`DmaChannel`], [`DmaDescriptor`] and the register-backed [`GpdmaChannel`]
//!
//! # Delay Integration
//!
//! Bounded waits use `embedded_hal::delay::DelayNs` directly. Pass any delay
//! implementation from your HAL.

pub mod dma;
pub mod spi;

// Re-export commonly used types
pub use dma::{DmaChannel, DmaDescriptor};
pub use spi::SpiPeripheral;

#[cfg(feature = "stm32h5")]
pub use dma::GpdmaChannel;
#[cfg(feature = "stm32h5")]
pub use spi::Spi;
