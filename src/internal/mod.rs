//! Internal Implementation Details
//!
//! This module contains implementation details that are not part of the public API.
//! Types in this module may change without notice between minor versions.
//!
//! # Contents
//!
//! - [`constants`]: Framing, timing and sizing constants
//! - [`ring`]: Lock-free single-producer/single-consumer word ring
//! - [`register`]: Raw memory-mapped SPI and GPDMA register definitions
//!
//! # Stability
//!
//! **WARNING:** This module is `pub(crate)` only. Do not depend on any types
//! or functions in this module from external code.

pub(crate) mod constants;
#[cfg(feature = "stm32h5")]
pub(crate) mod register;
pub(crate) mod ring;
