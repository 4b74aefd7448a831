//! Core driver components for the SPI transmit engine.
//!
//! - [`config`] - Timing configuration and builder
//! - [`error`] - Error types and result aliases
//! - [`state`] - Burst state machine and transfer session
//! - [`tx`] - The transmit engine
//!
//! # Example
//!
//! ```ignore
//! use ph_spi_dma_tx::driver::{SpiTx, SpiTxConfig, TxError};
//!
//! TX.init(&SpiTxConfig::new())?;
//! match TX.write(&frames) {
//!     Ok(()) => {}
//!     Err(TxError::BufferFull) => { /* retry later */ }
//!     Err(e) => return Err(e.into()),
//! }
//! ```

// Submodules
pub mod config;
pub mod error;
pub mod state;
pub mod tx;

// Re-exports for convenience
pub use config::{BaudDivider, SpiTxConfig};
pub use error::{ConfigError, ConfigResult, Error, Result, TxError, TxResult};
pub use state::{TransferSession, TxState};
pub use tx::SpiTx;
