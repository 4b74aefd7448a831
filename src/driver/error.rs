//! Error types for the SPI transmit engine
//!
//! Errors are organized by domain:
//! - [`ConfigError`]: Initialization and timing configuration failures
//! - [`TxError`]: Runtime transmit results
//!
//! The unified [`Error`] enum wraps both domain errors.
//!
//! Frame errors (a word clocked with the wrong number of bits) happen on the
//! slave side and are not observable from here, so there is no variant for
//! them. The slave simply ignores the malformed word.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and initialization errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Engine already initialized
    AlreadyInitialized,
    /// Invalid configuration parameter
    InvalidConfig,
    /// Idle cycle count does not fit the 4-bit hardware field
    InvalidIdleCycles,
    /// Inter-frame deselect time is below the slave's minimum
    DeselectTooShort,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::AlreadyInitialized => "already initialized",
            ConfigError::InvalidConfig => "invalid configuration",
            ConfigError::InvalidIdleCycles => "idle cycle count out of range",
            ConfigError::DeselectTooShort => "deselect time below 400 ns",
        }
    }
}

// =============================================================================
// Transmit Errors
// =============================================================================

/// Runtime transmit errors
///
/// None of these are fatal. Every one of them means "try again later".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TxError {
    /// Not enough free slots in the ring; the write was dropped untouched
    BufferFull,
    /// A burst is already in flight; the data is picked up on completion
    HardwareBusy,
    /// `init` has not been called yet
    NotInitialized,
    /// Bounded wait expired before the peripheral finished
    Timeout,
}

impl core::fmt::Display for TxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TxError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            TxError::BufferFull => "transmit buffer full",
            TxError::HardwareBusy => "transfer in flight",
            TxError::NotInitialized => "not initialized",
            TxError::Timeout => "operation timed out",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// Wraps all domain-specific errors for unified error handling.
///
/// ```ignore
/// match result {
///     Err(Error::Config(ConfigError::DeselectTooShort)) => { /* ... */ }
///     Err(Error::Tx(TxError::BufferFull)) => { /* retry later */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// Transmit error
    Tx(TxError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Tx(e) => write!(f, "tx: {}", e.as_str()),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<TxError> for Error {
    fn from(e: TxError) -> Self {
        Error::Tx(e)
    }
}

/// Result type alias for engine operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for transmit operations
pub type TxResult<T> = core::result::Result<T, TxError>;

// =============================================================================
// Unit Tests
// =============================================================================
