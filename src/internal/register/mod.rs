//! Memory-mapped register definitions for the STM32H5 SPI and GPDMA blocks
//!
//! Register blocks are addressed by instance (`base` + offset) since the
//! engine can drive any SPI/GPDMA-channel pair. All access is volatile.

pub mod gpdma;
pub mod spi;

/// SPI5 register block base address (non-secure alias)
pub const SPI5_BASE: usize = 0x4001_5000;

/// GPDMA1 register block base address (non-secure alias)
pub const GPDMA1_BASE: usize = 0x4002_0000;

/// GPDMA2 register block base address (non-secure alias)
pub const GPDMA2_BASE: usize = 0x4002_1000;

/// Read a 32-bit register at the given address
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn read_reg(addr: usize) -> u32 {
    unsafe { core::ptr::read_volatile(addr as *const u32) }
}

/// Write a 32-bit value to a register at the given address
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn write_reg(addr: usize, value: u32) {
    unsafe { core::ptr::write_volatile(addr as *mut u32, value) }
}

/// Write a 16-bit value to a register at the given address
///
/// The SPI TXDR packs as many frames as the access width holds, so a single
/// 16-bit frame must be written with a half-word access.
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn write_reg16(addr: usize, value: u16) {
    unsafe { core::ptr::write_volatile(addr as *mut u16, value) }
}

/// Modify a register using a read-modify-write operation
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn modify_reg<F>(addr: usize, f: F)
where
    F: FnOnce(u32) -> u32,
{
    // SAFETY: caller guarantees address validity
    let value = unsafe { read_reg(addr) };
    unsafe { write_reg(addr, f(value)) }
}

/// Set bits in a register (read-modify-write)
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn set_bits(addr: usize, bits: u32) {
    // SAFETY: caller guarantees address validity
    unsafe { modify_reg(addr, |v| v | bits) }
}

/// Clear bits in a register (read-modify-write)
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn clear_bits(addr: usize, bits: u32) {
    // SAFETY: caller guarantees address validity
    unsafe { modify_reg(addr, |v| v & !bits) }
}

// =============================================================================
// Register Access Macros
// =============================================================================

/// Generate read/write accessor methods for a register of an instance block.
///
/// The surrounding type must have a `base: usize` field.
///
/// # Example
/// ```ignore
/// impl SpiRegs {
///     reg_rw!(cr2, set_cr2, CR2_OFFSET, "Control register 2");
/// }
/// ```
macro_rules! reg_rw {
    ($read_fn:ident, $write_fn:ident, $offset:expr, $doc:expr) => {
        #[doc = concat!("Read ", $doc)]
        #[inline(always)]
        pub fn $read_fn(&self) -> u32 {
            unsafe { $crate::internal::register::read_reg(self.base + $offset) }
        }

        #[doc = concat!("Write ", $doc)]
        #[inline(always)]
        pub fn $write_fn(&self, value: u32) {
            unsafe { $crate::internal::register::write_reg(self.base + $offset, value) }
        }
    };
}

/// Generate a read-only accessor method for a register.
macro_rules! reg_ro {
    ($read_fn:ident, $offset:expr, $doc:expr) => {
        #[doc = concat!("Read ", $doc)]
        #[inline(always)]
        pub fn $read_fn(&self) -> u32 {
            unsafe { $crate::internal::register::read_reg(self.base + $offset) }
        }
    };
}

/// Generate set/clear bit operation methods for a register.
///
/// # Example
/// ```ignore
/// impl SpiRegs {
///     reg_bit_ops!(enable, disable, CR1_OFFSET, CR1_SPE, "SPI", "Enable", "Disable");
/// }
/// ```
macro_rules! reg_bit_ops {
    ($set_fn:ident, $clear_fn:ident, $offset:expr, $bit:expr, $what:expr, $set_verb:expr, $clear_verb:expr) => {
        #[doc = concat!($set_verb, " ", $what)]
        #[inline(always)]
        pub fn $set_fn(&self) {
            unsafe { $crate::internal::register::set_bits(self.base + $offset, $bit) }
        }

        #[doc = concat!($clear_verb, " ", $what)]
        #[inline(always)]
        pub fn $clear_fn(&self) {
            unsafe { $crate::internal::register::clear_bits(self.base + $offset, $bit) }
        }
    };
}

/// Generate a bit check method (true when bit is set).
macro_rules! reg_bit_check {
    ($fn:ident, $offset:expr, $bit:expr, $doc:expr) => {
        #[doc = $doc]
        #[inline(always)]
        pub fn $fn(&self) -> bool {
            unsafe { ($crate::internal::register::read_reg(self.base + $offset) & $bit) != 0 }
        }
    };
}

// Export macros for use in submodules
pub(crate) use reg_bit_check;
pub(crate) use reg_bit_ops;
pub(crate) use reg_ro;
pub(crate) use reg_rw;
