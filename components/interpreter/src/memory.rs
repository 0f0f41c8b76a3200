//! Application memory
//!
//! Sparse, unbounded, zero-initialized storage addressed by any
//! non-negative number. It is separate from both ROM and the operand stack.

use core_types::{Number, VmError, VmResult};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Random-access application memory
///
/// Cells are keyed by the bit pattern of their address with `-0` folded
/// into `0` and every NaN folded into one. For non-negative doubles the bit
/// order is numeric order, so iteration runs in address order with NaN last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Memory {
    cells: BTreeMap<u64, Number>,
}

impl Memory {
    /// Create empty memory
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the value at `address`
    ///
    /// Cells never written read as zero. Negative addresses fail with
    /// [`VmError::IllegalAddress`]; fractional ones are ordinary cells.
    pub fn load(&self, address: Number) -> VmResult<Number> {
        let key = Self::key(address)?;
        Ok(self.cells.get(&key).copied().unwrap_or(Number::ZERO))
    }

    /// Write `value` at `address`
    pub fn store(&mut self, address: Number, value: Number) -> VmResult<()> {
        let key = Self::key(address)?;
        self.cells.insert(key, value);
        Ok(())
    }

    /// Read a cell without validation; illegal addresses read as zero
    pub fn read(&self, address: impl Into<Number>) -> Number {
        self.load(address.into()).unwrap_or(Number::ZERO)
    }

    /// Number of cells ever written
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Written cells in address order
    pub fn iter(&self) -> impl Iterator<Item = (Number, Number)> + '_ {
        self.cells
            .iter()
            .map(|(&key, &value)| (Number::new(f64::from_bits(key)), value))
    }

    fn key(address: Number) -> VmResult<u64> {
        let raw = address.value();
        if raw < 0.0 {
            return Err(VmError::IllegalAddress { address });
        }
        let canonical = if raw == 0.0 {
            0.0
        } else if raw.is_nan() {
            f64::NAN
        } else {
            raw
        };
        Ok(canonical.to_bits())
    }
}

/// Serializes as a map from the printed address to the cell value.
impl Serialize for Memory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(address, value)| (address.to_string(), value)))
    }
}
