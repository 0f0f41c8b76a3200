//! Core value and error types for the stack machine.
//!
//! # Overview
//!
//! - [`Number`] - The machine's only data type
//! - [`VmError`] - Fatal machine faults with diagnostic context
//! - [`ErrorKind`] - Payload-free fault classification
//!
//! # Examples
//!
//! ```
//! use core_types::{ErrorKind, Number, VmError};
//!
//! let sum = Number::from(2) + Number::from(3);
//! assert_eq!(sum.to_string(), "5");
//!
//! let error = VmError::StackUnderflow { needed: 2, depth: 1 };
//! assert_eq!(error.kind(), ErrorKind::StackUnderflow);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod number;

pub use error::{ErrorKind, VmError, VmResult};
pub use number::Number;
