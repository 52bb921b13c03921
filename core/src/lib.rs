//! Pure IPv6 textual-address canonicalization.
//!
//! Everything in this crate is a deterministic text-in/text-out transform
//! with no I/O and no shared mutable state; every operation is safe to
//! call from any number of threads without synchronization.

pub mod addr;
pub mod error;

pub use addr::{compress, expand, to_binary, validate_and_expand};
pub use error::AddressError;
