//! Holds all the FFI related code when the respective configurations are in place.
//!
//! Each submodule is a thin call boundary over [`crate::jalali_to_gregorian`] and
//! [`crate::gregorian_to_jalali`] for one host: `c` for anything that links a C ABI, `py` for
//! Python and `wasm` for JS/TS. They hold no logic of their own besides converting the host's
//! timestamp and error conventions.
//!
//! Hosts that call these row by row (a database scalar function for example) may do so from any
//! number of threads; there is no shared state.

#[cfg(feature = "c")]
pub mod c;

#[cfg(feature = "py")]
pub mod py;

#[cfg(feature = "wasm")]
pub mod wasm;
