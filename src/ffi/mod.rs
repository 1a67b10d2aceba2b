//! Holds all the FFI related code when the respective features are in place.
//!
//! Each binding wraps the Rust API in the shapes its host can read: plain `#[repr(C)]` values and
//! status codes for C, a `jdatetime` extension module for Python and exported classes for
//! JavaScript. Only the calendar core is exposed; datetimes and timezones stay Rust-only.
//!
//! | Feature | Module | Host |
//! |---------|--------|------|
//! | `c` | `c` | C ABI, `jdt_*` functions |
//! | `py` | `py` | CPython through `pyo3` |
//! | `wasm` | `wasm` | JavaScript through `wasm-bindgen` |

#[cfg(feature = "c")]
pub mod c;

#[cfg(feature = "py")]
pub mod py;

#[cfg(feature = "wasm")]
pub mod wasm;
