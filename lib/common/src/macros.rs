//! Macros for implementing std::ops traits on small value types.

mod meta;
mod ops;
