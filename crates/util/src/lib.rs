//! avl-index-util - seeded random input for stress tests and the console's
//! `fill` command.

pub mod fuzzer;

pub use fuzzer::{Fuzzer, Op};
