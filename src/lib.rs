//! Register-level model of the XOR test peripheral: two 32-bit registers
//! behind a memory-mapped window and a single interrupt output.
pub mod soc;
