// Utils with the `fast!` macro must come first for macro export
#[macro_use]
pub mod utils;
pub mod error;
pub mod grid;
pub mod random;
