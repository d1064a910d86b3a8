pub mod elements;
pub mod registry;
