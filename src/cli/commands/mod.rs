pub mod greet;

pub use greet::*;
