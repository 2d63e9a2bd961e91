#[macro_use]
mod macros;

pub mod cups;
pub mod mass;
