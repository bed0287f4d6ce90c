pub mod display;
pub mod extremes;
pub mod logger;
pub mod moving_average;

pub use display::*;
pub use extremes::*;
pub use logger::*;
pub use moving_average::*;
