pub mod color;
pub mod constants;
pub mod frame;
pub mod params;

pub use color::*;
pub use constants::*;
pub use frame::*;
pub use params::*;
