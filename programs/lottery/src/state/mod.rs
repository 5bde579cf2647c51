pub use lottery::*;
pub use registry::*;

pub mod lottery;
pub mod registry;
