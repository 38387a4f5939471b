pub mod gps;
pub mod report;
pub mod tags;

pub use gps::*;
pub use report::*;
pub use tags::*;
