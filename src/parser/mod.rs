pub mod gps;
pub mod reader;
pub mod tag_names;

pub use gps::*;
pub use reader::*;
pub use tag_names::*;
