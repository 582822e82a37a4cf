mod point;
mod report;
mod track;

pub use self::point::*;
pub use self::report::*;
pub use self::track::*;
