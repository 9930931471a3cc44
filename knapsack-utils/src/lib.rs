mod input;
pub use input::*;
mod json;
pub use json::*;
mod report;
pub use report::*;
