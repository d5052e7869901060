pub mod config;
pub mod field;
pub mod motion;
pub mod paint;

pub use config::*;
pub use field::*;
pub use motion::*;
pub use paint::*;
