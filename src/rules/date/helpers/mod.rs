pub mod century;
pub mod months;
pub mod parse;
pub mod serial;

// Re-export commonly used functions
pub use century::*;
pub use parse::*;
pub use serial::*;
