pub mod filter;
pub mod generation;
pub mod module;
pub mod process;

pub use filter::*;
pub use generation::*;
pub use module::*;
pub use process::*;
