//! Classpath scanning and aggregate module descriptor generation.

pub mod classpath;
pub mod discovery;
pub mod error;
pub mod generator;
pub mod logging;
pub mod render;

pub use classpath::Classpath;
pub use discovery::{ModuleSearcher, SearchReport, discover};
pub use error::{GeneratorError, Result};
pub use generator::DescriptorGenerator;
pub use render::render_descriptor;
