pub mod census;
pub mod model;
pub mod source;
pub mod traits;

// Re-export common types for convenience
pub use model::*;
pub use source::*;
pub use traits::*;
