pub mod fillers;
pub mod redact;

pub use fillers::*;
pub use redact::*;
