pub mod error;
pub mod filters;
pub mod io;
pub mod models;
pub mod turns;

pub use error::ConvertError;
pub use filters::{redact, strip_fillers};
pub use io::{JsonLog, LogMetadata, TextLog, parse_export_file, parse_export_html};
pub use models::{
    CaptionItem, DEFAULT_FILLER_WORDS, FilterConfig, FragmentKind, REDACTED_MARKER, Turn,
};
pub use turns::build_turns;
