//! Conversion core: row extraction, duplicate detection, map projection

pub mod clock;
pub mod duplicates;
pub mod extractor;
pub mod projector;
pub mod validator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use duplicates::{find_duplicate_keys, find_unique_items, has_duplicates};
pub use extractor::extract_entries;
pub use projector::{to_map, to_rows};
pub use validator::{validate_file, validate_json_keys, validate_unique_keys, ValidationReport};
