mod snapshot;
mod source;

pub use snapshot::LayoutSnapshot;
pub use source::{load_config, load_records};
