pub mod collection;
pub mod fragment;
pub mod interval;
pub mod metadata;

// re-export for cleaner imports
pub use self::collection::IntervalCollection;
pub use self::fragment::Fragment;
pub use self::interval::Interval;
pub use self::metadata::{END_COLUMN, MetadataTable, START_COLUMN};
