pub mod subdivision;

pub use subdivision::{divide, merge, merge_or_divide};
