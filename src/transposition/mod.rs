pub mod degree_snap;
pub mod pitch_tables;

pub use degree_snap::{snap_to_degree, transpose_step};
pub use pitch_tables::PitchTables;
