pub mod file_format;
pub mod parallel;

pub use file_format::{FileFormat, FileFormatError, load_file};
pub use parallel::{DEFAULT_CHUNKS_PER_THREAD, chunk_units, par_units_mut};
