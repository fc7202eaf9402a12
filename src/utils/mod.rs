mod filename;

pub use filename::timestamped_filename;
