mod curve_file;
mod profile_csv;

pub use curve_file::parse_curve_points;
pub use profile_csv::{convert_to_csv, profile_to_csv};
