mod error;
mod reader;
mod timestamps;
mod writer;

pub use error::FormatError;
pub use reader::{parse, read_file};
pub use writer::{export, export_to_path};
