mod types;
mod window;

pub use types::{CropRequest, CropResponse, CropWindow, Selection};
pub use window::{select, select_request};
