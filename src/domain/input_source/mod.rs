pub mod directory_path;
pub mod image_file_path;
#[allow(clippy::module_inception)]
pub mod input_source;
pub mod path_error;
