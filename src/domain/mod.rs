pub mod input_source;
pub mod loaded_image;
pub mod resample_filter;
pub mod resize_config;
pub mod target_size;

// --- public re-exports ---
pub use input_source::directory_path::DirectoryPath;
pub use input_source::image_file_path::ImageFilePath;
pub use input_source::input_source::InputSource;
pub use loaded_image::LoadedImage;
pub use resample_filter::ResampleFilter;
pub use resize_config::{ErrorPolicy, ResizeConfig};
pub use target_size::TargetSize;
