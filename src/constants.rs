// Window
pub const WINDOW_TITLE: &str = "ICON CONVERTER";
pub const WINDOW_SIZE: [f32; 2] = [360.0, 160.0];

// Preview bitmap edge, in pixels
pub const PREVIEW_SIZE: u32 = 100;

// Square entries embedded in every generated .ico, ascending
pub const ICON_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

// Accepted source extensions, lowercase without the dot
pub const BASE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];
pub const WEBP_EXTENSION: &str = "webp";

pub const ICON_EXTENSION: &str = "ico";

// Surface texts
pub mod messages {
    pub const DROP_HERE: &str = "Drag & Drop files here";
    pub const NO_FILE: &str = "No file dropped";
    pub const MULTIPLE_FILES: &str = "Please drop only one file.";
    pub const UNSUPPORTED_TYPE: &str = "Invalid file type. Please drop an image.";
}
