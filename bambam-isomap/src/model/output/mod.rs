mod output_error;
mod overlay_format;

pub use output_error::OutputError;
pub use overlay_format::OverlayFormat;
