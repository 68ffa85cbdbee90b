mod coordinate_error;
pub mod coordinate_ops;
mod position;

pub use coordinate_error::CoordinateError;
pub use position::Position;
