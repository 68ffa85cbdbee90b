mod random_point_sampler;
mod sample_catalog;
mod sample_error;

pub use random_point_sampler::{RandomPointSampler, DEFAULT_MAX_ATTEMPTS};
pub use sample_catalog::{CatalogEntry, SampleCatalog, SampledListing};
pub use sample_error::SampleError;
