//! Application configuration

mod generation_params;

pub use generation_params::GenerationParams;
