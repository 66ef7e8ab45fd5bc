//! Domain types for a single outline generation.
//!
//! - **Catalog**: the fixed section and model enumerations offered by the form
//! - **Request**: validated input, generation parameters, and the generated result

mod catalog;
mod request;

pub use catalog::{ModelId, Section};
pub use request::{
    DEFAULT_TEMPERATURE, GeneratedOutline, GenerationParameters, MAX_TEMPERATURE, MIN_TEMPERATURE,
    OutlineForm, OutlineRequest, TEMPERATURE_STEP, validate_temperature,
};
