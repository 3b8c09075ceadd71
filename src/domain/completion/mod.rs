//! Completion domain module

mod capacity;
mod completion_request;

pub use capacity::{
    CapacityTier, CapacityTiers, DEFAULT_EXPANDED_MODEL, DEFAULT_EXPANDED_THRESHOLD,
    DEFAULT_MODEL,
};
pub use completion_request::{CompletionRequest, OutputSchema};
