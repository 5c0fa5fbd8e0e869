pub mod capacity;

pub use capacity::{calculate_affordability, AffordabilityInput, AffordabilityResult};
