use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PlanError {
    #[error("heating plan minimum {min} is above its maximum {max}")]
    InvertedRange { min: f32, max: f32 },
    #[error("heating plan {name} must be finite, got {value}")]
    NonFiniteBound { name: &'static str, value: f32 },
}
