use crate::error::PlanError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatingPlanConfig {
    pub min: f32,
    pub max: f32,
}

impl Default for HeatingPlanConfig {
    fn default() -> Self {
        Self {
            min: 10.0,
            max: 20.0,
        }
    }
}

impl HeatingPlanConfig {
    pub fn validate(&self) -> Result<(), PlanError> {
        if !self.min.is_finite() {
            return Err(PlanError::NonFiniteBound {
                name: "min",
                value: self.min,
            });
        }
        if !self.max.is_finite() {
            return Err(PlanError::NonFiniteBound {
                name: "max",
                value: self.max,
            });
        }
        if self.min > self.max {
            return Err(PlanError::InvertedRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}
