use crate::{config::HeatingPlanConfig, error::PlanError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatingPlan {
    config: HeatingPlanConfig,
}

impl HeatingPlan {
    pub fn new(min: f32, max: f32) -> Result<Self, PlanError> {
        Self::from_config(HeatingPlanConfig { min, max })
    }

    pub fn from_config(config: HeatingPlanConfig) -> Result<Self, PlanError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &HeatingPlanConfig {
        &self.config
    }

    pub fn min(&self) -> f32 {
        self.config.min
    }

    pub fn max(&self) -> f32 {
        self.config.max
    }

    pub fn target_temperature(&self, selected_temperature: f32) -> f32 {
        if selected_temperature > self.config.max {
            self.config.max
        } else if selected_temperature < self.config.min {
            self.config.min
        } else {
            selected_temperature
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn plan() -> HeatingPlan {
        HeatingPlan::new(10.0, 20.0).unwrap()
    }

    #[test]
    fn selected_above_max_returns_max() {
        assert_eq!(plan().target_temperature(30.0), 20.0);
    }

    #[test]
    fn selected_below_min_returns_min() {
        assert_eq!(plan().target_temperature(5.0), 10.0);
    }

    #[test]
    fn selected_within_range_is_unchanged() {
        assert_eq!(plan().target_temperature(15.0), 15.0);
    }

    #[test]
    fn bounds_are_inclusive() {
        let plan = plan();
        assert_eq!(plan.target_temperature(10.0), 10.0);
        assert_eq!(plan.target_temperature(20.0), 20.0);
    }

    #[test]
    fn target_always_within_bounds_for_finite_input() {
        let plan = plan();
        let mut selected = -40.0_f32;
        while selected <= 60.0 {
            let target = plan.target_temperature(selected);
            assert!(
                plan.min() <= target && target <= plan.max(),
                "{selected} -> {target}"
            );
            if (plan.min()..=plan.max()).contains(&selected) {
                assert_eq!(target, selected);
            }
            selected += 0.25;
        }
    }

    #[test]
    fn infinities_clamp_to_bounds() {
        let plan = plan();
        assert_eq!(plan.target_temperature(f32::INFINITY), 20.0);
        assert_eq!(plan.target_temperature(f32::NEG_INFINITY), 10.0);
    }

    #[test]
    fn nan_selected_passes_through() {
        assert!(plan().target_temperature(f32::NAN).is_nan());
    }

    #[test]
    fn degenerate_range_pins_target() {
        let plan = HeatingPlan::new(15.0, 15.0).unwrap();
        assert_eq!(plan.target_temperature(5.0), 15.0);
        assert_eq!(plan.target_temperature(15.0), 15.0);
        assert_eq!(plan.target_temperature(25.0), 15.0);
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert_eq!(
            HeatingPlan::new(20.0, 10.0),
            Err(PlanError::InvertedRange {
                min: 20.0,
                max: 10.0
            })
        );
    }

    #[test]
    fn from_config_keeps_bounds() {
        let config = HeatingPlanConfig {
            min: 16.0,
            max: 23.5,
        };
        let plan = HeatingPlan::from_config(config).unwrap();
        assert_eq!(plan.config(), &config);
        assert_eq!(plan.min(), 16.0);
        assert_eq!(plan.max(), 23.5);
    }
}
