pub mod config;
pub mod error;
pub mod heating_plan;
pub mod temperature_manager;
pub mod types;

pub use config::HeatingPlanConfig;
pub use error::PlanError;
pub use heating_plan::HeatingPlan;
pub use temperature_manager::{decide_mode, handle_thermostat_reading, state_payload};
pub use types::{ThermostatMode, ThermostatState, ThermostatStatePayload};
