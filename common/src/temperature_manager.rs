use crate::{
    heating_plan::HeatingPlan,
    types::{ThermostatMode, ThermostatState, ThermostatStatePayload},
};

pub fn decide_mode(target_temperature: f32, current_temperature: f32) -> ThermostatMode {
    if target_temperature > current_temperature {
        ThermostatMode::Heat
    } else if target_temperature < current_temperature {
        ThermostatMode::Cool
    } else {
        ThermostatMode::Off
    }
}

pub fn handle_thermostat_reading(
    plan: &HeatingPlan,
    state: &mut ThermostatState,
) -> ThermostatMode {
    let target = plan.target_temperature(state.selected_temperature);

    match decide_mode(target, state.current_temperature) {
        ThermostatMode::Heat => state.set_to_heat(),
        ThermostatMode::Cool => state.set_to_cool(),
        ThermostatMode::Off => state.set_off(),
    }

    state.mode
}

pub fn state_payload(plan: &HeatingPlan, state: &ThermostatState) -> ThermostatStatePayload {
    ThermostatStatePayload {
        current_temperature: state.current_temperature,
        selected_temperature: state.selected_temperature,
        target_temperature: plan.target_temperature(state.selected_temperature),
        mode: state.mode,
    }
}
