use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThermostatMode {
    Heat,
    Cool,
    #[default]
    Off,
}

impl ThermostatMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Heat => "heat",
            Self::Cool => "cool",
            Self::Off => "off",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermostatState {
    pub current_temperature: f32,
    pub selected_temperature: f32,
    pub mode: ThermostatMode,
}

impl ThermostatState {
    pub fn new(current_temperature: f32, selected_temperature: f32) -> Self {
        Self {
            current_temperature,
            selected_temperature,
            mode: ThermostatMode::Off,
        }
    }

    pub fn set_to_heat(&mut self) {
        self.mode = ThermostatMode::Heat;
    }

    pub fn set_to_cool(&mut self) {
        self.mode = ThermostatMode::Cool;
    }

    pub fn set_off(&mut self) {
        self.mode = ThermostatMode::Off;
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ThermostatStatePayload {
    #[serde(rename = "currentTemperature")]
    pub current_temperature: f32,
    #[serde(rename = "selectedTemperature")]
    pub selected_temperature: f32,
    #[serde(rename = "targetTemperature")]
    pub target_temperature: f32,
    pub mode: ThermostatMode,
}
