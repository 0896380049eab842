use std::str::FromStr;

use anyhow::Context;
use tracing::{debug, info, warn};

use thermostat_common::{
    handle_thermostat_reading, state_payload, HeatingPlan, HeatingPlanConfig, ThermostatState,
};

const ENV_MIN: &str = "THERMOSTAT_MIN";
const ENV_MAX: &str = "THERMOSTAT_MAX";
const ENV_CURRENT: &str = "THERMOSTAT_CURRENT";
const ENV_SELECTED: &str = "THERMOSTAT_SELECTED";

pub fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let env = |key: &str| std::env::var(key).ok();

    let plan = load_plan(env)?;
    let mut state = load_state(env)?;
    debug!(
        min = plan.min(),
        max = plan.max(),
        current = state.current_temperature,
        selected = state.selected_temperature,
        "controller readings loaded"
    );

    let mode = handle_thermostat_reading(&plan, &mut state);
    let payload = state_payload(&plan, &state);
    info!(
        target_temperature = payload.target_temperature,
        current_temperature = payload.current_temperature,
        "thermostat mode set to {}",
        mode.as_str()
    );

    let line = serde_json::to_string(&payload).context("failed to encode thermostat state")?;
    println!("{line}");

    Ok(())
}

fn load_plan<F>(env: F) -> anyhow::Result<HeatingPlan>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = HeatingPlanConfig::default();

    if let Some(min) = parse_var(&env, ENV_MIN)? {
        config.min = min;
    }
    if let Some(max) = parse_var(&env, ENV_MAX)? {
        config.max = max;
    }
    if env(ENV_MIN).is_none() && env(ENV_MAX).is_none() {
        warn!(
            "no heating plan bounds configured, using defaults {}..={}",
            config.min, config.max
        );
    }

    HeatingPlan::from_config(config).context("invalid heating plan bounds")
}

fn load_state<F>(env: F) -> anyhow::Result<ThermostatState>
where
    F: Fn(&str) -> Option<String>,
{
    let current =
        parse_var(&env, ENV_CURRENT)?.with_context(|| format!("{ENV_CURRENT} must be set"))?;
    let selected =
        parse_var(&env, ENV_SELECTED)?.with_context(|| format!("{ENV_SELECTED} must be set"))?;

    Ok(ThermostatState::new(current, selected))
}

fn parse_var<F, T>(env: &F, key: &str) -> anyhow::Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(raw) = env(key) else {
        return Ok(None);
    };

    raw.trim()
        .parse::<T>()
        .map(Some)
        .with_context(|| format!("failed to parse {key}={raw:?}"))
}
