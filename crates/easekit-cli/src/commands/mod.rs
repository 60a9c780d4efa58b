pub mod animate;
pub mod fade;
pub mod list;
pub mod plot;
pub mod sample;

use anyhow::Result;

use easekit_core::config::AnimationConfigExt;
use easekit_core::{AnimationRun, AppConfig, Easing, EasingRegistry, Player, Value};

/// Look up `key` and attach the configured diagnostics sink
pub fn resolve_easing(registry: &EasingRegistry, config: &AppConfig, key: &str) -> Result<Easing> {
    let easing = registry.resolve(key)?;
    if config.diagnostics.is_enabled() {
        Ok(easing.traced(config.diagnostics.sink()))
    } else {
        Ok(easing)
    }
}

/// Build a run and a player from command arguments, falling back to config
pub fn prepare_run(
    registry: &EasingRegistry,
    config: &AppConfig,
    from: Value,
    to: Value,
    duration_ms: Option<u64>,
    easing: Option<&str>,
) -> Result<(AnimationRun, Player)> {
    config.animation.validate(registry)?;

    let key = easing.unwrap_or(&config.animation.default_easing);
    let easing = resolve_easing(registry, config, key)?;
    let duration_ms = duration_ms.unwrap_or(config.animation.duration_ms);
    let run = AnimationRun::new(from, to, duration_ms as f64, easing)?;

    Ok((run, Player::from_config(&config.animation)))
}
