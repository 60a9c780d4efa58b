use anyhow::Result;
use tracing::info;

use easekit_core::{AppConfig, EasingRegistry, Rgb, RunState};

use super::animate::{drain, format_event};

pub async fn run(
    registry: &EasingRegistry,
    config: &AppConfig,
    from: Rgb,
    to: Rgb,
    duration_ms: Option<u64>,
    easing: Option<&str>,
) -> Result<()> {
    let (run, player) =
        super::prepare_run(registry, config, from.into(), to.into(), duration_ms, easing)?;
    info!("Fading {} -> {} over {}ms", from, to, run.duration_ms());

    let state = drain(player.play(run), |event| {
        let color = Rgb::from_value(&event.value)?;
        Ok(format_event(event, &color.to_string()))
    })
    .await?;

    if state != RunState::Completed {
        println!("Fade {}", state);
    }

    Ok(())
}
