use anyhow::Result;
use tracing::{info, warn};

use easekit_core::{
    AnimationEvent, AppConfig, EasingRegistry, EventKind, PlayerHandle, RunState, Value,
};

pub async fn run(
    registry: &EasingRegistry,
    config: &AppConfig,
    from: Value,
    to: Value,
    duration_ms: Option<u64>,
    easing: Option<&str>,
    json: bool,
) -> Result<()> {
    let (run, player) = super::prepare_run(registry, config, from, to, duration_ms, easing)?;
    info!(
        "Animating {} -> {} over {}ms ({})",
        run.start_value(),
        run.end_value(),
        run.duration_ms(),
        run.easing().name()
    );

    let handle = player.play(run);
    let state = drain(handle, |event| render_event(event, json)).await?;

    if state != RunState::Completed {
        println!("Animation {}", state);
    }

    Ok(())
}

/// Print every event until the run stops, cancelling on Ctrl-C
pub async fn drain<F>(mut handle: PlayerHandle, mut render: F) -> Result<RunState>
where
    F: FnMut(&AnimationEvent) -> Result<String>,
{
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut interrupted = false;

    loop {
        tokio::select! {
            result = &mut ctrl_c, if !interrupted => {
                if let Err(e) = result {
                    warn!("Failed to listen for Ctrl-C: {}", e);
                } else {
                    info!("Received interrupt, cancelling animation");
                    handle.cancel();
                }
                interrupted = true;
            }
            event = handle.next_event() => match event {
                Some(event) => println!("{}", render(&event)?),
                None => break,
            },
        }
    }

    Ok(handle.finish().await)
}

/// One output line: a JSON object with `--json`, a table row otherwise
pub fn render_event(event: &AnimationEvent, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(event)?)
    } else {
        Ok(format_event(event, &event.value.to_string()))
    }
}

pub fn format_event(event: &AnimationEvent, value: &str) -> String {
    let kind = match event.kind {
        EventKind::Begin => "begin",
        EventKind::Animate => "animate",
        EventKind::End => "end",
    };
    format!(
        "{:<8} {:>8.1}ms  p={:.3}  {}",
        kind, event.timestamp_ms, event.progress, value
    )
}
