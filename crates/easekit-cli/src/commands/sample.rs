use anyhow::{bail, Result};
use serde::Serialize;

use easekit_core::{AppConfig, EasingRegistry, RecordingSink, TracePoint};

#[derive(Serialize)]
struct SampleReport<'a> {
    easing: &'a str,
    points: Vec<TracePoint>,
}

pub fn run(
    registry: &EasingRegistry,
    config: &AppConfig,
    key: &str,
    steps: u32,
    json: bool,
) -> Result<()> {
    if steps == 0 {
        bail!("--steps must be at least 1");
    }

    let sink = RecordingSink::new();
    let easing = super::resolve_easing(registry, config, key)?.traced(sink.clone());

    for i in 0..=steps {
        easing.apply(i as f64 / steps as f64);
    }
    let points = sink.points();

    if json {
        let report = SampleReport {
            easing: easing.name(),
            points,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}:\n", easing.name());
    println!("  {:>8}  {:>8}", "input", "output");
    for point in &points {
        println!("  {:>8.3}  {:>8.3}", point.input, point.output);
    }

    Ok(())
}
