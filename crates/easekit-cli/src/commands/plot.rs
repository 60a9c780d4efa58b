use anyhow::{bail, Result};

use easekit_core::{AppConfig, EasingRegistry, RecordingSink, TracePoint};

/// Vertical range of the plot, leaving room for overshooting curves
const Y_MIN: f64 = -0.1;
const Y_MAX: f64 = 1.1;

pub fn run(
    registry: &EasingRegistry,
    config: &AppConfig,
    key: &str,
    width: usize,
    height: usize,
) -> Result<()> {
    if width < 2 || height < 2 {
        bail!("plot needs at least 2 columns and 2 rows");
    }

    let sink = RecordingSink::new();
    let easing = super::resolve_easing(registry, config, key)?.traced(sink.clone());

    for col in 0..width {
        easing.apply(col as f64 / (width - 1) as f64);
    }

    println!("{}", easing.name());
    for line in render(&sink.points(), width, height) {
        println!("{}", line);
    }

    Ok(())
}

fn row_of(y: f64, height: usize) -> usize {
    let scaled = (Y_MAX - y) / (Y_MAX - Y_MIN) * (height - 1) as f64;
    scaled.round().clamp(0.0, (height - 1) as f64) as usize
}

/// One string per row, top row first; each point lands in its own column
fn render(points: &[TracePoint], width: usize, height: usize) -> Vec<String> {
    let mut grid = vec![vec![' '; width]; height];

    for guide in [0.0, 1.0] {
        grid[row_of(guide, height)].fill('·');
    }
    for (col, point) in points.iter().take(width).enumerate() {
        grid[row_of(point.output, height)][col] = '*';
    }

    grid.into_iter()
        .enumerate()
        .map(|(row, cells)| {
            let label = if row == row_of(1.0, height) {
                " 1.0"
            } else if row == row_of(0.0, height) {
                " 0.0"
            } else {
                "    "
            };
            format!("{} │{}", label, cells.into_iter().collect::<String>())
        })
        .collect()
}
