use anyhow::Result;

use easekit_core::EasingRegistry;

pub fn run(registry: &EasingRegistry) -> Result<()> {
    println!("Easings ({}):\n", registry.len());

    let width = registry.keys().map(str::len).max().unwrap_or(0);
    for entry in registry.iter() {
        let overshoot = if entry.easing.tolerates_overshoot() {
            " [overshoots]"
        } else {
            ""
        };
        println!("  {:<width$}  {}{}", entry.key(), entry.label, overshoot, width = width);
    }

    Ok(())
}
