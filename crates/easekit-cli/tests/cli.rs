use std::path::PathBuf;
use std::process::Command;

fn easekit(home: &str) -> Command {
    let home: PathBuf =
        std::env::temp_dir().join(format!("easekit-cli-{}-{}", home, std::process::id()));
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_easekit"));
    cmd.env("HOME", home).env("RUST_LOG", "info");
    cmd
}

#[test]
fn animate_json_stdout_is_json_lines_only() {
    let output = easekit("animate")
        .args(["animate", "--from", "0,0", "--to", "10,20", "-d", "50", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert!(lines.len() >= 2);
    for line in &lines {
        let event: serde_json::Value = serde_json::from_str(line)
            .unwrap_or_else(|e| panic!("not JSON: {:?} ({})", line, e));
        assert!(event.get("kind").is_some());
    }

    let last: serde_json::Value = serde_json::from_str(lines[lines.len() - 1]).unwrap();
    assert_eq!(last["kind"], "end");
    assert_eq!(last["value"], serde_json::json!([10.0, 20.0]));

    // Logs still go out, on stderr
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Animating"));
}

#[test]
fn sample_json_stdout_parses() {
    let output = easekit("sample")
        .args(["sample", "quad-in", "--steps", "4", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["easing"], "quad-in");
    assert_eq!(report["points"].as_array().map(Vec::len), Some(5));
    assert_eq!(report["points"][2]["output"], 0.25);
}
