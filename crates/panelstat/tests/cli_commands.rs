#![cfg(unix)]

use std::path::PathBuf;
use std::process::Command;

const PACKET_SIZE: usize = 4104;
const FRAME_BYTES: usize = 320 * 170 * 2;

fn unique_temp_file(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "panelstat-cli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ))
}

#[test]
fn version_prints_the_crate_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_panelstat"))
        .arg("version")
        .output()
        .expect("version should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn doctor_emits_a_json_report() {
    let output = Command::new(env!("CARGO_BIN_EXE_panelstat"))
        .args(["--format", "json", "--log-level", "error", "doctor"])
        .output()
        .expect("doctor should run");

    // Passes or fails health checks depending on attached hardware; both
    // are valid here.
    assert!(matches!(output.status.code(), Some(0) | Some(30)));

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("doctor output should be JSON");
    assert!(report["overall"].is_string());
    let checks = report["checks"].as_array().expect("checks array");
    assert!(checks.len() >= 4);
}

#[test]
fn splash_writes_an_exact_packet_stream() {
    let path = unique_temp_file("splash");
    let output = Command::new(env!("CARGO_BIN_EXE_panelstat"))
        .args(["--log-level", "error", "splash", "--color", "FF0000"])
        .arg("--text")
        .arg("HI")
        .arg("--out")
        .arg(&path)
        .output()
        .expect("splash should run");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stream = std::fs::read(&path).expect("capture file should exist");
    let _ = std::fs::remove_file(&path);

    // 108800 frame bytes over 4096-byte chunks: 26 full + 1 tail packet.
    assert_eq!(stream.len(), 27 * PACKET_SIZE);

    // First packet: START, sequence 1, offset 0, full chunk.
    assert_eq!(&stream[..8], &[0x55, 0xA3, 0xF0, 1, 0x00, 0x00, 0x10, 0x00]);
    // Top rows are solid red (0xF800 little-endian), text sits mid-panel.
    assert_eq!(&stream[8..16], &[0x00, 0xF8, 0x00, 0xF8, 0x00, 0xF8, 0x00, 0xF8]);

    // Final packet: END, sequence 27, offset 26*4096, 2304-byte tail.
    let last = &stream[26 * PACKET_SIZE..];
    assert_eq!(&last[..8], &[0x55, 0xA3, 0xF2, 27, 0xA0, 0x01, 0x09, 0x00]);
    // The tail past the frame remainder is zero padding.
    let tail_data = FRAME_BYTES - 26 * 4096;
    assert!(last[8 + tail_data..].iter().all(|&b| b == 0));
}

#[test]
fn splash_rejects_malformed_color() {
    let path = unique_temp_file("badcolor");
    let output = Command::new(env!("CARGO_BIN_EXE_panelstat"))
        .args(["--log-level", "error", "splash", "--color", "ZZZZZZ"])
        .arg("--out")
        .arg(&path)
        .output()
        .expect("splash should run");

    assert_eq!(output.status.code(), Some(64));
    assert!(!path.exists());
}
