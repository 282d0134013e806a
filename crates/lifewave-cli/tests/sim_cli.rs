use std::path::Path;
use std::process::{Command, Output};

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lifewave-cli"))
}

fn run_ok(cmd: &mut Command) -> Output {
    let out = cmd.output().expect("spawn lifewave-cli");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

fn stdout_lines(out: &Output) -> Vec<String> {
    String::from_utf8_lossy(&out.stdout)
        .lines()
        .map(|l| l.to_string())
        .collect()
}

fn p(path: &Path) -> &str {
    path.to_str().expect("utf8 temp path")
}

#[test]
fn seeded_runs_repeat_exactly() {
    let args = ["sim", "--seed", "1234", "--ticks", "600", "--wave-repeat", "1", "--show-rings"];
    let a = run_ok(cli().args(args));
    let b = run_ok(cli().args(args));
    assert_eq!(a.stdout, b.stdout);

    let lines = stdout_lines(&a);
    // 16 matrix rows + 4 ring rows
    assert_eq!(lines.len(), 20);
    assert!(lines[..16].iter().all(|l| l.len() == 16));
    assert!(lines[16..].iter().all(|l| l.len() == 64));

    let stderr = String::from_utf8_lossy(&a.stderr);
    assert!(stderr.contains("[sim] ok ticks=600 generations=38"), "{stderr}");
}

#[test]
fn jsonl_trace_has_one_record_per_tick() {
    let dir = tempfile::tempdir().unwrap();
    let trace = dir.path().join("trace.jsonl");

    run_ok(cli().args([
        "sim", "--seed", "7", "--ticks", "40", "--wave-repeat", "1", "--quiet", "--trace", p(&trace),
    ]));

    let text = std::fs::read_to_string(&trace).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 40);
    // empty default grid: first advance reseeds it
    assert!(lines[0].starts_with("{\"tick\":1,\"row\":1,"), "{}", lines[0]);
    assert!(lines[0].contains("\"advanced\":true,\"reseeded\":true"));
    assert!(lines[1].contains("\"advanced\":false"));
    assert!(lines[16].starts_with("{\"tick\":17,\"row\":1,"));
    assert!(lines[16].contains("\"advanced\":true"));
    assert!(lines[15].contains("\"row\":0,"));
}

#[test]
fn binary_trace_compresses_with_zstd() {
    let dir = tempfile::tempdir().unwrap();
    let trace = dir.path().join("trace.bin.zst");

    run_ok(cli().args([
        "sim", "--seed", "7", "--ticks", "100", "--quiet", "--trace", p(&trace), "--trace-fmt", "bin",
        "--zstd-level", "3",
    ]));

    let packed = std::fs::read(&trace).unwrap();
    let raw = zstd::decode_all(packed.as_slice()).unwrap();
    assert_eq!(raw.len(), 100 * 46);
    // record 0: tick=1, row=1
    assert_eq!(u64::from_le_bytes(raw[0..8].try_into().unwrap()), 1);
    assert_eq!(raw[8], 1);
    // record 99: tick=100
    let r = 99 * 46;
    assert_eq!(u64::from_le_bytes(raw[r..r + 8].try_into().unwrap()), 100);
}

#[test]
fn script_presses_show_on_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("events.txt");
    std::fs::write(
        &script,
        "# edit without advancing\npress 0 0\npress 5 2\npress 5 2 0\nturn 0 +\n",
    )
    .unwrap();

    let out = run_ok(cli().args(["sim", "--seed", "1", "--ticks", "0", "--script", p(&script)]));
    let lines = stdout_lines(&out);
    assert_eq!(lines[0], "#...............");
    assert_eq!(lines[2], ".....#..........");

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("presses=3 turns=1"), "{stderr}");
    assert!(stderr.contains("rule=S2..4/B2..3"), "{stderr}");
}

#[test]
fn glider_preset_advances_four_generations() {
    let dir = tempfile::tempdir().unwrap();
    let cells = dir.path().join("glider.txt");
    let preset = dir.path().join("glider.wlp");
    std::fs::write(&cells, ".#.\n..#\n###\n").unwrap();

    run_ok(cli().args([
        "preset", "new", "--out", p(&preset), "--birth-min", "3", "--wave-repeat", "1", "--cells", p(&cells),
    ]));

    // advances at ticks 1, 17, 33, 49
    let out = run_ok(cli().args(["sim", "--preset", p(&preset), "--seed", "0", "--ticks", "64"]));
    let lines = stdout_lines(&out);
    assert_eq!(lines[0], "................");
    assert_eq!(lines[1], "..#.............");
    assert_eq!(lines[2], "...#............");
    assert_eq!(lines[3], ".###............");
}

#[test]
fn smaller_panel_clips_matrix() {
    let out = run_ok(cli().args(["sim", "--seed", "3", "--ticks", "20", "--grid-cols", "8", "--grid-rows", "4"]));
    let lines = stdout_lines(&out);
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|l| l.len() == 8));
}

#[test]
fn invalid_overrides_fail() {
    let out = cli().args(["sim", "--rule", "1,2", "--ticks", "1"]).output().unwrap();
    assert!(!out.status.success());

    let out = cli().args(["sim", "--wave-repeat", "40", "--ticks", "1"]).output().unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("wave_repeat"));
}
