use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    links_path: PathBuf,
    karyotype_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let links_path = dir.path().join("links.txt");
        let karyotype_path = dir.path().join("karyotype.txt");

        // hs1-hs3 and hs2-hs4 cross in karyotype order
        fs::write(
            &links_path,
            "\
link1 hs1 100 200
link1 hs3 500 600
link2 hs2 100 200
link2 hs4 500 600
link3 hs1 300 400
link3 hs3 700 800
",
        )
        .unwrap();
        fs::write(
            &karyotype_path,
            "\
chr - hs1 1 0 1000 chr1
chr - hs2 2 0 1000 chr2
chr - hs3 3 0 1000 chr3
chr - hs4 4 0 1000 chr4
",
        )
        .unwrap();

        Self {
            dir,
            links_path,
            karyotype_path,
        }
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_orderchr"))
            .args(args)
            .arg("--links")
            .arg(&self.links_path)
            .arg("--karyotype")
            .arg(&self.karyotype_path)
            .output()
            .expect("Failed to execute binary")
    }
}

fn final_order(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .find_map(|l| l.strip_prefix("chromosomes_order = "))
        .map(|s| s.trim().to_string())
}

#[test]
fn test_cli_optimize_removes_crossings() {
    let ctx = TestContext::new();
    let output = ctx.run(&["optimize", "--iterations", "300", "--max-flips", "2", "-S", "5"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Initial order: hs1,hs2,hs3,hs4"));

    let order = final_order(&stdout).expect("No chromosomes_order line");
    let names: Vec<&str> = order.split(',').collect();
    assert_eq!(names.len(), 4);

    // Optimal orders keep each linked pair on the same side of the other
    let pos = |n: &str| names.iter().position(|&x| x == n).unwrap();
    let (a, b) = (pos("hs1").min(pos("hs3")), pos("hs1").max(pos("hs3")));
    let inside = |n: &str| (a < pos(n) && pos(n) < b);
    assert_eq!(inside("hs2"), inside("hs4"));
}

#[test]
fn test_cli_same_seed_same_order() {
    let ctx = TestContext::new();
    let args = ["optimize", "--iterations", "100", "--max-flips", "3", "--seed", "11"];
    let o1 = final_order(&String::from_utf8_lossy(&ctx.run(&args).stdout));
    let o2 = final_order(&String::from_utf8_lossy(&ctx.run(&args).stdout));
    assert!(o1.is_some());
    assert_eq!(o1, o2);
}

#[test]
fn test_cli_static_chromosome_stays() {
    let ctx = TestContext::new();
    let output = ctx.run(&[
        "optimize",
        "--iterations",
        "200",
        "--max-flips",
        "2",
        "--static-rx",
        "^hs1$",
        "-S",
        "3",
    ]);
    assert!(output.status.success());
    let order = final_order(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert!(order.starts_with("hs1,"));
}

#[test]
fn test_cli_writes_trace() {
    let ctx = TestContext::new();
    let trace = ctx.dir.path().join("trace.csv");
    let output = ctx.run(&[
        "optimize",
        "--iterations",
        "25",
        "--max-flips",
        "2",
        "-S",
        "1",
        "--trace",
        trace.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let content = fs::read_to_string(&trace).unwrap();
    let mut lines = content.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("iteration,nflips,temperature"));
    assert_eq!(lines.count(), 25);
}

#[test]
fn test_cli_config_file_with_override() {
    let ctx = TestContext::new();
    let config = ctx.dir.path().join("config.json");
    fs::write(
        &config,
        r#"{ "search": { "iterations": 0, "max_flips": 2 } }"#,
    )
    .unwrap();

    // iterations = 0 from the file is invalid...
    let bad = ctx.run(&["optimize", "--config", config.to_str().unwrap()]);
    assert!(!bad.status.success());

    // ...unless the command line overrides it
    let good = ctx.run(&[
        "optimize",
        "--config",
        config.to_str().unwrap(),
        "--iterations",
        "20",
        "-S",
        "2",
    ]);
    assert!(good.status.success());
}

#[test]
fn test_cli_score_reports_breakdown() {
    let ctx = TestContext::new();
    let output = ctx.run(&["score", "--order", "hs1,hs3,hs2,hs4"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());

    let row = |name: &str| -> Vec<String> {
        stdout
            .lines()
            .find(|l| l.contains(name))
            .unwrap()
            .split('|')
            .map(|s| s.trim().to_string())
            .collect()
    };
    // | name | total | between | local | pairs |
    assert_eq!(row("initial")[2], "4");
    assert_eq!(row("given")[2], "0");
}

#[test]
fn test_cli_unknown_order_name_fails() {
    let ctx = TestContext::new();
    let output = ctx.run(&["score", "--order", "hs1,hsX"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_missing_links_file_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_orderchr"))
        .args(["optimize", "--links", "/nonexistent/links.txt"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}
