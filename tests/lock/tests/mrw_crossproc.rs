//! MRW-DETERMINISM-CROSSPROC: cross-process determinism test.
//!
//! Spawns the `plan_fixture` binary under environment variants that change
//! locale and rayon pool size, and asserts all produce identical output.

use std::path::Path;
use std::process::Command;

fn workspace_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

fn run_variant(env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_plan_fixture");

    let mut command = Command::new(bin);
    command
        .current_dir(workspace_root())
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RAYON_NUM_THREADS")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {bin} (overrides={env_overrides:?}): {e}"));
    assert!(
        output.status.success(),
        "plan_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn value<'a>(output: &'a str, key: &str) -> &'a str {
    output
        .lines()
        .find_map(|line| line.strip_prefix(key)?.strip_prefix('='))
        .unwrap_or_else(|| panic!("output missing {key}"))
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let baseline = run_variant(&[]);

    assert_eq!(value(&baseline, "sequential.termination"), "goal-reached");
    assert!(value(&baseline, "sequential.plan_digest").starts_with("sha256:"));
    assert_eq!(
        value(&baseline, "sequential.plan_digest"),
        value(&baseline, "parallel.plan_digest")
    );
    assert_eq!(
        value(&baseline, "sequential.nodes_generated"),
        value(&baseline, "parallel.nodes_generated")
    );

    let variants: [&[(&str, &str)]; 3] = [
        &[("RAYON_NUM_THREADS", "1")],
        &[("RAYON_NUM_THREADS", "7"), ("LC_ALL", "C")],
        &[("LANG", "en_US.UTF-8"), ("RUST_LOG", "debug")],
    ];
    for overrides in variants {
        assert_eq!(
            run_variant(overrides),
            baseline,
            "output diverged under {overrides:?}"
        );
    }
}
