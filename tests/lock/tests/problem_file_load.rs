//! Problem-file lock tests: worlds exported to JSON load back into the
//! same problem and solve to the same plan.

use lock_tests::scenario_helpers::policy;
use mcplan_harness::contract::PlanningWorldV1;
use mcplan_harness::problem_file::{load_problem, ProblemFileError, ProblemFileV1};
use mcplan_harness::runner::run_planner;
use mcplan_harness::worlds::gripper::Gripper;
use mcplan_harness::worlds::trapdoor::Trapdoor;

fn write_problem_file(dir: &std::path::Path, world: &dyn PlanningWorldV1) -> std::path::PathBuf {
    let problem = world.build().unwrap();
    let path = dir.join(format!("{}.json", world.world_id()));
    let text = serde_json::to_string_pretty(&ProblemFileV1::from_problem(&problem)).unwrap();
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn exported_world_loads_identically() {
    let dir = tempfile::tempdir().unwrap();
    for world in [&Gripper::new(3) as &dyn PlanningWorldV1, &Trapdoor] {
        let original = world.build().unwrap();
        let loaded = load_problem(&write_problem_file(dir.path(), world)).unwrap();

        assert_eq!(loaded.name(), original.name());
        assert_eq!(loaded.facts(), original.facts());
        assert_eq!(loaded.initial_state(), original.initial_state());
        assert_eq!(loaded.goal(), original.goal());
        assert_eq!(loaded.actions(), original.actions());
        assert_eq!(loaded.requirements(), original.requirements());
    }
}

#[test]
fn loaded_problem_solves_to_same_plan() {
    let dir = tempfile::tempdir().unwrap();
    let world = Gripper::new(2);
    let original = world.build().unwrap();
    let loaded = load_problem(&write_problem_file(dir.path(), &world)).unwrap();

    let policy = policy(16, 8, 99);
    let a = run_planner(&original, &policy).unwrap().report;
    let b = run_planner(&loaded, &policy).unwrap().report;
    assert_eq!(a.plan_digest, b.plan_digest);
    assert!(a.is_solved());
}

#[test]
fn truncated_file_is_a_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_problem_file(dir.path(), &Trapdoor);
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::write(&path, &text[..text.len() / 2]).unwrap();
    assert!(matches!(load_problem(&path), Err(ProblemFileError::Json(_))));
}
