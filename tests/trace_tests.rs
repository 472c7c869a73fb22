mod common;

use common::utils::temp_path;
use testid_tree::trace::logger::TraceLogger;
use testid_tree::trace::trace::{TraceEvent, TraceOp};
use testid_tree::{Engine, TestIdTree, Value};

fn read_ops(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| {
            let event: serde_json::Value = serde_json::from_str(line).unwrap();
            event["op"].as_str().unwrap().to_string()
        })
        .collect()
}

#[test]
fn engine_records_each_mutation_in_order() {
    let path = temp_path("engine-trace.jsonl");
    let _ = std::fs::remove_file(&path);

    let mut engine = Engine::new().with_tracer(TraceLogger::new(path.to_str().unwrap()));
    let app = engine.create_node("app");
    engine.get(app, "main");
    let main = engine.create(None);
    let other = engine.create(None);
    engine.set(app, "other", Value::Node(other));
    engine.set(app, "moved", Value::Node(other));
    engine.set(app, "toJSON", Value::Node(main));

    assert_eq!(
        read_ops(&path),
        vec![
            "create",     // app
            "synthesize", // app.main
            "claim",      // main
            "create",     // other
            "link",       // app.other
            "detach",     // other leaves app.other
            "synthesize", // app.other placeholder
            "link",       // app.moved
            "reject",     // toJSON
        ]
    );
}

#[test]
fn trace_events_carry_node_and_name() {
    let path = temp_path("event-fields.jsonl");
    let _ = std::fs::remove_file(&path);

    let mut engine = Engine::new().with_tracer(TraceLogger::new(path.to_str().unwrap()));
    let app = engine.create_node("app");
    engine.get(app, "footer");

    let content = std::fs::read_to_string(&path).unwrap();
    let events: Vec<serde_json::Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(events[0]["detail"], "app");
    assert_eq!(events[0]["step"], 1);
    assert_eq!(events[1]["op"], "synthesize");
    assert_eq!(events[1]["name"], "footer");
    assert_eq!(events[1]["parent"], events[0]["node"]);
    assert_eq!(events[1]["step"], 2);
}

#[test]
fn unwritable_trace_path_disables_logging() {
    let logger = TraceLogger::new("/nonexistent/dir/trace.jsonl");
    assert!(!logger.is_enabled());

    // Logging to a disabled tracer is a no-op.
    logger.log(&TraceEvent::now(1, TraceOp::Create));
}
