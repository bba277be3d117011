use rig_structure::config::detect;
use rig_structure::diagnostics::{DetectionReport, SplitRole};
use rig_structure::skeleton::io::{load_rig, write_json_file};
use rig_structure::StructureDetector;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn usage() -> String {
    "Usage: detect_demo <config.json>".to_string()
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = detect::load_config(Path::new(&config_path))?;

    let skeleton = load_rig(&config.input).map_err(|e| e.to_string())?;
    let detector = StructureDetector::new(config.detector.clone());
    let report = detector.process(&skeleton);

    print_text_summary(&report);

    match &config.output.report_json {
        Some(path) => {
            write_json_file(path, &report).map_err(|e| e.to_string())?;
            println!("JSON report written to {}", path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            println!("\nJSON report:\n{json}");
        }
    }
    Ok(())
}

fn print_text_summary(report: &DetectionReport) {
    let input = &report.trace.input;
    let scan = &report.trace.scan;
    println!("Detection summary");
    println!("  skeleton: {} ({} bones, size {:.3})", input.skeleton, input.bones, input.size);
    println!("  root: {}", scan.root.as_deref().unwrap_or("-"));
    println!(
        "  splits: hips={} shoulders={} ignored={} rejected={}",
        scan.split_count(SplitRole::Hips),
        scan.split_count(SplitRole::Shoulders),
        scan.split_count(SplitRole::Ignored),
        scan.split_count(SplitRole::Rejected)
    );
    for hand in &scan.hands {
        println!("  hand ({:?}): {} with {} fingers", hand.side, hand.hand, hand.fingers);
    }
    println!("  head: {}", scan.head.as_deref().unwrap_or("-"));
    println!("  latency_ms: {:.3}", report.trace.timings.total_ms);
    for chain in &report.chains {
        println!("  {:<10} {:>2} bones", chain.key.to_string(), chain.bones.len());
    }
}
