use rig_structure::config::mapping;
use rig_structure::mapping::io::save_mapping;
use rig_structure::skeleton::io::{load_rig, write_json_file};
use rig_structure::{plan_retarget, RetargetMapping, StructureDetector};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| "Usage: mapping_demo <config.json>".to_string())?;
    let config = mapping::load_config(Path::new(&config_path))?;

    let source = load_rig(&config.source).map_err(|e| e.to_string())?;
    let target = load_rig(&config.target).map_err(|e| e.to_string())?;

    let detector = StructureDetector::new(config.detector.clone());
    let source_map = detector.detect(&source);
    let target_map = detector.detect(&target);

    let mapping = RetargetMapping::from_structures(&source, &source_map, &target, &target_map);
    save_mapping(&config.output.mapping_json, &mapping).map_err(|e| e.to_string())?;
    println!(
        "Mapping {} -> {} ({} chains) written to {}",
        mapping.src_armature,
        mapping.target_armature,
        mapping.chains.len(),
        config.output.mapping_json.display()
    );

    let plan = plan_retarget(&mapping, Some((&source, &target)));
    println!(
        "Retarget plan: {} bindings, {} warnings",
        plan.bindings.len(),
        plan.warnings.len()
    );
    for w in &plan.warnings {
        println!("  warning: {w}");
    }
    if let Some(path) = &config.output.plan_json {
        write_json_file(path, &plan).map_err(|e| e.to_string())?;
        println!("Plan written to {}", path.display());
    }
    Ok(())
}
