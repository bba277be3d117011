use rig_structure::skeleton::io::load_rig;
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

fn run() -> Result<(), String> {
    let path = env::args()
        .nth(1)
        .ok_or_else(|| "Usage: rig_structure <rig.json>".to_string())?;
    let skeleton = load_rig(Path::new(&path)).map_err(|e| e.to_string())?;

    let report = StructureDetector::default().process(&skeleton);
    println!(
        "{} ({} bones, size {:.3})",
        skeleton.name(),
        skeleton.len(),
        skeleton.size()
    );
    for chain in &report.chains {
        println!("  {:<10} {}", chain.key.to_string(), chain.bones.join(" > "));
    }
    let missing = report.missing_chains();
    if !missing.is_empty() {
        println!("  not detected: {}", missing.join(", "));
    }
    Ok(())
}
