use crate::output::print_json;
use anyhow::{bail, Context};
use mostar_core::{fixtures, InputBag, MoScriptRegistry, Outcome};
use std::path::Path;

pub fn run(
    registry: &mut MoScriptRegistry,
    id: &str,
    inputs_path: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let bag = match inputs_path {
        Some(path) => load_input_bag(path)
            .with_context(|| format!("failed to load inputs from {}", path.display()))?,
        None => fixtures::gather_inputs(registry, id)
            .with_context(|| format!("failed to gather inputs for \"{id}\""))?,
    };

    let outcome = registry.execute(id, bag);
    if json {
        print_json(&outcome)?;
    } else {
        render_outcome(&outcome);
    }

    if !outcome.success {
        bail!(
            "MoScript \"{id}\" failed: {}",
            outcome.error.as_deref().unwrap_or("unknown execution failure")
        );
    }
    Ok(())
}

/// Parse a YAML (default) or JSON file into an input bag. The file must hold
/// a map of input keys.
fn load_input_bag(path: &Path) -> anyhow::Result<InputBag> {
    let data = std::fs::read_to_string(path)?;
    let value: serde_json::Value = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&data)?,
        _ => serde_yaml::from_str(&data)?,
    };
    match value {
        serde_json::Value::Object(map) => Ok(map),
        _ => bail!("input file must contain a map of input keys"),
    }
}

pub(crate) fn render_outcome(outcome: &Outcome) {
    if let Some(script) = &outcome.script {
        println!("== {} ({}) ==", script.name, script.id);
    }
    if let Some(narrative) = &outcome.narrative {
        println!("{narrative}");
    }
    if let Some(result) = &outcome.result {
        match serde_json::to_string_pretty(result) {
            Ok(pretty) => println!("{pretty}"),
            Err(_) => println!("{result}"),
        }
    }
    if let Some(error) = &outcome.error {
        println!("FAILED: {error}");
    }
}
