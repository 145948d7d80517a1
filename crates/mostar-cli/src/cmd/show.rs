use crate::output::print_json;
use anyhow::bail;
use mostar_core::{MoScriptRegistry, ScriptSummary};

pub fn run(registry: &MoScriptRegistry, id: &str, json: bool) -> anyhow::Result<()> {
    let Some(script) = registry.get(id) else {
        bail!("MoScript \"{id}\" is not registered");
    };
    let summary = ScriptSummary::from(script);

    if json {
        return print_json(&summary);
    }

    println!("id:      {}", summary.id);
    println!("name:    {}", summary.name);
    println!("trigger: {}", summary.trigger);
    println!("inputs:  {}", summary.inputs.join(", "));
    println!("sass:    {}", if summary.sass { "yes" } else { "no" });
    Ok(())
}
