use crate::cmd::run::render_outcome;
use crate::output::print_json;
use anyhow::{bail, Context};
use mostar_core::{fixtures, MoScriptRegistry};

pub fn run(registry: &mut MoScriptRegistry, json: bool) -> anyhow::Result<()> {
    let ids: Vec<String> = registry.list().iter().map(|s| s.id.to_string()).collect();

    let mut outcomes = Vec::with_capacity(ids.len());
    let mut failures = 0usize;
    for id in &ids {
        let bag = fixtures::gather_inputs(registry, id)
            .with_context(|| format!("failed to gather inputs for \"{id}\""))?;
        let outcome = registry.execute(id, bag);
        if !outcome.success {
            failures += 1;
        }
        outcomes.push(outcome);
    }

    if json {
        print_json(&outcomes)?;
    } else {
        for outcome in &outcomes {
            render_outcome(outcome);
            println!();
        }
        println!(
            "{} of {} diagnostics succeeded",
            outcomes.len() - failures,
            outcomes.len()
        );
    }

    if failures > 0 {
        bail!("{failures} MoScript(s) failed");
    }
    Ok(())
}
