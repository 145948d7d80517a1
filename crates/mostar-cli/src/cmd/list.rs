use crate::output::{print_json, print_table};
use mostar_core::MoScriptRegistry;

pub fn run(registry: &MoScriptRegistry, json: bool) -> anyhow::Result<()> {
    let scripts = registry.list();
    if json {
        return print_json(&scripts);
    }

    let rows = scripts
        .iter()
        .map(|s| {
            vec![
                s.id.to_string(),
                s.name.to_string(),
                s.trigger.to_string(),
                s.inputs.join(", "),
                if s.sass { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();
    print_table(&["ID", "NAME", "TRIGGER", "INPUTS", "SASS"], rows);
    Ok(())
}
