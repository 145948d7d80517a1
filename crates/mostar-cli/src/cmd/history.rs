use crate::output::{print_json, print_table};
use mostar_core::MoScriptRegistry;

pub fn run(registry: &MoScriptRegistry, json: bool) -> anyhow::Result<()> {
    let records = registry.history();
    if json {
        return print_json(&records);
    }

    if records.is_empty() {
        println!("no executions recorded in this session");
        return Ok(());
    }

    let rows = records
        .iter()
        .map(|r| {
            vec![
                r.timestamp.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
                r.script_id.clone(),
                if r.success { "ok" } else { "failed" }.to_string(),
                r.error.clone().unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();
    print_table(&["TIMESTAMP", "SCRIPT", "STATUS", "ERROR"], rows);
    Ok(())
}
