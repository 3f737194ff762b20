//! Prints the JSON schema of `config.toml` for editor integration.

use anyhow::Result;

fn main() -> Result<()> {
    let schema = canvas_demo::Config::json_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
