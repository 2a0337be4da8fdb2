use anyhow::Context;
use serde_json::Value;

use gnomad_mcp::McpHandler;

/// Run one tool and print its text output.
pub async fn run(handler: &McpHandler, tool: &str, args: &str) -> anyhow::Result<()> {
    let arguments: Value =
        serde_json::from_str(args).context("--args must be a JSON object")?;

    let output = handler.dispatcher().call(tool, Some(&arguments)).await;
    println!("{}", output.as_text());

    Ok(())
}
