use anyhow::Context;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio_stream::wrappers::LinesStream;
use tokio_stream::StreamExt;

use gnomad_mcp::{JsonRpcRequest, JsonRpcResponse, McpHandler};

/// Serve MCP on the process's stdin/stdout until stdin closes.
pub async fn run(handler: &McpHandler) -> anyhow::Result<()> {
    tracing::info!("gnomAD MCP server started on stdio");
    serve(handler, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}

/// Read one JSON-RPC message per line from `reader` and write each response
/// as a single line to `writer`.
pub async fn serve<R, W>(handler: &McpHandler, reader: R, mut writer: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = LinesStream::new(reader.lines());

    while let Some(line) = lines.next().await {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        tracing::debug!("Received: {line}");

        let response = match serde_json::from_str::<JsonRpcRequest>(&line) {
            Ok(req) => handler.handle(req).await,
            Err(e) => {
                tracing::warn!("Invalid JSON-RPC message: {e}");
                Some(JsonRpcResponse::parse_error(e))
            }
        };

        if let Some(response) = response {
            let mut frame = serde_json::to_vec(&response)?;
            frame.push(b'\n');
            writer.write_all(&frame).await?;
            writer.flush().await?;
        }
    }

    tracing::info!("stdin closed, shutting down");
    Ok(())
}
