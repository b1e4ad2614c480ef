//! Newline-delimited JSON framing for the MCP stdio transport.

use crate::mcp::error::McpError;
use crate::mcp::protocol::JsonRpcResponse;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};
use tracing::debug;

/// Writer half of the transport. Generic over the sink so the framing
/// can be exercised against an in-memory buffer in tests; production
/// code uses [`StdioTransport`].
pub struct Transport<W> {
    writer: BufWriter<W>,
}

/// Transport writing to the process stdout
pub type StdioTransport = Transport<tokio::io::Stdout>;

impl StdioTransport {
    pub fn stdout() -> Self {
        Transport::new(tokio::io::stdout())
    }
}

impl<W: AsyncWrite + Unpin> Transport<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: BufWriter::new(sink),
        }
    }

    /// Serialize one response as a single line and flush it.
    ///
    /// Notifications produce no response: a frame with neither id,
    /// result nor error is silently dropped.
    pub async fn send_response(&mut self, response: JsonRpcResponse) -> Result<(), McpError> {
        if response.id.is_none() && response.result.is_none() && response.error.is_none() {
            return Ok(());
        }

        let json = serde_json::to_string(&response)?;
        debug!("Sending: {}", json);

        self.writer.write_all(json.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;

        Ok(())
    }
}
