//! qutebridge tool server — JSON tool protocol over stdin/stdout.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"list_tabs", "params":{}}
//! Response: {"id":1, "result":[...]} or {"id":1, "error":"..."}
//!
//! Every request is handled independently; a failed call reports an error
//! on that id and the loop keeps running.

use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

use qutebridge::rpc_handler::handle_method;
use serde_json::{json, Value};

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    let stdin = BufReader::new(io::stdin());
    let mut stdout = io::stdout();

    // Signal ready
    let ready = json!({"event":"ready","version":env!("CARGO_PKG_VERSION")});
    stdout.write_all(format!("{}\n", ready).as_bytes()).await?;
    stdout.flush().await?;

    let mut lines = stdin.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                let err = json!({"id":null,"error":format!("parse error: {}", e)});
                stdout.write_all(format!("{}\n", err).as_bytes()).await?;
                stdout.flush().await?;
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        let response = match handle_method(method, &params).await {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => json!({"id": id, "error": err}),
        };
        stdout.write_all(format!("{}\n", response).as_bytes()).await?;
        stdout.flush().await?;
    }

    Ok(())
}
