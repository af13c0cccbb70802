//! RPC method handler for the qutebridge tool protocol.
//!
//! Extracted from `main.rs` so it can be tested independently. The
//! `handle_method` function validates JSON params and dispatches to the IPC
//! client and the state managers. This layer only validates arguments and
//! shapes results; all logic lives in `ipc` and `managers`.

use serde_json::{json, Value};

use crate::ipc::client::IpcClient;
use crate::managers::bookmark_manager;
use crate::managers::history_manager;
use crate::managers::session_manager::SessionManager;
use crate::platform;

/// Reads an optional positive integer parameter.
fn positive_u32(params: &Value, key: &str) -> Result<Option<u32>, String> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => match v.as_u64() {
            Some(n) if n > 0 && n <= u32::MAX as u64 => Ok(Some(n as u32)),
            _ => Err(format!("{} must be a positive integer", key)),
        },
    }
}

/// Reads a required string parameter.
fn required_str<'a>(params: &'a Value, key: &str) -> Result<&'a str, String> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", key))
}

/// Reads a parameter that may be an integer or a string (tab index or
/// `last`, move position or `+`/`-`) into its command-token form.
fn index_or_string(params: &Value, key: &str) -> Result<String, String> {
    match params.get(key) {
        Some(Value::Number(n)) if n.is_i64() => Ok(n.to_string()),
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(format!("{} must be an integer or a string", key)),
    }
}

/// Dispatches one tool call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub async fn handle_method(method: &str, params: &Value) -> Result<Value, String> {
    let ipc = IpcClient::new();

    match method {
        // ─── Tabs ───
        "list_tabs" => {
            let manager = SessionManager::new();
            let tabs = manager.list_tabs().await.map_err(|e| e.to_string())?;
            Ok(json!(tabs))
        }
        "open_tab" => {
            let url = required_str(params, "url")?;
            let background = params
                .get("background")
                .and_then(|v| v.as_bool())
                .unwrap_or(false);
            ipc.open(url, true, background).await.map_err(|e| e.to_string())?;
            Ok(json!({"opened": url, "background": background}))
        }
        "close_tab" => {
            // With an index, focus that tab first, then close it.
            if let Some(index) = positive_u32(params, "index")? {
                ipc.tab_focus(&index.to_string())
                    .await
                    .map_err(|e| e.to_string())?;
            }
            ipc.tab_close().await.map_err(|e| e.to_string())?;
            Ok(json!({"closed": true}))
        }
        "focus_tab" => {
            let target = index_or_string(params, "index")?;
            ipc.tab_focus(&target).await.map_err(|e| e.to_string())?;
            Ok(json!({"focused": target}))
        }
        "move_tab" => {
            let position = index_or_string(params, "position")?;
            ipc.tab_move(&position).await.map_err(|e| e.to_string())?;
            Ok(json!({"moved": position}))
        }

        // ─── Navigation ───
        "navigate" => {
            let url = required_str(params, "url")?;
            ipc.open(url, false, false).await.map_err(|e| e.to_string())?;
            Ok(json!({"navigating": url}))
        }
        "go_back" => {
            let count = positive_u32(params, "count")?;
            ipc.back(count).await.map_err(|e| e.to_string())?;
            Ok(json!({"back": count.unwrap_or(1)}))
        }
        "go_forward" => {
            let count = positive_u32(params, "count")?;
            ipc.forward(count).await.map_err(|e| e.to_string())?;
            Ok(json!({"forward": count.unwrap_or(1)}))
        }
        "reload_page" => {
            let force = params.get("force").and_then(|v| v.as_bool()).unwrap_or(false);
            ipc.reload(force).await.map_err(|e| e.to_string())?;
            Ok(json!({"reloading": true, "force": force}))
        }

        // ─── Page ───
        "screenshot" => {
            let filename = required_str(params, "filename")?;
            let rect = params.get("rect").and_then(|v| v.as_str());
            ipc.screenshot(filename, rect).await.map_err(|e| e.to_string())?;
            Ok(json!({"screenshot": filename}))
        }
        "execute_js" => {
            let code = required_str(params, "code")?;
            let quiet = params.get("quiet").and_then(|v| v.as_bool()).unwrap_or(false);
            ipc.jseval(code, quiet).await.map_err(|e| e.to_string())?;
            Ok(json!({"executed": true, "quiet": quiet}))
        }

        // ─── State queries ───
        "get_bookmarks" => {
            let bookmarks = bookmark_manager::list_bookmarks(&platform::bookmarks_path())
                .map_err(|e| e.to_string())?;
            Ok(json!(bookmarks))
        }
        "get_quickmarks" => {
            let quickmarks = bookmark_manager::list_quickmarks(&platform::quickmarks_path())
                .map_err(|e| e.to_string())?;
            Ok(json!(quickmarks))
        }
        "search_history" => {
            let limit =
                positive_u32(params, "limit")?.unwrap_or(history_manager::DEFAULT_LIMIT);
            let query = params.get("query").and_then(|v| v.as_str());
            let entries = history_manager::query_history(&platform::history_path(), limit, query)
                .map_err(|e| e.to_string())?;
            let formatted: Vec<Value> = entries
                .iter()
                .map(|e| json!(history_manager::format_entry(e)))
                .collect();
            Ok(json!(formatted))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
