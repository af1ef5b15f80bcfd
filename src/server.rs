use crate::constants::ChainConfig;
use crate::ethereum::EthereumClient;
use crate::tools::{bend::BendBorrowTool, Tool};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::io::{self, BufRead};
use tracing::{debug, error, info};

const INVALID_PARAMS: i32 = -32602;
const METHOD_NOT_FOUND: i32 = -32601;
const INTERNAL_ERROR: i32 = -32603;

#[derive(Serialize, Deserialize, Debug)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: Option<Value>,
    id: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonRpcResponse {
    jsonrpc: String,
    result: Option<Value>,
    error: Option<JsonRpcError>,
    id: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonRpcError {
    code: i32,
    message: String,
}

impl JsonRpcResponse {
    fn result(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            result: Some(result),
            error: None,
            id,
        }
    }

    fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
            id,
        }
    }
}

type ToolMap = HashMap<String, Box<dyn Tool>>;

fn register_tools(chain_config: ChainConfig) -> ToolMap {
    let mut tools: ToolMap = HashMap::new();

    let borrow_tool = BendBorrowTool::new(chain_config);
    tools.insert(borrow_tool.name().to_string(), Box::new(borrow_tool));

    tools
}

/// Serves line-delimited JSON-RPC over stdin/stdout until stdin closes.
/// Logging goes to stderr so stdout stays a clean protocol channel.
pub async fn run(client: EthereumClient, chain_config: ChainConfig) -> Result<()> {
    let tools = register_tools(chain_config);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    info!("MCP Server Ready. Waiting for JSON-RPC requests on stdin...");

    while let Some(Ok(line)) = lines.next() {
        if line.trim().is_empty() {
            continue;
        }

        debug!("Received request: {}", line);

        let req: JsonRpcRequest = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                error!("Failed to parse JSON-RPC request: {}", e);
                continue;
            }
        };

        let response = handle_request(&req, &client, &tools).await;
        println!("{}", serde_json::to_string(&response)?);
    }

    Ok(())
}

async fn handle_request(
    req: &JsonRpcRequest,
    client: &EthereumClient,
    tools: &ToolMap,
) -> JsonRpcResponse {
    match req.method.as_str() {
        "initialize" => JsonRpcResponse::result(
            req.id.clone(),
            json!({
                "protocolVersion": "2024-11-05",
                "capabilities": { "tools": {} },
                "serverInfo": {
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        ),
        "tools/list" => {
            let tool_list: Vec<Value> = tools
                .values()
                .map(|t| {
                    json!({
                        "name": t.name(),
                        "description": t.description(),
                        "inputSchema": t.schema()
                    })
                })
                .collect();

            JsonRpcResponse::result(req.id.clone(), json!({ "tools": tool_list }))
        }
        "tools/call" => handle_tools_call(req, client, tools).await,
        _ => JsonRpcResponse::error(req.id.clone(), METHOD_NOT_FOUND, "Method not found"),
    }
}

async fn handle_tools_call(
    req: &JsonRpcRequest,
    client: &EthereumClient,
    tools: &ToolMap,
) -> JsonRpcResponse {
    let Some(params) = &req.params else {
        return JsonRpcResponse::error(req.id.clone(), INVALID_PARAMS, "Missing params");
    };

    let Some(tool_name) = params.get("name").and_then(|v| v.as_str()) else {
        return JsonRpcResponse::error(
            req.id.clone(),
            INVALID_PARAMS,
            "Missing 'name' parameter",
        );
    };

    let Some(tool) = tools.get(tool_name) else {
        return JsonRpcResponse::error(
            req.id.clone(),
            METHOD_NOT_FOUND,
            format!("Tool not found: {}", tool_name),
        );
    };

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    match tool.call(client, args).await {
        // MCP 'content' for compatibility, plus 'data' for agents.
        Ok(result) => JsonRpcResponse::result(
            req.id.clone(),
            json!({
                "content": [{
                    "type": "text",
                    "text": serde_json::to_string_pretty(&result)
                        .unwrap_or_else(|_| result.to_string())
                }],
                "data": result
            }),
        ),
        Err(e) => JsonRpcResponse::error(
            req.id.clone(),
            INTERNAL_ERROR,
            format!("Tool execution failed: {}", e),
        ),
    }
}
