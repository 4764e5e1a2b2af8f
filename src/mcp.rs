use crate::error::TodoError;
use crate::interpreter::Interpreter;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt, handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters, model::*, schemars, tool, tool_handler, tool_router,
    transport::stdio,
};
use serde::{Deserialize, Serialize};

/// Todo MCP server
#[derive(Clone)]
pub struct TodoMcp {
    interpreter: Interpreter,
    tool_router: ToolRouter<Self>,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ChatInput {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct AddTodoInput {
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct TodoIdInput {
    pub id: i64,
}

// Response type
#[derive(Debug, Serialize)]
pub struct McpResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> McpResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "ok",
            data: Some(data),
            error_code: None,
            message: None,
        }
    }

    pub fn error(error_code: &str, message: &str) -> Self {
        Self {
            status: "error",
            data: None,
            error_code: Some(error_code.to_string()),
            message: Some(message.to_string()),
        }
    }
}

fn to_json<T: Serialize>(response: McpResponse<T>) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string(&response)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn error_to_response(e: TodoError) -> McpResponse<serde_json::Value> {
    McpResponse::error(e.error_code(), &e.to_string())
}

fn respond<T: Serialize>(result: Result<T, TodoError>) -> Result<CallToolResult, McpError> {
    match result {
        Ok(data) => to_json(McpResponse::success(data)),
        Err(e) => to_json(error_to_response(e)),
    }
}

#[tool_router]
impl TodoMcp {
    pub fn new(interpreter: Interpreter) -> Self {
        Self {
            interpreter,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Send a natural-language message such as 'add todo: buy milk', 'show todos' or 'delete todo 1'. Returns the assistant reply and the action it took."
    )]
    async fn chat(&self, params: Parameters<ChatInput>) -> Result<CallToolResult, McpError> {
        respond(self.interpreter.interpret(&params.0.message))
    }

    #[tool(description = "Create a new todo with the given title.")]
    async fn add_todo(&self, params: Parameters<AddTodoInput>) -> Result<CallToolResult, McpError> {
        let title = params.0.title;
        if title.trim().is_empty() {
            return to_json(error_to_response(TodoError::EmptyTitle));
        }
        respond(self.interpreter.store().create(&title))
    }

    #[tool(description = "List all todos in creation order.")]
    async fn list_todos(&self) -> Result<CallToolResult, McpError> {
        respond(self.interpreter.store().list())
    }

    #[tool(description = "Delete the todo with the given id.")]
    async fn delete_todo(
        &self,
        params: Parameters<TodoIdInput>,
    ) -> Result<CallToolResult, McpError> {
        let id = params.0.id;
        let result = self.interpreter.store().delete(id).and_then(|removed| {
            if removed {
                Ok(serde_json::json!({ "deleted": id }))
            } else {
                Err(TodoError::TodoNotFound(id))
            }
        });
        respond(result)
    }
}

#[tool_handler]
impl ServerHandler for TodoMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Todo assistant. Use chat for natural-language commands, or add_todo, list_todos \
                 and delete_todo to manage todos directly."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_mcp_server(interpreter: Interpreter) -> Result<(), TodoError> {
    let service = TodoMcp::new(interpreter)
        .serve(stdio())
        .await
        .map_err(|e| TodoError::Mcp(e.to_string()))?;

    service
        .waiting()
        .await
        .map_err(|e| TodoError::Mcp(e.to_string()))?;
    Ok(())
}
