//! Reconciliation of competing tool-definition conventions

use serde_json::{Value, json};

use crate::protocol::ProviderTool;
use crate::types::{FunctionDefinition, FunctionShape, FunctionTag, ToolDefinition, ToolShape};

/// Schema applied when a definition carries none
///
/// Lenient by policy: an unusable definition is defaulted, not rejected.
fn empty_object_schema() -> Value {
    json!({ "type": "object" })
}

/// Normalize tool definitions from any accepted convention into the
/// canonical shape
///
/// Output preserves length and order. `parameters` is taken from the
/// source's `parameters`, else its `input_schema`, else the empty object
/// schema; name and description copy through only when present.
/// Normalizing already-canonical definitions is a no-op.
pub fn normalize_tools(tools: Vec<ToolShape>) -> Vec<ToolDefinition> {
    tools.into_iter().map(normalize_tool).collect()
}

fn normalize_tool(tool: ToolShape) -> ToolDefinition {
    let function = match tool {
        ToolShape::Native(native) => FunctionShape {
            name: native.name,
            description: native.description,
            parameters: native.parameters,
            input_schema: Some(native.input_schema),
        },
        ToolShape::Nested(nested) => nested.function,
        ToolShape::Bare(bare) => bare,
    };

    ToolDefinition {
        tool_type: FunctionTag::Function,
        function: FunctionDefinition {
            name: function.name,
            description: function.description,
            parameters: function
                .parameters
                .or(function.input_schema)
                .unwrap_or_else(empty_object_schema),
        },
    }
}

/// Project canonical definitions to the peer-ecosystem shape
///
/// The canonical form already is that convention, so this is the identity.
pub fn to_openai_tools(tools: Vec<ToolDefinition>) -> Vec<ToolDefinition> {
    tools
}

/// Project canonical definitions to provider shape
///
/// Absent input stays absent so the outbound request omits the field
/// entirely.
pub fn to_provider_tools(tools: Option<&[ToolDefinition]>) -> Option<Vec<ProviderTool>> {
    tools.map(|tools| {
        tools
            .iter()
            .map(|tool| ProviderTool {
                name: tool.function.name.clone(),
                description: tool.function.description.clone(),
                input_schema: tool.function.parameters.clone(),
            })
            .collect()
    })
}
