use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tool definition in any of the accepted calling conventions
///
/// Variant order implements dispatch priority: a tool carrying a top-level
/// `input_schema` is a native descriptor even when it also carries
/// `type: "function"`; otherwise the nested convention wins; anything else
/// is read as the bare shorthand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolShape {
    /// Provider-native descriptor with a top-level `input_schema`
    Native(NativeTool),
    /// `{ "type": "function", "function": { ... } }` convention
    Nested(NestedTool),
    /// Bare function descriptor shorthand
    Bare(FunctionShape),
}

/// Descriptor carrying the provider-native `input_schema` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeTool {
    /// Function name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Wins over `input_schema` when both are present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
    /// JSON Schema for the function input
    pub input_schema: Value,
}

/// Wrapper used by the nested convention
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedTool {
    /// Wrapper type tag
    #[serde(rename = "type")]
    pub tool_type: FunctionTag,
    /// Function fields
    pub function: FunctionShape,
}

/// Function fields common to all conventions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionShape {
    /// Function name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema for the function parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
    /// Alternate schema field accepted in place of `parameters`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<Value>,
}

/// Canonical tool definition
///
/// Matches the peer-ecosystem `"function"` convention, so projecting to
/// that convention is the identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Always `"function"`
    #[serde(rename = "type")]
    pub tool_type: FunctionTag,
    /// Function specification
    pub function: FunctionDefinition,
}

/// Canonical function specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    /// Function name, copied through only when supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description, copied through only when supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Always present; defaults to `{ "type": "object" }`
    pub parameters: Value,
}

/// Tag pinning a wrapper to `"type": "function"`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FunctionTag {
    /// The only admitted value
    #[default]
    #[serde(rename = "function")]
    Function,
}
