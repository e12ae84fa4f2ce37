//! Static catalog of serveable models

use serde::Serialize;

/// Metadata for one serveable model
#[derive(Debug, Clone, Serialize)]
pub struct ModelDescriptor {
    /// Canonical model id
    pub id: &'static str,
    /// Alternate names accepted in requests
    pub aliases: &'static [&'static str],
    /// Context window in tokens
    pub context_window: u32,
    /// Input price per million tokens, USD
    pub input_per_mtok: f64,
    /// Output price per million tokens, USD
    pub output_per_mtok: f64,
}

/// Models the adapter advertises; pricing mirrors the provider's published
/// per-mtok rates
const MODELS: &[ModelDescriptor] = &[
    ModelDescriptor {
        id: "claude-opus-4-1-20250805",
        aliases: &["claude-opus-4-1", "opus"],
        context_window: 200_000,
        input_per_mtok: 15.0,
        output_per_mtok: 75.0,
    },
    ModelDescriptor {
        id: "claude-sonnet-4-20250514",
        aliases: &["claude-sonnet-4", "sonnet"],
        context_window: 200_000,
        input_per_mtok: 3.0,
        output_per_mtok: 15.0,
    },
    ModelDescriptor {
        id: "claude-3-5-haiku-20241022",
        aliases: &["claude-3-5-haiku", "haiku"],
        context_window: 200_000,
        input_per_mtok: 0.8,
        output_per_mtok: 4.0,
    },
];

/// Full descriptor list
pub const fn descriptors() -> &'static [ModelDescriptor] {
    MODELS
}

/// Ids and aliases flattened into one name list
pub fn names() -> Vec<String> {
    MODELS
        .iter()
        .flat_map(|model| std::iter::once(model.id).chain(model.aliases.iter().copied()))
        .map(str::to_owned)
        .collect()
}
