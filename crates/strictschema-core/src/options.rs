//! Generation options.
//!
//! Built once per top-level call and read-only during traversal. The
//! defaults target OpenAI strict mode, which requires
//! `additionalProperties: false` on every object schema:
//! <https://platform.openai.com/docs/guides/structured-outputs#additionalproperties-false-must-always-be-set-in-objects>

/// Default ceiling on recursive nesting. Generous enough for any sane
/// response shape while still bounding worst-case recursion.
pub const DEFAULT_MAX_DEPTH: usize = 50;

/// Configuration for one schema generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaOptions {
    /// Whether generated object schemas permit properties beyond the
    /// declared set. Strict mode requires `false`.
    pub allow_additional_properties: bool,

    /// Maximum nesting depth; arrays and objects each count as one level.
    pub max_depth: usize,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self {
            allow_additional_properties: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
