//! Structural tool equality

use crate::tool::Tool;
use tracing::trace;

/// Whether two tools are the same type with equal parameters and parts
///
/// Tools of different concrete types are never equal, even when their
/// geometry coincides (an end mill and a bull mill with zero radius).
pub fn compare_tools(a: &Tool, b: &Tool) -> bool {
    if a.tool_type() != b.tool_type() {
        trace!(left = %a.tool_type(), right = %b.tool_type(), "tool types differ");
        return false;
    }
    a == b
}

/// Equality predicate for tool collections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolComparator;

impl ToolComparator {
    /// Create a comparator
    pub fn new() -> Self {
        Self
    }

    /// Same as [`compare_tools`]
    pub fn equal(&self, a: &Tool, b: &Tool) -> bool {
        compare_tools(a, b)
    }

    /// Whether `tools` holds a tool equal to `tool`
    pub fn contains(&self, tools: &[Tool], tool: &Tool) -> bool {
        tools.iter().any(|t| self.equal(t, tool))
    }
}
