//! Tool library
//!
//! Keyed collection of tools with a running tool number. Queries return
//! entries ordered by tool number.

use crate::tool::Tool;
use crate::types::{ToolBranch, ToolType};
use cutterkit_core::Measurable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Unique tool identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ToolId(pub String);

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ToolId {
    fn from(id: &str) -> Self {
        ToolId(id.to_string())
    }
}

impl From<String> for ToolId {
    fn from(id: String) -> Self {
        ToolId(id)
    }
}

/// A tool stored in a library
#[derive(Debug, Clone, PartialEq)]
pub struct ToolEntry {
    /// Identifier
    pub id: ToolId,
    /// Tool number (T word)
    pub number: u32,
    /// Display name
    pub name: String,
    /// Tool geometry
    pub tool: Tool,
}

impl ToolEntry {
    /// Create an entry from anything convertible to an id and a name
    pub fn new(id: impl Into<ToolId>, number: u32, name: impl Into<String>, tool: Tool) -> Self {
        Self {
            id: id.into(),
            number,
            name: name.into(),
            tool,
        }
    }

    /// One line summary: name, type and diameter
    pub fn description_short(&self) -> String {
        format!(
            "T{} {} - {} dia {} ({})",
            self.number,
            self.name,
            self.tool.tool_type(),
            self.tool.tool_diameter(),
            self.tool.units()
        )
    }
}

/// Tools keyed by id
///
/// Tracks the number after the highest one added so far, saturating at
/// `u32::MAX`.
#[derive(Debug, Clone)]
pub struct ToolLibrary {
    tools: HashMap<ToolId, ToolEntry>,
    next_tool_number: u32,
}

impl ToolLibrary {
    /// Empty library, numbering from 1
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            next_tool_number: 1,
        }
    }

    /// Add or replace an entry, returning the entry it replaced
    pub fn add_tool(&mut self, entry: ToolEntry) -> Option<ToolEntry> {
        if entry.number >= self.next_tool_number {
            self.next_tool_number = entry.number.saturating_add(1);
        }
        debug!(
            id = %entry.id,
            number = entry.number,
            tool_type = %entry.tool.tool_type(),
            "adding tool"
        );
        self.tools.insert(entry.id.clone(), entry)
    }

    /// Entry with the given id
    pub fn get_tool(&self, id: &ToolId) -> Option<&ToolEntry> {
        self.tools.get(id)
    }

    /// Mutable entry with the given id
    pub fn get_tool_mut(&mut self, id: &ToolId) -> Option<&mut ToolEntry> {
        self.tools.get_mut(id)
    }

    /// Remove an entry, returning it
    pub fn remove_tool(&mut self, id: &ToolId) -> Option<ToolEntry> {
        self.tools.remove(id)
    }

    /// Every entry
    pub fn get_all_tools(&self) -> Vec<&ToolEntry> {
        self.filtered(|_| true)
    }

    /// Entries of one concrete tool type
    pub fn get_tools_by_type(&self, tool_type: ToolType) -> Vec<&ToolEntry> {
        self.filtered(|e| e.tool.tool_type() == tool_type)
    }

    /// Entries of one structural family
    pub fn get_tools_by_branch(&self, branch: ToolBranch) -> Vec<&ToolEntry> {
        self.filtered(|e| e.tool.branch() == branch)
    }

    /// Case insensitive substring match on the name
    pub fn search_by_name(&self, query: &str) -> Vec<&ToolEntry> {
        let query_lower = query.to_lowercase();
        self.filtered(|e| e.name.to_lowercase().contains(&query_lower))
    }

    /// Tools whose cutting diameter lies in `[min, max]`
    pub fn search_by_diameter(&self, min: f64, max: f64) -> Vec<&ToolEntry> {
        self.filtered(|e| {
            let d = e.tool.tool_diameter();
            d >= min && d <= max
        })
    }

    /// Number a new entry should take
    pub fn next_tool_number(&self) -> u32 {
        self.next_tool_number
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the library has no entries
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    fn filtered(&self, pred: impl Fn(&ToolEntry) -> bool) -> Vec<&ToolEntry> {
        let mut entries: Vec<&ToolEntry> = self.tools.values().filter(|e| pred(e)).collect();
        entries.sort_by(|a, b| a.number.cmp(&b.number).then_with(|| a.id.cmp(&b.id)));
        entries
    }
}

impl Default for ToolLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revolved::{Drill, EndMill};
    use crate::shaft::ShaftGeometry;
    use crate::wire::WireTool;
    use cutterkit_core::Units;

    fn end_mill(diameter: f64) -> Tool {
        let shaft = ShaftGeometry::cylindrical(diameter, 20.0, 40.0, Units::Metric).unwrap();
        Tool::EndMill(EndMill::new(shaft))
    }

    fn drill(diameter: f64) -> Tool {
        let shaft = ShaftGeometry::cylindrical(diameter, 30.0, 50.0, Units::Metric).unwrap();
        Tool::Drill(Drill::new(shaft, 118.0).unwrap())
    }

    fn library() -> ToolLibrary {
        let mut library = ToolLibrary::new();
        library.add_tool(ToolEntry::new("em6", 1, "6mm Flat End Mill", end_mill(6.0)));
        library.add_tool(ToolEntry::new("em3", 2, "3mm Flat End Mill", end_mill(3.0)));
        library.add_tool(ToolEntry::new("dr5", 5, "5mm Drill", drill(5.0)));
        library.add_tool(ToolEntry::new("wire", 3, "Wire", Tool::Wire(WireTool::default())));
        library
    }

    #[test]
    fn test_add_and_get() {
        let library = library();
        assert_eq!(library.len(), 4);
        assert!(!library.is_empty());
        assert_eq!(library.next_tool_number(), 6);
        let entry = library.get_tool(&ToolId::from("dr5")).unwrap();
        assert_eq!(entry.tool.tool_type(), ToolType::Drill);
    }

    #[test]
    fn test_next_number_saturates() {
        let mut library = library();
        library.add_tool(ToolEntry::new("last", u32::MAX, "Last slot", end_mill(4.0)));
        assert_eq!(library.next_tool_number(), u32::MAX);
        assert_eq!(library.len(), 5);
    }

    #[test]
    fn test_replace_and_remove() {
        let mut library = library();
        let old = library.add_tool(ToolEntry::new("em6", 1, "6mm Rough", end_mill(6.0)));
        assert_eq!(old.map(|e| e.name), Some("6mm Flat End Mill".to_string()));
        assert_eq!(library.len(), 4);
        assert!(library.remove_tool(&ToolId::from("em6")).is_some());
        assert!(library.get_tool(&ToolId::from("em6")).is_none());
    }

    #[test]
    fn test_queries() {
        let library = library();
        let numbers: Vec<u32> = library.get_all_tools().iter().map(|e| e.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 5]);
        assert_eq!(library.get_tools_by_type(ToolType::EndMill).len(), 2);
        assert_eq!(library.get_tools_by_branch(ToolBranch::Revolved).len(), 3);
        assert_eq!(library.get_tools_by_branch(ToolBranch::Wire).len(), 1);
        assert_eq!(library.search_by_name("end mill").len(), 2);
        let mid: Vec<&str> = library
            .search_by_diameter(4.0, 6.0)
            .iter()
            .map(|e| e.id.0.as_str())
            .collect();
        assert_eq!(mid, vec!["em6", "dr5"]);
    }

    #[test]
    fn test_mutate_entry() {
        let mut library = library();
        library.get_tool_mut(&ToolId::from("em3")).unwrap().name = "Finisher".to_string();
        assert_eq!(library.search_by_name("finish").len(), 1);
    }

    #[test]
    fn test_description_short() {
        let entry = ToolEntry::new("em6", 1, "Rougher", end_mill(6.0));
        assert_eq!(entry.description_short(), "T1 Rougher - End Mill dia 6 (Metric)");
    }
}
