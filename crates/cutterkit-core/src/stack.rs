//! Bottom-up stacking of tool parts
//!
//! Parts are walked from the tip upwards. Every part is placed on the running
//! top of the stack and always grows the stack box, but only grows the result
//! box when its role is selected. A holder-only query therefore still knows
//! where the holder starts.

use crate::geometry::BoundingBox3d;
use crate::part::{PartRole, ToolPartFlags};
use nalgebra::Vector3;

/// Two-box part stacker
#[derive(Debug, Clone)]
pub struct PartStack {
    selection: ToolPartFlags,
    stack: BoundingBox3d,
    selected: BoundingBox3d,
}

impl PartStack {
    /// Start an empty stack with the tip at z = 0
    pub fn new(selection: ToolPartFlags) -> Self {
        Self {
            selection,
            stack: BoundingBox3d::empty(),
            selected: BoundingBox3d::empty(),
        }
    }

    /// Current top of the stack along the tool axis
    pub fn top(&self) -> f64 {
        self.stack.max().map_or(0.0, |p| p.z)
    }

    /// Place a part box on top of the stack, returning the offset it was placed at
    ///
    /// Empty boxes leave the stack unchanged.
    pub fn push(&mut self, role: PartRole, part_box: &BoundingBox3d) -> f64 {
        let offset = self.top();
        if let Some(min) = part_box.min() {
            let placed = part_box.translated(Vector3::new(0.0, 0.0, offset - min.z));
            self.stack.enlarge(&placed);
            if self.selection.selects(role) {
                self.selected.enlarge(&placed);
            }
        }
        offset
    }

    /// Box of every stacked part regardless of selection
    pub fn stack_box(&self) -> BoundingBox3d {
        self.stack
    }

    /// Box of the selected parts
    pub fn bounding_box(&self) -> BoundingBox3d {
        self.selected
    }
}

/// Stack `(role, box)` pairs bottom-up and return the box of the selected roles
pub fn stack_bounding_box<I>(selection: ToolPartFlags, parts: I) -> BoundingBox3d
where
    I: IntoIterator<Item = (PartRole, BoundingBox3d)>,
{
    let mut stack = PartStack::new(selection);
    for (role, bb) in parts {
        stack.push(role, &bb);
    }
    stack.bounding_box()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts() -> Vec<(PartRole, BoundingBox3d)> {
        vec![
            (PartRole::Cutting, BoundingBox3d::revolved(5.0, 0.0, 30.0)),
            (PartRole::NonCutting, BoundingBox3d::revolved(5.0, 0.0, 20.0)),
            (PartRole::Arbor, BoundingBox3d::revolved(8.0, 0.0, 15.0)),
            (PartRole::Holder, BoundingBox3d::revolved(20.0, 0.0, 40.0)),
        ]
    }

    #[test]
    fn test_holder_only_is_positioned_above_the_rest() {
        let bb = stack_bounding_box(ToolPartFlags::HOLDER, parts());
        assert_eq!(bb.min().map(|p| p.z), Some(65.0));
        assert_eq!(bb.max().map(|p| p.z), Some(105.0));
        assert_eq!(bb.size_x(), 40.0);
    }

    #[test]
    fn test_union_decomposability() {
        let all = stack_bounding_box(ToolPartFlags::ALL, parts());
        let union = [
            ToolPartFlags::CUTTING,
            ToolPartFlags::NON_CUTTING,
            ToolPartFlags::ARBOR,
            ToolPartFlags::HOLDER,
        ]
        .iter()
        .map(|flag| stack_bounding_box(*flag, parts()))
        .fold(BoundingBox3d::empty(), |acc, bb| acc.union(&bb));
        assert_eq!(all, union);
        assert_eq!(all.size_z(), 105.0);
    }

    #[test]
    fn test_empty_parts_do_not_move_the_stack() {
        let mut stack = PartStack::new(ToolPartFlags::ALL);
        stack.push(PartRole::Cutting, &BoundingBox3d::revolved(5.0, 0.0, 10.0));
        let offset = stack.push(PartRole::NonCutting, &BoundingBox3d::empty());
        assert_eq!(offset, 10.0);
        assert_eq!(stack.top(), 10.0);
    }

    #[test]
    fn test_parts_not_starting_at_zero_are_rebased() {
        let mut stack = PartStack::new(ToolPartFlags::ALL);
        stack.push(PartRole::Cutting, &BoundingBox3d::revolved(5.0, 0.0, 10.0));
        let offset = stack.push(PartRole::Arbor, &BoundingBox3d::revolved(5.0, 100.0, 110.0));
        assert_eq!(offset, 10.0);
        assert_eq!(stack.top(), 20.0);
    }
}
