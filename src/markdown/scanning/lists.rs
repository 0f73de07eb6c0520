//! List depth tracking
//!
//!     List items are emitted flat; their weight is the nesting depth derived from the
//!     indentation of consecutive items. The stack holds the indentation of each open
//!     level. An item indented at least one unit past the innermost level opens a new
//!     one; an item less indented than a level closes it.

#[derive(Debug, Clone)]
pub struct ListIndentation {
    unit: usize,
    levels: Vec<usize>,
}

impl ListIndentation {
    pub fn new(unit: usize) -> Self {
        ListIndentation {
            unit: unit.max(1),
            levels: Vec::new(),
        }
    }

    /// Depth (1-based) of an item with `indent` leading spaces.
    pub fn depth(&mut self, indent: usize) -> u32 {
        while self.levels.last().is_some_and(|&top| top > indent) {
            self.levels.pop();
        }
        match self.levels.last() {
            Some(&top) if indent < top + self.unit => {}
            _ => self.levels.push(indent),
        }
        self.levels.len() as u32
    }

    pub fn reset(&mut self) {
        self.levels.clear();
    }
}
