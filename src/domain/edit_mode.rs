//! Edit-Mode Selector
//!
//! Which item, if any, is being composed or edited.

/// The single active edit mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditMode {
    /// Nothing is being edited
    #[default]
    ReadOnly,
    /// A new, not yet persisted item is being composed
    Append,
    /// The existing item with this id is being edited in place
    Item(u32),
}

impl EditMode {
    pub fn is_read_only(&self) -> bool {
        matches!(self, EditMode::ReadOnly)
    }

    /// Check if the row for `id` should render its edit form
    pub fn is_editing(&self, id: u32) -> bool {
        *self == EditMode::Item(id)
    }
}

/// Target accepted when entering edit mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditTarget {
    Append,
    Item(u32),
}

impl From<EditTarget> for EditMode {
    fn from(target: EditTarget) -> Self {
        match target {
            EditTarget::Append => EditMode::Append,
            EditTarget::Item(id) => EditMode::Item(id),
        }
    }
}
