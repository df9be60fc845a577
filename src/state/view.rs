/// Number of entries shown before the expand toggle kicks in.
pub const VISIBLE_CAP: usize = 5;

/// Presentation capping for hearing/order collections.
///
/// Collections longer than [`VISIBLE_CAP`] start collapsed with an explicit
/// show-all toggle. Capping is purely presentational: the full ordered
/// collection stays addressable throughout.
#[derive(Debug, Clone)]
pub struct CappedList<T> {
    items: Vec<T>,
    expanded: bool,
}

impl<T> CappedList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, expanded: false }
    }

    /// The currently visible slice, in original order.
    pub fn visible(&self) -> &[T] {
        if self.expanded || self.items.len() <= VISIBLE_CAP {
            &self.items
        } else {
            &self.items[..VISIBLE_CAP]
        }
    }

    /// The full collection, regardless of toggle state.
    pub fn all(&self) -> &[T] {
        &self.items
    }

    /// Whether a show-all/show-less control should be offered.
    pub fn has_toggle(&self) -> bool {
        self.items.len() > VISIBLE_CAP
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn hidden_count(&self) -> usize {
        self.items.len() - self.visible().len()
    }
}
