//! ==============================================================================
//! toast.rs - transient notification queue
//! ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// notifications currently on screen, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastList {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastList {
    pub fn new() -> Self {
        Self::default()
    }

    /// add a toast and return its id for later dismissal
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, kind, message: message.into() });
        id
    }

    /// no-op when the toast is already gone
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn count(&self, kind: ToastKind) -> usize {
        self.items.iter().filter(|t| t.kind == kind).count()
    }
}
