//! Clipboard access.
//!
//! The clipboard is shared by every document in the session and is treated as opaque text:
//! whoever writes last wins. Hosts that have a system clipboard implement [`Clipboard`] over it;
//! [`LocalClipboard`] is an in-process implementation whose clones all share one slot.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Text clipboard used by cut, copy and paste.
pub trait Clipboard: fmt::Debug {
    /// Current clipboard text, if any.
    fn get_text(&self) -> Option<String>;
    /// Replace the clipboard text.
    fn set_text(&mut self, text: String);
}

/// In-process clipboard. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct LocalClipboard {
    slot: Rc<RefCell<Option<String>>>,
}

impl LocalClipboard {
    /// Create an empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for LocalClipboard {
    fn get_text(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn set_text(&mut self, text: String) {
        *self.slot.borrow_mut() = Some(text);
    }
}
