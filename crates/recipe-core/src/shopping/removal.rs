//! Remove-with-confirmation guard
//!
//! Decreasing an item at quantity 1 arms a short window for that display
//! index and item; a second decrease inside the window removes it only if the
//! same item still sits at that index. Timestamps are milliseconds supplied by
//! the caller.

use serde::{Deserialize, Serialize};

pub const DEFAULT_REMOVAL_WINDOW_MS: u64 = 2000;

/// Identifies one arming. A disarm carrying an older ticket is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemovalTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    index: usize,
    /// Normalized name of the armed item; the list may reorder under the index
    name: String,
    armed_at: u64,
    ticket: RemovalTicket,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalGuard {
    window_ms: u64,
    pending: Option<Pending>,
    next_ticket: u64,
}

impl Default for RemovalGuard {
    fn default() -> Self {
        Self::new(DEFAULT_REMOVAL_WINDOW_MS)
    }
}

impl RemovalGuard {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            pending: None,
            next_ticket: 0,
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Display index currently waiting for its second tap
    pub fn pending_index(&self) -> Option<usize> {
        self.pending.as_ref().map(|p| p.index)
    }

    /// Arm `index` for the item `name`, replacing whatever was pending
    pub fn arm(&mut self, index: usize, name: &str, now_ms: u64) -> RemovalTicket {
        self.next_ticket += 1;
        let ticket = RemovalTicket(self.next_ticket);
        self.pending = Some(Pending {
            index,
            name: name.to_string(),
            armed_at: now_ms,
            ticket,
        });
        ticket
    }

    /// Whether a tap on `index` (showing `name`) at `now_ms` is the
    /// confirming second tap
    pub fn confirms(&self, index: usize, name: &str, now_ms: u64) -> bool {
        self.pending.as_ref().is_some_and(|p| {
            p.index == index
                && p.name == name
                && now_ms.saturating_sub(p.armed_at) < self.window_ms
        })
    }

    pub fn disarm(&mut self) {
        self.pending = None;
    }

    /// Timer callback: disarm only if `ticket` is still the live arming
    pub fn expire(&mut self, ticket: RemovalTicket) -> bool {
        if self.pending.as_ref().is_some_and(|p| p.ticket == ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

/// Per-page UI session state handed to the engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingSession {
    /// Recipe cards show ingredient checkboxes while on
    pub shopping_mode: bool,
    pub removal: RemovalGuard,
}

impl ShoppingSession {
    pub fn new(removal_window_ms: u64) -> Self {
        Self {
            shopping_mode: false,
            removal: RemovalGuard::new(removal_window_ms),
        }
    }

    pub fn toggle_shopping_mode(&mut self) -> bool {
        self.shopping_mode = !self.shopping_mode;
        self.shopping_mode
    }
}
