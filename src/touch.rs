//! Two-finger touch tracking.
//!
//! `TouchState` keeps a primary and a secondary slot. The primary slot is
//! claimed on touch-start; the secondary is only filled in once a move event
//! reports two simultaneous contacts. Any touch-end releases both slots, so a
//! gesture always restarts from scratch.

#[cfg(test)]
#[path = "touch_test.rs"]
mod touch_test;

use crate::geometry::Point;

/// Platform identifier of a touch contact.
pub type TouchId = i32;

/// One contact reported by a touch event, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub id: TouchId,
    pub position: Point,
}

impl Contact {
    #[must_use]
    pub fn new(id: TouchId, position: Point) -> Self {
        Self { id, position }
    }
}

/// What the host should do with the originating DOM event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchEffect {
    /// The event was consumed; suppress the browser's scroll/zoom handling.
    SuppressDefault,
    /// Nothing was recorded; leave the event alone.
    Ignored,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TouchSlot {
    pub active: bool,
    pub id: Option<TouchId>,
    /// Last known position; kept after the slot is released.
    pub position: Point,
}

/// Primary and secondary finger state.
#[derive(Debug, Clone, Default)]
pub struct TouchState {
    slots: [TouchSlot; 2],
}

impl TouchState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A finger went down.
    ///
    /// Claims the primary slot unless a different finger already holds it.
    /// A second finger is not recorded here; see [`Self::on_move`].
    pub fn on_start(&mut self, id: TouchId, position: Point) {
        let primary = &mut self.slots[0];
        if primary.active && primary.id != Some(id) {
            log::trace!("touch {id} started while primary is held; waiting for move");
            return;
        }
        *primary = TouchSlot { active: true, id: Some(id), position };
    }

    /// Fingers moved. `contacts` lists the contacts on the target in order.
    ///
    /// Updates the primary position from the first contact and, when two or
    /// more contacts are present, activates the secondary slot from the second.
    pub fn on_move(&mut self, contacts: &[Contact]) -> TouchEffect {
        let Some(first) = contacts.first() else {
            log::trace!("touch move without contacts ignored");
            return TouchEffect::Ignored;
        };
        self.slots[0].position = first.position;
        self.slots[0].id = Some(first.id);
        if let Some(second) = contacts.get(1) {
            self.slots[1] = TouchSlot { active: true, id: Some(second.id), position: second.position };
        }
        TouchEffect::SuppressDefault
    }

    /// Any finger lifted: release both slots.
    pub fn on_end(&mut self) {
        for slot in &mut self.slots {
            slot.active = false;
        }
    }

    // --- Queries ---

    /// Position of the primary finger while it is down.
    #[must_use]
    pub fn primary(&self) -> Option<Point> {
        self.slots[0].active.then_some(self.slots[0].position)
    }

    /// Position of the secondary finger while both fingers are down.
    #[must_use]
    pub fn secondary(&self) -> Option<Point> {
        (self.slots[0].active && self.slots[1].active).then_some(self.slots[1].position)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.slots[0].active
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        match (self.primary(), self.secondary()) {
            (None, _) => 0,
            (Some(_), None) => 1,
            (Some(_), Some(_)) => 2,
        }
    }

    #[must_use]
    pub fn slots(&self) -> &[TouchSlot; 2] {
        &self.slots
    }
}
