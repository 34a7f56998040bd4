//! Card discovery results → participant lists → attached blocks.
//!
//! DESIGN
//! ======
//! The renderer talks to cards through [`ActivityCard`] so the whole
//! initialization pass runs in native tests against in-memory cards; the
//! `dom` module supplies the web-sys implementation.

use crate::block::{ParticipantsBlock, build_block, build_empty_state};
use crate::fallback::FallbackTable;
use crate::participant::Participant;
use crate::source::InlineParticipants;
use crate::{ACTIVITY_ID_ATTR, PARTICIPANTS_ATTR};

#[cfg(test)]
#[path = "renderer_test.rs"]
mod renderer_test;

/// `document.readyState` value while the page is still parsing.
pub const READY_STATE_LOADING: &str = "loading";

/// Whether initialization must wait for `DOMContentLoaded`.
///
/// Any state other than `"loading"` (`"interactive"`, `"complete"`) means the
/// cards are already in the document.
pub fn waits_for_ready(ready_state: &str) -> bool {
    ready_state == READY_STATE_LOADING
}

/// A page element that can host a participants block.
pub trait ActivityCard {
    type Error;

    /// Value of attribute `name`, if present.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Whether a `.participants` block is already attached.
    fn has_participants_block(&self) -> bool;

    /// Append `block` to the card and wire its toggle.
    fn attach(&mut self, block: &ParticipantsBlock) -> Result<(), Self::Error>;
}

/// Tally of one initialization pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InitReport {
    /// Cards that received a populated block.
    pub populated: usize,
    /// Cards that received the empty state.
    pub empty: usize,
    /// Cards that already carried a block.
    pub skipped: usize,
    /// Cards whose attach call failed.
    pub failed: usize,
}

impl InitReport {
    pub fn rendered(&self) -> usize {
        self.populated + self.empty
    }
}

pub struct ParticipantsRenderer {
    fallback: FallbackTable,
}

impl ParticipantsRenderer {
    pub fn new(fallback: FallbackTable) -> Self {
        Self { fallback }
    }

    pub fn fallback(&self) -> &FallbackTable {
        &self.fallback
    }

    /// Decode the card's inline `data-participants` payload.
    pub fn resolve_participants<C: ActivityCard>(&self, card: &C) -> InlineParticipants {
        InlineParticipants::from_attr(card.attribute(PARTICIPANTS_ATTR).as_deref())
    }

    /// Inline participants, else the fallback entry for the card's activity id, else none.
    ///
    /// An empty `data-activity-id` counts as no id and never hits the table.
    pub fn participants_for_card<C: ActivityCard>(&self, card: &C) -> Vec<Participant> {
        if let Some(list) = self.resolve_participants(card).into_list() {
            return list;
        }
        card.attribute(ACTIVITY_ID_ATTR)
            .filter(|id| !id.is_empty())
            .and_then(|id| self.fallback.get(&id).map(<[Participant]>::to_vec))
            .unwrap_or_default()
    }

    /// Block a card would receive: the empty state when there is nobody to list.
    pub fn block_for_card<C: ActivityCard>(&self, card: &C) -> ParticipantsBlock {
        let participants = self.participants_for_card(card);
        if participants.is_empty() {
            build_empty_state()
        } else {
            build_block(&participants)
        }
    }

    /// Attach a block to every card that does not have one yet.
    ///
    /// A failed attach is passed to `on_error` and counted; remaining cards
    /// are still processed. Running the pass again over the same cards is a
    /// no-op per card, including cards showing the empty state.
    pub fn init_participants<'a, C, I, F>(&self, cards: I, mut on_error: F) -> InitReport
    where
        C: ActivityCard + 'a,
        I: IntoIterator<Item = &'a mut C>,
        F: FnMut(C::Error),
    {
        let mut report = InitReport::default();
        for card in cards {
            if card.has_participants_block() {
                report.skipped += 1;
                continue;
            }
            let block = self.block_for_card(&*card);
            match card.attach(&block) {
                Ok(()) if block.has_toggle() => report.populated += 1,
                Ok(()) => report.empty += 1,
                Err(err) => {
                    report.failed += 1;
                    on_error(err);
                }
            }
        }
        report
    }
}

impl Default for ParticipantsRenderer {
    fn default() -> Self {
        Self::new(FallbackTable::new())
    }
}
