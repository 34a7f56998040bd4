//! Participants block model and its node-tree rendering.
//!
//! A card gets one of two shapes: a populated block with header, toggle and
//! one row per participant, or an empty-state block with a single
//! informational row and no toggle.

use serde::Serialize;

use crate::BLOCK_CLASS;
use crate::node::{Element, Node};
use crate::participant::Participant;
use crate::toggle::{COLLAPSED_CLASS, ToggleState};

#[cfg(test)]
#[path = "block_test.rs"]
mod block_test;

pub const TITLE: &str = "Participants";
pub const EMPTY_MESSAGE: &str = "No one signed up yet";

pub const HEADER_CLASS: &str = "participants-header";
pub const TITLE_CLASS: &str = "participants-title";
pub const COUNT_CLASS: &str = "participants-count";
pub const TOGGLE_CLASS: &str = "participants-toggle";
pub const LIST_CLASS: &str = "participants-list";
pub const AVATAR_CLASS: &str = "participant-avatar";
pub const NAME_CLASS: &str = "participant-name";

const EMPTY_ROW_STYLE: &str = "margin-top:8px;color:#666;font-size:13px";

/// Avatar region of one row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Avatar {
    Image { src: String, alt: String },
    Initials { text: String },
}

/// One participant row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Row {
    pub avatar: Avatar,
    pub name: String,
}

impl Row {
    pub fn from_participant(p: &Participant) -> Self {
        let avatar = match p.avatar_url.as_deref() {
            Some(src) => Avatar::Image {
                src: src.to_owned(),
                alt: p.avatar_alt().to_owned(),
            },
            None => Avatar::Initials { text: p.initials() },
        };
        Self {
            avatar,
            name: p.display_name().to_owned(),
        }
    }

    fn to_node(&self) -> Element {
        let avatar = Element::new("span").class(AVATAR_CLASS);
        let avatar = match &self.avatar {
            Avatar::Image { src, alt } => avatar.child(
                Element::new("img")
                    .attr("src", src.as_str())
                    .attr("alt", alt.as_str()),
            ),
            Avatar::Initials { text } => avatar.text(text.as_str()),
        };
        Element::new("li")
            .child(avatar)
            .child(Element::new("span").class(NAME_CLASS).text(self.name.as_str()))
    }
}

/// The fragment attached to an activity card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ParticipantsBlock {
    Populated { rows: Vec<Row>, state: ToggleState },
    Empty,
}

/// Populated block for `participants`, initially expanded.
///
/// An empty slice still yields a populated block with count 0; the renderer
/// chooses [`build_empty_state`] for empty lists.
pub fn build_block(participants: &[Participant]) -> ParticipantsBlock {
    ParticipantsBlock::Populated {
        rows: participants.iter().map(Row::from_participant).collect(),
        state: ToggleState::EXPANDED,
    }
}

/// Header with count 0 and a single informational row.
pub fn build_empty_state() -> ParticipantsBlock {
    ParticipantsBlock::Empty
}

impl ParticipantsBlock {
    /// Number shown in the header count label.
    pub fn count(&self) -> usize {
        match self {
            Self::Populated { rows, .. } => rows.len(),
            Self::Empty => 0,
        }
    }

    pub fn has_toggle(&self) -> bool {
        matches!(self, Self::Populated { .. })
    }

    pub fn rows(&self) -> &[Row] {
        match self {
            Self::Populated { rows, .. } => rows,
            Self::Empty => &[],
        }
    }

    /// Render to the node tree attached under the card.
    pub fn to_node(&self) -> Element {
        let header = Element::new("div")
            .class(HEADER_CLASS)
            .child(Element::new("div").class(TITLE_CLASS).text(TITLE))
            .child(Element::new("div").class(COUNT_CLASS).text(self.count().to_string()));

        match self {
            Self::Populated { rows, state } => {
                let toggle = Element::new("button")
                    .attr("type", "button")
                    .class(TOGGLE_CLASS)
                    .attr("aria-expanded", state.aria_expanded())
                    .text(state.label());
                let list = rows
                    .iter()
                    .fold(Element::new("ul").class(LIST_CLASS), |list, row| {
                        list.child(row.to_node())
                    });
                let class = if state.collapsed {
                    format!("{BLOCK_CLASS} {COLLAPSED_CLASS}")
                } else {
                    BLOCK_CLASS.to_owned()
                };
                Element::new("div")
                    .attr("class", class)
                    .child(header.child(toggle))
                    .child(list)
            }
            Self::Empty => Element::new("div").class(BLOCK_CLASS).child(header).child(
                Element::new("div")
                    .class(LIST_CLASS)
                    .attr("style", EMPTY_ROW_STYLE)
                    .text(EMPTY_MESSAGE),
            ),
        }
    }

    /// HTML for server-side pre-render.
    pub fn to_html(&self) -> String {
        Node::from(self.to_node()).to_html()
    }
}
