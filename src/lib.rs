//! Participants widget for activity cards.
//!
//! Reads a participant list for every `.activity-card` on the page (inline
//! `data-participants` JSON, or a fallback table keyed by
//! `data-activity-id`), appends a `.participants` block with a header, count
//! and show/hide toggle, and wires the toggle.
//!
//! The crate builds in two shapes. Without features it is the pure core:
//! decoding, block construction, the node tree and the toggle state machine,
//! all testable without a browser. With `hydrate` it also compiles the
//! web-sys binding that attaches blocks to the live document.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`participant`] | Participant record, lenient decoding, initials |
//! | [`source`] | Inline attribute decoding as an explicit outcome |
//! | [`fallback`] | Immutable activity id → participants table |
//! | [`block`] | Populated / empty-state block model |
//! | [`node`] | Serializable node tree and HTML serialization |
//! | [`toggle`] | Collapse state machine |
//! | [`renderer`] | `ParticipantsRenderer` and the card host trait |
//! | `dom` | web-sys card host and event wiring (`hydrate` only) |

pub mod block;
pub mod fallback;
pub mod node;
pub mod participant;
pub mod renderer;
pub mod source;
pub mod toggle;

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
mod entry;

pub use block::ParticipantsBlock;
pub use fallback::{ConfigError, FallbackTable};
pub use participant::{Participant, resolve_initials};
pub use renderer::{ActivityCard, InitReport, ParticipantsRenderer};
pub use source::{InlineDataError, InlineParticipants};
pub use toggle::ToggleState;

/// Marker class identifying an activity card.
pub const CARD_CLASS: &str = "activity-card";
/// Class of the generated block; its presence marks a card as rendered.
pub const BLOCK_CLASS: &str = "participants";
/// Attribute carrying the inline JSON participant list.
pub const PARTICIPANTS_ATTR: &str = "data-participants";
/// Attribute carrying the activity identifier used for fallback lookup.
pub const ACTIVITY_ID_ATTR: &str = "data-activity-id";
