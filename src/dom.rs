//! Browser binding: web-sys cards, node materialization and toggle wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here runs only in the `hydrate` build. The renderer decides
//! what each card gets; this module turns the resulting node tree into live
//! elements, appends it, and installs one click listener per populated
//! block. Each listener owns its block's [`ToggleState`] and touches nothing
//! outside that block.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element as DomElement};

use crate::block::{ParticipantsBlock, TOGGLE_CLASS};
use crate::fallback::{FALLBACK_SCRIPT_ID, FallbackTable};
use crate::node::{Element, Node};
use crate::renderer::{ActivityCard, InitReport, ParticipantsRenderer};
use crate::toggle::{COLLAPSED_CLASS, ToggleState, toggle};
use crate::{BLOCK_CLASS, CARD_CLASS};

/// Failure of a DOM operation.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no window or document available")]
    NoDocument,
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// The current window's document.
///
/// # Errors
///
/// Returns [`DomError::NoDocument`] outside a browser window.
pub fn document() -> Result<Document, DomError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(DomError::NoDocument)
}

/// A live `.activity-card` element.
pub struct DomCard {
    document: Document,
    element: DomElement,
}

impl DomCard {
    pub fn new(document: Document, element: DomElement) -> Self {
        Self { document, element }
    }
}

impl ActivityCard for DomCard {
    type Error = DomError;

    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn has_participants_block(&self) -> bool {
        matches!(
            self.element.query_selector(&format!(".{BLOCK_CLASS}")),
            Ok(Some(_))
        )
    }

    fn attach(&mut self, block: &ParticipantsBlock) -> Result<(), DomError> {
        let root = materialize(&self.document, &block.to_node())?;
        self.element.append_child(&root)?;
        if let ParticipantsBlock::Populated { state, .. } = block {
            wire_toggle(&root, *state)?;
        }
        Ok(())
    }
}

/// All `.activity-card` elements in document order.
///
/// # Errors
///
/// Returns `Err` if the selector query is rejected.
pub fn discover_cards(document: &Document) -> Result<Vec<DomCard>, DomError> {
    let list = document.query_selector_all(&format!(".{CARD_CLASS}"))?;
    let mut cards = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        let Some(node) = list.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<DomElement>() else {
            continue;
        };
        cards.push(DomCard::new(document.clone(), element));
    }
    Ok(cards)
}

/// Read the fallback table embedded in the page, if any.
///
/// A missing script yields an empty table; an unreadable one is logged and
/// also yields an empty table.
pub fn load_fallback(document: &Document) -> FallbackTable {
    let Some(raw) = document
        .get_element_by_id(FALLBACK_SCRIPT_ID)
        .and_then(|script| script.text_content())
    else {
        return FallbackTable::new();
    };
    match FallbackTable::from_json(&raw) {
        Ok(table) => table,
        Err(err) => {
            log::warn!("participants: ignoring #{FALLBACK_SCRIPT_ID}: {err}");
            FallbackTable::new()
        }
    }
}

/// Run one initialization pass over the current document.
///
/// Per-card attach failures are logged and counted in the report.
///
/// # Errors
///
/// Returns `Err` if there is no document or card discovery fails.
pub fn init_document(renderer: &ParticipantsRenderer) -> Result<InitReport, DomError> {
    let document = document()?;
    let mut cards = discover_cards(&document)?;
    let report = renderer.init_participants(cards.iter_mut(), |err| {
        log::warn!("participants: failed to attach block: {err}");
    });
    log::debug!(
        "participants: {} populated, {} empty, {} skipped, {} failed",
        report.populated,
        report.empty,
        report.skipped,
        report.failed
    );
    Ok(report)
}

fn materialize(document: &Document, el: &Element) -> Result<DomElement, DomError> {
    let dom = document.create_element(el.tag)?;
    for (name, value) in &el.attrs {
        dom.set_attribute(name, value)?;
    }
    for child in &el.children {
        match child {
            Node::Element(child) => {
                let child = materialize(document, child)?;
                dom.append_child(&child)?;
            }
            Node::Text { text } => {
                let text = document.create_text_node(text);
                dom.append_child(&text)?;
            }
        }
    }
    Ok(dom)
}

fn wire_toggle(container: &DomElement, initial: ToggleState) -> Result<(), DomError> {
    let Some(button) = container.query_selector(&format!(".{TOGGLE_CLASS}"))? else {
        return Ok(());
    };
    let state = Rc::new(Cell::new(initial));
    let container = container.clone();
    let target = button.clone();
    let on_click = Closure::wrap(Box::new(move || {
        let next = toggle(state.get());
        state.set(next);
        if let Err(err) = apply_toggle(&container, &target, next) {
            log::warn!("participants: toggle failed: {err}");
        }
    }) as Box<dyn FnMut()>);
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    // The listener lives as long as the block, which lives as long as the page.
    on_click.forget();
    Ok(())
}

fn apply_toggle(container: &DomElement, button: &DomElement, state: ToggleState) -> Result<(), DomError> {
    container
        .class_list()
        .toggle_with_force(COLLAPSED_CLASS, state.collapsed)?;
    button.set_text_content(Some(state.label()));
    button.set_attribute("aria-expanded", state.aria_expanded())?;
    Ok(())
}
