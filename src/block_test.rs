use super::*;
use crate::source::InlineParticipants;

fn example_block() -> ParticipantsBlock {
    let raw = r#"[{"name":"Alice Lee"},{"name":"Bob Smith","avatarUrl":"x.png"}]"#;
    let participants = InlineParticipants::from_attr(Some(raw))
        .into_list()
        .unwrap_or_default();
    build_block(&participants)
}

fn list_items(root: &Element) -> Vec<&Element> {
    root.find_class(LIST_CLASS)
        .map(|list| list.elements().collect())
        .unwrap_or_default()
}

// =============================================================
// Populated block
// =============================================================

#[test]
fn count_matches_participants() {
    let block = example_block();
    assert_eq!(block.count(), 2);
    let root = block.to_node();
    assert_eq!(
        root.find_class(COUNT_CLASS).map(Element::text_content).as_deref(),
        Some("2")
    );
}

#[test]
fn header_has_title_count_and_toggle() {
    let root = example_block().to_node();
    assert!(root.has_class("participants"));
    let header = root.find_class(HEADER_CLASS).map(|h| h.elements().count());
    assert_eq!(header, Some(3));
    assert_eq!(
        root.find_class(TITLE_CLASS).map(Element::text_content).as_deref(),
        Some("Participants")
    );
}

#[test]
fn toggle_starts_expanded() {
    let root = example_block().to_node();
    assert!(!root.has_class("collapsed"));
    let toggle = root.find_class(TOGGLE_CLASS);
    assert_eq!(toggle.map(|t| t.tag), Some("button"));
    assert_eq!(toggle.and_then(|t| t.get_attr("type")), Some("button"));
    assert_eq!(toggle.and_then(|t| t.get_attr("aria-expanded")), Some("true"));
    assert_eq!(toggle.map(Element::text_content).as_deref(), Some("Hide"));
}

#[test]
fn rows_follow_input_order() {
    let root = example_block().to_node();
    let items = list_items(&root);
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|li| li.tag == "li"));
    let names: Vec<String> = items
        .iter()
        .filter_map(|li| li.find_class(NAME_CLASS).map(Element::text_content))
        .collect();
    assert_eq!(names, ["Alice Lee", "Bob Smith"]);
}

#[test]
fn avatar_without_url_shows_initials() {
    let block = example_block();
    assert_eq!(
        block.rows()[0].avatar,
        Avatar::Initials { text: "AL".to_owned() }
    );
    let root = block.to_node();
    let first = list_items(&root)[0].find_class(AVATAR_CLASS).map(Element::text_content);
    assert_eq!(first.as_deref(), Some("AL"));
}

#[test]
fn avatar_with_url_renders_image() {
    let root = example_block().to_node();
    let items = list_items(&root);
    let img = items[1]
        .find_class(AVATAR_CLASS)
        .and_then(|avatar| avatar.elements().next());
    assert_eq!(img.map(|i| i.tag), Some("img"));
    assert_eq!(img.and_then(|i| i.get_attr("src")), Some("x.png"));
    assert_eq!(img.and_then(|i| i.get_attr("alt")), Some("Bob Smith"));
}

#[test]
fn nameless_participant_is_unknown_with_avatar_alt() {
    let block = build_block(&[
        Participant::new(None, None),
        Participant::new(None, Some("y.png")),
    ]);
    assert_eq!(block.rows()[0].name, "Unknown");
    assert_eq!(block.rows()[0].avatar, Avatar::Initials { text: String::new() });
    assert_eq!(
        block.rows()[1].avatar,
        Avatar::Image { src: "y.png".to_owned(), alt: "avatar".to_owned() }
    );
}

#[test]
fn collapsed_state_renders_collapsed_class_and_show_label() {
    let block = ParticipantsBlock::Populated {
        rows: Vec::new(),
        state: ToggleState::COLLAPSED,
    };
    let root = block.to_node();
    assert!(root.has_class("participants"));
    assert!(root.has_class("collapsed"));
    let toggle = root.find_class(TOGGLE_CLASS);
    assert_eq!(toggle.map(Element::text_content).as_deref(), Some("Show"));
    assert_eq!(toggle.and_then(|t| t.get_attr("aria-expanded")), Some("false"));
}

#[test]
fn populated_html_matches_markup_contract() {
    let block = build_block(&[Participant::new(Some("Alice Lee"), None)]);
    assert_eq!(
        block.to_html(),
        concat!(
            r#"<div class="participants">"#,
            r#"<div class="participants-header">"#,
            r#"<div class="participants-title">Participants</div>"#,
            r#"<div class="participants-count">1</div>"#,
            r#"<button type="button" class="participants-toggle" aria-expanded="true">Hide</button>"#,
            r#"</div>"#,
            r#"<ul class="participants-list"><li>"#,
            r#"<span class="participant-avatar">AL</span>"#,
            r#"<span class="participant-name">Alice Lee</span>"#,
            r#"</li></ul></div>"#,
        )
    );
}

// =============================================================
// Empty state
// =============================================================

#[test]
fn empty_state_has_zero_count_and_no_toggle() {
    let block = build_empty_state();
    assert_eq!(block.count(), 0);
    assert!(!block.has_toggle());
    let root = block.to_node();
    assert!(root.has_class("participants"));
    assert!(root.find_class(TOGGLE_CLASS).is_none());
    assert_eq!(
        root.find_class(COUNT_CLASS).map(Element::text_content).as_deref(),
        Some("0")
    );
}

#[test]
fn empty_state_shows_message_without_list_items() {
    let root = build_empty_state().to_node();
    let row = root.find_class(LIST_CLASS);
    assert_eq!(row.map(|r| r.tag), Some("div"));
    assert_eq!(row.map(|r| r.elements().count()), Some(0));
    assert_eq!(
        row.map(Element::text_content).as_deref(),
        Some("No one signed up yet")
    );
}

#[test]
fn empty_state_html_matches_markup_contract() {
    assert_eq!(
        build_empty_state().to_html(),
        concat!(
            r#"<div class="participants">"#,
            r#"<div class="participants-header">"#,
            r#"<div class="participants-title">Participants</div>"#,
            r#"<div class="participants-count">0</div>"#,
            r#"</div>"#,
            r#"<div class="participants-list" style="margin-top:8px;color:#666;font-size:13px">"#,
            r#"No one signed up yet</div></div>"#,
        )
    );
}
