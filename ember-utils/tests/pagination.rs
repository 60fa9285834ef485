use ember_store::{Person, Session};
use ember_utils::interaction::{Reply, message_response, update_message_response};
use ember_utils::pagination::{
    ComponentAction, Direction, PAGE_TITLE, advance, build_custom_id, build_nav_components,
    render,
};
use twilight_model::channel::message::{
    MessageFlags,
    component::{ButtonStyle, Component},
};
use twilight_model::http::interaction::InteractionResponseType;

fn people(count: usize) -> Vec<Person> {
    (1..=count)
        .map(|index| Person {
            uuid: format!("uuid-{index}"),
            first_name: format!("First{index}"),
            last_name: format!("Last{index}"),
            birthday: format!("2000-01-{index:02}"),
        })
        .collect()
}

fn nav_buttons(components: &[Component]) -> Vec<(String, bool)> {
    components
        .iter()
        .flat_map(|component| match component {
            Component::ActionRow(row) => row.components.clone(),
            _ => vec![],
        })
        .filter_map(|component| match component {
            Component::Button(button) => {
                assert_eq!(button.style, ButtonStyle::Secondary);
                Some((button.custom_id.unwrap_or_default(), button.disabled))
            }
            _ => None,
        })
        .collect()
}

#[test]
fn ten_items_in_threes_walks_four_pages() {
    let mut session = Session::new(people(10), 3);
    let mut item_counts = Vec::new();

    loop {
        let view = render(&session);
        item_counts.push(view.text.matches("### **").count());
        if !advance(&mut session, Direction::Next) {
            break;
        }
    }

    assert_eq!(item_counts, vec![3, 3, 3, 1]);
}

#[test]
fn first_and_last_page_flags() {
    let mut session = Session::new(people(10), 3);

    let first = render(&session);
    assert!(!first.has_prev);
    assert!(first.has_next);
    assert_eq!(first.total_pages, 4);

    session.current_page = 3;
    let last = render(&session);
    assert!(last.has_prev);
    assert!(!last.has_next);
    assert!(last.text.contains("Page 4 of 4"));
}

#[test]
fn render_is_idempotent() {
    let session = Session::new(people(7), 3);
    let before = session.clone();

    assert_eq!(render(&session), render(&session));
    assert_eq!(session, before);
}

#[test]
fn item_block_carries_every_field_and_global_ordinal() {
    let mut session = Session::new(people(5), 3);
    session.current_page = 1;
    let view = render(&session);

    assert!(view.text.starts_with(&format!("## 📋 **{PAGE_TITLE} - Page 2 of 2**")));
    assert!(view.text.contains("### **4.** First4 Last4"));
    assert!(view.text.contains("> 📅 **Birthday:** 2000-01-04"));
    assert!(view.text.contains("> 🆔 **UUID:** `uuid-4`"));
    assert!(view.text.contains("### **5.** First5 Last5"));
    assert!(!view.text.contains("First3"));
}

#[test]
fn out_of_range_cursor_renders_last_page() {
    let mut session = Session::new(people(4), 3);
    session.current_page = 9;
    let view = render(&session);

    assert_eq!(view.page, 1);
    assert!(!view.has_next);
}

#[test]
fn page_size_one_gives_one_item_per_page() {
    let session = Session::new(people(3), 1);
    let view = render(&session);

    assert_eq!(view.total_pages, 3);
    assert_eq!(view.text.matches("### **").count(), 1);
}

#[test]
fn nav_components_follow_view_state() {
    let session = Session::new(people(10), 3);
    let components = build_nav_components("555", &render(&session));

    assert_eq!(
        nav_buttons(&components),
        vec![
            (build_custom_id(ComponentAction::PreviousPage, "555"), true),
            (build_custom_id(ComponentAction::NextPage, "555"), false),
        ]
    );
    assert_eq!(nav_buttons(&components)[0].0, "prev_page_555");
}

#[test]
fn single_page_has_no_controls() {
    let session = Session::new(people(3), 3);
    assert!(build_nav_components("1", &render(&session)).is_empty());
}

#[test]
fn ephemeral_reply_sets_flag() {
    let response = message_response(Reply::text("only you").ephemeral());
    assert_eq!(
        response.kind,
        InteractionResponseType::ChannelMessageWithSource
    );

    let data = response.data.expect("message response has data");
    assert_eq!(data.content.as_deref(), Some("only you"));
    assert_eq!(data.flags, Some(MessageFlags::EPHEMERAL));
}

#[test]
fn update_carries_components() {
    let session = Session::new(people(6), 3);
    let view = render(&session);
    let reply = Reply::text(view.text.clone()).with_components(build_nav_components("9", &view));

    let response = update_message_response(reply);
    assert_eq!(response.kind, InteractionResponseType::UpdateMessage);

    let data = response.data.as_ref().unwrap();
    assert_eq!(data.components.as_ref().map(|c| c.len()), Some(1));
    assert_eq!(data.flags, None);

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["type"], 7);
}
