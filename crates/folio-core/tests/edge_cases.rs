//! Edge case and boundary condition tests
//!
//! These tests verify the page handles unusual inputs, commands issued in
//! the wrong state, and timeline boundaries correctly.

use std::time::Duration;

use folio_core::{
    parse_script, Action, ContactField, Filter, FolioError, ItemVisibility, NotificationTimings,
    Outcome, Page, ReplyField, Severity, SiteConfig,
};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ============================================================================
// Wrong-state Commands
// ============================================================================

#[test]
fn test_submit_without_widget() {
    let mut page = Page::default();
    assert!(matches!(page.submit_reply(), Err(FolioError::NoOpenWidget)));
    assert!(page.notifications.notifications().is_empty());
}

#[test]
fn test_cancel_without_widget() {
    let mut page = Page::default();
    assert!(page.cancel_reply().is_none());
    let outcome = page.perform(&Action::CancelReply).unwrap();
    assert_eq!(outcome.to_string(), "no reply widget to cancel");
}

#[test]
fn test_nested_reply_before_any_reply() {
    let mut page = Page::default();
    let err = page
        .perform(&Action::NestedReply {
            author: "Bob".into(),
        })
        .unwrap_err();
    assert!(matches!(err, FolioError::UnknownAuthor(_)));
    assert!(page.notifications.notifications().is_empty());
}

// ============================================================================
// Empty and Unusual Input
// ============================================================================

#[test]
fn test_every_field_empty_lists_all() {
    let mut page = Page::default();
    let alice = page.comment_by_author("Alice").unwrap();
    page.open_reply(alice).unwrap();

    match page.submit_reply() {
        Err(FolioError::Validation(failure)) => {
            assert_eq!(failure.missing, vec!["name", "email", "comment"]);
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
}

#[test]
fn test_clearing_a_field_after_typing() {
    let mut page = Page::default();
    let alice = page.comment_by_author("Alice").unwrap();
    page.open_reply(alice).unwrap();
    page.thread.edit(ReplyField::Name, "Bob").unwrap();
    page.thread.edit(ReplyField::Email, "bob@example.com").unwrap();
    page.thread.edit(ReplyField::Body, "text").unwrap();
    page.thread.edit(ReplyField::Body, "").unwrap();

    assert!(page.submit_reply().is_err());
    assert_eq!(page.thread.widget().unwrap().focus(), ReplyField::Body);
}

#[test]
fn test_markup_in_reply_is_kept_as_text() {
    let mut page = Page::default();
    let alice = page.comment_by_author("Alice").unwrap();
    page.open_reply(alice).unwrap();
    page.thread.edit(ReplyField::Name, "<b>Eve</b>").unwrap();
    page.thread.edit(ReplyField::Email, "eve@example.com").unwrap();
    page.thread
        .edit(ReplyField::Body, "<script>alert(1)</script>")
        .unwrap();
    let id = page.submit_reply().unwrap();

    let reply = page.thread.reply(id).unwrap();
    assert_eq!(reply.author, "<b>Eve</b>");
    assert_eq!(reply.body, "<script>alert(1)</script>");
}

#[test]
fn test_unicode_reply() {
    let mut page = Page::default();
    let marcus = page.comment_by_author("Marcus").unwrap();
    page.open_reply(marcus).unwrap();
    page.thread.edit(ReplyField::Name, "Zoë").unwrap();
    page.thread.edit(ReplyField::Email, "zoe@example.com").unwrap();
    page.thread.edit(ReplyField::Body, "素晴らしい 🎉").unwrap();

    let id = page.submit_reply().unwrap();
    assert_eq!(page.thread.reply(id).unwrap().body, "素晴らしい 🎉");
}

// ============================================================================
// Timeline Boundaries
// ============================================================================

#[test]
fn test_zero_advance_fires_nothing() {
    let mut page = Page::default();
    page.notify("hi", Severity::Info);
    assert!(!page.advance(Duration::ZERO));
    assert!(!page.notifications.notifications()[0].is_visible());
}

#[test]
fn test_single_large_advance_runs_whole_lifecycle() {
    let mut page = Page::default();
    page.notify("gone", Severity::Error);
    assert!(page.advance(ms(60_000)));
    assert!(page.notifications.notifications().is_empty());
}

#[test]
fn test_zero_show_delay_is_visible_immediately_after_zero_advance() {
    let config = SiteConfig {
        notifications: NotificationTimings {
            show_delay: Duration::ZERO,
            ..NotificationTimings::default()
        },
        ..SiteConfig::default()
    };
    let mut page = Page::demo(config);
    page.notify("now", Severity::Info);
    page.advance(Duration::ZERO);
    assert_eq!(page.notifications.visible().count(), 1);
}

#[test]
fn test_many_overlapping_toasts() {
    let mut page = Page::default();
    for i in 0..50 {
        page.notify(format!("toast {}", i), Severity::Info);
        page.advance(ms(10));
    }
    // First toast created at 0 is visible, the last (created at 490) is too
    page.advance(ms(100));
    assert_eq!(page.notifications.visible().count(), 50);

    page.advance(ms(10_000));
    assert!(page.notifications.notifications().is_empty());
}

// ============================================================================
// Peripheral Widgets
// ============================================================================

#[test]
fn test_contact_send_survives_interleaved_reply() {
    let mut page = Page::default();
    page.contact.set(ContactField::Name, "Dana");
    page.contact.set(ContactField::Email, "dana@example.com");
    page.submit_contact().unwrap();

    page.perform(&Action::NestedReply { author: "x".into() }).ok();
    page.advance(ms(1500));

    assert_eq!(page.notifications.notifications().len(), 1);
    assert_eq!(page.contact.get(ContactField::Email), "");
}

#[test]
fn test_filter_round_trip_restores_everything() {
    let mut page = Page::default();
    page.portfolio.apply(Filter::from("design")).unwrap();
    page.advance(ms(300));
    assert_eq!(page.portfolio.visible_items().count(), 2);

    page.portfolio.apply(Filter::All).unwrap();
    page.advance(ms(50));
    assert!(page
        .portfolio
        .items()
        .iter()
        .all(|i| i.visibility == ItemVisibility::Shown));
}

#[test]
fn test_script_validation_failure_leaves_page_usable() {
    let mut page = Page::default();
    let script = parse_script(
        r#"[
            { "action": "open_reply", "author": "Alice" },
            { "action": "submit_reply" },
            { "action": "edit_reply", "field": "name", "value": "Bob" },
            { "action": "edit_reply", "field": "email", "value": "bob@example.com" },
            { "action": "edit_reply", "field": "body", "value": "Thanks!" },
            { "action": "submit_reply" }
        ]"#,
    )
    .unwrap();

    let results: Vec<_> = script.iter().map(|a| page.perform(a)).collect();
    assert!(matches!(results[1], Err(FolioError::Validation(_))));
    assert!(matches!(results[5], Ok(Outcome::ReplyPosted(_))));
}

#[test]
fn test_scroll_to_bare_hash() {
    let page = Page::default();
    assert_eq!(page.scroll_target("#"), None);
    assert_eq!(page.scroll_target("#contact"), Some(3420.0));
}
