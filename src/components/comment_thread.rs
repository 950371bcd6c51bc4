//! Comment Section Component
//!
//! Renders the thread projection in document order: each comment, its
//! replies, then the reply widget if it is anchored there.

use dioxus::prelude::*;
use folio_core::{Comment, Reply, ThreadItem};
use folio_ui::{Button, ButtonVariant};

use crate::components::ReplyForm;
use crate::context::{report, use_alert, use_page};

#[component]
pub fn CommentSection() -> Element {
    let page = use_page();
    let page_ref = page.read();
    let items = page_ref.thread.project();
    let count = page_ref.thread.comments().len() + page_ref.thread.reply_count();

    rsx! {
        div { class: "comments-section",
            h3 { "Comments ({count})" }
            div { class: "comments-list",
                for item in items {
                    {
                        match item {
                            ThreadItem::Comment(comment) => rsx! {
                                CommentCard { key: "{comment.id}", comment: comment.clone() }
                            },
                            ThreadItem::Reply(reply) => rsx! {
                                ReplyCard { key: "{reply.id}", reply: reply.clone() }
                            },
                            ThreadItem::Widget(widget) => rsx! {
                                ReplyForm { key: "widget-{widget.generation()}" }
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CommentCard(comment: Comment) -> Element {
    let mut page = use_page();
    let alert = use_alert();
    let id = comment.id;

    rsx! {
        div { class: "comment", id: "{comment.id}",
            div { class: "comment-avatar", i { class: "fas fa-user" } }
            div { class: "comment-content",
                div { class: "comment-header",
                    h4 { "{comment.author}" }
                    span { class: "comment-date", "{comment.posted}" }
                }
                p { "{comment.body}" }
                Button {
                    variant: ButtonVariant::Link,
                    class: "reply-btn".to_string(),
                    onclick: move |_| {
                        report(page.write().open_reply(id), alert);
                    },
                    "Reply"
                }
            }
        }
    }
}

#[component]
fn ReplyCard(reply: Reply) -> Element {
    let mut page = use_page();
    let alert = use_alert();
    let id = reply.id;

    rsx! {
        div { class: "comment reply", id: "{reply.id}",
            div { class: "comment-avatar", i { class: "fas fa-user" } }
            div { class: "comment-content",
                div { class: "comment-header",
                    h4 { "{reply.author}" }
                    span { class: "comment-date", "{reply.posted}" }
                }
                p { "{reply.body}" }
                Button {
                    variant: ButtonVariant::Link,
                    class: "reply-btn".to_string(),
                    onclick: move |_| {
                        report(page.write().reply_to_reply(id), alert);
                    },
                    "Reply"
                }
            }
        }
    }
}
