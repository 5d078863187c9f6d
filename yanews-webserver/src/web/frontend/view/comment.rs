use maud::{html, Markup};
use yanews_core::entities::*;

use super::page::*;

/// State of a (re-)rendered comment form.
#[derive(Debug, Default)]
pub struct CommentForm<'a> {
    pub text: &'a str,
    pub errors: Vec<&'a str>,
}

impl<'a> CommentForm<'a> {
    pub fn with_error(text: &'a str, error: &'a str) -> Self {
        Self {
            text,
            errors: vec![error],
        }
    }
}

pub fn comment_form(action: &str, form: CommentForm) -> Markup {
    html! {
        form id="comment-form" action=(action) method="POST" {
            fieldset {
                @if !form.errors.is_empty() {
                    ul class="errorlist" {
                        @for error in &form.errors {
                            li { (error) }
                        }
                    }
                }
                label {
                    "Comment:"
                    br;
                    textarea name="text" rows="5" cols="40" { (form.text) }
                }
                br;
                input type="submit" value="send";
            }
        }
    }
}

pub fn comment(username: Option<&str>, comment: &Comment) -> Markup {
    html! {
        div class="comment-meta" {
            span class="author" { (comment.author) }
            " "
            span class="created-at" { (comment.created_at.to_string()) }
        }
        p class="comment-text" { (comment.text) }
        @if username.is_some_and(|username| comment.is_authored_by(username)) {
            div class="comment-actions" {
                a href=(format!("/edit_comment/{}", comment.id)) { "edit" }
                a href=(format!("/delete_comment/{}", comment.id)) { "delete" }
            }
        }
    }
}

pub fn edit_comment(username: &str, comment: &Comment, form: CommentForm) -> Markup {
    page(
        "Edit comment",
        Some(username),
        None,
        html! {
            h1 { "Edit comment" }
            (comment_form(&format!("/edit_comment/{}", comment.id), form))
            a href=(format!("/news/{}#comments", comment.news_id)) { "back" }
        },
    )
}

pub fn delete_comment(username: &str, comment: &Comment) -> Markup {
    page(
        "Delete comment",
        Some(username),
        None,
        html! {
            h1 { "Delete comment" }
            blockquote class="comment-text" { (comment.text) }
            form class="delete-comment" action=(format!("/delete_comment/{}", comment.id)) method="POST" {
                p { "Do you really want to delete this comment?" }
                input type="submit" value="delete";
                a href=(format!("/news/{}#comments", comment.news_id)) { "cancel" }
            }
        },
    )
}
