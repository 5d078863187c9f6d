use maud::{html, Markup};
use rocket::request::FlashMessage;
use yanews_core::entities::*;

use super::{comment::*, page::*};

pub fn index(username: Option<&str>, flash: Option<FlashMessage>, news: &[News]) -> Markup {
    page(
        "News",
        username,
        flash,
        html! {
            h1 { "News" }
            @if news.is_empty() {
                p { "There are no news yet." }
            } @else {
                ul class="news-list" {
                    @for n in news {
                        li class="news-item" {
                            (news_teaser(n))
                        }
                    }
                }
            }
        },
    )
}

fn news_teaser(news: &News) -> Markup {
    html! {
        h3 {
            a href=(format!("/news/{}", news.id)) { (news.title) }
        }
        p class="date" { (format_date(news.date)) }
        p { (news.text) }
    }
}

pub fn news(
    username: Option<&str>,
    news: &News,
    comments: &[Comment],
    form: CommentForm,
) -> Markup {
    page(
        &news.title,
        username,
        None,
        html! {
            article class="news" {
                h1 { (news.title) }
                p class="date" { (format_date(news.date)) }
                div class="text" { (news.text) }
            }
            section id="comments" {
                h2 { "Comments" }
                @if !comments.is_empty() {
                    ul class="comment-list" {
                        @for c in comments {
                            li class="comment" id=(format!("comment-{}", c.id)) {
                                (comment(username, c))
                            }
                        }
                    }
                }
                @if username.is_some() {
                    (comment_form(&format!("/news/{}", news.id), form))
                } @else {
                    p class="login-hint" {
                        a href=(format!("/auth/login?next=/news/{}", news.id)) { "Log in" }
                        " to leave a comment."
                    }
                }
            }
        },
    )
}
