use maud::{html, Markup, DOCTYPE};
use rocket::request::FlashMessage;

const MAIN_CSS_URL: &str = "/main.css";

pub fn page(
    title: &str,
    username: Option<&str>,
    flash: Option<FlashMessage>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ru" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no";
                title { (title) " | YaNews" }
                link rel="stylesheet" href=(MAIN_CSS_URL);
            }
            body {
                (header(username))
                (flash_msg(flash))
                main { (content) }
            }
        }
    }
}

fn flash_msg(flash: Option<FlashMessage>) -> Markup {
    html! {
        @if let Some(msg) = flash {
            div class=(format!("flash {}", msg.kind())) {
                (msg.message())
            }
        }
    }
}

fn header(username: Option<&str>) -> Markup {
    html! {
        header {
            nav {
                a class="home" href="/" { "YaNews" }
                @if let Some(username) = username {
                    span class="msg" { "Logged in as " span class="username" { (username) } }
                    form class="logout" action="/auth/logout" method="POST" {
                        input type="submit" value="logout";
                    }
                } @else {
                    a href="/auth/login" { "login" }
                    a href="/auth/signup" { "sign up" }
                }
            }
        }
    }
}
