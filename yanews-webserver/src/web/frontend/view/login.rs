use super::page::*;
use maud::{html, Markup};
use rocket::request::FlashMessage;

pub fn login(flash: Option<FlashMessage>, next: Option<&str>) -> Markup {
    page(
        "Login",
        None,
        flash,
        html! {
          form class="login" action="/auth/login" method="POST" {
              fieldset{
                label {
                    "Username:"
                    br;
                    input type="text" name="username" placeholder="Username";
                }
                br;
                label{
                    "Password:"
                    br;
                    input type="password" name="password" placeholder="Password";
                }
                @if let Some(next) = next {
                    input type="hidden" name="next" value=(next);
                }
                br;
                input type="submit" value="login";
                a href="/auth/signup" { "sign up" }
              }
          }
        },
    )
}

pub fn logged_out() -> Markup {
    page(
        "Logout",
        None,
        None,
        html! {
            h1 { "You have been logged out" }
            a href="/auth/login" { "Log in again" }
        },
    )
}
