use super::page::*;
use maud::{html, Markup};
use rocket::request::FlashMessage;

pub fn register(flash: Option<FlashMessage>) -> Markup {
    page(
        "Sign up",
        None,
        flash,
        html! {
          form class="register" action="/auth/signup" method="POST" {
              fieldset{
                label {
                    "Username:"
                    br;
                    input type="text" name="username" placeholder="Username" maxlength="150";
                }
                br;
                label{
                    "Password:"
                    br;
                    input type="password" name="password" placeholder="Password";
                }
                br;
                label{
                    "Password confirmation:"
                    br;
                    input type="password" name="password_confirmation" placeholder="Password";
                }
                br;
                input type="submit" value="sign up";
              }
          }
        },
    )
}
