use super::*;
use crate::web::tests::{create_comment, create_news, login_user, prelude::*, register_user};
use time::{macros::date, Duration};
use yanews_core::{profanity::BAD_WORDS, repositories::CommentRepository as _};

const COMMENT_TEXT: &str = "Текст комментария";
const NEW_COMMENT_TEXT: &str = "Обновлённый комментарий";

fn setup() -> (Client, sqlite::Connections) {
    rocket_test_setup(vec![("/", super::routes())])
}

/// The decoded `next` parameter of a redirect to the login page.
fn login_redirect_next(res: &LocalResponse) -> Option<String> {
    let location = res.headers().get_one("Location")?;
    let origin = Origin::parse(location).ok()?;
    if origin.path().as_str() != "/auth/login" {
        return None;
    }
    origin
        .query()?
        .segments()
        .find(|(name, _)| *name == "next")
        .map(|(_, value)| value.to_owned())
}

struct Fixture {
    client: Client,
    db: sqlite::Connections,
    news: News,
    comment: Comment,
}

/// A news item with a single comment of "author".
/// There is a second user "reader" without any comments.
fn setup_with_comment() -> Fixture {
    let (client, db) = setup();
    register_user(&db, "author", "secret");
    register_user(&db, "reader", "secret");
    let news = create_news(&db, "Заголовок", date!(2023 - 03 - 08));
    let comment = create_comment(&db, &news, "author", COMMENT_TEXT);
    Fixture {
        client,
        db,
        news,
        comment,
    }
}

fn count_comments(db: &sqlite::Connections) -> usize {
    db.shared().unwrap().count_comments().unwrap()
}

fn load_comment(db: &sqlite::Connections, id: &Id) -> Comment {
    db.shared().unwrap().load_comment(id.as_str()).unwrap()
}

fn form_body(text: &str) -> String {
    format!("text={}", rocket::http::RawStr::new(text).percent_encode())
}

mod pages {
    use super::*;

    #[test]
    fn pages_are_available_for_anonymous_users() {
        let Fixture { client, news, .. } = setup_with_comment();
        for url in [
            "/".to_owned(),
            format!("/news/{}", news.id),
            "/auth/login".to_owned(),
            "/auth/logout".to_owned(),
            "/auth/signup".to_owned(),
            "/main.css".to_owned(),
        ] {
            let res = client.get(url.as_str()).dispatch();
            assert_eq!(res.status(), Status::Ok, "GET {url}");
        }
    }

    #[test]
    fn unknown_news() {
        let (client, _) = setup();
        let res = client.get("/news/does-not-exist").dispatch();
        assert_eq!(res.status(), Status::NotFound);
        assert!(res.into_string().unwrap().contains("404"));
    }

    #[test]
    fn home_page_shows_limited_number_of_most_recent_news() {
        let (client, db) = setup();
        let page_size = Cfg::default().news_count_on_home_page;
        let today = yanews_core::entities::today();
        for i in 0..=page_size {
            let date = today - Duration::days(i as i64);
            create_news(&db, &format!("News #{i}"), date);
        }
        let res = client.get("/").dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body = res.into_string().unwrap();
        assert_eq!(page_size, body.matches("class=\"news-item\"").count());
        // Most recent first, the oldest one is excluded
        let positions: Vec<_> = (0..page_size)
            .map(|i| body.find(&format!(">News #{i}<")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!body.contains(&format!(">News #{page_size}<")));
    }

    #[test]
    fn home_page_size_is_configurable() {
        let (client, db) = rocket_test_setup_with_cfg(
            vec![("/", super::super::routes())],
            Cfg {
                news_count_on_home_page: 2,
            },
        );
        for i in 0..3 {
            create_news(&db, &format!("News #{i}"), date!(2023 - 01 - 01));
        }
        let body = client.get("/").dispatch().into_string().unwrap();
        assert_eq!(2, body.matches("class=\"news-item\"").count());
    }

    #[test]
    fn comments_are_sorted_chronologically() {
        let Fixture {
            client, db, news, ..
        } = setup_with_comment();
        create_comment(&db, &news, "reader", "Второй комментарий");
        create_comment(&db, &news, "author", "Третий комментарий");
        let body = client
            .get(format!("/news/{}", news.id))
            .dispatch()
            .into_string()
            .unwrap();
        let first = body.find(COMMENT_TEXT).unwrap();
        let second = body.find("Второй комментарий").unwrap();
        let third = body.find("Третий комментарий").unwrap();
        assert!(first < second);
        assert!(second < third);
    }

    #[test]
    fn anonymous_user_has_no_comment_form() {
        let Fixture { client, news, .. } = setup_with_comment();
        let body = client
            .get(format!("/news/{}", news.id))
            .dispatch()
            .into_string()
            .unwrap();
        assert!(!body.contains("id=\"comment-form\""));
    }

    #[test]
    fn authorized_user_has_comment_form() {
        let Fixture { client, news, .. } = setup_with_comment();
        login_user(&client, "reader", "secret");
        let body = client
            .get(format!("/news/{}", news.id))
            .dispatch()
            .into_string()
            .unwrap();
        assert!(body.contains("id=\"comment-form\""));
        assert!(body.contains("name=\"text\""));
    }

    #[test]
    fn only_the_author_sees_edit_links() {
        let Fixture {
            client,
            news,
            comment,
            ..
        } = setup_with_comment();
        let edit_link = format!("/edit_comment/{}", comment.id);
        login_user(&client, "reader", "secret");
        let body = client
            .get(format!("/news/{}", news.id))
            .dispatch()
            .into_string()
            .unwrap();
        assert!(!body.contains(&edit_link));
        login_user(&client, "author", "secret");
        let body = client
            .get(format!("/news/{}", news.id))
            .dispatch()
            .into_string()
            .unwrap();
        assert!(body.contains(&edit_link));
    }
}

mod comments {
    use super::*;

    #[test]
    fn anonymous_user_cant_create_comment() {
        let (client, db) = setup();
        let news = create_news(&db, "Заголовок", date!(2023 - 03 - 08));
        let url = format!("/news/{}", news.id);
        let res = client
            .post(url.as_str())
            .header(ContentType::Form)
            .body(form_body(NEW_COMMENT_TEXT))
            .dispatch();
        assert_eq!(res.status(), Status::Found);
        assert_eq!(login_redirect_next(&res), Some(url.clone()));
        assert_eq!(0, count_comments(&db));
    }

    #[test]
    fn user_can_create_comment() {
        let (client, db) = setup();
        register_user(&db, "author", "secret");
        let news = create_news(&db, "Заголовок", date!(2023 - 03 - 08));
        login_user(&client, "author", "secret");
        let res = client
            .post(format!("/news/{}", news.id))
            .header(ContentType::Form)
            .body(form_body(NEW_COMMENT_TEXT))
            .dispatch();
        assert_eq!(res.status(), Status::Found);
        assert_eq!(
            res.headers().get_one("Location"),
            Some(format!("/news/{}#comments", news.id).as_str())
        );
        let comments = db
            .shared()
            .unwrap()
            .load_comments_of_news(news.id.as_str())
            .unwrap();
        assert_eq!(1, comments.len());
        assert_eq!(NEW_COMMENT_TEXT, comments[0].text);
        assert_eq!(news.id, comments[0].news_id);
        assert_eq!("author", comments[0].author);
    }

    #[test]
    fn user_cant_use_bad_words() {
        let (client, db) = setup();
        register_user(&db, "author", "secret");
        let news = create_news(&db, "Заголовок", date!(2023 - 03 - 08));
        login_user(&client, "author", "secret");
        let text = format!("Какой-то текст, {}, еще текст", BAD_WORDS[0]);
        let res = client
            .post(format!("/news/{}", news.id))
            .header(ContentType::Form)
            .body(form_body(&text))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body = res.into_string().unwrap();
        let errors = &body[body.find("class=\"errorlist\"").unwrap()..];
        assert!(errors.contains(profanity::WARNING));
        assert_eq!(0, count_comments(&db));
    }

    #[test]
    fn user_cant_post_empty_comment() {
        let (client, db) = setup();
        register_user(&db, "author", "secret");
        let news = create_news(&db, "Заголовок", date!(2023 - 03 - 08));
        login_user(&client, "author", "secret");
        let res = client
            .post(format!("/news/{}", news.id))
            .header(ContentType::Form)
            .body("text=")
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        assert!(res.into_string().unwrap().contains(REQUIRED_FIELD));
        assert_eq!(0, count_comments(&db));
    }

    #[test]
    fn comment_on_unknown_news() {
        let (client, db) = setup();
        register_user(&db, "author", "secret");
        login_user(&client, "author", "secret");
        let res = client
            .post("/news/does-not-exist")
            .header(ContentType::Form)
            .body(form_body(NEW_COMMENT_TEXT))
            .dispatch();
        assert_eq!(res.status(), Status::NotFound);
        assert_eq!(0, count_comments(&db));
    }

    #[test]
    fn author_can_edit_comment() {
        let Fixture {
            client,
            db,
            news,
            comment,
        } = setup_with_comment();
        login_user(&client, "author", "secret");
        let url = format!("/edit_comment/{}", comment.id);
        let res = client.get(url.as_str()).dispatch();
        assert_eq!(res.status(), Status::Ok);
        assert!(res.into_string().unwrap().contains(COMMENT_TEXT));

        let res = client
            .post(url.as_str())
            .header(ContentType::Form)
            .body(form_body(NEW_COMMENT_TEXT))
            .dispatch();
        assert_eq!(res.status(), Status::Found);
        assert_eq!(
            res.headers().get_one("Location"),
            Some(format!("/news/{}#comments", news.id).as_str())
        );
        assert_eq!(NEW_COMMENT_TEXT, load_comment(&db, &comment.id).text);
    }

    #[test]
    fn author_cant_edit_comment_with_bad_words() {
        let Fixture {
            client,
            db,
            comment,
            ..
        } = setup_with_comment();
        login_user(&client, "author", "secret");
        let res = client
            .post(format!("/edit_comment/{}", comment.id))
            .header(ContentType::Form)
            .body(form_body(BAD_WORDS[1]))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        assert!(res.into_string().unwrap().contains(profanity::WARNING));
        assert_eq!(COMMENT_TEXT, load_comment(&db, &comment.id).text);
    }

    #[test]
    fn user_cant_edit_comment_of_another_user() {
        let Fixture {
            client,
            db,
            comment,
            ..
        } = setup_with_comment();
        login_user(&client, "reader", "secret");
        let url = format!("/edit_comment/{}", comment.id);
        let res = client.get(url.as_str()).dispatch();
        assert_eq!(res.status(), Status::NotFound);
        let res = client
            .post(url.as_str())
            .header(ContentType::Form)
            .body(form_body(NEW_COMMENT_TEXT))
            .dispatch();
        assert_eq!(res.status(), Status::NotFound);
        assert_eq!(COMMENT_TEXT, load_comment(&db, &comment.id).text);
    }

    #[test]
    fn author_can_delete_comment() {
        let Fixture {
            client,
            db,
            news,
            comment,
        } = setup_with_comment();
        login_user(&client, "author", "secret");
        let url = format!("/delete_comment/{}", comment.id);
        let res = client.get(url.as_str()).dispatch();
        assert_eq!(res.status(), Status::Ok);

        let res = client.delete(url.as_str()).dispatch();
        assert_eq!(res.status(), Status::Found);
        assert_eq!(
            res.headers().get_one("Location"),
            Some(format!("/news/{}#comments", news.id).as_str())
        );
        assert_eq!(0, count_comments(&db));
    }

    #[test]
    fn author_can_delete_comment_with_form() {
        let Fixture {
            client,
            db,
            comment,
            ..
        } = setup_with_comment();
        login_user(&client, "author", "secret");
        let res = client
            .post(format!("/delete_comment/{}", comment.id))
            .dispatch();
        assert_eq!(res.status(), Status::Found);
        assert_eq!(0, count_comments(&db));
    }

    #[test]
    fn user_cant_delete_comment_of_another_user() {
        let Fixture {
            client,
            db,
            comment,
            ..
        } = setup_with_comment();
        login_user(&client, "reader", "secret");
        let url = format!("/delete_comment/{}", comment.id);
        assert_eq!(client.get(url.as_str()).dispatch().status(), Status::NotFound);
        assert_eq!(
            client.delete(url.as_str()).dispatch().status(),
            Status::NotFound
        );
        assert_eq!(client.post(url.as_str()).dispatch().status(), Status::NotFound);
        assert_eq!(1, count_comments(&db));
    }

    #[test]
    fn anonymous_user_is_redirected_to_login() {
        let Fixture {
            client,
            db,
            comment,
            ..
        } = setup_with_comment();
        for url in [
            format!("/edit_comment/{}", comment.id),
            format!("/delete_comment/{}", comment.id),
        ] {
            let res = client.get(url.as_str()).dispatch();
            assert_eq!(res.status(), Status::Found);
            assert_eq!(login_redirect_next(&res), Some(url.clone()));
            let res = client
                .post(url.as_str())
                .header(ContentType::Form)
                .body(form_body(NEW_COMMENT_TEXT))
                .dispatch();
            assert_eq!(res.status(), Status::Found);
            assert_eq!(login_redirect_next(&res), Some(url.clone()));
        }
        let res = client
            .delete(format!("/delete_comment/{}", comment.id))
            .dispatch();
        assert_eq!(res.status(), Status::Found);
        assert_eq!(1, count_comments(&db));
        assert_eq!(COMMENT_TEXT, load_comment(&db, &comment.id).text);
    }

    #[test]
    fn login_redirect_keeps_query_string() {
        let Fixture { client, comment, .. } = setup_with_comment();
        let url = format!("/edit_comment/{}?from=home&page=2", comment.id);
        let res = client.get(url.as_str()).dispatch();
        assert_eq!(res.status(), Status::Found);
        assert_eq!(login_redirect_next(&res), Some(url.clone()));
    }
}
