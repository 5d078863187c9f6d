pub mod prelude {

    pub use yanews_core::{
        entities::*,
        repositories::*,
        usecases,
    };
    pub use yanews_entities::builders::*;

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub const USER_PASSWORD: &str = "secret";

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            yanews_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self { db_connections }
        }

        pub fn create_user(&self, username: &str) -> User {
            flows::register_user(
                &self.db_connections,
                &usecases::Credentials {
                    username,
                    password: USER_PASSWORD,
                },
            )
            .unwrap()
        }

        pub fn create_news(&self, title: &str) -> News {
            flows::create_news(
                &self.db_connections,
                usecases::NewNews {
                    title: title.into(),
                    text: format!("Текст новости «{title}»"),
                    date: None,
                },
            )
            .unwrap()
        }

        pub fn create_comment(&self, news: &News, author: &str, text: &str) -> Comment {
            flows::create_comment(
                &self.db_connections,
                usecases::NewComment {
                    news_id: news.id.to_string(),
                    author: author.into(),
                    text: text.into(),
                },
            )
            .unwrap()
        }

        pub fn recent_news(&self) -> Vec<News> {
            self.db_connections
                .shared()
                .unwrap()
                .recent_news(&Pagination::default())
                .unwrap()
        }

        pub fn news_with_comments(&self, id: &str) -> (News, Vec<Comment>) {
            let db = self.db_connections.shared().unwrap();
            usecases::load_news_with_comments(&db, id).unwrap()
        }
    }
}
