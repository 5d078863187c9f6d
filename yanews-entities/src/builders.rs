pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{comment_builder::*, news_builder::*};

pub mod news_builder {

    use super::*;
    use crate::{id::*, news::*, time::today};
    use time::Date;

    #[derive(Debug)]
    pub struct NewsBuild {
        news: News,
    }

    impl NewsBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.news.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.news.title = title.into();
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.news.text = text.into();
            self
        }
        pub fn date(mut self, date: Date) -> Self {
            self.news.date = date;
            self
        }
        pub fn finish(self) -> News {
            self.news
        }
    }

    impl Builder for News {
        type Build = NewsBuild;
        fn build() -> NewsBuild {
            NewsBuild {
                news: News {
                    id: Id::new(),
                    title: "News".into(),
                    text: "Text".into(),
                    date: today(),
                },
            }
        }
    }
}

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, id::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn news_id(mut self, news_id: &str) -> Self {
            self.comment.news_id = news_id.into();
            self
        }
        pub fn author(mut self, author: &str) -> Self {
            self.comment.author = author.into();
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.comment.text = text.into();
            self
        }
        pub fn created_at(mut self, created_at: TimestampMs) -> Self {
            self.comment.created_at = created_at;
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            CommentBuild {
                comment: Comment {
                    id: Id::new(),
                    news_id: Id::new(),
                    author: "author".into(),
                    created_at: TimestampMs::now(),
                    text: "Comment".into(),
                },
            }
        }
    }
}
