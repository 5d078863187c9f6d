use time::Date;

use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewNews {
    pub title: String,
    pub text: String,
    /// Defaults to today
    pub date: Option<Date>,
}

pub fn create_news<R: NewsRepo>(repo: &R, new_news: NewNews) -> Result<News> {
    let NewNews { title, text, date } = new_news;
    if !validate::is_valid_title(&title) {
        return Err(Error::Title);
    }
    let news = News {
        id: Id::new(),
        title: title.trim().to_owned(),
        text,
        date: date.unwrap_or_else(today),
    };
    log::debug!("Creating news {} ({})", news.id, news.date);
    repo.create_news(&news)?;
    Ok(news)
}
