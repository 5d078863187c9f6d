use super::prelude::*;

pub fn list_recent_news<R: NewsRepo>(repo: &R, limit: usize) -> Result<Vec<News>> {
    if limit == 0 {
        return Err(Error::InvalidLimit);
    }
    let pagination = Pagination {
        offset: None,
        limit: Some(limit as u64),
    };
    Ok(repo.recent_news(&pagination)?)
}

pub fn load_news_with_comments<R>(repo: &R, id: &str) -> Result<(News, Vec<Comment>)>
where
    R: NewsRepo + CommentRepository,
{
    let news = repo.get_news(id)?;
    let comments = repo.load_comments_of_news(news.id.as_str())?;
    Ok((news, comments))
}
