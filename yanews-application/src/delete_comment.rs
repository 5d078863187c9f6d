use super::*;

pub fn delete_comment(
    connections: &sqlite::Connections,
    id: &str,
    author: &str,
) -> Result<Comment> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::delete_comment(conn, id, author).map_err(|err| {
            info!("Failed to delete comment {}: {}", id, err);
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn only_the_author_can_delete() {
        let fixture = BackendFixture::new();
        fixture.create_user("Автор");
        fixture.create_user("Читатель");
        let news = fixture.create_news("Новость");
        let comment = fixture.create_comment(&news, "Автор", "Комментарий");

        let err = flows::delete_comment(&fixture.db_connections, comment.id.as_str(), "Читатель")
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(1, fixture.news_with_comments(news.id.as_str()).1.len());

        flows::delete_comment(&fixture.db_connections, comment.id.as_str(), "Автор").unwrap();
        assert!(fixture.news_with_comments(news.id.as_str()).1.is_empty());

        let err = flows::delete_comment(&fixture.db_connections, comment.id.as_str(), "Автор")
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
