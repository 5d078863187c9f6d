use super::*;

pub fn create_news(connections: &sqlite::Connections, new_news: usecases::NewNews) -> Result<News> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_news(conn, new_news).map_err(|err| {
            warn!("Failed to create news: {}", err);
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use time::macros::date;

    #[test]
    fn create_news_with_date() {
        let fixture = BackendFixture::new();
        let news = flows::create_news(
            &fixture.db_connections,
            usecases::NewNews {
                title: "Заголовок".into(),
                text: "Текст".into(),
                date: Some(date!(2022 - 05 - 09)),
            },
        )
        .unwrap();
        assert_eq!(date!(2022 - 05 - 09), news.date);
        assert_eq!(vec![news], fixture.recent_news());
    }

    #[test]
    fn reject_empty_title() {
        let fixture = BackendFixture::new();
        let err = flows::create_news(
            &fixture.db_connections,
            usecases::NewNews {
                title: "".into(),
                text: "Текст".into(),
                date: None,
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::Title))
        ));
        assert!(fixture.recent_news().is_empty());
    }
}
