use super::*;

impl NewsRepo for DbReadOnly<'_> {
    fn create_news(&self, _news: &News) -> Result<()> {
        Err(read_only_access())
    }
    fn get_news(&self, id: &str) -> Result<News> {
        get_news(&mut self.conn.borrow_mut(), id)
    }
    fn recent_news(&self, pagination: &Pagination) -> Result<Vec<News>> {
        recent_news(&mut self.conn.borrow_mut(), pagination)
    }
    fn count_news(&self) -> Result<usize> {
        count_news(&mut self.conn.borrow_mut())
    }
}

impl NewsRepo for DbReadWrite<'_> {
    fn create_news(&self, news: &News) -> Result<()> {
        create_news(&mut self.conn.borrow_mut(), news)
    }
    fn get_news(&self, id: &str) -> Result<News> {
        get_news(&mut self.conn.borrow_mut(), id)
    }
    fn recent_news(&self, pagination: &Pagination) -> Result<Vec<News>> {
        recent_news(&mut self.conn.borrow_mut(), pagination)
    }
    fn count_news(&self) -> Result<usize> {
        count_news(&mut self.conn.borrow_mut())
    }
}

impl NewsRepo for DbConnection<'_> {
    fn create_news(&self, news: &News) -> Result<()> {
        create_news(&mut self.conn.borrow_mut(), news)
    }
    fn get_news(&self, id: &str) -> Result<News> {
        get_news(&mut self.conn.borrow_mut(), id)
    }
    fn recent_news(&self, pagination: &Pagination) -> Result<Vec<News>> {
        recent_news(&mut self.conn.borrow_mut(), pagination)
    }
    fn count_news(&self) -> Result<usize> {
        count_news(&mut self.conn.borrow_mut())
    }
}

fn load_news(entity: models::NewsEntity) -> Result<News> {
    let models::NewsEntity {
        rowid: _,
        id,
        title,
        text,
        date,
    } = entity;
    let date = time::Date::from_julian_day(date)
        .map_err(|err| anyhow!("Invalid date of news '{id}': {err}"))?;
    Ok(News {
        id: id.into(),
        title,
        text,
        date,
    })
}

fn create_news(conn: &mut SqliteConnection, news: &News) -> Result<()> {
    let new_news = models::NewNews {
        id: news.id.as_str(),
        title: &news.title,
        text: &news.text,
        date: news.date.to_julian_day(),
    };
    let _count = diesel::insert_into(schema::news::table)
        .values(&new_news)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn get_news(conn: &mut SqliteConnection, id: &str) -> Result<News> {
    use schema::news::dsl;
    let entity = schema::news::table
        .filter(dsl::id.eq(id))
        .first::<models::NewsEntity>(conn)
        .map_err(from_diesel_err)?;
    load_news(entity)
}

fn recent_news(conn: &mut SqliteConnection, pagination: &Pagination) -> Result<Vec<News>> {
    use schema::news::dsl;
    let mut query = schema::news::table
        .order_by(dsl::date.desc())
        .then_order_by(dsl::rowid.desc()) // most recently inserted first
        .into_boxed();

    // Pagination
    let offset = pagination.offset.unwrap_or(0) as i64;
    // SQLite does not support an OFFSET without a LIMIT
    // <https://www.sqlite.org/lang_select.html>
    if let Some(limit) = pagination.limit {
        query = query.limit(limit as i64);
        if offset > 0 {
            query = query.offset(offset);
        }
    } else if offset > 0 {
        query = query.limit(i64::MAX);
        query = query.offset(offset);
    }

    query
        .load::<models::NewsEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_news)
        .collect()
}

fn count_news(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::news::dsl;
    Ok(schema::news::table
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
