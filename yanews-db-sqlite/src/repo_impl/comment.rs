use super::*;

impl CommentRepository for DbReadOnly<'_> {
    fn create_comment(&self, _comment: &Comment) -> Result<()> {
        Err(read_only_access())
    }
    fn load_comment(&self, id: &str) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_of_news(&self, news_id: &str) -> Result<Vec<Comment>> {
        load_comments_of_news(&mut self.conn.borrow_mut(), news_id)
    }
    fn update_comment_text(&self, _id: &str, _text: &str) -> Result<()> {
        Err(read_only_access())
    }
    fn delete_comment(&self, _id: &str) -> Result<()> {
        Err(read_only_access())
    }
    fn count_comments(&self) -> Result<usize> {
        count_comments(&mut self.conn.borrow_mut())
    }
}

impl CommentRepository for DbReadWrite<'_> {
    fn create_comment(&self, comment: &Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comment(&self, id: &str) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_of_news(&self, news_id: &str) -> Result<Vec<Comment>> {
        load_comments_of_news(&mut self.conn.borrow_mut(), news_id)
    }
    fn update_comment_text(&self, id: &str, text: &str) -> Result<()> {
        update_comment_text(&mut self.conn.borrow_mut(), id, text)
    }
    fn delete_comment(&self, id: &str) -> Result<()> {
        delete_comment(&mut self.conn.borrow_mut(), id)
    }
    fn count_comments(&self) -> Result<usize> {
        count_comments(&mut self.conn.borrow_mut())
    }
}

impl CommentRepository for DbConnection<'_> {
    fn create_comment(&self, comment: &Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comment(&self, id: &str) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_of_news(&self, news_id: &str) -> Result<Vec<Comment>> {
        load_comments_of_news(&mut self.conn.borrow_mut(), news_id)
    }
    fn update_comment_text(&self, id: &str, text: &str) -> Result<()> {
        update_comment_text(&mut self.conn.borrow_mut(), id, text)
    }
    fn delete_comment(&self, id: &str) -> Result<()> {
        delete_comment(&mut self.conn.borrow_mut(), id)
    }
    fn count_comments(&self) -> Result<usize> {
        count_comments(&mut self.conn.borrow_mut())
    }
}

impl From<models::JoinedComment> for Comment {
    fn from(from: models::JoinedComment) -> Self {
        let models::JoinedComment {
            id,
            news_id,
            author,
            created_at,
            text,
        } = from;
        Self {
            id: id.into(),
            news_id: news_id.into(),
            author,
            created_at: TimestampMs::from_millis(created_at),
            text,
        }
    }
}

fn create_comment(conn: &mut SqliteConnection, comment: &Comment) -> Result<()> {
    let news_rowid = resolve_news_rowid(conn, comment.news_id.as_str())?;
    let new_comment = models::NewComment {
        id: comment.id.as_str(),
        news_rowid,
        author: &comment.author,
        created_at: comment.created_at.as_millis(),
        text: &comment.text,
    };
    let _count = diesel::insert_into(schema::comments::table)
        .values(&new_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn load_comment(conn: &mut SqliteConnection, id: &str) -> Result<Comment> {
    use schema::{comments::dsl as comment_dsl, news::dsl as news_dsl};
    Ok(schema::comments::table
        .inner_join(schema::news::table)
        .select((
            comment_dsl::id,
            news_dsl::id,
            comment_dsl::author,
            comment_dsl::created_at,
            comment_dsl::text,
        ))
        .filter(comment_dsl::id.eq(id))
        .first::<models::JoinedComment>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn load_comments_of_news(conn: &mut SqliteConnection, news_id: &str) -> Result<Vec<Comment>> {
    use schema::{comments::dsl as comment_dsl, news::dsl as news_dsl};
    Ok(schema::comments::table
        .inner_join(schema::news::table)
        .select((
            comment_dsl::id,
            news_dsl::id,
            comment_dsl::author,
            comment_dsl::created_at,
            comment_dsl::text,
        ))
        .filter(news_dsl::id.eq(news_id))
        .order_by(comment_dsl::created_at.asc())
        .then_order_by(comment_dsl::rowid.asc()) // disambiguation of equal time stamps
        .load::<models::JoinedComment>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn update_comment_text(conn: &mut SqliteConnection, id: &str, text: &str) -> Result<()> {
    use schema::comments::dsl;
    let count = diesel::update(schema::comments::table.filter(dsl::id.eq(id)))
        .set(dsl::text.eq(text))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn delete_comment(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::comments::dsl;
    let count = diesel::delete(schema::comments::table.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn count_comments(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::comments::dsl;
    Ok(schema::comments::table
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
