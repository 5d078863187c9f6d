table! {
    users (id) {
        id -> BigInt,
        username -> Text,
        password -> Text,
    }
}

table! {
    news (rowid) {
        rowid -> BigInt,
        id -> Text,
        title -> Text,
        text -> Text,
        date -> Integer,
    }
}

table! {
    comments (rowid) {
        rowid -> BigInt,
        id -> Text,
        news_rowid -> BigInt,
        author -> Text,
        created_at -> BigInt,
        text -> Text,
    }
}

joinable!(comments -> news (news_rowid));

allow_tables_to_appear_in_same_query!(comments, news, users);
