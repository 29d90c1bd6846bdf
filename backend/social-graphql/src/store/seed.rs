//! Mock dataset loaded into every store built with `SocialStore::new`

use super::models::{CommentRecord, Dataset, PostRecord, UserRecord};

fn ids(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|id| id.to_string()).collect()
}

fn user(id: &str, name: &str, email: &str, followers: &[&str], following: &[&str]) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        followers: ids(followers),
        following: ids(following),
    }
}

fn post(id: &str, title: &str, content: &str, author_id: &str, likes: &[&str]) -> PostRecord {
    PostRecord {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        author_id: author_id.to_string(),
        likes: ids(likes),
    }
}

fn comment(id: &str, content: &str, author_id: &str, post_id: &str) -> CommentRecord {
    CommentRecord {
        id: id.to_string(),
        content: content.to_string(),
        author_id: author_id.to_string(),
        post_id: post_id.to_string(),
    }
}

pub fn dataset() -> Dataset {
    Dataset {
        users: vec![
            user("0", "Alice", "alice@example.com", &["1", "2"], &["1"]),
            user("1", "Bob", "bob@example.com", &["0", "3"], &["3", "2"]),
            // Sam's duplicate follow of Alice is part of the dataset
            user("2", "Sam", "sam@example.com", &["0", "3"], &["0", "0", "1"]),
            user("3", "Zoe", "zoe@example.com", &["0", "1"], &["1", "2"]),
        ],
        posts: vec![
            post(
                "0",
                "AliceLife",
                "Contenu sur la Vie de Alice",
                "0",
                &["3", "2", "1"],
            ),
            post(
                "1",
                "BobJobs",
                "Contenu sur le travail de bob",
                "1",
                &["3", "0"],
            ),
            post(
                "2",
                "Sammmm Family",
                "Contenu sur la Vie de Famille de Sam",
                "2",
                &["3", "0"],
            ),
        ],
        comments: vec![
            comment("0", "Super !!", "1", "0"),
            comment("1", "Super boulot !!", "2", "1"),
            comment("2", "Sympa !!", "0", "2"),
        ],
    }
}
