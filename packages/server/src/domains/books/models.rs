use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub category: String,
}

impl Book {
    pub fn new(title: &str, author: &str, category: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
        }
    }

    pub fn has_title(&self, title: &str) -> bool {
        eq_ignore_case(&self.title, title)
    }

    pub fn has_author(&self, author: &str) -> bool {
        eq_ignore_case(&self.author, author)
    }

    pub fn in_category(&self, category: &str) -> bool {
        eq_ignore_case(&self.category, category)
    }
}

/// Books the catalog starts with.
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new("Title One", "Author One", "science"),
        Book::new("Title Two", "Author Two", "science"),
        Book::new("Title Three", "Author Three", "history"),
        Book::new("Title Four", "Author Four", "math"),
        Book::new("Title Five", "Author Five", "math"),
        Book::new("Title Six", "Author Two", "math"),
    ]
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
