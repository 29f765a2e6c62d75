use serde::{Deserialize, Serialize};

use crate::common::{current_year, ValidationErrors, Validator};

pub const MIN_RATING: i64 = 0;
pub const MAX_RATING: i64 = 5;
pub const EARLIEST_PUBLISH_YEAR: i64 = 1500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatedBook {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: String,
    pub rating: i64,
    pub publish_date: i64,
}

impl RatedBook {
    fn seed(
        id: i64,
        title: &str,
        author: &str,
        description: &str,
        rating: i64,
        publish_date: i64,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            description: description.to_string(),
            rating,
            publish_date,
        }
    }
}

/// Body of create and update requests.
///
/// `id` is ignored on create (the catalog assigns one) and selects the
/// record on update.
#[derive(Debug, Clone, Deserialize)]
pub struct RatedBookRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub description: String,
    pub rating: i64,
    pub publish_date: i64,
}

impl RatedBookRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut validator = Validator::new();
        validator
            .min_chars("title", &self.title, 3)
            .min_chars("author", &self.author, 1)
            .min_chars("description", &self.description, 1)
            .max_chars("description", &self.description, 100)
            .range("rating", self.rating, MIN_RATING, MAX_RATING)
            .range(
                "publish_date",
                self.publish_date,
                EARLIEST_PUBLISH_YEAR,
                current_year(),
            );
        validator.finish()
    }

    pub fn into_book(self, id: i64) -> RatedBook {
        RatedBook {
            id,
            title: self.title,
            author: self.author,
            description: self.description,
            rating: self.rating,
            publish_date: self.publish_date,
        }
    }
}

pub fn seed_books() -> Vec<RatedBook> {
    vec![
        RatedBook::seed(1, "Computer Science Pro", "codingwithcody", "A very nice book!", 5, 2012),
        RatedBook::seed(2, "Be Fast with FastAPI", "codingwithcody", "A great book!", 5, 2022),
        RatedBook::seed(3, "Master Endpoints", "codingwithcody", "A awesome book!", 5, 1992),
        RatedBook::seed(4, "HP1", "Author 1", "Book Description", 2, 2000),
        RatedBook::seed(5, "HP2", "Author 2", "Book Description", 3, 2022),
        RatedBook::seed(6, "HP3", "Author 3", "Book Description", 1, 2023),
    ]
}
