pub mod my_reviews;
