//! Reading statistics over the local catalog.

use serde::Serialize;

use crate::backend::Book;
use crate::session::Rating;

/// Summary of the user's library.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LibraryStats {
    pub total_books: usize,
    pub read_books: usize,
    pub wishlist_count: usize,
    /// `read_books / total_books`, or 0.0 for an empty catalog.
    pub read_ratio: f64,
    /// Count of session ratings per star, index 0 = one star.
    pub rating_distribution: [usize; 5],
}

impl LibraryStats {
    pub fn compute(
        books: &[Book],
        wishlist_count: usize,
        ratings: impl IntoIterator<Item = Rating>,
    ) -> Self {
        let total_books = books.len();
        let read_books = books.iter().filter(|b| b.is_read).count();
        let read_ratio = if total_books == 0 {
            0.0
        } else {
            read_books as f64 / total_books as f64
        };

        let mut rating_distribution = [0; 5];
        for rating in ratings {
            rating_distribution[usize::from(rating.stars() - Rating::MIN)] += 1;
        }

        Self {
            total_books,
            read_books,
            wishlist_count,
            read_ratio,
            rating_distribution,
        }
    }

    /// Average session rating, if anything was rated.
    pub fn average_rating(&self) -> Option<f64> {
        let count: usize = self.rating_distribution.iter().sum();
        if count == 0 {
            return None;
        }
        let total: usize = self
            .rating_distribution
            .iter()
            .enumerate()
            .map(|(i, n)| (i + 1) * n)
            .sum();
        Some(total as f64 / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(stars: u8) -> Rating {
        Rating::try_from(stars).expect("valid rating")
    }

    #[test]
    fn empty_catalog_has_zero_ratio() {
        let stats = LibraryStats::compute(&[], 0, []);
        assert_eq!(stats, LibraryStats::default());
        assert_eq!(stats.read_ratio, 0.0);
        assert!(stats.average_rating().is_none());
    }

    #[test]
    fn counts_read_books() {
        let books = [
            Book::new("Dune", "Herbert").read(true),
            Book::new("Emma", "Austen"),
            Book::new("Ulysses", "Joyce"),
            Book::new("Beloved", "Morrison").read(true),
        ];
        let stats = LibraryStats::compute(&books, 3, []);
        assert_eq!(stats.total_books, 4);
        assert_eq!(stats.read_books, 2);
        assert_eq!(stats.wishlist_count, 3);
        assert!((stats.read_ratio - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn rating_distribution_buckets_by_star() {
        let stats = LibraryStats::compute(&[], 0, [rating(1), rating(5), rating(5), rating(3)]);
        assert_eq!(stats.rating_distribution, [1, 0, 1, 0, 2]);
        assert_eq!(stats.average_rating(), Some(3.5));
    }
}
