//! Customer review types.

use crate::ids::ReviewId;
use serde::{Deserialize, Serialize};

/// Highest star rating a review can carry.
pub const MAX_RATING: u8 = 5;

/// A customer review shown in the carousel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    pub id: ReviewId,
    pub user_name: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub comment: String,
    /// Human-readable age of the review ("2 weeks ago"), not a parsed date.
    pub date: String,
}

impl Review {
    pub fn new(
        id: impl Into<ReviewId>,
        user_name: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            user_name: user_name.into(),
            rating: rating.clamp(1, MAX_RATING),
            comment: comment.into(),
            date: date.into(),
        }
    }

    /// Avatar letter.
    pub fn initial(&self) -> Option<char> {
        self.user_name.chars().next()
    }

    /// Filled/empty star flags, one per star slot.
    pub fn stars(&self) -> [bool; MAX_RATING as usize] {
        let mut stars = [false; MAX_RATING as usize];
        for star in stars.iter_mut().take(self.rating as usize) {
            *star = true;
        }
        stars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_is_clamped() {
        let review = Review::new(1, "Aisha M.", 9, "Very trendy tops.", "3 weeks ago");
        assert_eq!(review.rating, 5);
        let review = Review::new(2, "Aisha M.", 0, "", "");
        assert_eq!(review.rating, 1);
    }

    #[test]
    fn test_stars_and_initial() {
        let review = Review::new(3, "Nusra F.", 4, "Good collection of heels.", "1 week ago");
        assert_eq!(review.stars(), [true, true, true, true, false]);
        assert_eq!(review.initial(), Some('N'));
    }
}
