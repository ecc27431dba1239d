//! Rating aggregation

use common::models::{Feedback, RatingStats};

/// Mean rating rounded to one decimal, plus the count
pub fn rating_stats(feedback: &[Feedback]) -> RatingStats {
    if feedback.is_empty() {
        return RatingStats::default();
    }

    let total: u64 = feedback.iter().map(|f| u64::from(f.rating)).sum();
    let mean = total as f64 / feedback.len() as f64;
    RatingStats {
        average_rating: (mean * 10.0).round() / 10.0,
        total_ratings: feedback.len(),
    }
}
