//! Utility functions for the rank services

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new unique entity ID
pub fn generate_id() -> Uuid {
    Uuid::new_v4()
}

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Integer mean rounded half up, `None` for an empty input
pub fn rounded_mean(values: impl IntoIterator<Item = i64>) -> Option<i64> {
    let (sum, count) = values
        .into_iter()
        .fold((0i128, 0i128), |(sum, count), value| {
            (sum + i128::from(value), count + 1)
        });

    if count == 0 {
        return None;
    }

    // floor((2 * sum + count) / (2 * count)) == floor(sum / count + 1/2)
    let mean = (2 * sum + count).div_euclid(2 * count);
    Some(mean.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_unique_ids() {
        let id1 = generate_id();
        let id2 = generate_id();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_rounded_mean() {
        assert_eq!(rounded_mean([]), None);
        assert_eq!(rounded_mean([7]), Some(7));
        assert_eq!(rounded_mean([1, 2]), Some(2));
        assert_eq!(rounded_mean([1, 2, 2]), Some(2));
        assert_eq!(rounded_mean([0, 1, 1, 1]), Some(1));
        assert_eq!(rounded_mean([-1, -2]), Some(-1));
        assert_eq!(rounded_mean([i64::MAX, i64::MAX]), Some(i64::MAX));
    }
}
