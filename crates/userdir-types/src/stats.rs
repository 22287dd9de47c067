use serde::{Deserialize, Serialize};

use crate::{AgeFilter, User};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub total: usize,
    pub shown: usize,
    pub married: usize,
    pub single: usize,
    pub average_age: i64,
    pub married_percentage: i64,
    pub single_percentage: i64,
    pub young: usize,
    pub adult: usize,
    pub senior: usize,
}

impl UserStats {
    pub fn from_users(users: &[User]) -> Self {
        Self::with_shown(users, users.len())
    }

    /// `shown` is the size of the currently filtered view over `users`.
    pub fn with_shown(users: &[User], shown: usize) -> Self {
        let total = users.len();
        let married = users.iter().filter(|u| u.is_married).count();
        let single = total - married;
        let age_sum: i64 = users.iter().map(|u| i64::from(u.age)).sum();

        let count_band = |band: AgeFilter| users.iter().filter(|u| band.contains(u.age)).count();

        Self {
            total,
            shown,
            married,
            single,
            average_age: ratio_rounded(age_sum, total as i64, 1),
            married_percentage: ratio_rounded(married as i64, total as i64, 100),
            single_percentage: ratio_rounded(single as i64, total as i64, 100),
            young: count_band(AgeFilter::Young),
            adult: count_band(AgeFilter::Adult),
            senior: count_band(AgeFilter::Senior),
        }
    }
}

/// `round(numerator * scale / denominator)` with halves rounded up; 0 when empty.
fn ratio_rounded(numerator: i64, denominator: i64, scale: i64) -> i64 {
    if denominator == 0 {
        return 0;
    }
    let value = (numerator * scale) as f64 / denominator as f64;
    (value + 0.5).floor() as i64
}
