//! Trust Scorer
//!
//! プロフィールごとの「信頼度」を計算する。
//! - rating (0-5想定) は2倍
//! - swaps は10件ごとに +1
//!
//! 上限は 10.0。下限のクランプはなく、入力の検証もしない。

pub const TRUST_SCORE_CAP: f64 = 10.0;

/// trust_score = min(10.0, rating * 2 + swaps / 10)
pub fn score(swaps: f64, rating: f64) -> f64 {
    (rating * 2.0 + swaps / 10.0).min(TRUST_SCORE_CAP)
}
