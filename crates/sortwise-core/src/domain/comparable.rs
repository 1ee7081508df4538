//! Comparable - ソート対象の値を数値に射影する
//!
//! JavaScript の `Date.valueOf()` と同じく、値をひとつの符号付き整数に写して
//! 比較します。数値の自然順序がそのまま値の順序になります。

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Comparable は全順序を与える数値射影を持つ値
///
/// # 契約
/// - 全域: シーケンス中のどの値に対しても定義されている
/// - 一貫性: 1 回のソート中、同じ値は常に同じ数値を返す
/// - 副作用なし
pub trait Comparable {
    fn value_of(&self) -> i64;
}

/// Milliseconds since the Unix epoch.
impl Comparable for DateTime<Utc> {
    fn value_of(&self) -> i64 {
        self.timestamp_millis()
    }
}

impl Comparable for NaiveDateTime {
    fn value_of(&self) -> i64 {
        self.and_utc().timestamp_millis()
    }
}

/// Midnight UTC of the date, in milliseconds.
impl Comparable for NaiveDate {
    fn value_of(&self) -> i64 {
        self.and_time(chrono::NaiveTime::MIN).and_utc().timestamp_millis()
    }
}

impl Comparable for i64 {
    fn value_of(&self) -> i64 {
        *self
    }
}

impl Comparable for i32 {
    fn value_of(&self) -> i64 {
        i64::from(*self)
    }
}

impl Comparable for u32 {
    fn value_of(&self) -> i64 {
        i64::from(*self)
    }
}

impl<T: Comparable + ?Sized> Comparable for &T {
    fn value_of(&self) -> i64 {
        (**self).value_of()
    }
}
