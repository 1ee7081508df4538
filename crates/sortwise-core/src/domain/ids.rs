//! RunId - デモの各イテレーションを識別する ID
//!
//! ULID ベースなので生成順序でソートでき、ログ上で実行順を追いやすくなります。

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Identifier of one sort run (one iteration of the demo loop).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RunId(Ulid);

impl RunId {
    /// ULID の先頭 48 bit（ミリ秒タイムスタンプ）
    pub fn timestamp_ms(&self) -> u64 {
        self.0.timestamp_ms()
    }
}

impl From<Ulid> for RunId {
    fn from(ulid: Ulid) -> Self {
        Self(ulid)
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_has_run_prefix() {
        let id = RunId::from(Ulid::new());
        assert!(id.to_string().starts_with("run-"));
    }

    #[test]
    fn run_ids_serialize_as_plain_ulid() {
        let ulid = Ulid::new();
        let id: RunId = ulid.into();

        let serialized = serde_json::to_string(&id).unwrap();
        let deserialized: RunId = serde_json::from_str(&serialized).unwrap();

        assert_eq!(serialized, format!("\"{ulid}\""));
        assert_eq!(deserialized, id);
    }

    #[test]
    fn timestamp_comes_from_ulid() {
        let ulid = Ulid::from_parts(1_700_000_000_000, 7);
        assert_eq!(RunId::from(ulid).timestamp_ms(), 1_700_000_000_000);
    }
}
