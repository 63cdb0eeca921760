// src/error.rs
//! エンジンが返すエラーの種類をまとめるよ。
//!
//! 反則手 (`MoveRejection`) はユーザー操作でしょっちゅう起きる普通の出来事なので、
//! パニックじゃなくて `Result` で返す。パイル番号が範囲外みたいな
//! 呼び出し側のバグだけは `EngineError::InvalidDescriptor` として区別するよ。

use thiserror::Error;

use crate::components::stack::{MoveSource, PileId};

/// 移動先ごとのルール違反の中身。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DestinationRule {
    #[error("card does not continue the foundation (suit or rank mismatch)")]
    FoundationSequence,
    #[error("only a single card can go to a foundation")]
    FoundationSingleCard,
    #[error("card must be one rank lower and the opposite color of the column top")]
    TableauColorOrRank,
    #[error("only a King can fill an empty column")]
    EmptyColumnNeedsKing,
    #[error("free cell is already occupied")]
    FreeCellOccupied,
    #[error("a free cell holds a single card")]
    FreeCellSingleCard,
    #[error("cards cannot be placed on the stock or the waste")]
    NotADropTarget,
    #[error("source and destination are the same pile")]
    SamePile,
}

/// 反則手の理由。閉じた集合で、どれも回復可能！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("lifted cards do not form a descending alternating-color run")]
    InvalidSequence,
    #[error("moving {requested} cards needs more room (capacity {capacity})")]
    SupermoveCapacityExceeded { requested: usize, capacity: usize },
    #[error("destination rule violated: {0}")]
    DestinationRuleViolation(DestinationRule),
    #[error("no card at the source")]
    EmptySource,
}

/// エンジンの公開操作が返すエラー。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("move rejected: {0}")]
    Rejected(#[from] MoveRejection),
    #[error("invalid move descriptor {origin} -> {destination}: {reason}")]
    InvalidDescriptor {
        origin: MoveSource,
        destination: PileId,
        reason: &'static str,
    },
}

impl EngineError {
    /// 反則手なら理由を返す。契約違反なら None。
    pub fn rejection(&self) -> Option<MoveRejection> {
        match self {
            EngineError::Rejected(reason) => Some(*reason),
            EngineError::InvalidDescriptor { .. } => None,
        }
    }
}

/// 設定の読み込みエラー。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("draw count must be 1 or 3, got {0}")]
    InvalidDrawCount(u8),
    #[error("malformed config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
