//! Status lifecycles for campaigns, posts, platform accounts, revenue
//! streams and transactions.
//!
//! Each status enum has a closed transition table. Anything not listed is
//! rejected with [`CreatorError::InvalidTransition`].

use crate::error::{CreatorError, CreatorResult};
use crate::types::{
    CampaignStatus, ConnectionStatus, PostStatus, StreamStatus, TransactionStatus,
};
use serde::{Deserialize, Serialize};

/// A status enum with an explicit transition table.
pub trait Lifecycle: Copy + std::fmt::Display {
    type Action: Copy + std::fmt::Debug;

    /// Entity name used in error messages.
    const ENTITY: &'static str;

    /// Target status for `action`, or `None` when not allowed from `self`.
    fn next(self, action: Self::Action) -> Option<Self>;

    /// Apply `action`, failing when the table has no such edge.
    fn apply(self, action: Self::Action) -> CreatorResult<Self> {
        self.next(action).ok_or_else(|| CreatorError::InvalidTransition {
            entity: Self::ENTITY,
            from: self.to_string(),
            action: format!("{:?}", action).to_lowercase(),
        })
    }
}

// ---------------------------------------------------------------------------
// Campaign
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignAction {
    /// Draft -> Active
    Launch,
    /// Active -> Paused
    Pause,
    /// Paused -> Active
    Resume,
    /// Active | Paused -> Completed
    Complete,
}

impl Lifecycle for CampaignStatus {
    type Action = CampaignAction;
    const ENTITY: &'static str = "campaign";

    fn next(self, action: CampaignAction) -> Option<Self> {
        match (self, action) {
            (CampaignStatus::Draft, CampaignAction::Launch) => Some(CampaignStatus::Active),
            (CampaignStatus::Active, CampaignAction::Pause) => Some(CampaignStatus::Paused),
            (CampaignStatus::Paused, CampaignAction::Resume) => Some(CampaignStatus::Active),
            (CampaignStatus::Active, CampaignAction::Complete)
            | (CampaignStatus::Paused, CampaignAction::Complete) => Some(CampaignStatus::Completed),
            _ => None,
        }
    }
}

impl CampaignStatus {
    /// The action behind the ad manager's play/pause switch.
    pub fn toggle_action(self) -> CreatorResult<CampaignAction> {
        match self {
            CampaignStatus::Active => Ok(CampaignAction::Pause),
            CampaignStatus::Paused => Ok(CampaignAction::Resume),
            other => Err(CreatorError::InvalidTransition {
                entity: Self::ENTITY,
                from: other.to_string(),
                action: "toggle".to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Scheduled post
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostAction {
    /// Draft -> Scheduled
    Schedule,
    /// Scheduled -> Published
    Publish,
    /// Scheduled -> Failed
    Fail,
    /// Scheduled -> Draft
    Unschedule,
    /// Failed -> Scheduled
    Retry,
}

impl Lifecycle for PostStatus {
    type Action = PostAction;
    const ENTITY: &'static str = "post";

    fn next(self, action: PostAction) -> Option<Self> {
        match (self, action) {
            (PostStatus::Draft, PostAction::Schedule) => Some(PostStatus::Scheduled),
            (PostStatus::Scheduled, PostAction::Publish) => Some(PostStatus::Published),
            (PostStatus::Scheduled, PostAction::Fail) => Some(PostStatus::Failed),
            (PostStatus::Scheduled, PostAction::Unschedule) => Some(PostStatus::Draft),
            (PostStatus::Failed, PostAction::Retry) => Some(PostStatus::Scheduled),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Platform account connection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionAction {
    /// Pending -> Active
    Activate,
    /// Active -> Limited
    Limit,
    /// Active | Limited -> Error
    Fault,
    /// Limited | Error -> Active
    Recover,
    /// any -> Pending
    Reset,
}

impl Lifecycle for ConnectionStatus {
    type Action = ConnectionAction;
    const ENTITY: &'static str = "platform account";

    fn next(self, action: ConnectionAction) -> Option<Self> {
        match (self, action) {
            (ConnectionStatus::Pending, ConnectionAction::Activate) => Some(ConnectionStatus::Active),
            (ConnectionStatus::Active, ConnectionAction::Limit) => Some(ConnectionStatus::Limited),
            (ConnectionStatus::Active, ConnectionAction::Fault)
            | (ConnectionStatus::Limited, ConnectionAction::Fault) => Some(ConnectionStatus::Error),
            (ConnectionStatus::Limited, ConnectionAction::Recover)
            | (ConnectionStatus::Error, ConnectionAction::Recover) => Some(ConnectionStatus::Active),
            (_, ConnectionAction::Reset) => Some(ConnectionStatus::Pending),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Revenue stream
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamAction {
    /// Pending -> Active
    Activate,
    /// Active -> Paused
    Pause,
    /// Paused -> Active
    Resume,
}

impl Lifecycle for StreamStatus {
    type Action = StreamAction;
    const ENTITY: &'static str = "revenue stream";

    fn next(self, action: StreamAction) -> Option<Self> {
        match (self, action) {
            (StreamStatus::Pending, StreamAction::Activate) => Some(StreamStatus::Active),
            (StreamStatus::Active, StreamAction::Pause) => Some(StreamStatus::Paused),
            (StreamStatus::Paused, StreamAction::Resume) => Some(StreamStatus::Active),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionAction {
    /// Pending -> Completed
    Settle,
    /// Pending -> Failed
    Fail,
}

impl Lifecycle for TransactionStatus {
    type Action = TransactionAction;
    const ENTITY: &'static str = "transaction";

    fn next(self, action: TransactionAction) -> Option<Self> {
        match (self, action) {
            (TransactionStatus::Pending, TransactionAction::Settle) => Some(TransactionStatus::Completed),
            (TransactionStatus::Pending, TransactionAction::Fail) => Some(TransactionStatus::Failed),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_full_chain() {
        let status = CampaignStatus::Draft.apply(CampaignAction::Launch).unwrap();
        assert_eq!(status, CampaignStatus::Active);
        let status = status.apply(CampaignAction::Pause).unwrap();
        assert_eq!(status, CampaignStatus::Paused);
        let status = status.apply(CampaignAction::Resume).unwrap();
        assert_eq!(status, CampaignStatus::Active);
        let status = status.apply(CampaignAction::Complete).unwrap();
        assert_eq!(status, CampaignStatus::Completed);
    }

    #[test]
    fn test_completed_campaign_cannot_be_reactivated() {
        for action in [
            CampaignAction::Launch,
            CampaignAction::Pause,
            CampaignAction::Resume,
            CampaignAction::Complete,
        ] {
            assert!(CampaignStatus::Completed.apply(action).is_err());
        }
    }

    #[test]
    fn test_toggle_only_between_active_and_paused() {
        assert_eq!(
            CampaignStatus::Active.toggle_action().unwrap(),
            CampaignAction::Pause
        );
        assert_eq!(
            CampaignStatus::Paused.toggle_action().unwrap(),
            CampaignAction::Resume
        );
        assert!(CampaignStatus::Draft.toggle_action().is_err());
        assert!(CampaignStatus::Completed.toggle_action().is_err());
    }

    #[test]
    fn test_invalid_transition_message() {
        let err = PostStatus::Published.apply(PostAction::Retry).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid transition: cannot retry a post that is published"
        );
    }

    #[test]
    fn test_post_retry_after_failure() {
        let status = PostStatus::Scheduled.apply(PostAction::Fail).unwrap();
        assert_eq!(status.apply(PostAction::Retry).unwrap(), PostStatus::Scheduled);
        assert!(PostStatus::Draft.apply(PostAction::Publish).is_err());
    }

    #[test]
    fn test_connection_reset_from_any_state() {
        for status in [
            ConnectionStatus::Active,
            ConnectionStatus::Error,
            ConnectionStatus::Limited,
            ConnectionStatus::Pending,
        ] {
            assert_eq!(
                status.apply(ConnectionAction::Reset).unwrap(),
                ConnectionStatus::Pending
            );
        }
        assert!(ConnectionStatus::Pending.apply(ConnectionAction::Recover).is_err());
    }

    #[test]
    fn test_transaction_settles_once() {
        let status = TransactionStatus::Pending
            .apply(TransactionAction::Settle)
            .unwrap();
        assert_eq!(status, TransactionStatus::Completed);
        assert!(status.apply(TransactionAction::Fail).is_err());
        assert!(StreamStatus::Active.apply(StreamAction::Activate).is_err());
    }
}
