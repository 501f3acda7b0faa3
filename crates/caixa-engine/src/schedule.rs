use chrono::NaiveDate;
use serde::Serialize;

use crate::records::{Payable, Receivable, SettlementStatus};

pub const DUE_SOON_WINDOW_DAYS: i64 = 30;

/// How far a record is from its due date, relative to an explicit reference
/// day. Paid records have no bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DueBucket {
    Overdue,
    DueSoon,
    DueLater,
}

impl DueBucket {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::DueSoon => "due_soon",
            Self::DueLater => "due_later",
        }
    }
}

/// Anything with a settlement status and a due date can be bucketed.
pub trait ScheduledRecord {
    fn status(&self) -> SettlementStatus;
    fn due_date(&self) -> NaiveDate;
}

impl ScheduledRecord for Payable {
    fn status(&self) -> SettlementStatus {
        self.status
    }

    fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}

impl ScheduledRecord for Receivable {
    fn status(&self) -> SettlementStatus {
        self.status
    }

    fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}

/// Classifies one record against the reference day.
///
/// An `Overdue` status wins regardless of date math. A pending record whose
/// due date has already passed also buckets as `Overdue`: the due date is
/// gone whatever the status field says, so it must not land in `DueSoon` or
/// `DueLater` and must not be dropped from classification entirely.
pub fn due_bucket<T>(record: &T, today: NaiveDate) -> Option<DueBucket>
where
    T: ScheduledRecord,
{
    match record.status() {
        SettlementStatus::Paid => None,
        SettlementStatus::Overdue => Some(DueBucket::Overdue),
        SettlementStatus::Pending => {
            let diff_days = (record.due_date() - today).num_days();
            if diff_days < 0 {
                Some(DueBucket::Overdue)
            } else if diff_days <= DUE_SOON_WINDOW_DAYS {
                Some(DueBucket::DueSoon)
            } else {
                Some(DueBucket::DueLater)
            }
        }
    }
}
