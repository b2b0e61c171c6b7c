use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Tolerance band, in percentage points, around the elapsed-time baseline
const TOLERANCE_PCT: f64 = 10.0;

/// Schedule status of a work stream: reported progress measured against
/// how much of the scheduled window has already passed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStatus {
    Ahead,
    Behind,
    OnTrack,
}

impl ProgressStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ProgressStatus::Ahead => "ahead",
            ProgressStatus::Behind => "behind",
            ProgressStatus::OnTrack => "ontrack",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProgressStatus::Ahead => "Ahead",
            ProgressStatus::Behind => "Behind",
            ProgressStatus::OnTrack => "On Track",
        }
    }
}

/// Classify reported progress against the elapsed-time baseline.
///
/// More than ten points above the baseline is ahead, more than ten points
/// below is behind, everything inside the band is on track.
pub fn classify(progress_pct: f64, time_pct: f64) -> ProgressStatus {
    if progress_pct >= time_pct + TOLERANCE_PCT {
        ProgressStatus::Ahead
    } else if progress_pct < time_pct - TOLERANCE_PCT {
        ProgressStatus::Behind
    } else {
        ProgressStatus::OnTrack
    }
}

/// Percentage of the scheduled window already elapsed, rounded and clamped
/// to [0, 100].
///
/// Missing or unparseable dates yield 0, as does a window that does not
/// move forward (deadline on or before the start date).
pub fn time_elapsed_percent(
    start_date: Option<&str>,
    deadline: Option<&str>,
    now: DateTime<Utc>,
) -> u32 {
    let (start, deadline) = match (parse_odoo_date(start_date), parse_odoo_date(deadline)) {
        (Some(start), Some(deadline)) => (start, deadline),
        _ => return 0,
    };

    let start = start.and_time(NaiveTime::MIN).and_utc();
    let deadline = deadline.and_time(NaiveTime::MIN).and_utc();

    let total_secs = (deadline - start).num_seconds();
    if total_secs <= 0 {
        return 0;
    }

    let elapsed_secs = (now - start).num_seconds();
    let pct = (elapsed_secs as f64 / total_secs as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u32
}

/// Odoo date columns come over the wire as "YYYY-MM-DD", datetime columns
/// as "YYYY-MM-DD HH:MM:SS".
fn parse_odoo_date(value: Option<&str>) -> Option<NaiveDate> {
    let raw = value?.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .ok()
}
