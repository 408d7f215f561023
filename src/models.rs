//! Frontend Models
//!
//! Launch records as returned by the launches API.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One mission's metadata (matches API payload)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LaunchRecord {
    pub flight_number: u32,
    pub mission_name: String,
    pub launch_date_utc: DateTime<Utc>,
    /// `None` until the launch has happened
    pub launch_success: Option<bool>,
    #[serde(default)]
    pub upcoming: bool,
    pub details: Option<String>,
    #[serde(default)]
    pub links: LaunchLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LaunchLinks {
    pub article_link: Option<String>,
    pub video_link: Option<String>,
    pub mission_patch_small: Option<String>,
}

impl LaunchRecord {
    pub fn status(&self) -> LaunchStatus {
        LaunchStatus::from_flags(self.launch_success, self.upcoming)
    }

    /// Details text, treating blank strings as missing
    pub fn details_text(&self) -> Option<&str> {
        self.details.as_deref().filter(|d| !d.trim().is_empty())
    }
}

/// Badge shown next to the mission name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchStatus {
    Success,
    Upcoming,
    Failed,
}

impl LaunchStatus {
    /// Any combination other than success / pending-upcoming reads as failed.
    pub fn from_flags(success: Option<bool>, upcoming: bool) -> Self {
        match (success, upcoming) {
            (Some(true), _) => LaunchStatus::Success,
            (None, true) => LaunchStatus::Upcoming,
            _ => LaunchStatus::Failed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LaunchStatus::Success => "success",
            LaunchStatus::Upcoming => "upcoming",
            LaunchStatus::Failed => "failed",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            LaunchStatus::Success => "launch__status launch__status--success",
            LaunchStatus::Upcoming => "launch__status launch__status--info",
            LaunchStatus::Failed => "launch__status launch__status--danger",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_flags() {
        assert_eq!(LaunchStatus::from_flags(Some(true), false), LaunchStatus::Success);
        assert_eq!(LaunchStatus::from_flags(None, true), LaunchStatus::Upcoming);
        assert_eq!(LaunchStatus::from_flags(Some(false), false), LaunchStatus::Failed);
    }

    #[test]
    fn test_status_fallbacks() {
        // Unknown outcome on a past launch
        assert_eq!(LaunchStatus::from_flags(None, false), LaunchStatus::Failed);
        assert_eq!(LaunchStatus::from_flags(Some(false), true), LaunchStatus::Failed);
        // A recorded success wins over the upcoming flag
        assert_eq!(LaunchStatus::from_flags(Some(true), true), LaunchStatus::Success);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(LaunchStatus::Success.label(), "success");
        assert_eq!(LaunchStatus::Upcoming.label(), "upcoming");
        assert_eq!(LaunchStatus::Failed.label(), "failed");
        assert!(LaunchStatus::Upcoming.css_class().ends_with("--info"));
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{
            "flight_number": 7,
            "mission_name": "RatSat",
            "launch_date_utc": "2008-09-28T23:15:00.000Z",
            "launch_success": true,
            "details": null
        }"#;
        let record: LaunchRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.flight_number, 7);
        assert!(!record.upcoming);
        assert_eq!(record.links, LaunchLinks::default());
        assert_eq!(record.status(), LaunchStatus::Success);
    }

    #[test]
    fn test_blank_details_are_missing() {
        let json = r#"{
            "flight_number": 1,
            "mission_name": "FalconSat",
            "launch_date_utc": "2006-03-24T22:30:00.000Z",
            "launch_success": false,
            "details": "   "
        }"#;
        let record: LaunchRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.details_text(), None);
    }
}
