//! Submission domain type

use serde_json::Value;

use crate::domain::status::HomeworkStatus;
use crate::error::{ResponseError, Result};

/// Key holding the submission name in an API record
pub const NAME_KEY: &str = "homework_name";
/// Key holding the review status code in an API record
pub const STATUS_KEY: &str = "status";

/// One homework review record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub status: HomeworkStatus,
}

impl Submission {
    /// Builds a submission from a raw API record
    ///
    /// Both `homework_name` and `status` must be present and be strings.
    /// A status outside the known set is an `UnknownStatus` error.
    pub fn from_value(record: &Value) -> Result<Self> {
        let name = match record.get(NAME_KEY) {
            Some(Value::String(name)) => name.clone(),
            Some(_) => return Err(ResponseError::schema(format!("{NAME_KEY} не является строкой"))),
            None => return Err(ResponseError::schema(format!("нет ключа {NAME_KEY}"))),
        };

        let status = match record.get(STATUS_KEY) {
            Some(Value::String(code)) => code.parse::<HomeworkStatus>()?,
            Some(_) => return Err(ResponseError::schema(format!("{STATUS_KEY} не является строкой"))),
            None => return Err(ResponseError::schema(format!("нет ключа {STATUS_KEY}"))),
        };

        Ok(Self { name, status })
    }

    /// Notification text announcing this submission's review state
    pub fn status_message(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.name,
            self.status.verdict()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value() {
        let record = json!({
            "id": 124,
            "homework_name": "proj1",
            "status": "rejected",
            "reviewer_comment": "см. замечания"
        });

        let submission = Submission::from_value(&record).unwrap();
        assert_eq!(submission.name, "proj1");
        assert_eq!(submission.status, HomeworkStatus::Rejected);
    }

    #[test]
    fn test_status_message() {
        let submission = Submission {
            name: "proj1".to_string(),
            status: HomeworkStatus::Reviewing,
        };
        assert_eq!(
            submission.status_message(),
            "Изменился статус проверки работы \"proj1\". Работа взята на проверку ревьюером."
        );
    }

    #[test]
    fn test_missing_fields() {
        let err = Submission::from_value(&json!({ "status": "approved" })).unwrap_err();
        assert!(matches!(err, ResponseError::Schema(ref m) if m.contains(NAME_KEY)));

        let err = Submission::from_value(&json!({ "homework_name": "proj1" })).unwrap_err();
        assert!(matches!(err, ResponseError::Schema(ref m) if m.contains(STATUS_KEY)));

        let err = Submission::from_value(&json!("not a record")).unwrap_err();
        assert!(matches!(err, ResponseError::Schema(_)));
    }

    #[test]
    fn test_non_string_fields() {
        let err = Submission::from_value(&json!({ "homework_name": 1, "status": "approved" }))
            .unwrap_err();
        assert!(matches!(err, ResponseError::Schema(_)));

        let err = Submission::from_value(&json!({ "homework_name": "proj1", "status": null }))
            .unwrap_err();
        assert!(matches!(err, ResponseError::Schema(_)));
    }
}
