//! Response interpretation
//!
//! Turns a decoded review API response into a status message:
//! validate the shape, pick the newest submission, map its status to a verdict.

use serde_json::Value;

use crate::domain::submission::Submission;
use crate::error::{ResponseError, Result};

/// Key holding the submissions list in an API response
pub const HOMEWORKS_KEY: &str = "homeworks";
/// Key holding the lower bound for the next fetch
pub const CURRENT_DATE_KEY: &str = "current_date";

/// Returns the most recent submission record, unexamined
///
/// The API lists submissions newest first.
pub fn latest_submission(response: &Value) -> Result<&Value> {
    let object = response
        .as_object()
        .ok_or_else(|| ResponseError::schema("ответ не является объектом"))?;

    let homeworks = object
        .get(HOMEWORKS_KEY)
        .ok_or_else(|| ResponseError::schema(format!("нет ключа {HOMEWORKS_KEY}")))?
        .as_array()
        .ok_or_else(|| ResponseError::schema(format!("{HOMEWORKS_KEY} не является списком")))?;

    homeworks.first().ok_or(ResponseError::NoSubmissions)
}

/// Builds the notification text for a single submission record
pub fn parse_status(record: &Value) -> Result<String> {
    Submission::from_value(record).map(|submission| submission.status_message())
}

/// Reads `current_date` when the response carries it as an integer
pub fn current_date(response: &Value) -> Option<i64> {
    response.get(CURRENT_DATE_KEY).and_then(Value::as_i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_latest_submission_is_first() {
        let response = json!({
            "homeworks": [
                { "homework_name": "proj2", "status": "reviewing" },
                { "homework_name": "proj1", "status": "approved" }
            ],
            "current_date": 1700000100
        });

        let record = latest_submission(&response).unwrap();
        assert_eq!(record["homework_name"], "proj2");
    }

    #[test]
    fn test_wrong_shapes() {
        assert!(matches!(
            latest_submission(&json!([1, 2, 3])),
            Err(ResponseError::Schema(_))
        ));
        assert!(matches!(
            latest_submission(&json!({ "current_date": 1 })),
            Err(ResponseError::Schema(_))
        ));
        assert!(matches!(
            latest_submission(&json!({ "homeworks": { "homework_name": "proj1" } })),
            Err(ResponseError::Schema(_))
        ));
    }

    #[test]
    fn test_empty_submissions() {
        let response = json!({ "homeworks": [], "current_date": 1700000000 });
        assert_eq!(
            latest_submission(&response),
            Err(ResponseError::NoSubmissions)
        );
    }

    #[test]
    fn test_parse_status_approved() {
        let response = json!({
            "homeworks": [{ "homework_name": "proj1", "status": "approved" }],
            "current_date": 1700000100
        });

        let message = parse_status(latest_submission(&response).unwrap()).unwrap();
        assert_eq!(
            message,
            "Изменился статус проверки работы \"proj1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_parse_status_ignores_other_fields() {
        let plain = json!({ "homework_name": "proj1", "status": "rejected" });
        let noisy = json!({
            "homework_name": "proj1",
            "status": "rejected",
            "id": 7,
            "date_updated": "2023-11-14T22:13:20Z"
        });

        assert_eq!(parse_status(&plain).unwrap(), parse_status(&noisy).unwrap());
    }

    #[test]
    fn test_parse_status_unknown() {
        let record = json!({ "homework_name": "proj1", "status": "on_hold" });
        assert_eq!(
            parse_status(&record),
            Err(ResponseError::UnknownStatus("on_hold".to_string()))
        );
    }

    #[test]
    fn test_current_date() {
        assert_eq!(current_date(&json!({ "current_date": 1700000100 })), Some(1700000100));
        assert_eq!(current_date(&json!({ "homeworks": [] })), None);
        assert_eq!(current_date(&json!({ "current_date": "soon" })), None);
        assert_eq!(current_date(&json!(null)), None);
    }
}
