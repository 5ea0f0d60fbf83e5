use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize)]
pub struct CreateSubmissionBody<'a> {
    pub source_code: &'a str,
    pub language_id: i32,
    pub stdin: &'a str,
    pub compiler_options: &'a str,
    pub command_line_arguments: &'a str,
    pub redirect_stderr_to_stdout: bool,
}

#[derive(Debug, Deserialize)]
pub struct TokenBody {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub id: u32,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmissionBody {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
    pub message: Option<String>,
    pub status: StatusBody,
    #[serde(default, deserialize_with = "deserialize_seconds")]
    pub time: Option<f64>,
    pub memory: Option<u64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Seconds {
    Number(f64),
    Text(String),
}

// Judge0 reports times as decimal strings ("0.002").
fn deserialize_seconds<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Seconds>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Seconds::Number(seconds)) => Ok(Some(seconds)),
        Some(Seconds::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_body_from_judge0() {
        let body: SubmissionBody = serde_json::from_str(
            r#"{
                "stdout": "aGVsbG8K\n",
                "time": "0.002",
                "memory": 3120,
                "stderr": null,
                "token": "abc123",
                "compile_output": null,
                "message": null,
                "status": {"id": 3, "description": "Accepted"}
            }"#,
        )
        .unwrap();

        assert_eq!(body.stdout.as_deref(), Some("aGVsbG8K\n"));
        assert_eq!(body.time, Some(0.002));
        assert_eq!(body.memory, Some(3120));
        assert_eq!(body.stderr, None);
        assert_eq!(body.status.id, 3);
        assert_eq!(body.status.description, "Accepted");
    }

    #[test]
    fn test_pending_submission_body() {
        let body: SubmissionBody = serde_json::from_str(
            r#"{"stdout": null, "time": null, "memory": null, "status": {"id": 1, "description": "In Queue"}}"#,
        )
        .unwrap();

        assert_eq!(body.status.id, 1);
        assert_eq!(body.time, None);
        assert_eq!(body.memory, None);
        assert_eq!(body.compile_output, None);
    }

    #[test]
    fn test_numeric_time() {
        let body: SubmissionBody =
            serde_json::from_str(r#"{"time": 1.5, "status": {"id": 4}}"#).unwrap();
        assert_eq!(body.time, Some(1.5));
        assert_eq!(body.status.description, "");
    }

    #[test]
    fn test_garbage_time_is_malformed() {
        let body = serde_json::from_str::<SubmissionBody>(r#"{"time": "soon", "status": {"id": 3}}"#);
        assert!(body.is_err());
    }

    #[test]
    fn test_missing_status_is_malformed() {
        let body = serde_json::from_str::<SubmissionBody>(r#"{"stdout": "aGk="}"#);
        assert!(body.is_err());
    }

    #[test]
    fn test_create_body_field_names() {
        let body = CreateSubmissionBody {
            source_code: "cHJpbnQoMSk=",
            language_id: 71,
            stdin: "say \"hi\"\n",
            compiler_options: "",
            command_line_arguments: "",
            redirect_stderr_to_stdout: true,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "source_code": "cHJpbnQoMSk=",
                "language_id": 71,
                "stdin": "say \"hi\"\n",
                "compiler_options": "",
                "command_line_arguments": "",
                "redirect_stderr_to_stdout": true
            })
        );
    }
}
