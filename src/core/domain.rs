use serde::{Deserialize, Serialize};

/// Judge0 status id of a submission waiting for a worker.
pub const STATUS_IN_QUEUE: u32 = 1;
/// Judge0 status id of a submission currently being executed.
pub const STATUS_PROCESSING: u32 = 2;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub source_code: String,
    pub language_id: i32,
    #[serde(default)]
    pub stdin: String,
    #[serde(default)]
    pub compiler_options: String,
    #[serde(default)]
    pub command_line_arguments: String,
    #[serde(default = "default_redirect_stderr_to_stdout")]
    pub redirect_stderr_to_stdout: bool,
}

fn default_redirect_stderr_to_stdout() -> bool {
    true
}

impl SubmissionRequest {
    pub fn new(source_code: &str, language_id: i32) -> Self {
        Self {
            source_code: source_code.to_string(),
            language_id,
            stdin: String::new(),
            compiler_options: String::new(),
            command_line_arguments: String::new(),
            redirect_stderr_to_stdout: default_redirect_stderr_to_stdout(),
        }
    }
}

/// A submission ready to be sent: `source_code` holds base64, every other
/// field is carried over untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedSubmission {
    pub source_code: String,
    pub language_id: i32,
    pub stdin: String,
    pub compiler_options: String,
    pub command_line_arguments: String,
    pub redirect_stderr_to_stdout: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionToken {
    pub token: String,
}

impl SubmissionToken {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub id: u32,
    pub description: String,
}

impl Status {
    pub fn new(id: u32, description: &str) -> Self {
        Self {
            id,
            description: description.to_string(),
        }
    }

    /// Only "in queue" and "processing" keep a submission pending; any other
    /// id, including ones this relay does not know, is a verdict.
    pub fn is_terminal(&self) -> bool {
        !matches!(self.id, STATUS_IN_QUEUE | STATUS_PROCESSING)
    }
}

/// A result as reported by the remote judge. Text fields are still base64
/// and may be absent while the submission is pending.
#[derive(Clone, Debug, PartialEq)]
pub struct JudgeReport {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
    pub message: Option<String>,
    pub status: Status,
    pub time: Option<f64>,
    pub memory: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
    pub message: Option<String>,
    pub status: Status,
    /// Seconds.
    pub time: Option<f64>,
    /// As reported by the judge (kilobytes for Judge0).
    pub memory: Option<u64>,
}
