use base64::{
    Engine,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig, general_purpose::STANDARD},
};

use crate::core::domain::{EncodedSubmission, ExecutionResult, JudgeReport, SubmissionRequest};

/// Stands in for a field the judge sent back that is not valid base64.
pub const DECODE_ERROR_PLACEHOLDER: &str = "[decode error]";

// Judge0 wraps its base64 output and is not strict about padding.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

pub fn encode(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

pub fn decode(encoded: &str) -> String {
    let sanitized: String = encoded
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
        .collect();

    match LENIENT.decode(sanitized) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            tracing::warn!("Failed to decode field: {}", e);
            DECODE_ERROR_PLACEHOLDER.to_string()
        }
    }
}

pub fn decode_field(encoded: Option<String>) -> Option<String> {
    encoded.map(|value| decode(&value))
}

impl From<&SubmissionRequest> for EncodedSubmission {
    fn from(request: &SubmissionRequest) -> Self {
        Self {
            source_code: encode(&request.source_code),
            language_id: request.language_id,
            stdin: request.stdin.clone(),
            compiler_options: request.compiler_options.clone(),
            command_line_arguments: request.command_line_arguments.clone(),
            redirect_stderr_to_stdout: request.redirect_stderr_to_stdout,
        }
    }
}

impl From<JudgeReport> for ExecutionResult {
    fn from(report: JudgeReport) -> Self {
        Self {
            stdout: decode_field(report.stdout),
            stderr: decode_field(report.stderr),
            compile_output: decode_field(report.compile_output),
            message: decode_field(report.message),
            status: report.status,
            time: report.time,
            memory: report.memory,
        }
    }
}
