use crate::core::domain::{EncodedSubmission, JudgeReport, Status, SubmissionToken};
use crate::judge0::models::{CreateSubmissionBody, StatusBody, SubmissionBody, TokenBody};

impl<'a> From<&'a EncodedSubmission> for CreateSubmissionBody<'a> {
    fn from(submission: &'a EncodedSubmission) -> Self {
        Self {
            source_code: &submission.source_code,
            language_id: submission.language_id,
            stdin: &submission.stdin,
            compiler_options: &submission.compiler_options,
            command_line_arguments: &submission.command_line_arguments,
            redirect_stderr_to_stdout: submission.redirect_stderr_to_stdout,
        }
    }
}

impl From<TokenBody> for SubmissionToken {
    fn from(body: TokenBody) -> Self {
        Self { token: body.token }
    }
}

impl From<StatusBody> for Status {
    fn from(body: StatusBody) -> Self {
        Self {
            id: body.id,
            description: body.description,
        }
    }
}

impl From<SubmissionBody> for JudgeReport {
    fn from(body: SubmissionBody) -> Self {
        Self {
            stdout: body.stdout,
            stderr: body.stderr,
            compile_output: body.compile_output,
            message: body.message,
            status: body.status.into(),
            time: body.time,
            memory: body.memory,
        }
    }
}
