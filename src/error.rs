use miette::Diagnostic;
use thiserror::Error;

// cost_per_user::parse -> cli argument parsing/validation.
// cost_per_user::config -> environment, credentials.
// cost_per_user::api -> cost explorer request/response errors.
// cost_per_user::internal -> "This thing shouldn't happen" errors.

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("A window of {days} days reaches past the earliest supported date.")]
    #[diagnostic(
        code(cost_per_user::parse::days),
        help("Pick a smaller --days value, Cost Explorer only keeps about 14 months anyway.")
    )]
    WindowOutOfRange { days: i64 },

    #[error("AWS credentials could not be resolved: {0}")]
    #[diagnostic(
        code(cost_per_user::config::credentials),
        help(
"Credentials come from the standard AWS chain: AWS_ACCESS_KEY_ID/AWS_SECRET_ACCESS_KEY,\n\
AWS_PROFILE with ~/.aws/credentials or ~/.aws/config (SSO included), or an instance role.\n\
Try running `aws sts get-caller-identity` to check what the chain resolves to."
        ),
        url("https://docs.aws.amazon.com/sdkref/latest/guide/standardized-credentials.html")
    )]
    CredentialsUnavailable(String),

    #[error("Cost Explorer request failed: {0}")]
    #[diagnostic(
        code(cost_per_user::api::request),
        help("Check the ce:GetCostAndUsage permission and that the tag is activated as a cost allocation tag.")
    )]
    ApiRequest(String),

    #[error("Cost Explorer returned an unexpected response: {0}")]
    #[diagnostic(code(cost_per_user::api::response))]
    MalformedResponse(String),

    /// The csv writer refused a row, or the rows are not the expected shape.
    #[error("Failed to render the report: {0}")]
    #[diagnostic(code(cost_per_user::internal::render))]
    Render(String),
}
