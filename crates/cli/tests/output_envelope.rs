//! Output envelope shape tests.
//!
//! The envelope is the CLI's contract with CI scripts; these tests pin the
//! field names and the ok/error/artifact layout.

use std::path::PathBuf;

use pagecheck_cli::output::{
    Artifact, ArtifactType, CommandInputs, ErrorCode, ResultBuilder, VerifyData,
};

#[test]
fn success_envelope_has_data_and_no_error() {
    let result = ResultBuilder::new("verify")
        .inputs(CommandInputs {
            url: Some("http://localhost:3000/".into()),
            locator: Some("role=button name=\"Subscription\"".into()),
            output_path: Some(PathBuf::from(
                "jules-scratch/verification/subscription_page.png",
            )),
        })
        .data(VerifyData {
            url: "http://localhost:3000/".into(),
            locator: "role=button name=\"Subscription\"".into(),
            navigated: false,
            screenshot: PathBuf::from("jules-scratch/verification/subscription_page.png"),
            size_bytes: 1024,
        })
        .artifact(Artifact {
            artifact_type: ArtifactType::Screenshot,
            path: PathBuf::from("jules-scratch/verification/subscription_page.png"),
            size_bytes: Some(1024),
        })
        .build();

    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["ok"], true);
    assert_eq!(value["command"], "verify");
    assert_eq!(value["data"]["sizeBytes"], 1024);
    assert_eq!(value["data"]["navigated"], false);
    assert_eq!(
        value["inputs"]["locator"],
        "role=button name=\"Subscription\""
    );
    assert_eq!(value["artifacts"][0]["type"], "screenshot");
    assert!(value.get("error").is_none());
    assert!(value["timings"]["durationMs"].is_u64());
}

#[test]
fn error_envelope_has_no_data() {
    let result: pagecheck_cli::output::CommandResult<VerifyData> = ResultBuilder::new("verify")
        .error(ErrorCode::ElementNotFound, "No element matched")
        .build();

    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["ok"], false);
    assert_eq!(value["error"]["code"], "ELEMENT_NOT_FOUND");
    assert_eq!(value["error"]["message"], "No element matched");
    assert!(value.get("data").is_none());
    assert!(value.get("artifacts").is_none());
}

#[test]
fn builder_without_data_or_error_is_not_ok() {
    let result: pagecheck_cli::output::CommandResult<VerifyData> =
        ResultBuilder::new("verify").build();

    assert!(!result.ok);
}

#[test]
fn empty_artifacts_are_omitted_from_json() {
    let result: pagecheck_cli::output::CommandResult<VerifyData> = ResultBuilder::new("verify")
        .error(ErrorCode::InternalError, "boom")
        .build();

    let json = serde_json::to_string(&result).unwrap();
    assert!(!json.contains("artifacts"));
}
