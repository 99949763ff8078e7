//! End-to-end publish workflow tests against a mock release endpoint.

use std::path::PathBuf;
use std::sync::Mutex;

use herald_core::config::validation::missing_settings;
use herald_core::{
    publish_release, ConfigError, HeraldError, ProgressReporter, PublishOptions, PublishOutcome,
    PublishSettings, Setting, TracingReporter,
};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const README: &str = "=== Example Plugin ===
Contributors: example
Requires at least: 6.2
Tested up to: 6.5
Requires PHP: 8.0
Stable tag: 2.1.0

== Description ==

An example.

== Changelog ==

**2.1.0** - 2024-06-01
* Added <b>bold</b> settings page
- Fixed crash on activation

**2.0.0**
* Rewrite

== Upgrade Notice ==
Upgrade now.
";

#[derive(Default)]
struct Recorder {
    lines: Mutex<Vec<String>>,
}

impl ProgressReporter for Recorder {
    fn info(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }

    fn success(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }

    fn warning(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}

fn settings(endpoint: String, readme: Option<PathBuf>) -> PublishSettings {
    PublishSettings {
        user: Some("user".to_string()),
        password: Some("pass".to_string()),
        endpoint: Some(endpoint),
        asset_url: Some("https://github.com/example/plugin/releases/download/v2.1.0/plugin.zip".to_string()),
        file_name: Some("plugin.zip".to_string()),
        version: Some("2.1.0".to_string()),
        readme,
        pre_release: None,
    }
}

fn write_readme(temp: &TempDir) -> PathBuf {
    let path = temp.path().join("readme.txt");
    std::fs::write(&path, README).unwrap();
    path
}

#[tokio::test]
async fn publishes_release_parsed_from_readme() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/wp-json/releases/v1/release"))
        .and(header("authorization", "Basic dXNlcjpwYXNz"))
        .and(body_partial_json(json!({
            "version": "2.1.0",
            "file_name": "plugin.zip",
            "pre_release": "false",
            "changelog": "<ul>\n  <li>Added &lt;b&gt;bold&lt;/b&gt; settings page</li>\n  <li>Fixed crash on activation</li>\n</ul>",
            "requirements": { "wp": "6.2", "php": "8.0" }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 42 })))
        .expect(1)
        .mount(&server)
        .await;

    let settings = settings(
        format!("{}/wp-json/releases/v1/release", server.uri()),
        Some(write_readme(&temp)),
    );
    let recorder = Recorder::default();

    let outcome = publish_release(&settings, PublishOptions::default(), &recorder)
        .await
        .unwrap();

    match outcome {
        PublishOutcome::Published { release_id, .. } => assert_eq!(release_id, "42"),
        other => panic!("unexpected outcome: {other:?}"),
    }
    let lines = recorder.lines.lock().unwrap();
    assert_eq!(lines.last().unwrap(), "Successfully created release #42");
}

#[tokio::test]
async fn publishes_without_readme() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "7" })))
        .expect(1)
        .mount(&server)
        .await;

    let settings = settings(server.uri(), None);
    publish_release(&settings, PublishOptions::default(), &TracingReporter)
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(body["changelog"], "");
    assert!(body.get("requirements").is_none());
}

#[tokio::test]
async fn null_id_is_a_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": null })))
        .mount(&server)
        .await;

    let err = publish_release(
        &settings(server.uri(), None),
        PublishOptions::default(),
        &Recorder::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, HeraldError::MissingReleaseId { .. }));
}

#[tokio::test]
async fn server_error_surfaces_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("{\"code\":\"internal_error\"}"))
        .mount(&server)
        .await;

    let err = publish_release(
        &settings(server.uri(), None),
        PublishOptions::default(),
        &Recorder::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, HeraldError::Api(_)));
    let message = err.to_string();
    assert!(message.contains("500"), "{message}");
    assert!(message.contains("internal_error"), "{message}");
}

#[tokio::test]
async fn missing_settings_fail_before_any_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 1 })))
        .expect(0)
        .mount(&server)
        .await;

    // A directory as readme would be reported (and fail to read) if it were touched
    let temp = TempDir::new().unwrap();
    let mut settings = settings(server.uri(), Some(temp.path().to_path_buf()));
    settings.user = None;
    settings.version = None;
    let recorder = Recorder::default();

    let err = publish_release(&settings, PublishOptions::default(), &recorder)
        .await
        .unwrap_err();

    match err {
        HeraldError::Config(ConfigError::Missing(missing)) => {
            assert_eq!(missing, vec![Setting::User, Setting::Version]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(missing_settings(&settings).len(), 2);
    assert!(recorder.lines.lock().unwrap().is_empty());
}

#[tokio::test]
async fn dry_run_makes_no_request() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 1 })))
        .expect(0)
        .mount(&server)
        .await;

    let settings = settings(server.uri(), Some(write_readme(&temp)));
    let outcome = publish_release(&settings, PublishOptions::dry_run(), &Recorder::default())
        .await
        .unwrap();

    match outcome {
        PublishOutcome::DryRun { request } => {
            assert_eq!(request.version, "2.1.0");
            assert!(request.requirements.is_some());
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}
