//! Integration tests for artifact download and the no-side-effect decline path.

use discup::app::AppProfile;
use discup::install::{download_artifact, install, InstallOutcome};
use discup::ui::MockUI;
use discup::DiscupError;
use httpmock::Method::GET;
use httpmock::MockServer;
use tempfile::NamedTempFile;

#[test]
fn download_writes_the_full_body() {
    let server = MockServer::start();
    let payload = b"not-really-a-deb-but-bytes-are-bytes".to_vec();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/dl/discord.deb");
        then.status(200).body(payload.clone());
    });

    let mut artifact = NamedTempFile::new().unwrap();
    let bytes = download_artifact(&server.url("/dl/discord.deb"), artifact.as_file_mut()).unwrap();

    assert_eq!(bytes, payload.len() as u64);
    assert_eq!(std::fs::read(artifact.path()).unwrap(), payload);
    mock.assert();
}

#[test]
fn download_rejects_non_success_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/dl/discord.deb");
        then.status(404);
    });

    let mut artifact = NamedTempFile::new().unwrap();
    let err = download_artifact(&server.url("/dl/discord.deb"), artifact.as_file_mut())
        .unwrap_err();

    match err {
        DiscupError::Download { message, .. } => assert!(message.contains("404")),
        other => panic!("expected Download error, got {other:?}"),
    }
}

#[test]
fn artifact_is_removed_when_the_owner_goes_away() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/dl/discord.deb");
        then.status(200).body("payload");
    });

    let path = {
        let mut artifact = NamedTempFile::new().unwrap();
        download_artifact(&server.url("/dl/discord.deb"), artifact.as_file_mut()).unwrap();
        assert!(artifact.path().exists());
        artifact.path().to_path_buf()
    };

    // The handle owns the file: dropped means deleted. Every install()
    // exit branch relies on this.
    assert!(!path.exists());
}

#[test]
fn declined_update_downloads_nothing() {
    let server = MockServer::start();
    let endpoint = server.mock(|when, then| {
        when.method(GET).path("/api/download");
        then.status(200).body("payload");
    });

    let profile = AppProfile {
        name: "Testapp",
        package: "testapp",
        download_url: Box::leak(server.url("/api/download").into_boxed_str()),
        process_name: "Testapp",
        executables: &["testapp"],
    };

    let mut ui = MockUI::new();
    ui.queue_confirm_response(false);

    let outcome = install(&mut ui, &profile, true).unwrap();

    assert_eq!(outcome, InstallOutcome::Declined);
    assert_eq!(endpoint.hits(), 0);
    assert!(ui.confirms_asked()[0].contains("Update now?"));
}
