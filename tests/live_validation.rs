use std::env;

use aws_config::BehaviorVersion;
use upload_to_search::{
    auth::{AmbientCredentials, CredentialSource},
    document::parse_document,
    storage::{ObjectStore, S3ObjectStore},
};

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} must be set for live validation"))
}

#[tokio::test]
#[ignore = "Requires live AWS credentials"]
async fn live_ambient_credentials_resolve() {
    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let source = AmbientCredentials::from_sdk_config(&sdk_config).expect("credentials provider");
    let credentials = source.resolve().await.expect("ambient credentials");
    assert!(
        !credentials.access_key_id().is_empty(),
        "access key id should not be empty"
    );
}

#[tokio::test]
#[ignore = "Requires live S3 bucket (LIVE_BUCKET, LIVE_KEY)"]
async fn live_s3_object_parses() {
    let bucket = required_env("LIVE_BUCKET");
    let key = required_env("LIVE_KEY");
    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let store = S3ObjectStore::new(aws_sdk_s3::Client::new(&sdk_config));

    let bytes = store.fetch(&bucket, &key).await.expect("object fetch");
    let document = parse_document(&bytes).expect("document parse");
    assert!(
        !document.title.is_empty(),
        "live document should carry a title: {document:?}"
    );
}
