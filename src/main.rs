use std::sync::Arc;

use aws_config::BehaviorVersion;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use upload_to_search::{
    auth::AmbientCredentials, config, event::NotificationEvent, handler::UploadHandler, logging,
    storage::S3ObjectStore,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    config::load_dotenv();
    logging::init_tracing(&logging::LogSettings::from_env());
    let config = config::init_config()?.clone();

    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let store = S3ObjectStore::new(aws_sdk_s3::Client::new(&sdk_config));
    let credentials = AmbientCredentials::from_sdk_config(&sdk_config)?;
    let handler = UploadHandler::new(config, Arc::new(store), Arc::new(credentials))?;
    tracing::info!("Upload handler ready");

    let handler = &handler;
    run(service_fn(
        move |event: LambdaEvent<NotificationEvent>| async move {
            handler.handle(event.payload).await.map_err(Error::from)
        },
    ))
    .await
}
