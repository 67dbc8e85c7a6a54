pub use quiz_intake::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    quiz_intake::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
