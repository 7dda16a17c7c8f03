use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    reviewweb::cli::run().await
}
