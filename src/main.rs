#[tokio::main]
async fn main() {
    if let Err(e) = pitch_harness::run_with_config().await {
        eprintln!("pitch_harness: {e}");
        std::process::exit(1);
    }
}
