#[tokio::main]
async fn main() -> Result<(), eyre::Report> {
    walletos::run().await
}
