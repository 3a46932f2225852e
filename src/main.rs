#[tokio::main]
async fn main() -> anyhow::Result<()> {
    recipe_feedback::server::start_server().await
}
