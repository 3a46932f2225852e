use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};
use widget::{FeedbackWidget, client::HttpFeedbackApi};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    recipe_id: String,

    #[arg(required = true)]
    feedback: Vec<String>,

    #[arg(long, default_value = "http://localhost:1111")]
    url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();

    let api = HttpFeedbackApi::new(&args.url);
    println!("Endpoint: {}\n", api.endpoint());

    let widget = FeedbackWidget::new(args.recipe_id, api)
        .on_feedback_submitted(|text| println!("Submitting: {text:?}"));

    println!("Recipe: {}", widget.recipe_id());

    widget.set_draft(args.feedback.join(" "));
    if !widget.can_submit() {
        anyhow::bail!("Feedback is blank, nothing to submit");
    }

    widget.submit().await;

    println!("\n{}", widget.render());

    if let Some(error) = widget.error() {
        anyhow::bail!(error);
    }

    Ok(())
}
