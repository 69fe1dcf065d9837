use anyhow::{bail, Result};
use clap::Parser;
use client_core::{render_blueprint, BlueprintClient, GenerationService};
use shared::protocol::GenerateBlueprintRequest;

/// Headless front-end: submit one movie idea and print the rendered blueprint.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    server_url: String,
    /// The movie idea to expand into a scene-by-scene blueprint.
    #[arg(long)]
    idea: String,
    /// Requested scene count; empty means the service default.
    #[arg(long, default_value = "")]
    num_scenes: String,
    #[arg(long, default_value = "")]
    film_tone: String,
    #[arg(long, default_value = "")]
    aspect_ratio: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let request = GenerateBlueprintRequest {
        idea: args.idea,
        num_scenes: args.num_scenes,
        film_tone: args.film_tone,
        aspect_ratio: args.aspect_ratio,
    };
    if let Err(err) = request.validate() {
        bail!("{err}");
    }

    let client = BlueprintClient::new(args.server_url);
    match client.generate(&request).await {
        Ok(response) => {
            print!("{}", render_blueprint(&response).to_text());
            Ok(())
        }
        Err(err) => bail!("{}", err.user_message()),
    }
}
