//! A terminal runner for the calculator agent.

#[macro_use]
extern crate tracing;

use std::io::Write as _;
use std::time::Duration;

use calc_agent::{Config, SessionBuilder, find_model};
use calc_agent_openai_model::{OpenAIConfigBuilder, OpenAIProvider};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tokio::io::{self, AsyncBufReadExt};

const BAR_CHAR: &str = "▎";

const INFERENCE_BASE_URL: &str = "https://models.github.ai/inference";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(
                        config.log_level.as_str(),
                    )
                }),
        )
        .init();
    debug!(
        "using model {} (fallback: {})",
        config.default_model, config.fallback_model
    );

    let provider_config =
        OpenAIConfigBuilder::with_api_key(config.auth_token.clone())
            .with_base_url(INFERENCE_BASE_URL)
            .with_model(config.default_model.clone())
            .with_temperature(config.temperature)
            .with_max_tokens(config.max_tokens)
            .with_timeout(config.timeout)
            .build();
    let model_provider = OpenAIProvider::new(provider_config);

    let session = match SessionBuilder::with_model_provider(model_provider)
        .build()
    {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let model_label = find_model(&config.default_model)
        .map(|model| model.name.to_owned())
        .unwrap_or_else(|| config.default_model.clone());
    println!("Chatting with {}.", model_label.bold());
    println!("Ask me something like \"What is 15 times 23?\" (Ctrl-D quits)");

    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");

    loop {
        print!("> ");
        std::io::stdout().flush().unwrap();

        let Some(line) = read_line().await else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let progress_bar = ProgressBar::new_spinner();
        progress_bar.set_style(progress_style.clone());
        progress_bar.set_message("🤔 Thinking...");
        progress_bar.enable_steady_tick(Duration::from_millis(100));

        let reply = session.send(line).await;
        progress_bar.finish_and_clear();

        match reply {
            Ok(answer) => {
                println!(
                    "{}🤖 {}",
                    BAR_CHAR.bright_cyan(),
                    answer.bright_white()
                );
            }
            Err(err) => {
                error!("chat request failed: {err}");
                println!(
                    "{}{}",
                    BAR_CHAR.bright_red(),
                    format!("Request failed: {err}").bright_red()
                );
            }
        }
    }
}

async fn read_line() -> Option<String> {
    let mut stdin = io::BufReader::new(io::stdin());
    let mut line = String::new();

    match stdin.read_line(&mut line).await {
        Ok(count) => {
            if count == 0 {
                return None;
            }
            Some(line)
        }
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}
