use std::io::Write;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use stacksense::adapters::http::HttpRecommendationClient;
use stacksense::adapters::terminal::{Command, Renderer, HELP};
use stacksense::application::{
    CheckHealthHandler, ResetResultsHandler, SubmitRecommendationHandler,
};
use stacksense::config::AppConfig;
use stacksense::domain::results::{CardBody, ResultsEvent};
use stacksense::domain::shell::{AppShell, ShellPhase, ShellView};
use stacksense::ports::RecommendationService;
use stacksense::telemetry;

#[derive(Parser, Debug)]
#[command(name = "stacksense")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Recommendation service root (overrides STACKSENSE__CLIENT__BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Submit the default form once, print the result and exit
    #[arg(long)]
    submit_defaults: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(base_url) = cli.base_url {
        config.client.base_url = base_url;
    }
    config.validate().context("Invalid configuration")?;

    telemetry::init(&config.log, cli.verbose);

    let client = HttpRecommendationClient::new(config.client.http_config())
        .context("Failed to build recommendation client")?;
    let service: Arc<dyn RecommendationService> = Arc::new(client);

    let info = service.service_info();
    info!(service = %info.name, endpoint = %info.endpoint, "StackSense client starting");
    match CheckHealthHandler::new(Arc::clone(&service)).handle().await {
        Ok(status) => debug!(message = %status.message, "Recommendation service reachable"),
        Err(e) => warn!(error = %e, "Recommendation service health check failed"),
    }

    let renderer = Renderer::new(!cli.no_color);
    let submit = SubmitRecommendationHandler::new(service);
    let mut shell = AppShell::new();

    if cli.submit_defaults {
        return submit_once(&submit, &renderer, &mut shell).await;
    }

    run_interactive(&submit, &renderer, &mut shell).await
}

async fn submit_once(
    submit: &SubmitRecommendationHandler,
    renderer: &Renderer,
    shell: &mut AppShell,
) -> anyhow::Result<()> {
    submit.handle(shell).await?;
    print!("{}", renderer.shell(shell));

    if shell.phase() == ShellPhase::Failed {
        bail!("recommendation request failed");
    }
    Ok(())
}

async fn run_interactive(
    submit: &SubmitRecommendationHandler,
    renderer: &Renderer,
    shell: &mut AppShell,
) -> anyhow::Result<()> {
    let reset = ResetResultsHandler::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print!("{}", renderer.shell(shell));
    println!("Type `help` for commands.");

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            Command::Show => print!("{}", renderer.shell(shell)),
            Command::Submit => {
                let submission = match shell.begin_submit() {
                    Ok(submission) => submission,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };
                print!("{}", renderer.shell(shell));
                let fetched = submit.fetch(submission).await;
                shell.complete(fetched.ticket, fetched.outcome);
                print!("{}", renderer.shell(shell));
            }
            Command::Reset => {
                reset.handle(shell, ResultsEvent::Reset);
                print!("{}", renderer.shell(shell));
            }
            Command::Hover { card, alternative } => match shell.view() {
                ShellView::Results(view) => {
                    let tooltip = view
                        .cards
                        .get(card)
                        .and_then(|card| match &card.body {
                            CardBody::TopPick(panel) => Some(panel),
                            CardBody::Empty => None,
                        })
                        .and_then(|panel| panel.alternatives.get(alternative))
                        .map(|alt| &alt.tooltip);
                    match tooltip {
                        Some(tooltip) => print!("{}", renderer.tooltip(tooltip)),
                        None => println!("no such alternative"),
                    }
                }
                ShellView::Form { .. } => println!("no results to compare yet"),
            },
            edit => {
                if shell.phase() == ShellPhase::Showing {
                    println!("results are shown; `reset` to edit the form");
                    continue;
                }
                apply_edit(shell, edit);
                print!("{}", renderer.shell(shell));
            }
        }
    }
    Ok(())
}

fn apply_edit(shell: &mut AppShell, command: Command) {
    let form = shell.form_mut();
    match command {
        Command::Set { field, text } => {
            form.type_into(field, text);
            form.click_outside();
        }
        Command::Search { field, text } => form.type_into(field, text),
        Command::Focus(field) => form.select_mut(field).focus(),
        Command::Pick { field, index } => {
            if !form.choose_suggestion(field, index) {
                println!("no suggestion {} for {}", index + 1, field);
            }
        }
        Command::Close => form.click_outside(),
        Command::Toggle(priority) => form.toggle_priority(&priority),
        _ => {}
    }
}
