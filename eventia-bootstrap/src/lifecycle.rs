use std::io::Stdout;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use eventia_infrastructure::{ApiRequest, Method};
use eventia_interfaces_terminal::{ChipView, Flow, Session, TerminalView, UiCommand, HELP};

use crate::context::AppContext;

type StdoutView = TerminalView<Stdout>;

fn stdout_view() -> Arc<StdoutView> {
    Arc::new(TerminalView::new(std::io::stdout()))
}

/// Interactive page: one command per stdin line until `quit`, EOF or ctrl-c.
pub async fn run_browse(context: AppContext) -> Result<()> {
    let view = stdout_view();
    let mut session = Session::start(context.state.clone(), view.clone()).await?;
    view.show_message(HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            break;
        };

        let command = match UiCommand::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                view.show_message(&err.to_string());
                continue;
            }
        };
        match session.handle(command).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(err) => {
                warn!("command failed: {}", err);
                view.show_message(&err.to_string());
            }
        }
    }

    session.drain().await;
    info!(metrics = %context.state.metrics.summary(), "session finished");
    Ok(())
}

pub async fn run_search(context: AppContext, term: &str) -> Result<()> {
    let mut session = Session::start(context.state.clone(), stdout_view()).await?;
    session.handle(UiCommand::Search(term.to_string())).await?;
    info!(metrics = %context.state.metrics.summary(), "search finished");
    Ok(())
}

/// Clicks each chip in order, letting every refresh finish before the next click.
pub async fn run_filter(context: AppContext, countries: &[String]) -> Result<()> {
    let view = stdout_view();
    let mut session = Session::start(context.state.clone(), view.clone()).await?;
    for country in countries {
        session.handle(UiCommand::Click(country.clone())).await?;
        session.drain().await;
    }
    view.render_chips(session.chips());
    info!(metrics = %context.state.metrics.summary(), "filter finished");
    Ok(())
}

#[derive(Debug, Clone)]
pub struct RawRequest {
    pub method: String,
    pub endpoint: String,
    pub body: Option<String>,
    pub raw: bool,
    pub token: Option<String>,
}

/// Generic passthrough to any backend endpoint.
pub async fn run_request(context: AppContext, request: RawRequest) -> Result<()> {
    let method = Method::from_bytes(request.method.to_uppercase().as_bytes())
        .map_err(|err| anyhow!("invalid method '{}': {}", request.method, err))?;
    let mut api_request = ApiRequest::new(method, request.endpoint).token(request.token);
    if let Some(body) = request.body {
        api_request = if request.raw {
            api_request.raw(body)
        } else {
            let value: Value = serde_json::from_str(&body)
                .map_err(|err| anyhow!("--body is not valid JSON: {}", err))?;
            api_request.json(value)
        };
    } else if request.raw {
        api_request.is_json = false;
    }

    let response = context.client.send(api_request).await?;
    println!("status: {}", response.status);
    println!("{}", serde_json::to_string_pretty(&response.data)?);
    Ok(())
}
