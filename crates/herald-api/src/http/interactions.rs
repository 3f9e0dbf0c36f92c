//! POST /interactions handler.
//!
//! Flow per request: verify the Ed25519 signature (401 on failure), parse
//! the interaction (400 on garbage), answer PING with PONG, and dispatch
//! session commands. Commands are acknowledged inside Discord's 3-second
//! window with an immediate ephemeral progress message; the lifecycle work
//! runs on a spawned task that edits that reply with the outcome. The
//! ended-notice delay therefore never blocks the endpoint.

use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use herald_infra::discord::interaction::{kind, CommandData, Interaction, InteractionResponse};
use herald_types::error::{ChatError, LifecycleError};
use herald_types::id::UserId;
use herald_types::session::EndOutcome;

use crate::commands;
use crate::state::AppState;

const SIGNATURE_HEADER: &str = "x-signature-ed25519";
const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

pub async fn handle_interaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());
    let timestamp = headers
        .get(TIMESTAMP_HEADER)
        .and_then(|value| value.to_str().ok());
    let (Some(signature), Some(timestamp)) = (signature, timestamp) else {
        return (StatusCode::UNAUTHORIZED, "missing signature headers").into_response();
    };

    if !state.verifier.verify(timestamp, &body, signature) {
        tracing::warn!("rejected interaction with invalid signature");
        return (StatusCode::UNAUTHORIZED, "invalid request signature").into_response();
    }

    let interaction: Interaction = match serde_json::from_slice(&body) {
        Ok(interaction) => interaction,
        Err(err) => {
            tracing::warn!(error = %err, "unparseable interaction payload");
            return (StatusCode::BAD_REQUEST, "malformed interaction").into_response();
        }
    };

    match interaction.kind {
        kind::PING => Json(InteractionResponse::pong()).into_response(),
        kind::APPLICATION_COMMAND => Json(dispatch_command(state, interaction)).into_response(),
        other => {
            tracing::debug!(kind = other, "ignoring unsupported interaction type");
            (StatusCode::BAD_REQUEST, "unsupported interaction type").into_response()
        }
    }
}

/// Authorize and acknowledge a slash command, spawning the actual work.
fn dispatch_command(state: AppState, interaction: Interaction) -> InteractionResponse {
    let Some(data) = interaction.data.as_ref() else {
        return InteractionResponse::ephemeral("Malformed command payload.");
    };
    let Some(member) = interaction.member.as_ref() else {
        return InteractionResponse::ephemeral("Session commands only work inside the server.");
    };

    if !state.gate.permits(member) {
        tracing::debug!(command = %data.name, "command denied by permission gate");
        return InteractionResponse::ephemeral("You don't have permission to manage sessions.");
    }

    let command = match SessionCommand::parse(data, member) {
        Ok(command) => command,
        Err(reason) => return InteractionResponse::ephemeral(reason),
    };

    let progress = command.progress_text();
    let token = interaction.token.clone();
    tokio::spawn(run_command(state, command, token));
    InteractionResponse::ephemeral(progress)
}

/// A fully parsed session command, ready to execute.
#[derive(Debug)]
enum SessionCommand {
    Start { started_by: UserId },
    End,
    Schedule { unix_ts: i64, scheduled_by: String },
}

impl SessionCommand {
    /// Parse the command payload; errors are user-facing ephemeral text.
    fn parse(
        data: &CommandData,
        member: &herald_infra::discord::interaction::Member,
    ) -> Result<Self, String> {
        let invoker = member
            .user
            .as_ref()
            .ok_or_else(|| "Could not identify the invoking user.".to_string())?;

        match data.name.as_str() {
            commands::START => {
                let started_by = invoker
                    .user_id()
                    .ok_or_else(|| "Could not identify the invoking user.".to_string())?;
                Ok(Self::Start { started_by })
            }
            commands::END => Ok(Self::End),
            commands::SCHEDULE => {
                let unix_ts = data
                    .integer_option(commands::TIME_OPTION)
                    .ok_or_else(|| "The time option is required.".to_string())?;
                Ok(Self::Schedule {
                    unix_ts,
                    scheduled_by: invoker.username.clone(),
                })
            }
            other => Err(format!("Unknown command: {other}")),
        }
    }

    /// The progress text shown while the command runs.
    fn progress_text(&self) -> &'static str {
        match self {
            Self::Start { .. } => "Starting a session...",
            Self::End => "Ending the session...",
            Self::Schedule { .. } => "Scheduling the session...",
        }
    }
}

/// How long to wait before retrying an outcome edit that raced the
/// acknowledgement callback.
const OUTCOME_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Execute a command and deliver its outcome by editing the progress reply.
async fn run_command(state: AppState, command: SessionCommand, token: String) {
    let text = match execute(&state, command).await {
        Ok(text) => text,
        Err(err) if err.is_invalid_argument() => format!("❌ {err}"),
        Err(err) => {
            tracing::error!(error = %err, "session command failed");
            "Something went wrong talking to Discord. Please try again.".to_string()
        }
    };

    let delivery =
        with_not_found_retry(|| state.discord.edit_interaction_reply(&token, &text)).await;
    if let Err(err) = delivery {
        tracing::warn!(error = %err, "failed to deliver command outcome");
    }
}

/// Run a fallible delivery, retrying once after a short pause when the
/// target does not exist yet. A command that fails locally can finish
/// before Discord has processed the acknowledgement callback, in which
/// case the original reply is not editable for a moment.
async fn with_not_found_retry<F, Fut>(attempt: F) -> Result<(), ChatError>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<(), ChatError>>,
{
    match attempt().await {
        Err(ChatError::NotFound) => {
            tokio::time::sleep(OUTCOME_RETRY_DELAY).await;
            attempt().await
        }
        other => other,
    }
}

async fn execute(state: &AppState, command: SessionCommand) -> Result<String, LifecycleError> {
    match command {
        SessionCommand::Start { started_by } => {
            state.lifecycle.start(started_by).await?;
            Ok("✅ Session started.".to_string())
        }
        SessionCommand::End => match state.lifecycle.end().await? {
            EndOutcome::Ended => Ok("✅ Session ended.".to_string()),
            EndOutcome::NoSessionTracked => {
                Ok("No session message is being tracked; nothing to end.".to_string())
            }
        },
        SessionCommand::Schedule {
            unix_ts,
            scheduled_by,
        } => {
            let event = state.lifecycle.schedule(unix_ts, &scheduled_by).await?;
            Ok(format!("✅ Scheduled event created: {}", event.name))
        }
    }
}
