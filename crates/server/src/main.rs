// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod live;

use axum::{
    Json, Router,
    extract::{FromRef, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use live::{LiveEvent, LiveEventBroadcaster, live_events_handler};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use ticketbooth::{Clock, CoreError, RegistryConfig, SystemClock, TicketRegistry};
use ticketbooth_api::{
    ApiError, AvailableResponse, CancelResponse, HistoryResponse, PurchaseRequest,
    PurchaseResponse, PurchaseStatus, ReferenceRequest, TicketsByUserResponse, UndoResponse,
    ValidateResponse, WaitlistResponse, available, cancel, history, purchase, tickets_by_user,
    undo, validate, waitlist,
};
use ticketbooth_domain::ReferenceStrategy;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Ticket Booth Server - HTTP server for issuing and validating tickets
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of tickets in the pool
    #[arg(short, long, default_value_t = 20)]
    capacity: usize,

    /// Seconds a ticket may stay unvalidated before it expires
    #[arg(short, long, default_value_t = 60)]
    expiry_secs: i64,

    /// How references are numbered (`monotonic` or `live_count`)
    #[arg(short, long, default_value_t = ReferenceStrategy::Monotonic)]
    reference_strategy: ReferenceStrategy,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

impl Args {
    /// Builds the registry configuration from the command line.
    fn registry_config(&self) -> Result<RegistryConfig, CoreError> {
        Ok(RegistryConfig::new(self.capacity)?
            .with_expiry_window(time::Duration::seconds(self.expiry_secs))?
            .with_reference_strategy(self.reference_strategy))
    }
}

/// Application state shared across handlers.
///
/// Every handler does its whole registry call under one lock guard and
/// releases it before broadcasting.
struct AppState<C: Clock = SystemClock> {
    /// The single ticket registry.
    registry: Arc<Mutex<TicketRegistry<C>>>,
    /// Live change feed.
    live: LiveEventBroadcaster,
}

impl<C: Clock> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            live: self.live.clone(),
        }
    }
}

impl<C: Clock> AppState<C> {
    fn new(registry: TicketRegistry<C>) -> Self {
        Self {
            registry: Arc::new(Mutex::new(registry)),
            live: LiveEventBroadcaster::new(),
        }
    }
}

impl<C: Clock> FromRef<AppState<C>> for LiveEventBroadcaster {
    fn from_ref(state: &AppState<C>) -> Self {
        state.live.clone()
    }
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Machine-readable status discriminant.
    status: String,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The status discriminant.
    kind: String,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            status: self.kind,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::EmptyInput { .. } | ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::DomainRuleViolation { rule, .. } => match rule.as_str() {
                "expired" => StatusCode::GONE,
                "already_valid" | "conflict" | "no_action" => StatusCode::CONFLICT,
                _ => {
                    error!(error = %err, "Unexpected registry failure");
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        };
        Self {
            status,
            kind: err.status().to_string(),
            message: err.to_string(),
        }
    }
}

/// Handler for POST `/tickets` endpoint.
///
/// Buys a ticket or joins the waitlist.
async fn handle_purchase<C: Clock + 'static>(
    AxumState(app_state): AxumState<AppState<C>>,
    Json(req): Json<PurchaseRequest>,
) -> Result<Json<PurchaseResponse>, HttpError> {
    info!(user = %req.user, "Handling purchase request");

    let mut registry = app_state.registry.lock().await;
    let response: PurchaseResponse = purchase(&mut registry, &req)?;
    drop(registry);

    let event: LiveEvent = match response.status {
        PurchaseStatus::Bought => LiveEvent::TicketPurchased {
            reference: response.reference.clone().unwrap_or_default(),
            user: response.user.clone(),
            available: response.available,
        },
        PurchaseStatus::Waitlisted => LiveEvent::UserWaitlisted {
            user: response.user.clone(),
            position: response.waitlist_position.unwrap_or_default(),
        },
    };
    app_state.live.broadcast(&event);

    Ok(Json(response))
}

/// Handler for POST `/tickets/cancel` endpoint.
async fn handle_cancel<C: Clock + 'static>(
    AxumState(app_state): AxumState<AppState<C>>,
    Json(req): Json<ReferenceRequest>,
) -> Result<Json<CancelResponse>, HttpError> {
    info!(reference = %req.reference, "Handling cancel request");

    let mut registry = app_state.registry.lock().await;
    let response: CancelResponse = cancel(&mut registry, &req)?;
    drop(registry);

    app_state.live.broadcast(&LiveEvent::TicketCancelled {
        reference: response.reference.clone(),
        user: response.user.clone(),
        available: response.available,
    });

    Ok(Json(response))
}

/// Handler for POST `/tickets/validate` endpoint.
///
/// An expired ticket is removed by the registry; that removal is broadcast
/// as well as the successful case.
async fn handle_validate<C: Clock + 'static>(
    AxumState(app_state): AxumState<AppState<C>>,
    Json(req): Json<ReferenceRequest>,
) -> Result<Json<ValidateResponse>, HttpError> {
    info!(reference = %req.reference, "Handling validate request");

    let mut registry = app_state.registry.lock().await;
    let result: Result<ValidateResponse, ApiError> = validate(&mut registry, &req);
    drop(registry);

    match result {
        Ok(response) => {
            app_state.live.broadcast(&LiveEvent::TicketValidated {
                reference: response.reference.clone(),
                user: response.user.clone(),
            });
            Ok(Json(response))
        }
        Err(err) => {
            if err.status() == "expired" {
                app_state.live.broadcast(&LiveEvent::TicketExpired {
                    reference: req.reference.trim().to_string(),
                });
            }
            Err(err.into())
        }
    }
}

/// Handler for POST `/undo` endpoint.
async fn handle_undo<C: Clock + 'static>(
    AxumState(app_state): AxumState<AppState<C>>,
) -> Result<Json<UndoResponse>, HttpError> {
    info!("Handling undo request");

    let mut registry = app_state.registry.lock().await;
    let response: UndoResponse = undo(&mut registry)?;
    drop(registry);

    app_state.live.broadcast(&LiveEvent::ActionUndone {
        action: response.action.clone(),
        reference: response.reference.clone(),
        available: response.available,
    });

    Ok(Json(response))
}

/// Handler for GET `/available` endpoint.
async fn handle_available<C: Clock + 'static>(
    AxumState(app_state): AxumState<AppState<C>>,
) -> Json<AvailableResponse> {
    let registry = app_state.registry.lock().await;
    Json(available(&registry))
}

/// Handler for GET `/waitlist` endpoint.
async fn handle_waitlist<C: Clock + 'static>(
    AxumState(app_state): AxumState<AppState<C>>,
) -> Json<WaitlistResponse> {
    let registry = app_state.registry.lock().await;
    Json(waitlist(&registry))
}

/// Handler for GET `/history` endpoint.
async fn handle_history<C: Clock + 'static>(
    AxumState(app_state): AxumState<AppState<C>>,
) -> Json<HistoryResponse> {
    let registry = app_state.registry.lock().await;
    Json(history(&registry))
}

/// Handler for GET `/tickets` endpoint.
async fn handle_tickets_by_user<C: Clock + 'static>(
    AxumState(app_state): AxumState<AppState<C>>,
) -> Json<TicketsByUserResponse> {
    let registry = app_state.registry.lock().await;
    Json(tickets_by_user(&registry))
}

/// Builds the application router with all endpoints.
fn build_router<C: Clock + 'static>(app_state: AppState<C>) -> Router {
    Router::new()
        .route("/tickets", post(handle_purchase::<C>))
        .route("/tickets", get(handle_tickets_by_user::<C>))
        .route("/tickets/cancel", post(handle_cancel::<C>))
        .route("/tickets/validate", post(handle_validate::<C>))
        .route("/undo", post(handle_undo::<C>))
        .route("/available", get(handle_available::<C>))
        .route("/waitlist", get(handle_waitlist::<C>))
        .route("/history", get(handle_history::<C>))
        .route("/live", get(live_events_handler))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Ticket Booth Server");

    let config: RegistryConfig = args.registry_config()?;
    info!(
        capacity = config.capacity(),
        expiry_secs = config.expiry_window().whole_seconds(),
        reference_strategy = %config.reference_strategy(),
        "Registry configured"
    );

    let app_state: AppState = AppState::new(TicketRegistry::new(config));
    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
