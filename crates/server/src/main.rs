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

use axum::{
    Json, Router,
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use railseat::State;
use railseat_api::{
    ApiError, ApiResult, GetReceiptRequest, ModifySeatRequest, ModifySeatResponse,
    PurchaseTicketRequest, ReceiptResponse, RemoveUserRequest, RemoveUserResponse,
    SectionRosterRequest, SectionRosterResponse, get_receipt, list_section, modify_seat,
    purchase_ticket, remove_user,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Railseat Server - HTTP server for the Railseat seat reservation service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Seat capacity of section A
    #[arg(long, default_value_t = 10)]
    capacity_a: u8,

    /// Seat capacity of section B
    #[arg(long, default_value_t = 10)]
    capacity_b: u8,
}

/// Application state shared across handlers.
///
/// The entire reservation state sits behind a single mutex. Each handler
/// holds the guard for its operation's full read-modify-write, so requests
/// serialize into one global order and no handler ever observes another's
/// half-applied transition.
#[derive(Clone)]
struct AppState {
    /// The reservation store.
    store: Arc<Mutex<State>>,
}

/// API request for purchasing a ticket.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct PurchaseApiRequest {
    /// Where the journey starts.
    origin: String,
    /// Where the journey ends.
    destination: String,
    /// The traveler's first name.
    first_name: String,
    /// The traveler's last name.
    last_name: String,
    /// The traveler's email address.
    email: String,
    /// The price paid.
    price_paid: f64,
}

/// API representation of a stored receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReceiptApiResponse {
    /// Where the journey starts.
    origin: String,
    /// Where the journey ends.
    destination: String,
    /// The traveler's first name.
    first_name: String,
    /// The traveler's last name.
    last_name: String,
    /// The traveler's email address.
    email: String,
    /// The price paid.
    price_paid: f64,
    /// The assigned seat, e.g. `A3`.
    seat: String,
}

/// API request for removing a traveler.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct RemoveUserApiRequest {
    /// The traveler's email address.
    email: String,
}

/// API response for a successful removal.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RemoveUserApiResponse {
    /// Success indicator.
    success: bool,
    /// The removed traveler's email address.
    email: String,
    /// The seat the removal freed for reuse.
    freed_seat: String,
    /// A success message.
    message: String,
}

/// API request for moving a traveler to a specific seat.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ModifySeatApiRequest {
    /// The traveler's email address.
    email: String,
    /// The requested seat, e.g. `B2`.
    new_seat: String,
}

/// API response for a successful seat change.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ModifySeatApiResponse {
    /// Success indicator.
    success: bool,
    /// The traveler's email address.
    email: String,
    /// The seat the traveler now holds.
    seat: String,
    /// A success message.
    message: String,
}

/// Query parameters for the receipt endpoint.
#[derive(Debug, Deserialize)]
struct ReceiptQuery {
    /// The traveler's email address.
    email: String,
}

/// Query parameters for the section roster endpoint.
#[derive(Debug, Deserialize)]
struct SectionQuery {
    /// The section letter, `A` or `B`.
    section: String,
}

/// One occupied seat in a section roster response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SeatOccupantApiResponse {
    /// The occupant's first name.
    first_name: String,
    /// The occupant's last name.
    last_name: String,
    /// The occupant's email address.
    email: String,
    /// The occupied seat.
    seat: String,
}

/// API response for the section roster endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SectionRosterApiResponse {
    /// The section letter.
    section: String,
    /// The occupants in ascending seat order.
    occupants: Vec<SeatOccupantApiResponse>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
        }
    }
}

/// Converts an API receipt into its wire representation.
fn receipt_to_api_response(receipt: ReceiptResponse) -> ReceiptApiResponse {
    ReceiptApiResponse {
        origin: receipt.origin,
        destination: receipt.destination,
        first_name: receipt.first_name,
        last_name: receipt.last_name,
        email: receipt.email,
        price_paid: receipt.price_paid,
        seat: receipt.seat,
    }
}

/// Handler for POST `/purchase` endpoint.
///
/// Purchases a ticket and returns the stored receipt.
async fn handle_purchase_ticket(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<PurchaseApiRequest>,
) -> Result<Json<ReceiptApiResponse>, HttpError> {
    info!(
        email = %req.email,
        origin = %req.origin,
        destination = %req.destination,
        "Handling purchase request"
    );

    let request: PurchaseTicketRequest = PurchaseTicketRequest {
        origin: req.origin,
        destination: req.destination,
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        price_paid: req.price_paid,
    };

    // The full read-modify-write runs under one guard: no other request can
    // observe the state between validation and the swap.
    let mut store = app_state.store.lock().await;
    let result: ApiResult<ReceiptResponse> = purchase_ticket(&store, request)?;
    *store = result.new_state;
    drop(store);

    info!(
        email = %result.response.email,
        seat = %result.response.seat,
        "Ticket purchased"
    );

    Ok(Json(receipt_to_api_response(result.response)))
}

/// Handler for GET `/receipt` endpoint.
///
/// Returns the stored receipt for a traveler email.
async fn handle_get_receipt(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ReceiptQuery>,
) -> Result<Json<ReceiptApiResponse>, HttpError> {
    info!(email = %query.email, "Handling receipt lookup");

    let request: GetReceiptRequest = GetReceiptRequest { email: query.email };

    let store = app_state.store.lock().await;
    let receipt: ReceiptResponse = get_receipt(&store, &request)?;
    drop(store);

    Ok(Json(receipt_to_api_response(receipt)))
}

/// Handler for GET `/sections` endpoint.
///
/// Lists the occupied seats of a section in ascending seat order.
async fn handle_list_section(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<SectionQuery>,
) -> Result<Json<SectionRosterApiResponse>, HttpError> {
    info!(section = %query.section, "Handling section roster request");

    let request: SectionRosterRequest = SectionRosterRequest {
        section: query.section,
    };

    let store = app_state.store.lock().await;
    let response: SectionRosterResponse = list_section(&store, &request)?;
    drop(store);

    let occupants: Vec<SeatOccupantApiResponse> = response
        .occupants
        .into_iter()
        .map(|occupant| SeatOccupantApiResponse {
            first_name: occupant.first_name,
            last_name: occupant.last_name,
            email: occupant.email,
            seat: occupant.seat,
        })
        .collect();

    Ok(Json(SectionRosterApiResponse {
        section: response.section,
        occupants,
    }))
}

/// Handler for POST `/remove_user` endpoint.
///
/// Removes a traveler, vacating their seat and deleting their receipt.
async fn handle_remove_user(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RemoveUserApiRequest>,
) -> Result<Json<RemoveUserApiResponse>, HttpError> {
    info!(email = %req.email, "Handling remove request");

    let request: RemoveUserRequest = RemoveUserRequest { email: req.email };

    let mut store = app_state.store.lock().await;
    let result: ApiResult<RemoveUserResponse> = remove_user(&store, request)?;
    *store = result.new_state;
    drop(store);

    info!(
        email = %result.response.email,
        freed_seat = %result.response.freed_seat,
        "Traveler removed"
    );

    Ok(Json(RemoveUserApiResponse {
        success: true,
        email: result.response.email,
        freed_seat: result.response.freed_seat,
        message: result.response.message,
    }))
}

/// Handler for POST `/modify_seat` endpoint.
///
/// Moves a traveler to a specific seat.
async fn handle_modify_seat(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ModifySeatApiRequest>,
) -> Result<Json<ModifySeatApiResponse>, HttpError> {
    info!(email = %req.email, new_seat = %req.new_seat, "Handling seat change request");

    let request: ModifySeatRequest = ModifySeatRequest {
        email: req.email,
        new_seat: req.new_seat,
    };

    let mut store = app_state.store.lock().await;
    let result: ApiResult<ModifySeatResponse> = modify_seat(&store, request)?;
    *store = result.new_state;
    drop(store);

    info!(
        email = %result.response.email,
        seat = %result.response.seat,
        "Seat changed"
    );

    Ok(Json(ModifySeatApiResponse {
        success: true,
        email: result.response.email,
        seat: result.response.seat,
        message: result.response.message,
    }))
}

/// Builds the application router with all routes configured.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/purchase", post(handle_purchase_ticket))
        .route("/receipt", get(handle_get_receipt))
        .route("/sections", get(handle_list_section))
        .route("/remove_user", post(handle_remove_user))
        .route("/modify_seat", post(handle_modify_seat))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Railseat Server");

    // Section capacities are fixed here for the life of the process.
    let state: State = State::new(args.capacity_a, args.capacity_b);
    info!(
        capacity_a = args.capacity_a,
        capacity_b = args.capacity_b,
        "Seat sections initialized"
    );

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(state)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
