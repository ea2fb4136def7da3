//! Axum web server exposing the workbench and playback over REST and
//! WebSocket.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::playback::{Playback, PlaybackStatus, Speed};
use crate::ticker::Ticker;
use crate::workbench::{Operation, Workbench};
use algoviz_core::{bubble_sort, AlgorithmRun, InputError, Snapshot};

/// Shared application state.
pub struct AppState {
    workbench: RwLock<Workbench>,
    playback: Arc<RwLock<Playback>>,
}

/// Visualization server.
pub struct VisServer {
    state: Arc<AppState>,
}

impl Default for VisServer {
    fn default() -> Self {
        Self::new()
    }
}

impl VisServer {
    /// Create a server with a fresh workbench. Playback starts on a demo
    /// sort so the page has something to show before the first request.
    pub fn new() -> Self {
        let demo = bubble_sort(&[64, 34, 25, 12, 22, 11, 90]);
        Self {
            state: Arc::new(AppState {
                workbench: RwLock::new(Workbench::new()),
                playback: Arc::new(RwLock::new(Playback::new(demo))),
            }),
        }
    }

    /// Build the router for the server.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(index_handler))
            // API routes
            .route("/api/status", get(status_handler))
            .route("/api/snapshot", get(snapshot_handler))
            .route("/api/op", post(op_handler))
            .route("/api/playback", get(playback_status_handler))
            .route("/api/playback/play", post(play_handler))
            .route("/api/playback/pause", post(pause_handler))
            .route("/api/playback/step", post(step_handler))
            .route("/api/playback/reset", post(reset_handler))
            .route("/api/playback/seek", post(seek_handler))
            .route("/api/playback/speed", post(speed_handler))
            // WebSocket for real-time updates
            .route("/ws", get(ws_handler))
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Run the server on the given port, with the ticker driving playback.
    pub async fn serve(self, port: u16) -> Result<(), std::io::Error> {
        tokio::spawn(Ticker::new(self.state.playback.clone()).run());

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Visualization server running on http://localhost:{}", port);
        axum::serve(listener, self.router()).await
    }
}

/// Serve the control page.
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

/// An invalid request, reported as 422 with a JSON body.
struct ApiError(InputError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
    }
}

/// Server status response.
#[derive(Serialize)]
struct StatusResponse {
    status: &'static str,
    step_count: usize,
}

async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let playback = state.playback.read().await;
    Json(StatusResponse {
        status: "ok",
        step_count: playback.total(),
    })
}

async fn snapshot_handler(State(state): State<Arc<AppState>>) -> Json<Snapshot> {
    let playback = state.playback.read().await;
    Json(playback.current_snapshot().clone())
}

/// Run response: the sealed run plus the reset playback status.
#[derive(Serialize)]
struct OpResponse {
    run: AlgorithmRun,
    playback: PlaybackStatus,
}

async fn op_handler(
    State(state): State<Arc<AppState>>,
    Json(op): Json<Operation>,
) -> Result<Json<OpResponse>, ApiError> {
    let run = {
        let mut workbench = state.workbench.write().await;
        workbench.apply(op).map_err(ApiError)?
    };
    let mut playback = state.playback.write().await;
    playback.set_run(run.clone());
    Ok(Json(OpResponse {
        run,
        playback: PlaybackStatus::from(&*playback),
    }))
}

async fn playback_status_handler(State(state): State<Arc<AppState>>) -> Json<PlaybackStatus> {
    let playback = state.playback.read().await;
    Json(PlaybackStatus::from(&*playback))
}

async fn play_handler(State(state): State<Arc<AppState>>) -> Json<PlaybackStatus> {
    let mut playback = state.playback.write().await;
    playback.play();
    Json(PlaybackStatus::from(&*playback))
}

async fn pause_handler(State(state): State<Arc<AppState>>) -> Json<PlaybackStatus> {
    let mut playback = state.playback.write().await;
    playback.pause();
    Json(PlaybackStatus::from(&*playback))
}

async fn step_handler(State(state): State<Arc<AppState>>) -> Json<PlaybackStatus> {
    let mut playback = state.playback.write().await;
    playback.step();
    Json(PlaybackStatus::from(&*playback))
}

async fn reset_handler(State(state): State<Arc<AppState>>) -> Json<PlaybackStatus> {
    let mut playback = state.playback.write().await;
    playback.reset();
    Json(PlaybackStatus::from(&*playback))
}

#[derive(Deserialize)]
struct SeekRequest {
    index: usize,
}

async fn seek_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SeekRequest>,
) -> Json<PlaybackStatus> {
    let mut playback = state.playback.write().await;
    playback.seek(req.index);
    Json(PlaybackStatus::from(&*playback))
}

#[derive(Deserialize)]
struct SpeedRequest {
    speed: u64,
}

async fn speed_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SpeedRequest>,
) -> Json<PlaybackStatus> {
    let mut playback = state.playback.write().await;
    playback.set_speed(Speed::new(req.speed));
    Json(PlaybackStatus::from(&*playback))
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
    // Send the current state first
    let snapshot = {
        let playback = state.playback.read().await;
        playback.current_snapshot().clone()
    };
    if let Ok(json) = serde_json::to_string(&WsResponse::Snapshot(snapshot)) {
        let _ = socket.send(Message::Text(json.into())).await;
    }

    // Handle incoming commands
    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Text(text) => {
                if let Ok(cmd) = serde_json::from_str::<WsCommand>(&text) {
                    let response = handle_ws_command(&state, cmd).await;
                    if let Ok(json) = serde_json::to_string(&response) {
                        let _ = socket.send(Message::Text(json.into())).await;
                    }
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum WsCommand {
    #[serde(rename = "get_snapshot")]
    GetSnapshot,
    #[serde(rename = "get_status")]
    GetStatus,
    #[serde(rename = "op")]
    Op { op: Operation },
    #[serde(rename = "play")]
    Play,
    #[serde(rename = "pause")]
    Pause,
    #[serde(rename = "step")]
    Step,
    #[serde(rename = "reset")]
    Reset,
    #[serde(rename = "seek")]
    Seek { index: usize },
    #[serde(rename = "speed")]
    Speed { speed: u64 },
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum WsResponse {
    #[serde(rename = "snapshot")]
    Snapshot(Snapshot),
    #[serde(rename = "status")]
    Status(PlaybackStatus),
    #[serde(rename = "error")]
    Error { error: String },
}

async fn handle_ws_command(state: &Arc<AppState>, cmd: WsCommand) -> WsResponse {
    match cmd {
        WsCommand::GetSnapshot => {
            let playback = state.playback.read().await;
            WsResponse::Snapshot(playback.current_snapshot().clone())
        }
        WsCommand::GetStatus => {
            let playback = state.playback.read().await;
            WsResponse::Status(PlaybackStatus::from(&*playback))
        }
        WsCommand::Op { op } => {
            let run = {
                let mut workbench = state.workbench.write().await;
                workbench.apply(op)
            };
            match run {
                Ok(run) => {
                    let mut playback = state.playback.write().await;
                    playback.set_run(run);
                    WsResponse::Status(PlaybackStatus::from(&*playback))
                }
                Err(err) => WsResponse::Error {
                    error: err.to_string(),
                },
            }
        }
        WsCommand::Play => {
            let mut playback = state.playback.write().await;
            playback.play();
            WsResponse::Status(PlaybackStatus::from(&*playback))
        }
        WsCommand::Pause => {
            let mut playback = state.playback.write().await;
            playback.pause();
            WsResponse::Status(PlaybackStatus::from(&*playback))
        }
        WsCommand::Step => {
            let mut playback = state.playback.write().await;
            playback.step();
            WsResponse::Status(PlaybackStatus::from(&*playback))
        }
        WsCommand::Reset => {
            let mut playback = state.playback.write().await;
            playback.reset();
            WsResponse::Status(PlaybackStatus::from(&*playback))
        }
        WsCommand::Seek { index } => {
            let mut playback = state.playback.write().await;
            playback.seek(index);
            WsResponse::Status(PlaybackStatus::from(&*playback))
        }
        WsCommand::Speed { speed } => {
            let mut playback = state.playback.write().await;
            playback.set_speed(Speed::new(speed));
            WsResponse::Status(PlaybackStatus::from(&*playback))
        }
    }
}
