//! Realtime telemetry stream handler
//!
//! Every WebSocket connection gets its own tick loop. Each tick advances
//! the connection's vessel by one reading and pushes the payload to the
//! client. The loop lives and dies with the connection, so no work is
//! left running after a disconnect.

use std::time::Duration;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use uuid::Uuid;

use crate::AppState;

use super::VesselSelector;

/// Upgrade the connection and hand it to the stream loop.
pub async fn telemetry_stream(
    ws: WebSocketUpgrade,
    Query(selector): Query<VesselSelector>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let vessel_id = selector.id().to_string();
    ws.on_upgrade(move |socket| stream_readings(socket, state, vessel_id))
}

/// Push one payload per tick until the client goes away.
async fn stream_readings(mut socket: WebSocket, state: AppState, vessel_id: String) {
    let connection_id = Uuid::new_v4();
    let vessel = state.registry.get_or_create(&vessel_id);
    let mut ticker =
        tokio::time::interval(Duration::from_millis(state.config.tick_interval_ms));

    tracing::info!(
        connection = %connection_id,
        vessel = %vessel.id(),
        "stream client connected"
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let payload = vessel.tick();
                let message = match serde_json::to_string(&payload) {
                    Ok(json) => Message::Text(json),
                    Err(err) => {
                        tracing::error!(
                            connection = %connection_id,
                            "payload serialization failed: {}",
                            err
                        );
                        break;
                    }
                };
                if socket.send(message).await.is_err() {
                    break;
                }
            }
            inbound = socket.recv() => {
                match inbound {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(frame)) => {
                        tracing::debug!(
                            connection = %connection_id,
                            "ignoring inbound frame: {:?}",
                            frame
                        );
                    }
                    Some(Err(err)) => {
                        tracing::debug!(
                            connection = %connection_id,
                            "stream transport error: {}",
                            err
                        );
                        break;
                    }
                }
            }
        }
    }

    tracing::info!(
        connection = %connection_id,
        vessel = %vessel.id(),
        "stream client disconnected"
    );
}
