//! TCP adapter: one line-framed connection per player.

use std::net::SocketAddr;
use std::time::Duration;

use futures::future::join_all;
use futures::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec};
use tracing::{debug, info, warn};

use crate::domain::rules::{PLAYERS, TEAMS};
use crate::domain::Seat;
use crate::error::AppError;
use crate::protocol::ServerMsg;
use crate::services::GameFlow;
use crate::session::{channel_pair, Inbound, Lobby, PlayerChannel};

/// Longest accepted input line, in bytes.
const MAX_LINE: usize = 1024;
/// Pause after a failed accept, e.g. when out of file descriptors.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);
/// Upper bound on draining outbound queues once the match is over.
const FLUSH_TIMEOUT: Duration = Duration::from_secs(5);

/// What one table plays once four players are seated.
#[derive(Debug, Clone, Copy)]
pub struct MatchSettings {
    pub deals: u32,
    pub table_seed: u64,
    pub first_dealer: Seat,
}

/// Seat the first four connections, play the match, and turn away anyone
/// else who connects meanwhile. Returns the final team totals once every
/// queued message has been written out.
pub async fn serve(
    listener: TcpListener,
    settings: MatchSettings,
) -> Result<[u32; TEAMS], AppError> {
    info!(addr = %listener.local_addr()?, "Waiting for four players");

    let mut lobby = Lobby::new();
    let mut writers = Vec::with_capacity(PLAYERS);
    while !lobby.is_full() {
        let (stream, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(err) => {
                accept_failed(err).await;
                continue;
            }
        };
        let (channel, writer) = spawn_connection(stream, peer);
        let seat = lobby.admit(channel)?;
        writers.push(writer);
        debug!(%peer, seat, "Connection seated");
    }

    let mut flow = GameFlow::new(
        lobby.into_table()?,
        settings.table_seed,
        settings.first_dealer,
    );
    let result = {
        let run = flow.run_match(settings.deals);
        tokio::pin!(run);
        loop {
            tokio::select! {
                result = &mut run => break result,
                accepted = listener.accept() => match accepted {
                    Ok((stream, peer)) => {
                        tokio::spawn(refuse(stream, peer));
                    }
                    Err(err) => accept_failed(err).await,
                },
            }
        }
    };

    // Closing the table ends every writer once its queue is drained.
    drop(flow);
    flush_writers(writers).await;
    result
}

async fn accept_failed(err: std::io::Error) {
    warn!(error = %err, "Accept failed");
    tokio::time::sleep(ACCEPT_BACKOFF).await;
}

async fn flush_writers(writers: Vec<JoinHandle<()>>) {
    if tokio::time::timeout(FLUSH_TIMEOUT, join_all(writers))
        .await
        .is_err()
    {
        warn!("Timed out flushing messages to players");
    }
}

/// Wire a connection to a fresh seat channel: a reader task feeding trimmed
/// lines in, a writer task rendering messages out. The writer finishes once
/// the table drops the seat and its queue is empty.
fn spawn_connection(stream: TcpStream, peer: SocketAddr) -> (PlayerChannel, JoinHandle<()>) {
    let (channel, client) = channel_pair();
    let (inbound, mut outbound) = client.split();
    let (read_half, write_half) = stream.into_split();
    let mut lines = FramedRead::new(read_half, LinesCodec::new_with_max_length(MAX_LINE));
    let mut sink = FramedWrite::new(write_half, LinesCodec::new());

    tokio::spawn(async move {
        while let Some(item) = lines.next().await {
            match item {
                Ok(line) => {
                    if inbound.send(Inbound::Line(line.trim().to_string())).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    warn!(%peer, error = %err, "Read failed");
                    break;
                }
            }
        }
        debug!(%peer, "Connection closed by peer");
        let _ = inbound.send(Inbound::Disconnected);
    });

    let writer = tokio::spawn(async move {
        while let Some(msg) = outbound.recv().await {
            if let Err(err) = sink.send(msg.to_string()).await {
                warn!(%peer, error = %err, "Write failed");
                break;
            }
        }
    });

    (channel, writer)
}

async fn refuse(stream: TcpStream, peer: SocketAddr) {
    info!(%peer, "Table is full, refusing connection");
    let mut sink = FramedWrite::new(stream, LinesCodec::new());
    if let Err(err) = sink.send(ServerMsg::TableFull.to_string()).await {
        warn!(%peer, error = %err, "Could not notify refused connection");
    }
}
