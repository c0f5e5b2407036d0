use tokio::sync::mpsc;

use crate::protocol::ServerMsg;

/// What a connection pushes into its seat's queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    Line(String),
    Disconnected,
}

/// Table-side ends of one player's connection.
#[derive(Debug)]
pub struct PlayerChannel {
    pub(crate) inbound: mpsc::UnboundedReceiver<Inbound>,
    pub(crate) outbound: mpsc::UnboundedSender<ServerMsg>,
}

/// Connection-side ends: push decoded lines in, pull messages to write out.
#[derive(Debug)]
pub struct ClientHandle {
    inbound: mpsc::UnboundedSender<Inbound>,
    outbound: mpsc::UnboundedReceiver<ServerMsg>,
}

pub fn channel_pair() -> (PlayerChannel, ClientHandle) {
    let (in_tx, in_rx) = mpsc::unbounded_channel();
    let (out_tx, out_rx) = mpsc::unbounded_channel();
    (
        PlayerChannel {
            inbound: in_rx,
            outbound: out_tx,
        },
        ClientHandle {
            inbound: in_tx,
            outbound: out_rx,
        },
    )
}

impl ClientHandle {
    /// Queue a line for the table. Returns false once the table is gone.
    pub fn send_line(&self, line: impl Into<String>) -> bool {
        self.inbound.send(Inbound::Line(line.into())).is_ok()
    }

    pub fn disconnect(&self) {
        let _ = self.inbound.send(Inbound::Disconnected);
    }

    /// Next message for this player, or `None` once the table dropped the seat.
    pub async fn next_msg(&mut self) -> Option<ServerMsg> {
        self.outbound.recv().await
    }

    /// Split into the sender used by a reader task and the receiver used by a
    /// writer task.
    pub fn split(
        self,
    ) -> (
        mpsc::UnboundedSender<Inbound>,
        mpsc::UnboundedReceiver<ServerMsg>,
    ) {
        (self.inbound, self.outbound)
    }
}
