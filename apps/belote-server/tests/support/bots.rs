//! Scripted players for driving a table without sockets.

use std::collections::VecDeque;

use belote_server::domain::deck::full_deck;
use belote_server::domain::Card;
use belote_server::session::{channel_pair, ClientHandle, Lobby, Table};
use belote_server::ServerMsg;
use tokio::task::JoinHandle;

/// One scripted answer, consumed by the next prompt of any kind.
#[derive(Debug, Clone)]
pub enum Answer {
    Text(String),
    /// The suit of the proposed card, which the suit round never offers.
    DeclinedSuit,
    /// A card the bot does not hold.
    ForeignCard,
    /// Close the connection instead of answering.
    Leave,
}

/// Scripted answers first, then a default policy. An eager bot takes the card
/// and picks the first offered suit; a passive one declines both. Either way
/// the first legal card is played.
#[derive(Debug, Clone)]
pub struct Script {
    answers: VecDeque<Answer>,
    eager: bool,
}

enum Reply {
    Line(String),
    Leave,
}

impl Script {
    pub fn eager() -> Self {
        Self {
            answers: VecDeque::new(),
            eager: true,
        }
    }

    pub fn passive() -> Self {
        Self {
            answers: VecDeque::new(),
            eager: false,
        }
    }

    pub fn then(mut self, answer: Answer) -> Self {
        self.answers.push_back(answer);
        self
    }

    pub fn say(self, text: &str) -> Self {
        self.then(Answer::Text(text.to_string()))
    }

    fn reply(&mut self, prompt: &ServerMsg, proposed: Option<Card>, hand: &[Card]) -> Reply {
        match self.answers.pop_front() {
            Some(Answer::Text(text)) => Reply::Line(text),
            Some(Answer::DeclinedSuit) => Reply::Line(
                proposed
                    .map(|card| card.suit.to_string())
                    .unwrap_or_default(),
            ),
            Some(Answer::ForeignCard) => Reply::Line(
                full_deck()
                    .into_iter()
                    .find(|card| !hand.contains(card))
                    .map(|card| card.to_string())
                    .unwrap_or_default(),
            ),
            Some(Answer::Leave) => Reply::Leave,
            None => Reply::Line(self.default_answer(prompt)),
        }
    }

    fn default_answer(&self, prompt: &ServerMsg) -> String {
        match prompt {
            ServerMsg::TakePrompt if self.eager => "yes".to_string(),
            ServerMsg::TakePrompt => "no".to_string(),
            ServerMsg::SuitPrompt { choices } if self.eager => choices[0].to_string(),
            ServerMsg::SuitPrompt { .. } => "pass".to_string(),
            ServerMsg::PlayPrompt { legal } => legal[0].to_string(),
            _ => String::new(),
        }
    }
}

/// Run a bot until the table drops its seat; yields every message received.
pub fn spawn_bot(mut client: ClientHandle, mut script: Script) -> JoinHandle<Vec<ServerMsg>> {
    tokio::spawn(async move {
        let mut transcript = Vec::new();
        let mut proposed = None;
        let mut hand = Vec::new();

        while let Some(msg) = client.next_msg().await {
            let reply = match &msg {
                ServerMsg::ProposedCard { card } => {
                    proposed = Some(*card);
                    None
                }
                ServerMsg::Hand { cards } => {
                    hand = cards.clone();
                    None
                }
                ServerMsg::TakePrompt | ServerMsg::SuitPrompt { .. } | ServerMsg::PlayPrompt { .. } => {
                    Some(script.reply(&msg, proposed, &hand))
                }
                _ => None,
            };
            transcript.push(msg);

            match reply {
                Some(Reply::Line(line)) => {
                    client.send_line(line);
                }
                Some(Reply::Leave) => client.disconnect(),
                None => {}
            }
        }
        transcript
    })
}

/// Seat four bots in order and build their table.
pub fn seat_bots(scripts: [Script; 4]) -> (Table, Vec<JoinHandle<Vec<ServerMsg>>>) {
    let mut lobby = Lobby::new();
    let mut bots = Vec::new();
    for script in scripts {
        let (player, client) = channel_pair();
        lobby.admit(player).expect("lobby has room");
        bots.push(spawn_bot(client, script));
    }
    (lobby.into_table().expect("four players seated"), bots)
}

pub async fn transcripts(bots: Vec<JoinHandle<Vec<ServerMsg>>>) -> Vec<Vec<ServerMsg>> {
    let mut all = Vec::with_capacity(bots.len());
    for bot in bots {
        all.push(bot.await.expect("bot task panicked"));
    }
    all
}

pub fn count(transcript: &[ServerMsg], pred: impl Fn(&ServerMsg) -> bool) -> usize {
    transcript.iter().filter(|msg| pred(msg)).count()
}

pub fn rejections(transcript: &[ServerMsg]) -> Vec<&str> {
    transcript
        .iter()
        .filter_map(|msg| match msg {
            ServerMsg::Rejected { reason } => Some(reason.as_str()),
            _ => None,
        })
        .collect()
}
