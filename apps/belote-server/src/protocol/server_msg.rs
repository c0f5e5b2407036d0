use std::fmt;

use crate::domain::rules::TEAMS;
use crate::domain::seating::seat_number;
use crate::domain::{format_cards, Card, Seat, Suit, TeamId};

/// Every message sent to a player. `Display` renders the single-line wire text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerMsg {
    Seated {
        seat: Seat,
    },
    TableFull,
    Dealer {
        dealer: Seat,
    },
    ProposedCard {
        card: Card,
    },
    /// The receiving player's hand, already sorted.
    Hand {
        cards: Vec<Card>,
    },
    TakePrompt,
    Took {
        bidder: Seat,
    },
    SuitPrompt {
        choices: Vec<Suit>,
    },
    ChoseTrump {
        bidder: Seat,
        trump: Suit,
    },
    Redeal {
        cut_at: usize,
    },
    PlayPrompt {
        legal: Vec<Card>,
    },
    Played {
        seat: Seat,
        card: Card,
    },
    TrickWon {
        winner: Seat,
        points: u16,
    },
    DealResult {
        contracting_team: TeamId,
        points: [u16; TEAMS],
        contract_made: bool,
    },
    MatchScore {
        scores: [u32; TEAMS],
    },
    Rejected {
        reason: String,
    },
    Aborted {
        seat: Seat,
    },
}

fn team_label(team: TeamId) -> &'static str {
    if team == 0 {
        "Players 1 & 3"
    } else {
        "Players 2 & 4"
    }
}

impl fmt::Display for ServerMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerMsg::Seated { seat } => write!(f, "You are the Player {}", seat_number(*seat)),
            ServerMsg::TableFull => f.write_str("The table is full"),
            ServerMsg::Dealer { dealer } => {
                write!(f, "The dealer is Player {}", seat_number(*dealer))
            }
            ServerMsg::ProposedCard { card } => write!(f, "The card is {card}"),
            ServerMsg::Hand { cards } => write!(f, "Your hand is {}", format_cards(cards)),
            ServerMsg::TakePrompt => f.write_str("Do you want to take the card? (yes/no)"),
            ServerMsg::Took { bidder } => {
                write!(f, "Player {} took the card", seat_number(*bidder))
            }
            ServerMsg::SuitPrompt { choices } => {
                f.write_str("What should be the trump? Choices:")?;
                for suit in choices {
                    write!(f, " {suit}")?;
                }
                f.write_str(" (or pass)")
            }
            ServerMsg::ChoseTrump { bidder, trump } => {
                write!(f, "Player {} chose {trump}", seat_number(*bidder))
            }
            ServerMsg::Redeal { cut_at } => {
                write!(f, "Nobody took. The deck is cut at {cut_at} and dealt again")
            }
            ServerMsg::PlayPrompt { legal } => {
                write!(f, "What are you playing? {}", format_cards(legal))
            }
            ServerMsg::Played { seat, card } => {
                write!(f, "Player {} is playing {card}", seat_number(*seat))
            }
            ServerMsg::TrickWon { winner, points } => write!(
                f,
                "Player {} wins the trick for {points} points",
                seat_number(*winner)
            ),
            ServerMsg::DealResult {
                contracting_team,
                points,
                contract_made,
            } => {
                let bidding = *contracting_team as usize;
                write!(
                    f,
                    "Bidding team ({}): {}, Other team ({}): {}. {}",
                    team_label(*contracting_team),
                    points[bidding],
                    team_label(1 - *contracting_team),
                    points[1 - bidding],
                    if *contract_made {
                        "Bidding team won!"
                    } else {
                        "Other team won!"
                    }
                )
            }
            ServerMsg::MatchScore { scores } => write!(
                f,
                "Score: {} {}, {} {}",
                team_label(0),
                scores[0],
                team_label(1),
                scores[1]
            ),
            ServerMsg::Rejected { reason } => write!(f, "Rejected: {reason}"),
            ServerMsg::Aborted { seat } => write!(
                f,
                "Player {} left the table. The game is over",
                seat_number(*seat)
            ),
        }
    }
}
