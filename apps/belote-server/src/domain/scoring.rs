use super::rules::{LAST_TRICK_BONUS, TEAMS};
use super::seating::{team_of, Seat, TeamId};
use super::state::{DealState, Phase, Team};
use crate::errors::domain::DomainError;

/// Credit a resolved trick to the winner's team and return the points awarded.
pub fn award_trick(points: &mut [u16; TEAMS], winner: Seat, trick_points: u16, last: bool) -> u16 {
    let awarded = if last {
        trick_points + LAST_TRICK_BONUS
    } else {
        trick_points
    };
    points[team_of(winner) as usize] += awarded;
    awarded
}

/// Final tally of a completed deal.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DealOutcome {
    pub contracting_team: TeamId,
    /// Deal points per team, bonus included.
    pub points: [u16; TEAMS],
    /// The contracting team strictly beat the defenders.
    pub contract_made: bool,
}

impl DealOutcome {
    pub fn contracting_points(&self) -> u16 {
        self.points[self.contracting_team as usize]
    }

    pub fn defending_points(&self) -> u16 {
        self.points[1 - self.contracting_team as usize]
    }
}

pub fn score_deal(state: &DealState) -> Result<DealOutcome, DomainError> {
    if state.phase != Phase::Complete {
        return Err(DomainError::PhaseMismatch("scoring an unfinished deal"));
    }
    let contracting_team = state
        .contracting_team()
        .ok_or(DomainError::PhaseMismatch("scoring a deal without contract"))?;
    let defending_team = 1 - contracting_team as usize;
    Ok(DealOutcome {
        contracting_team,
        points: state.points,
        contract_made: state.points[contracting_team as usize] > state.points[defending_team],
    })
}

/// Add a deal's points to the running totals and clear the contract flags.
pub fn fold_into(teams: &mut [Team; TEAMS], outcome: &DealOutcome) {
    for (team, &points) in teams.iter_mut().zip(outcome.points.iter()) {
        team.score += u32::from(points);
        team.has_contract = false;
    }
}
