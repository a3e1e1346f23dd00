//! Mapping formation templates onto team rosters

use super::Formation;
use crate::models::{Side, Team};
use crate::pitch::{PitchGeometry, Point};

/// Move a team's players onto a formation template.
///
/// Template positions are written in home orientation; away positions are
/// mirrored across the halfway line. Pairing is by slot index, so a roster
/// longer than the template keeps its trailing players where they are and
/// a shorter roster simply uses fewer slots.
pub fn apply_formation(team: &mut Team, formation: &Formation, geometry: &PitchGeometry) {
    for (slot, player) in team.players.iter_mut().enumerate() {
        if let Some(base) = formation.positions.get(slot) {
            player.position = match team.side {
                Side::Home => *base,
                Side::Away => geometry.mirror_point(*base),
            };
        }
    }
}

/// Current player positions expressed in home orientation, slot order.
///
/// This is the capture path for custom formations: away arrangements are
/// un-mirrored so the stored template replays identically on either side.
pub fn current_template_positions(team: &Team, geometry: &PitchGeometry) -> Vec<Point> {
    team.players
        .iter()
        .map(|p| match team.side {
            Side::Home => p.position,
            Side::Away => geometry.mirror_point(p.position),
        })
        .collect()
}
