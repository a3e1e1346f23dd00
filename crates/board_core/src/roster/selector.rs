//! Starting lineup selection
//!
//! Given the full player pool and a chosen club, pick eleven players in a
//! 1-4-3-3 role split, preferring lower priority values. Underfilled
//! lineups are topped up from the rest of the club's pool and, failing
//! that, with synthesized placeholder players, so the result always has
//! exactly eleven entries.

use crate::data::PlayerRecord;
use crate::models::{ClubRecord, Player, Role, Side};
use crate::pitch::{PitchGeometry, Point};

/// A lineup always contains this many players.
pub const LINEUP_SIZE: usize = 11;

/// Role quotas tried first, in pick order.
const QUOTAS: [(Role, usize); 4] = [
    (Role::GK, 1),
    (Role::DF, 4),
    (Role::MF, 3),
    (Role::FW, 3),
];

const STACK_EDGE_OFFSET: f32 = 100.0;
const STACK_SPACING: f32 = 40.0;

struct Pick {
    name: String,
    role: Role,
    number: u8,
}

/// Select a starting eleven for `club` out of `pool` and place it in a
/// vertical stack on `side`'s half, ready to receive a formation.
pub fn select_starting_eleven(
    pool: &[PlayerRecord],
    club: &ClubRecord,
    side: Side,
    geometry: &PitchGeometry,
) -> Vec<Player> {
    let club_pool: Vec<usize> = pool
        .iter()
        .enumerate()
        .filter(|(_, r)| r.team_id == club.id)
        .map(|(i, _)| i)
        .collect();

    // Quota pass: best-priority players per role.
    let mut picked: Vec<usize> = Vec::with_capacity(LINEUP_SIZE);
    for (role, quota) in QUOTAS {
        let mut bucket: Vec<usize> = club_pool
            .iter()
            .copied()
            .filter(|&i| pool[i].resolved_role() == role)
            .collect();
        bucket.sort_by_key(|&i| pool[i].priority_or_default());
        picked.extend(bucket.into_iter().take(quota));
    }

    // Top up from whoever is left in the club pool, best priority first.
    if picked.len() < LINEUP_SIZE {
        let mut rest: Vec<usize> = club_pool
            .iter()
            .copied()
            .filter(|i| !picked.contains(i))
            .collect();
        rest.sort_by_key(|&i| pool[i].priority_or_default());
        for i in rest {
            if picked.len() == LINEUP_SIZE {
                break;
            }
            picked.push(i);
        }
    }

    let mut picks: Vec<Pick> = picked
        .into_iter()
        .map(|i| {
            let record = &pool[i];
            Pick {
                name: record.name.clone(),
                role: record.resolved_role(),
                number: record.shirt_or_default(),
            }
        })
        .collect();

    // Synthesize placeholders for whatever the pool could not provide.
    let synthesized = LINEUP_SIZE.saturating_sub(picks.len());
    while picks.len() < LINEUP_SIZE {
        let slot = picks.len();
        log::debug!("synthesizing placeholder {}-missing-{}", club.id, slot);
        picks.push(Pick {
            name: format!("Player {}", slot + 1),
            role: Role::for_slot(slot),
            number: (slot + 1) as u8,
        });
    }
    picks.truncate(LINEUP_SIZE);

    let composition = Role::all().map(|role| picks.iter().filter(|p| p.role == role).count());
    log::info!(
        "built {} lineup for {}: GK{} DF{} MF{} FW{} ({} synthesized)",
        side.label(),
        club.name,
        composition[0],
        composition[1],
        composition[2],
        composition[3],
        synthesized
    );

    picks
        .into_iter()
        .enumerate()
        .map(|(slot, pick)| Player {
            id: format!("{}-{}", side.label(), slot),
            name: pick.name,
            number: pick.number,
            position: stack_position(geometry, side, slot),
            role: pick.role,
            side,
        })
        .collect()
}

/// Off-formation parking slot near the team's own goal line. Slots run
/// toward the halfway line and may leave the drag band on purpose; the
/// first drag pulls the player back inside it.
fn stack_position(geometry: &PitchGeometry, side: Side, slot: usize) -> Point {
    let y = match side {
        Side::Home => geometry.height - STACK_EDGE_OFFSET - STACK_SPACING * slot as f32,
        Side::Away => STACK_EDGE_OFFSET + STACK_SPACING * slot as f32,
    };
    Point::new(geometry.width / 2.0, y)
}
