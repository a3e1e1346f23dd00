//! Automatic shirt renumbering

use serde::{Deserialize, Serialize};

use crate::models::{Player, Role, Team};

/// How automatic renumbering orders the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberingPolicy {
    /// Sort by role (keeper first), ties broken by the current number,
    /// then hand out 1..n in that order.
    Sequential,
    /// Walk the roles in pitch order and number each role block in
    /// roster order, continuing the count across blocks.
    RoleBlocks,
}

/// Compute the renumbering for a roster without touching it. Returns
/// `(player id, new number)` pairs covering every player exactly once.
pub fn plan_numbering(players: &[Player], policy: NumberingPolicy) -> Vec<(String, u8)> {
    match policy {
        NumberingPolicy::Sequential => {
            let mut order: Vec<&Player> = players.iter().collect();
            order.sort_by_key(|p| (p.role.rank(), p.number));
            order
                .into_iter()
                .enumerate()
                .map(|(i, p)| (p.id.clone(), (i + 1) as u8))
                .collect()
        }
        NumberingPolicy::RoleBlocks => {
            let mut plan = Vec::with_capacity(players.len());
            let mut next = 1u8;
            for role in Role::all() {
                for p in players.iter().filter(|p| p.role == role) {
                    plan.push((p.id.clone(), next));
                    next += 1;
                }
            }
            plan
        }
    }
}

/// Renumber a whole team in place.
pub fn apply_numbering(team: &mut Team, policy: NumberingPolicy) {
    let plan = plan_numbering(&team.players, policy);
    for (id, number) in plan {
        if let Some(player) = team.player_mut(&id) {
            player.number = number;
        }
    }
    log::debug!("renumbered {} squad with {:?}", team.side.label(), policy);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Side;
    use crate::pitch::Point;
    use proptest::prelude::*;

    fn player(id: &str, number: u8, role: Role) -> Player {
        Player {
            id: id.to_string(),
            name: id.to_string(),
            number,
            position: Point::new(400.0, 400.0),
            role,
            side: Side::Home,
        }
    }

    fn scrambled_roster() -> Vec<Player> {
        vec![
            player("home-0", 30, Role::FW),
            player("home-1", 9, Role::GK),
            player("home-2", 4, Role::MF),
            player("home-3", 2, Role::DF),
            player("home-4", 77, Role::DF),
            player("home-5", 1, Role::FW),
        ]
    }

    #[test]
    fn sequential_orders_by_role_then_current_number() {
        let plan = plan_numbering(&scrambled_roster(), NumberingPolicy::Sequential);
        // GK 9 -> 1, DF 2 -> 2, DF 77 -> 3, MF 4 -> 4, FW 1 -> 5, FW 30 -> 6.
        assert_eq!(
            plan,
            vec![
                ("home-1".to_string(), 1),
                ("home-3".to_string(), 2),
                ("home-4".to_string(), 3),
                ("home-2".to_string(), 4),
                ("home-5".to_string(), 5),
                ("home-0".to_string(), 6),
            ]
        );
    }

    #[test]
    fn role_blocks_keep_roster_order_inside_each_block() {
        let plan = plan_numbering(&scrambled_roster(), NumberingPolicy::RoleBlocks);
        // Blocks: GK(home-1), DF(home-3, home-4), MF(home-2), FW(home-0, home-5).
        assert_eq!(
            plan,
            vec![
                ("home-1".to_string(), 1),
                ("home-3".to_string(), 2),
                ("home-4".to_string(), 3),
                ("home-2".to_string(), 4),
                ("home-0".to_string(), 5),
                ("home-5".to_string(), 6),
            ]
        );
    }

    #[test]
    fn apply_numbering_rewrites_the_whole_team() {
        use crate::formation::{FormationCatalog, FormationSet};
        let preset = FormationCatalog::presets()[0].clone();
        let mut team = Team::new(
            Side::Home,
            "Home",
            scrambled_roster(),
            FormationSet::basic_only(preset),
        );
        apply_numbering(&mut team, NumberingPolicy::Sequential);
        let mut numbers: Vec<u8> = team.players.iter().map(|p| p.number).collect();
        numbers.sort_unstable();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(team.player("home-1").map(|p| p.number), Some(1));
    }

    proptest! {
        #[test]
        fn both_policies_hand_out_each_number_exactly_once(
            seed in proptest::collection::vec((0usize..4, 1u8..=99), 1..=11)
        ) {
            let roles = [Role::GK, Role::DF, Role::MF, Role::FW];
            let players: Vec<Player> = seed
                .iter()
                .enumerate()
                .map(|(i, (role, number))| player(&format!("home-{i}"), *number, roles[*role]))
                .collect();

            for policy in [NumberingPolicy::Sequential, NumberingPolicy::RoleBlocks] {
                let plan = plan_numbering(&players, policy);
                prop_assert_eq!(plan.len(), players.len());

                let mut ids: Vec<&str> = plan.iter().map(|(id, _)| id.as_str()).collect();
                ids.sort_unstable();
                ids.dedup();
                prop_assert_eq!(ids.len(), players.len());

                let mut numbers: Vec<u8> = plan.iter().map(|(_, n)| *n).collect();
                numbers.sort_unstable();
                let expected: Vec<u8> = (1..=players.len() as u8).collect();
                prop_assert_eq!(numbers, expected);
            }
        }

        #[test]
        fn goalkeepers_always_end_up_with_the_lowest_numbers(
            seed in proptest::collection::vec((0usize..4, 1u8..=99), 2..=11)
        ) {
            let roles = [Role::GK, Role::DF, Role::MF, Role::FW];
            let players: Vec<Player> = seed
                .iter()
                .enumerate()
                .map(|(i, (role, number))| player(&format!("home-{i}"), *number, roles[*role]))
                .collect();

            for policy in [NumberingPolicy::Sequential, NumberingPolicy::RoleBlocks] {
                let plan = plan_numbering(&players, policy);
                let number_of = |id: &str| plan.iter().find(|(pid, _)| pid == id).map(|(_, n)| *n);
                for keeper in players.iter().filter(|p| p.role == Role::GK) {
                    for outfielder in players.iter().filter(|p| p.role != Role::GK) {
                        prop_assert!(number_of(&keeper.id) < number_of(&outfielder.id));
                    }
                }
            }
        }
    }
}
