//! Overlap detection
//!
//! Box-vs-box tests between collidable entities. A pair is reported once,
//! on the frame it starts overlapping, and again only after it separated.

use std::collections::BTreeSet;

use crate::sim::{CollisionRules, Contact, EntityId, GameState};

#[derive(Debug, Clone, Default)]
pub struct OverlapTracker {
    /// Pairs overlapping as of the last detect (lower id first)
    active: BTreeSet<(EntityId, EntityId)>,
}

impl OverlapTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Newly overlapping pairs, in (lower id, higher id) discovery order
    pub fn detect(&mut self, state: &GameState) -> Vec<Contact> {
        let mut bodies: Vec<_> = state
            .live_entities()
            .filter_map(|e| e.hitbox().map(|hb| (e.id, e.kind, e.pos, hb)))
            .collect();
        bodies.sort_by_key(|b| b.0);

        let mut current = BTreeSet::new();
        let mut onsets = Vec::new();
        for (i, &(id_a, kind_a, pos_a, hb_a)) in bodies.iter().enumerate() {
            for &(id_b, kind_b, pos_b, hb_b) in &bodies[i + 1..] {
                // Only pairs with a registered reaction are tracked
                if CollisionRules::reaction(kind_a, kind_b).is_none() {
                    continue;
                }
                if !hb_a.overlaps(pos_a, &hb_b, pos_b) {
                    continue;
                }
                current.insert((id_a, id_b));
                if !self.active.contains(&(id_a, id_b)) {
                    onsets.push(Contact::new(id_a, id_b));
                }
            }
        }

        self.active = current;
        onsets
    }

    /// Forget all tracked overlaps (new game)
    pub fn reset(&mut self) {
        self.active.clear();
    }

    pub fn active_pairs(&self) -> usize {
        self.active.len()
    }
}
