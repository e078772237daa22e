use crate::state::{Position, Unit};

use super::Snapshot;

/// Picks the snapshot position the unit at `from` should go after.
///
/// The first opposing unit inside the movement plus attack-range envelope
/// wins, in snapshot order. Otherwise the nearest opposing unit is chosen,
/// with ties going to the one found first. Returns `None` when no opposing
/// unit exists.
pub fn select_target(snapshot: &Snapshot, unit: &Unit, from: Position) -> Option<Position> {
    let hostile = unit.allegiance().opponent();
    let envelope = unit.movement() + unit.attack_range();

    let reachable = snapshot
        .units_of(hostile)
        .find(|entry| from.distance(entry.position) <= envelope);
    if let Some(entry) = reachable {
        return Some(entry.position);
    }

    let mut nearest: Option<(u32, Position)> = None;
    for entry in snapshot.units_of(hostile) {
        let distance = from.distance(entry.position);
        if nearest.is_none_or(|(best, _)| distance < best) {
            nearest = Some((distance, entry.position));
        }
    }
    nearest.map(|(_, position)| position)
}
