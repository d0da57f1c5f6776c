//! Shared movement of the UFO swarm: sweep sideways, and on touching a side
//! wall, reverse and sink a fixed distance before sweeping again.

use std::collections::BTreeMap;

use crate::entity::{Entity, EntityKind, Padding};
use crate::math::Boundaries;

#[derive(Clone, Debug, PartialEq)]
pub struct Formation {
    /// +1 sweeps right, -1 sweeps left.
    pub direction: f32,
    /// 1 while sweeping, 0 while sinking.
    pub horizontal: f32,
    /// 1 while sinking, 0 while sweeping.
    pub vertical: f32,
    pub descending: bool,
    pub descended: f32,
    pub sink_distance: f32,
}

impl Formation {
    pub fn new(sink_distance: f32) -> Self {
        Formation {
            direction: 1.0,
            horizontal: 1.0,
            vertical: 0.0,
            descending: false,
            descended: 0.0,
            sink_distance,
        }
    }

    /// One tick of formation movement. Unsized UFOs neither move nor count
    /// towards the wall check.
    pub fn advance(&mut self, ufos: &mut [Entity], speed: f32, dt: f32, boundaries: &Boundaries) {
        let step = speed * dt;

        if !self.descending && self.would_leave(ufos, step * self.direction, boundaries) {
            self.direction = -self.direction;
            self.horizontal = 0.0;
            self.vertical = 1.0;
            self.descending = true;
            self.descended = 0.0;
        }

        let dx = step * self.direction * self.horizontal;
        let mut dy = step * self.vertical;
        if self.descending {
            let remaining = self.sink_distance - self.descended;
            if dy >= remaining {
                dy = remaining;
                self.finish_descent();
            } else {
                self.descended += dy;
            }
        }

        for ufo in ufos.iter_mut() {
            ufo.translate(dx, dy);
        }
    }

    fn finish_descent(&mut self) {
        self.descending = false;
        self.descended = 0.0;
        self.horizontal = 1.0;
        self.vertical = 0.0;
    }

    fn would_leave(&self, ufos: &[Entity], dx: f32, boundaries: &Boundaries) -> bool {
        ufos.iter().filter_map(|ufo| ufo.bounds(Padding::NONE)).any(|rect| {
            rect.left + dx < boundaries.left || rect.right + dx > boundaries.right
        })
    }
}

/// Column -> index of the lowest UFO in it. Ordered by column so bomb rolls
/// happen in the same order every tick.
pub fn frontline(ufos: &[Entity]) -> BTreeMap<usize, usize> {
    let mut lowest: BTreeMap<usize, (usize, usize)> = BTreeMap::new();
    for (index, ufo) in ufos.iter().enumerate() {
        let EntityKind::Ufo { row, column, .. } = ufo.kind else {
            continue;
        };
        let entry = lowest.entry(column).or_insert((row, index));
        if row > entry.0 {
            *entry = (row, index);
        }
    }
    lowest.into_iter().map(|(column, (_, index))| (column, index)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Size, Vector2};

    fn ufo(row: usize, column: usize, x: f32, y: f32) -> Entity {
        Entity::new(EntityKind::Ufo { row, column, variant: 0 }, Vector2::new(x, y), 0.0)
            .unwrap()
            .with_size(Size::new(40.0, 30.0).unwrap())
    }

    fn field() -> Boundaries {
        Boundaries::new(0.0, 600.0, 0.0, 800.0)
    }

    #[test]
    fn sweeps_until_a_wall() {
        let mut formation = Formation::new(30.0);
        let mut ufos = vec![ufo(0, 0, 400.0, 100.0)];
        formation.advance(&mut ufos, 60.0, 0.5, &field());
        assert_eq!(ufos[0].position, Vector2::new(430.0, 100.0));
        assert!(!formation.descending);
    }

    #[test]
    fn wall_flips_direction_and_starts_descent() {
        let mut formation = Formation::new(30.0);
        let mut ufos = vec![ufo(0, 0, 780.0, 100.0)];
        formation.advance(&mut ufos, 12.0, 1.0, &field());

        assert_eq!(formation.direction, -1.0);
        assert!(formation.descending);
        assert_eq!((formation.horizontal, formation.vertical), (0.0, 1.0));
        assert_eq!(ufos[0].position, Vector2::new(780.0, 112.0));
    }

    #[test]
    fn descent_stops_at_exactly_the_sink_distance() {
        let mut formation = Formation::new(30.0);
        let mut ufos = vec![ufo(0, 0, 780.0, 100.0)];
        let mut ticks = 0;
        formation.advance(&mut ufos, 35.0, 1.0 / 60.0, &field());
        while formation.descending {
            formation.advance(&mut ufos, 35.0, 1.0 / 60.0, &field());
            ticks += 1;
            assert!(ticks < 1_000, "descent never finished");
        }
        assert!((ufos[0].position.y - 130.0).abs() < 1e-3);
        assert_eq!(ufos[0].position.x, 780.0);

        formation.advance(&mut ufos, 35.0, 1.0 / 60.0, &field());
        assert!(ufos[0].position.x < 780.0);
        assert!((ufos[0].position.y - 130.0).abs() < 1e-3);
    }

    #[test]
    fn frontline_is_the_lowest_row_per_column() {
        let ufos = vec![
            ufo(0, 0, 0.0, 0.0),
            ufo(1, 0, 0.0, 0.0),
            ufo(0, 2, 0.0, 0.0),
            ufo(3, 1, 0.0, 0.0),
            ufo(2, 1, 0.0, 0.0),
        ];
        let front: Vec<(usize, usize)> = frontline(&ufos).into_iter().collect();
        assert_eq!(front, vec![(0, 1), (1, 3), (2, 2)]);
    }
}
