//! Unit tests for hunt-target.

use hunt_core::{Cell, Grid};

fn grid(dim: usize) -> Grid {
    Grid::new(dim).unwrap()
}

#[cfg(test)]
mod horizon {
    use super::*;
    use crate::FeasibilityHorizon;

    #[test]
    fn starts_feasible() {
        let h = FeasibilityHorizon::new(grid(4));
        assert!(grid(4).cells().all(|c| h.is_feasible(c)));
        assert_eq!(h.blocked(), 0);
        assert!(!h.is_feasible(Cell::new(4, 0)));
    }

    #[test]
    fn mark_infeasible_counts_down_from_searched_cell() {
        let mut h = FeasibilityHorizon::new(grid(12));
        let s = Cell::new(6, 6);
        h.mark_infeasible(s).unwrap();
        for cell in grid(12).cells() {
            let d = cell.manhattan(s);
            let want = if d <= 5 { 5 - d as u32 } else { 0 };
            assert_eq!(h.get(cell).unwrap(), want, "{cell}");
        }
    }

    #[test]
    fn mark_infeasible_keeps_larger_countdowns() {
        let mut h = FeasibilityHorizon::new(grid(12));
        h.mark_infeasible(Cell::new(0, 0)).unwrap();
        h.mark_infeasible(Cell::new(0, 2)).unwrap();
        // (0, 0): max(5, 3); (0, 2): max(3, 5).
        assert_eq!(h.get(Cell::new(0, 0)).unwrap(), 5);
        assert_eq!(h.get(Cell::new(0, 2)).unwrap(), 5);
        assert_eq!(h.get(Cell::new(0, 1)).unwrap(), 4);
    }

    #[test]
    fn mark_nearby_blocks_far_cells() {
        let mut h = FeasibilityHorizon::new(grid(12));
        let c = Cell::new(0, 0);
        h.mark_nearby(c, 5).unwrap();
        assert_eq!(h.get(Cell::new(0, 5)).unwrap(), 0);
        assert_eq!(h.get(Cell::new(0, 6)).unwrap(), 0);
        assert_eq!(h.get(Cell::new(0, 7)).unwrap(), 1);
        assert_eq!(h.get(Cell::new(11, 11)).unwrap(), 16);
        assert!(grid(12).diamond(c, 6).all(|cell| h.is_feasible(cell)));
    }

    #[test]
    fn decay_floors_at_zero() {
        let mut h = FeasibilityHorizon::new(grid(8));
        h.mark_infeasible(Cell::new(4, 4)).unwrap();
        for _ in 0..3 {
            h.decay();
        }
        assert_eq!(h.get(Cell::new(4, 4)).unwrap(), 2);
        assert_eq!(h.get(Cell::new(4, 5)).unwrap(), 1);
        for _ in 0..10 {
            h.decay();
        }
        assert_eq!(h.blocked(), 0);
    }

    #[test]
    fn off_grid_marks_error() {
        let mut h = FeasibilityHorizon::new(grid(3));
        assert!(h.mark_infeasible(Cell::new(3, 3)).is_err());
        assert!(h.mark_nearby(Cell::new(0, 9), 5).is_err());
        assert!(h.get(Cell::new(9, 0)).is_err());
    }
}

#[cfg(test)]
mod process {
    use rand::Rng;
    use rand::rngs::mock::StepRng;

    use hunt_core::{HuntError, SimRng};

    use super::*;
    use crate::TargetProcess;

    #[test]
    fn stationary_target_never_moves() {
        let mut t = TargetProcess::new(grid(5), Cell::new(2, 2), false).unwrap();
        let mut rng = SimRng::new(3);
        for _ in 0..20 {
            assert_eq!(t.advance(&mut rng).unwrap(), Cell::new(2, 2));
            assert_eq!(t.step(&mut rng).unwrap(), Cell::new(2, 2));
        }
        assert!(t.horizon().is_none());
        assert!(t.is_feasible(Cell::new(0, 0)));
        assert_eq!(t.turns(), 0);
    }

    #[test]
    fn start_must_be_on_grid() {
        assert!(TargetProcess::new(grid(3), Cell::new(3, 0), true).is_err());
    }

    #[test]
    fn steps_land_on_orthogonal_neighbors() {
        let g = grid(6);
        let mut t = TargetProcess::new(g, Cell::new(0, 0), true).unwrap();
        let mut rng = SimRng::new(11);
        for _ in 0..5_000 {
            let before = t.location();
            let after = t.step(&mut rng).unwrap();
            assert!(g.contains(after));
            assert_eq!(before.manhattan(after), 1);
            assert!(g.neighbors(before).unwrap().contains(&after));
        }
    }

    #[test]
    fn walk_visits_every_neighbor_of_a_corner() {
        let mut seen = std::collections::HashSet::new();
        let mut rng = SimRng::new(5);
        for _ in 0..200 {
            let mut t = TargetProcess::new(grid(4), Cell::new(0, 0), true).unwrap();
            seen.insert(t.step(&mut rng).unwrap());
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn single_cell_grid_target_stays() {
        let mut t = TargetProcess::new(grid(1), Cell::ORIGIN, true).unwrap();
        assert_eq!(t.advance(&mut SimRng::new(0)).unwrap(), Cell::ORIGIN);
        assert_eq!(t.turns(), 1);
    }

    #[test]
    fn proximity_signal() {
        let t = TargetProcess::new(grid(12), Cell::new(6, 6), true).unwrap();
        assert!(t.is_near(Cell::new(6, 1)).unwrap());
        assert!(!t.is_near(Cell::new(6, 0)).unwrap());
        assert!(t.is_near(Cell::new(20, 0)).is_err());
    }

    #[test]
    fn observe_miss_far_blocks_around_searched_cell() {
        let mut t = TargetProcess::new(grid(12), Cell::new(11, 11), true).unwrap();
        let near = t.observe_miss(Cell::new(0, 0)).unwrap();
        assert!(!near);
        let h = t.horizon().unwrap();
        assert_eq!(h.get(Cell::new(0, 0)).unwrap(), 5);
        assert!(!t.is_feasible(Cell::new(1, 1)));
        assert!(t.is_feasible(Cell::new(11, 11)));
    }

    #[test]
    fn observe_miss_near_blocks_far_cells() {
        let mut t = TargetProcess::new(grid(12), Cell::new(1, 1), true).unwrap();
        let near = t.observe_miss(Cell::new(0, 0)).unwrap();
        assert!(near);
        assert!(!t.is_feasible(Cell::new(11, 11)));
        assert!(t.is_feasible(Cell::new(1, 1)));
    }

    #[test]
    fn horizon_never_excludes_true_location() {
        let g = grid(15);
        let mut rng = SimRng::new(2024);
        let mut t = TargetProcess::new(g, Cell::new(7, 7), true).unwrap();
        for _ in 0..3_000 {
            let searched = Cell::new(rng.gen_range(0..15), rng.gen_range(0..15));
            t.observe_miss(searched).unwrap();
            assert!(t.is_feasible(t.location()));
            t.advance(&mut rng).unwrap();
            assert!(t.is_feasible(t.location()));
        }
        assert_eq!(t.turns(), 3_000);
    }

    #[test]
    fn stepping_without_decay_is_caught() {
        // Target walks straight up from (11, 0) toward the blocked corner
        // (the all-zero RNG always takes the first neighbor: up).
        let mut t = TargetProcess::new(grid(12), Cell::new(11, 0), true).unwrap();
        t.observe_miss(Cell::new(0, 0)).unwrap();
        let mut rng = StepRng::new(0, 0);
        for _ in 0..7 {
            t.step(&mut rng).unwrap();
        }
        assert_eq!(t.location(), Cell::new(4, 0));
        assert_eq!(
            t.check_invariant(),
            Err(HuntError::InfeasibleTarget { cell: Cell::new(4, 0), horizon: 1 }),
        );
    }
}
