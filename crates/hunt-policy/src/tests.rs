//! Unit tests for hunt-policy.

use hunt_belief::BeliefState;
use hunt_core::{Cell, DetectionModel, Grid, TerrainGrid, TerrainType};
use hunt_target::FeasibilityHorizon;

use crate::{SearchContext, SearchPolicy};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn grid(dim: usize) -> Grid {
    Grid::new(dim).unwrap()
}

fn flat(dim: usize) -> TerrainGrid {
    TerrainGrid::uniform(grid(dim), TerrainType::Flat)
}

/// Belief of 1.0 at `hot`, 0.001 everywhere else.
fn spike(dim: usize, hot: Cell) -> BeliefState {
    let g = grid(dim);
    let values = g.cells().map(|c| if c == hot { 1.0 } else { 0.001 }).collect();
    BeliefState::from_values(g, values).unwrap()
}

fn ctx<'a>(
    at:        Cell,
    belief:    &'a BeliefState,
    terrain:   &'a TerrainGrid,
    detection: &'a DetectionModel,
    horizon:   Option<&'a FeasibilityHorizon>,
) -> SearchContext<'a> {
    SearchContext::new(0, at, belief, terrain, detection, horizon)
}

// ── Presets ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod presets {
    use super::*;
    use crate::{
        LocalRadius, PolicyConfig, PolicyId, PolicySpec, Repeat, Scope, TargetClock, Travel,
    };
    use hunt_belief::{Damping, Ranking};
    use hunt_core::HuntError;

    #[test]
    fn names_parse_back() {
        for id in PolicyId::ALL {
            assert_eq!(id.to_string().parse::<PolicyId>().unwrap(), id);
            let aware = PolicySpec::aware(id);
            assert_eq!(aware.to_string(), format!("move-{id}"));
            assert_eq!(aware.to_string().parse::<PolicySpec>().unwrap(), aware);
        }
    }

    #[test]
    fn parsing_trims_and_ignores_case() {
        assert_eq!(" Agent3 ".parse::<PolicyId>().unwrap(), PolicyId::Agent3);
        assert_eq!(
            "move-IMPROVED".parse::<PolicySpec>().unwrap(),
            PolicySpec::aware(PolicyId::Improved),
        );
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert_eq!(
            "agent9".parse::<PolicyId>(),
            Err(HuntError::UnknownPolicy("agent9".into())),
        );
        assert!("move-".parse::<PolicySpec>().is_err());
    }

    #[test]
    fn rules_relocate_for_free() {
        for id in [PolicyId::Rule1, PolicyId::Rule2] {
            assert_eq!(id.config().travel, Travel::Free);
        }
        for id in PolicyId::ALL.into_iter().filter(|id| !matches!(id, PolicyId::Rule1 | PolicyId::Rule2)) {
            assert_ne!(id.config().travel, Travel::Free, "{id}");
        }
    }

    #[test]
    fn preset_table() {
        assert_eq!(PolicyId::Agent1.config(), PolicyConfig::default());
        assert_eq!(PolicyId::Agent2.config().ranking, Ranking::Detection);
        assert_eq!(PolicyId::Agent3.config().ranking, Ranking::Cost);
        assert_eq!(
            PolicyId::Agent4.config().ranking,
            Ranking::WeightedCost(Damping::Subtract(5.0)),
        );
        assert_eq!(
            PolicyId::Agent4Half.config().ranking,
            Ranking::WeightedCost(Damping::HalveThenSubtract(5.0)),
        );
        assert_eq!(PolicyId::Local.config().scope, Scope::Local(LocalRadius::Scaled));
        let contain = PolicyId::LocalContain.config();
        assert_eq!((contain.ranking, contain.scope), (Ranking::Containment, Scope::Local(LocalRadius::Scaled)));
        let find = PolicyId::LocalFind.config();
        assert_eq!((find.ranking, find.scope), (Ranking::Detection, Scope::Local(LocalRadius::Scaled)));
        assert_eq!(PolicyId::Repeat.config().repeat, Repeat::Fixed(2));

        let improved = PolicyId::Improved.config();
        assert_eq!(improved.repeat, Repeat::ByTerrain);
        assert_eq!(improved.ranking, PolicyId::Agent4.config().ranking);

        let teleport = PolicyId::Teleport.config();
        assert_eq!(teleport.travel, Travel::Teleport);
        assert_eq!(teleport.clock, TargetClock::PerSearch);
    }

    #[test]
    fn only_aware_specs_use_the_horizon() {
        for id in PolicyId::ALL {
            assert!(!PolicySpec::plain(id).config().feasibility_aware);
            assert!(PolicySpec::aware(id).config().feasibility_aware);
        }
    }

    #[test]
    fn streams_are_distinct_and_roster_independent() {
        let mut streams: Vec<u64> = PolicyId::ALL
            .into_iter()
            .flat_map(|id| [PolicySpec::plain(id).stream(), PolicySpec::aware(id).stream()])
            .collect();
        streams.sort_unstable();
        streams.dedup();
        assert_eq!(streams.len(), 2 * PolicyId::ALL.len());
        assert!(!streams.contains(&0));
        assert_eq!(PolicySpec::plain(PolicyId::Agent3).stream(), 10);
        assert_eq!(PolicySpec::aware(PolicyId::Agent3).stream(), 11);
    }

    #[test]
    fn build_names_the_policy_after_its_selector() {
        let p = PolicySpec::aware(PolicyId::Agent2).build();
        assert_eq!(p.name(), "move-agent2");
        assert!(p.config().feasibility_aware);
        assert_eq!(PolicySpec::aware(PolicyId::Agent2).label(), "modified agent2");
        assert_eq!(PolicySpec::plain(PolicyId::Agent2).label(), "agent2");
    }

    #[test]
    fn rosters() {
        let names = |count, moving| -> Vec<String> {
            PolicySpec::roster(count, moving).iter().map(|s| s.to_string()).collect()
        };
        assert_eq!(names(false, false), ["rule1", "rule2"]);
        assert_eq!(names(true, false), ["agent1", "agent2", "agent3", "improved"]);
        assert_eq!(
            names(false, true),
            ["rule1", "move-rule1", "rule2", "move-rule2"],
        );
        assert_eq!(PolicySpec::roster(true, true).len(), 8);
    }
}

// ── RankedPolicy ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod ranked {
    use super::*;
    use crate::{
        LocalRadius, PolicyConfig, PolicyId, PolicySpec, RankedPolicy, Repeat, Scope, TargetClock, Travel,
    };

    #[test]
    fn local_radius_scales_with_dim() {
        assert_eq!(LocalRadius::Fixed(3).resolve(100), 3);
        assert_eq!(LocalRadius::Scaled.resolve(10), 5);
        assert_eq!(LocalRadius::Scaled.resolve(50), 10);
    }

    #[test]
    fn uniform_containment_picks_origin() {
        let (b, t, d) = (BeliefState::new(grid(4)), flat(4), DetectionModel::default());
        let mut p = PolicySpec::plain(PolicyId::Rule1).build();
        let c = p.choose(&ctx(Cell::new(3, 3), &b, &t, &d, None)).unwrap();
        assert_eq!(c, Cell::ORIGIN);
    }

    #[test]
    fn uniform_cost_stays_put() {
        let (b, t, d) = (BeliefState::new(grid(4)), flat(4), DetectionModel::default());
        let mut p = PolicySpec::plain(PolicyId::Agent3).build();
        let at = Cell::new(2, 1);
        assert_eq!(p.choose(&ctx(at, &b, &t, &d, None)).unwrap(), at);
    }

    #[test]
    fn local_scope_ignores_far_spike() {
        let (b, t, d) = (spike(20, Cell::new(19, 19)), flat(20), DetectionModel::default());
        let c = ctx(Cell::ORIGIN, &b, &t, &d, None);

        let mut global = PolicySpec::plain(PolicyId::Agent3).build();
        assert_eq!(global.choose(&c).unwrap(), Cell::new(19, 19));

        let mut local = PolicySpec::plain(PolicyId::Local).build();
        assert_eq!(local.choose(&c).unwrap(), Cell::ORIGIN);
    }

    #[test]
    fn unbounded_local_radius_acts_globally() {
        let (b, t, d) = (spike(20, Cell::new(19, 19)), flat(20), DetectionModel::default());
        let c = ctx(Cell::ORIGIN, &b, &t, &d, None);
        let config = PolicyConfig {
            ranking: hunt_belief::Ranking::Cost,
            scope:   Scope::Local(LocalRadius::Fixed(usize::MAX)),
            ..PolicyConfig::default()
        };
        let mut p = RankedPolicy::new("wide", config);
        assert_eq!(p.choose(&c).unwrap(), Cell::new(19, 19));
    }

    #[test]
    fn local_presets_stay_in_their_window() {
        let (b, t, d) = (spike(20, Cell::new(19, 19)), flat(20), DetectionModel::default());
        let c = ctx(Cell::new(2, 2), &b, &t, &d, None);
        for id in [PolicyId::LocalContain, PolicyId::LocalFind] {
            let mut p = PolicySpec::plain(id).build();
            // Flat ties inside the radius-5 window: its row-major first cell.
            assert_eq!(p.choose(&c).unwrap(), Cell::ORIGIN, "{id}");
        }
        let near = ctx(Cell::new(17, 17), &b, &t, &d, None);
        let mut p = PolicySpec::plain(PolicyId::LocalFind).build();
        assert_eq!(p.choose(&near).unwrap(), Cell::new(19, 19));
    }

    #[test]
    fn aware_policy_skips_blocked_cells() {
        let (b, t, d) = (BeliefState::new(grid(12)), flat(12), DetectionModel::default());
        let mut h = FeasibilityHorizon::new(grid(12));
        h.mark_infeasible(Cell::ORIGIN).unwrap();
        let c = ctx(Cell::ORIGIN, &b, &t, &d, Some(&h));

        let mut plain = PolicySpec::plain(PolicyId::Agent1).build();
        assert_eq!(plain.choose(&c).unwrap(), Cell::ORIGIN);

        // Row 0 is blocked through column 4.
        let mut aware = PolicySpec::aware(PolicyId::Agent1).build();
        assert_eq!(aware.choose(&c).unwrap(), Cell::new(0, 5));
    }

    #[test]
    fn aware_policy_falls_back_when_everything_is_blocked() {
        let (b, t, d) = (BeliefState::new(grid(3)), flat(3), DetectionModel::default());
        let mut h = FeasibilityHorizon::new(grid(3));
        h.mark_infeasible(Cell::new(1, 1)).unwrap();
        assert_eq!(h.blocked(), 9);

        let mut aware = PolicySpec::aware(PolicyId::Agent1).build();
        let c = ctx(Cell::new(2, 2), &b, &t, &d, Some(&h));
        assert_eq!(aware.choose(&c).unwrap(), Cell::ORIGIN);
    }

    #[test]
    fn choose_rejects_off_grid_agent() {
        let (b, t, d) = (BeliefState::new(grid(3)), flat(3), DetectionModel::default());
        let mut p = PolicySpec::plain(PolicyId::Agent3).build();
        assert!(p.choose(&ctx(Cell::new(3, 0), &b, &t, &d, None)).is_err());
    }

    #[test]
    fn repeat_counts() {
        use TerrainType::*;
        let t = TerrainGrid::from_cells(grid(2), vec![Flat, Hill, Forest, Cave]).unwrap();
        let (b, d) = (BeliefState::new(grid(2)), DetectionModel::default());
        let c = ctx(Cell::ORIGIN, &b, &t, &d, None);

        let improved = PolicySpec::plain(PolicyId::Improved).build();
        let counts: Vec<u32> = grid(2).cells().map(|cell| improved.searches_at(&c, cell).unwrap()).collect();
        assert_eq!(counts, [2, 3, 4, 5]);

        let twice = PolicySpec::plain(PolicyId::Repeat).build();
        assert_eq!(twice.searches_at(&c, Cell::new(1, 1)).unwrap(), 2);

        let zero = RankedPolicy::new("zero", PolicyConfig { repeat: Repeat::Fixed(0), ..PolicyConfig::default() });
        assert_eq!(zero.searches_at(&c, Cell::ORIGIN).unwrap(), 1);
    }

    #[test]
    fn boxed_policy_delegates() {
        let p: Box<dyn SearchPolicy> = Box::new(PolicySpec::plain(PolicyId::Teleport).build());
        assert_eq!(p.name(), "teleport");
        assert_eq!(p.travel(), Travel::Teleport);
        assert_eq!(p.target_clock(), TargetClock::PerSearch);
    }
}
