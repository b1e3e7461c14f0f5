//! Named policy presets and the standard comparison rosters.

use std::fmt;
use std::str::FromStr;

use hunt_belief::{Damping, Ranking};
use hunt_core::HuntError;

use crate::{LocalRadius, PolicyConfig, RankedPolicy, Repeat, Scope, TargetClock, Travel};

/// Damping constant shared by the weighted-cost presets.
const DAMPING: f64 = 5.0;

/// Selector for a built-in policy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PolicyId {
    /// Search the most likely cell; relocation is free.
    Rule1,
    /// Search the cell most likely to yield a find; relocation is free.
    Rule2,
    /// Rule 1 ranking, walking there step by step.
    Agent1,
    /// Rule 2 ranking, walking there step by step.
    Agent2,
    /// Distance over detection probability.
    Agent3,
    /// Agent 3 with distance damped by subtracting 5.
    Agent4,
    /// Agent 3 with distance halved, then damped by 5.
    Agent4Half,
    /// Agent 3 restricted to a window around the agent.
    Local,
    /// Agent 1 restricted to a window around the agent.
    LocalContain,
    /// Agent 2 restricted to a window around the agent.
    LocalFind,
    /// Agent 3, searching every chosen cell twice.
    Repeat,
    /// Agent 4 ranking plus terrain-dependent repeat searches.
    Improved,
    /// Agent 3 ranking, jumping to the chosen cell at distance cost.
    Teleport,
}

impl PolicyId {
    pub const ALL: [PolicyId; 13] = [
        Self::Rule1,
        Self::Rule2,
        Self::Agent1,
        Self::Agent2,
        Self::Agent3,
        Self::Agent4,
        Self::Agent4Half,
        Self::Local,
        Self::LocalContain,
        Self::LocalFind,
        Self::Repeat,
        Self::Improved,
        Self::Teleport,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rule1        => "rule1",
            Self::Rule2        => "rule2",
            Self::Agent1       => "agent1",
            Self::Agent2       => "agent2",
            Self::Agent3       => "agent3",
            Self::Agent4       => "agent4",
            Self::Agent4Half   => "agent4-half",
            Self::Local        => "local",
            Self::LocalContain => "local-contain",
            Self::LocalFind    => "local-find",
            Self::Repeat       => "repeat",
            Self::Improved     => "improved",
            Self::Teleport     => "teleport",
        }
    }

    /// Fixed per-preset number.  Never reused or renumbered, so seeds derived
    /// from it stay put when presets are added.
    pub fn code(self) -> u64 {
        match self {
            Self::Rule1        => 1,
            Self::Rule2        => 2,
            Self::Agent1       => 3,
            Self::Agent2       => 4,
            Self::Agent3       => 5,
            Self::Agent4       => 6,
            Self::Agent4Half   => 7,
            Self::Local        => 8,
            Self::Repeat       => 9,
            Self::Improved     => 10,
            Self::Teleport     => 11,
            Self::LocalContain => 12,
            Self::LocalFind    => 13,
        }
    }

    /// The preset's configuration (not feasibility-aware).
    pub fn config(self) -> PolicyConfig {
        let base = PolicyConfig::default();
        let cost = PolicyConfig { ranking: Ranking::Cost, ..base };
        let local = Scope::Local(LocalRadius::Scaled);
        let damped = PolicyConfig {
            ranking: Ranking::WeightedCost(Damping::Subtract(DAMPING)),
            ..base
        };
        match self {
            Self::Rule1        => PolicyConfig { travel: Travel::Free, ..base },
            Self::Rule2        => PolicyConfig { ranking: Ranking::Detection, travel: Travel::Free, ..base },
            Self::Agent1       => base,
            Self::Agent2       => PolicyConfig { ranking: Ranking::Detection, ..base },
            Self::Agent3       => cost,
            Self::Agent4       => damped,
            Self::Agent4Half   => PolicyConfig {
                ranking: Ranking::WeightedCost(Damping::HalveThenSubtract(DAMPING)),
                ..base
            },
            Self::Local        => PolicyConfig { scope: local, ..cost },
            Self::LocalContain => PolicyConfig { scope: local, ..base },
            Self::LocalFind    => PolicyConfig { ranking: Ranking::Detection, scope: local, ..base },
            Self::Repeat       => PolicyConfig { repeat: Repeat::Fixed(2), ..cost },
            Self::Improved     => PolicyConfig { repeat: Repeat::ByTerrain, ..damped },
            Self::Teleport     => PolicyConfig {
                travel: Travel::Teleport,
                clock:  TargetClock::PerSearch,
                ..cost
            },
        }
    }
}

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyId {
    type Err = HuntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or(HuntError::UnknownPolicy(s))
    }
}

// ── PolicySpec ────────────────────────────────────────────────────────────────

/// A preset plus whether it uses the moving-target feasibility horizon.
///
/// Written `agent3` or, for the feasibility-aware counterpart, `move-agent3`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolicySpec {
    pub id: PolicyId,
    pub feasibility_aware: bool,
}

impl PolicySpec {
    #[inline]
    pub fn plain(id: PolicyId) -> Self {
        Self { id, feasibility_aware: false }
    }

    #[inline]
    pub fn aware(id: PolicyId) -> Self {
        Self { id, feasibility_aware: true }
    }

    pub fn config(self) -> PolicyConfig {
        PolicyConfig { feasibility_aware: self.feasibility_aware, ..self.id.config() }
    }

    /// Human-readable name for reports: `agent3` or `modified agent3`.
    pub fn label(self) -> String {
        if self.feasibility_aware {
            format!("modified {}", self.id)
        } else {
            self.id.to_string()
        }
    }

    /// RNG stream number for this policy within a trial.  Depends only on
    /// the policy, never on the rest of the roster.
    pub fn stream(self) -> u64 {
        self.id.code() * 2 + u64::from(self.feasibility_aware)
    }

    pub fn build(self) -> RankedPolicy {
        RankedPolicy::new(self.to_string(), self.config())
    }

    /// The comparison set the driver runs for a given mode.
    ///
    /// Without movement cost: rules 1 and 2.  With movement cost: agents 1–3
    /// and the improved agent.  A moving target pairs each with its
    /// feasibility-aware counterpart.
    pub fn roster(count_movement: bool, moving_target: bool) -> Vec<PolicySpec> {
        let ids: &[PolicyId] = if count_movement {
            &[PolicyId::Agent1, PolicyId::Agent2, PolicyId::Agent3, PolicyId::Improved]
        } else {
            &[PolicyId::Rule1, PolicyId::Rule2]
        };
        ids.iter()
            .flat_map(|&id| {
                let plain = Some(Self::plain(id));
                let aware = moving_target.then(|| Self::aware(id));
                plain.into_iter().chain(aware)
            })
            .collect()
    }
}

impl fmt::Display for PolicySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.feasibility_aware {
            write!(f, "move-{}", self.id)
        } else {
            write!(f, "{}", self.id)
        }
    }
}

impl FromStr for PolicySpec {
    type Err = HuntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.strip_prefix("move-") {
            Some(rest) => Ok(Self::aware(rest.parse()?)),
            None       => Ok(Self::plain(s.parse()?)),
        }
    }
}

impl From<PolicyId> for PolicySpec {
    fn from(id: PolicyId) -> Self {
        Self::plain(id)
    }
}
