//! Best-effort resolution of point names to renderer ids.
//!
//! Order tried for each name, first hit wins:
//! 1. the name is itself a registered renderer id → that id alone
//! 2. normalize; an empty key is unmatchable
//! 3. exact registry lookup (concept key, then spelling override)
//! 4. substring fallback, only when [`MatchPolicy::substring_fallback`] is set
//!
//! Names that miss every step are dropped with a warning. Resolution never
//! fails as a whole.

use std::collections::BTreeSet;

use constants::vocabulary::MIN_FALLBACK_KEY_LEN;
use serde::{Deserialize, Serialize};

use crate::normalize::{CanonicalKey, normalize};
use crate::registry::{AliasEntry, AliasRegistry, RendererId};

/// Tunable matching behaviour, chosen per call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPolicy {
    /// Accept a key when one of input/candidate contains the other.
    /// Off by default: the registry is precise and fuzzy hits cost precision.
    #[serde(default)]
    pub substring_fallback: bool,
}

impl MatchPolicy {
    pub const EXACT: Self = Self {
        substring_fallback: false,
    };

    pub const WITH_FALLBACK: Self = Self {
        substring_fallback: true,
    };
}

/// How a single name was (or was not) resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The name is a scene object name registered in the table.
    RendererId(RendererId),
    /// Exact registry hit. `concept` differs from `key` when a spelling
    /// override was used.
    Exact {
        key: CanonicalKey,
        concept: CanonicalKey,
        renderer_ids: Vec<RendererId>,
    },
    /// Hit through the substring fallback.
    Fallback {
        key: CanonicalKey,
        concept: CanonicalKey,
        renderer_ids: Vec<RendererId>,
    },
    /// Several concepts tied in the substring fallback.
    Ambiguous {
        key: CanonicalKey,
        candidates: Vec<CanonicalKey>,
    },
    /// Key is known nowhere.
    Unmatched { key: CanonicalKey },
    /// Normalization produced the empty key.
    Unmatchable,
}

impl MatchOutcome {
    pub fn renderer_ids(&self) -> &[RendererId] {
        match self {
            Self::RendererId(id) => std::slice::from_ref(id),
            Self::Exact { renderer_ids, .. } | Self::Fallback { renderer_ids, .. } => renderer_ids,
            Self::Ambiguous { .. } | Self::Unmatched { .. } | Self::Unmatchable => &[],
        }
    }

    pub fn is_match(&self) -> bool {
        !self.renderer_ids().is_empty()
    }
}

enum FallbackHit<'r> {
    Found(&'r AliasEntry),
    Ambiguous(Vec<CanonicalKey>),
    Miss,
}

/// Resolves knowledge-base or scene names against an [`AliasRegistry`].
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    registry: AliasRegistry,
    policy: MatchPolicy,
}

impl Matcher {
    pub fn new(registry: AliasRegistry) -> Self {
        Self::with_policy(registry, MatchPolicy::default())
    }

    pub fn with_policy(registry: AliasRegistry, policy: MatchPolicy) -> Self {
        Self { registry, policy }
    }

    pub fn registry(&self) -> &AliasRegistry {
        &self.registry
    }

    /// Policy used by [`resolve`](Self::resolve) and [`resolve_one`](Self::resolve_one).
    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: MatchPolicy) {
        self.policy = policy;
    }

    /// Resolve every name with the default policy; unresolved names are dropped.
    pub fn resolve<I, S>(&self, names: I) -> BTreeSet<RendererId>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.resolve_with(names, self.policy)
    }

    /// Resolve every name with an explicit policy for this call only.
    pub fn resolve_with<I, S>(&self, names: I, policy: MatchPolicy) -> BTreeSet<RendererId>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut resolved = BTreeSet::new();
        for name in names {
            let name = name.as_ref();
            let outcome = self.explain(name, policy);
            match &outcome {
                MatchOutcome::Unmatched { key } => {
                    tracing::warn!(name, %key, "unresolved point name dropped");
                }
                MatchOutcome::Unmatchable => {
                    tracing::warn!(name, "point name has no letters, dropped");
                }
                MatchOutcome::Ambiguous { key, candidates } => {
                    tracing::warn!(name, %key, ?candidates, "ambiguous point name dropped");
                }
                MatchOutcome::Fallback { key, concept, .. } => {
                    tracing::debug!(
                        name,
                        %key,
                        %concept,
                        "point name matched by substring fallback"
                    );
                }
                MatchOutcome::RendererId(_) | MatchOutcome::Exact { .. } => {}
            }
            resolved.extend(outcome.renderer_ids().iter().cloned());
        }
        resolved
    }

    /// Resolve a name to the single object a selection should target:
    /// the object itself when the name is a renderer id, else the first
    /// object of the resolved concept.
    ///
    /// A selection lights one object. Naming a two-sided concept selects its
    /// left side only (`"Porchai"` selects `6_Porchai_L`); callers that want
    /// both sides lit use [`resolve`](Self::resolve) and a search highlight.
    pub fn resolve_one(&self, raw: &str) -> Option<RendererId> {
        let outcome = self.explain(raw, self.policy);
        if !outcome.is_match() {
            tracing::warn!(name = raw, ?outcome, "selection target not resolved");
        }
        outcome.renderer_ids().first().cloned()
    }

    /// Canonical key of the concept a name resolves to exactly, overrides
    /// applied. Falls back to the plain normalized key when nothing matches.
    pub fn canonical_key(&self, raw: &str) -> CanonicalKey {
        let trimmed = raw.trim();
        if let Some(entry) = self.registry.concept_of(trimmed) {
            return entry.key().clone();
        }
        let key = normalize(trimmed);
        self.registry
            .entry(&key)
            .map(|entry| entry.key().clone())
            .unwrap_or(key)
    }

    /// Resolve a single name and report which step matched.
    pub fn explain(&self, raw: &str, policy: MatchPolicy) -> MatchOutcome {
        let trimmed = raw.trim();
        if self.registry.contains_renderer_id(trimmed) {
            return MatchOutcome::RendererId(RendererId::new(trimmed));
        }

        let key = normalize(trimmed);
        if key.is_empty() {
            return MatchOutcome::Unmatchable;
        }

        if let Some(entry) = self.registry.entry(&key) {
            return MatchOutcome::Exact {
                concept: entry.key().clone(),
                renderer_ids: entry.renderer_ids().to_vec(),
                key,
            };
        }

        if !policy.substring_fallback {
            return MatchOutcome::Unmatched { key };
        }

        match self.substring_fallback(&key) {
            FallbackHit::Found(entry) => MatchOutcome::Fallback {
                concept: entry.key().clone(),
                renderer_ids: entry.renderer_ids().to_vec(),
                key,
            },
            FallbackHit::Ambiguous(candidates) => MatchOutcome::Ambiguous { key, candidates },
            FallbackHit::Miss => MatchOutcome::Unmatched { key },
        }
    }

    /// Closest containing/contained key wins; equal distances across
    /// different concepts are ambiguous.
    fn substring_fallback(&self, key: &CanonicalKey) -> FallbackHit<'_> {
        if key.len() < MIN_FALLBACK_KEY_LEN {
            return FallbackHit::Miss;
        }

        let mut best_distance = usize::MAX;
        let mut best: Vec<&AliasEntry> = Vec::new();

        for (candidate, entry) in self.registry.searchable_keys() {
            if candidate.len() < MIN_FALLBACK_KEY_LEN {
                continue;
            }
            if !candidate.as_str().contains(key.as_str())
                && !key.as_str().contains(candidate.as_str())
            {
                continue;
            }

            let distance = candidate.len().abs_diff(key.len());
            if distance < best_distance {
                best_distance = distance;
                best.clear();
                best.push(entry);
            } else if distance == best_distance
                && !best.iter().any(|seen| seen.key() == entry.key())
            {
                best.push(entry);
            }
        }

        match best.as_slice() {
            [] => FallbackHit::Miss,
            [entry] => FallbackHit::Found(*entry),
            tied => FallbackHit::Ambiguous(tied.iter().map(|entry| entry.key().clone()).collect()),
        }
    }
}
