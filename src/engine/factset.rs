// ============================================================================
// Fact Set
// Minimally unique labels over an ordered group of facts
// ============================================================================

use super::labeller::AspectLabeller;
use crate::domain::{Aspect, Fact};
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// An ordered, non-owning group of facts.
///
/// The same fact may appear more than once; members are identified by
/// position. All queries are pure functions of the sequence, and the label
/// aspect selection is computed once per set.
///
/// # Example
/// ```text
/// f1: Concept 1, 2018-01-01        selected aspects: [concept, period]
/// f2: Concept 2, 2018-01-01   =>   f1: "Concept 1, 31 Dec 2017"
/// f3: Concept 2, 2019-01-01        f2: "Concept 2, 31 Dec 2017"
///                                  f3: "Concept 2, 31 Dec 2018"
/// ```
#[derive(Debug, Clone)]
pub struct FactSet<'a> {
    facts: Vec<&'a Fact>,
    selection: OnceLock<Vec<Aspect>>,
}

impl<'a> FactSet<'a> {
    pub fn new<I>(facts: I) -> Self
    where
        I: IntoIterator<Item = &'a Fact>,
    {
        Self {
            facts: facts.into_iter().collect(),
            selection: OnceLock::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a Fact> {
        self.facts.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Fact> + '_ {
        self.facts.iter().copied()
    }

    /// Every dimension aspect present on at least one fact, ordered by
    /// dimension qname.
    pub fn all_dimensions(&self) -> Vec<Aspect> {
        self.iter()
            .flat_map(|fact| fact.dimensions().map(|(dim, _)| dim))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .cloned()
            .map(Aspect::Dimension)
            .collect()
    }

    /// Aspects used to build every member's label, in priority order.
    pub fn selected_aspects(&self) -> &[Aspect] {
        self.selection.get_or_init(|| self.select_aspects())
    }

    /// Shortest label for `fact` that, built the same way for every member,
    /// tells the members of this set apart as far as their aspects allow.
    ///
    /// Never empty: the concept is always included when the distinguishing
    /// aspects alone would leave some member without a label.
    pub fn minimally_unique_label(&self, fact: &Fact, labeller: &AspectLabeller<'_>) -> String {
        labeller.fact_label(fact, self.selected_aspects())
    }

    /// [`minimally_unique_label`](Self::minimally_unique_label) for every
    /// member, in order.
    pub fn minimally_unique_labels(&self, labeller: &AspectLabeller<'_>) -> Vec<String> {
        let aspects = self.selected_aspects();
        self.facts
            .iter()
            .map(|fact| labeller.fact_label(fact, aspects))
            .collect()
    }

    // ========================================================================
    // Aspect Selection
    // ========================================================================

    /// Concept, period, unit (only if some member has one), then dimensions.
    fn candidate_aspects(&self) -> Vec<Aspect> {
        let mut candidates = vec![Aspect::Concept, Aspect::Period];
        if self.facts.iter().any(|fact| fact.unit().is_some()) {
            candidates.push(Aspect::Unit);
        }
        candidates.extend(self.all_dimensions());
        candidates
    }

    fn differ(&self, i: usize, j: usize, aspect: &Aspect) -> bool {
        self.facts[i].aspect_value(aspect) != self.facts[j].aspect_value(aspect)
    }

    fn select_aspects(&self) -> Vec<Aspect> {
        let n = self.facts.len();

        // Pairs of positions not yet told apart
        let mut ambiguous: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect();

        let mut selected = Vec::new();
        for aspect in self.candidate_aspects() {
            if ambiguous.is_empty() {
                break;
            }

            let before = ambiguous.len();
            ambiguous.retain(|&(i, j)| !self.differ(i, j, &aspect));
            let resolved = before - ambiguous.len();

            if resolved > 0 {
                tracing::trace!("Aspect {} resolves {} fact pairs", aspect, resolved);
                selected.push(aspect);
            } else {
                tracing::trace!("Aspect {} does not distinguish any pair", aspect);
            }
        }

        if !ambiguous.is_empty() {
            tracing::debug!(
                "{} fact pairs cannot be distinguished by any aspect",
                ambiguous.len()
            );
        }

        // Concept anchors the label when the selection would leave a member
        // with nothing to show
        let starved = self.facts.iter().any(|fact| {
            selected
                .iter()
                .all(|aspect| fact.aspect_value(aspect).is_none())
        });
        if (selected.is_empty() || starved) && !selected.contains(&Aspect::Concept) {
            tracing::trace!("Adding concept to labels as anchor");
            selected.insert(0, Aspect::Concept);
        }

        tracing::debug!(
            "Selected label aspects for {} facts: {:?}",
            n,
            selected.iter().map(|a| a.to_string()).collect::<Vec<_>>()
        );
        selected
    }
}

impl<'a> FromIterator<&'a Fact> for FactSet<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Fact>>(iter: I) -> Self {
        Self::new(iter)
    }
}

// ============================================================================
// Tests
// ============================================================================
