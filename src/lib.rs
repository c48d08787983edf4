// ============================================================================
// iXBRL Fact Set Library
// Minimally unique labels and rounding consistency over groups of facts
// ============================================================================

//! # iXBRL Fact Set
//!
//! Query layer over groups of tagged facts from an inline XBRL report.
//!
//! ## Features
//!
//! - **Minimally unique labels**: pick the fewest aspects (concept, period,
//!   unit, dimensions) that tell the facts of a group apart, and caption
//!   each fact with them
//! - **Numeric consistency**: decide whether differently-rounded values can
//!   all be the same number, using exact decimal intervals
//! - **Pluggable label lookup** through the [`LabelResolver`](interfaces::LabelResolver) trait
//! - **Report loading** from the viewer's JSON payload (`serde` feature)
//!
//! ## Example
//!
//! ```rust
//! use ixbrl_factset::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let labels = LabelDictionary::new()
//!     .with_label("eg:Revenue".parse().unwrap(), LabelRole::Standard, "en", "Revenue");
//! let labeller = AspectLabeller::with_defaults(&labels);
//!
//! let fact = |id: &str, period: &str, value: i64, decimals: i32| {
//!     Fact::builder(id)
//!         .aspect("c", "eg:Revenue").unwrap()
//!         .aspect("p", period).unwrap()
//!         .aspect("u", "iso4217:GBP").unwrap()
//!         .value(Decimal::from(value))
//!         .decimals(Decimals::Finite(decimals))
//!         .build()
//!         .unwrap()
//! };
//!
//! let f1 = fact("f1", "2019-01-01", 150, -1);
//! let f2 = fact("f2", "2020-01-01", 140, -1);
//!
//! let set = FactSet::new([&f1, &f2]);
//! assert_eq!(set.minimally_unique_label(&f1, &labeller), "31 Dec 2018");
//!
//! // 145..155 and 135..145 meet at exactly 145
//! let range = set.value_intersection().unwrap().unwrap();
//! assert_eq!(range.a, Decimal::from(145));
//! assert!(set.is_consistent().unwrap());
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

#[cfg(feature = "serde")]
pub mod report;

#[cfg(feature = "logging")]
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Aspect, AspectValue, DimensionValue, Fact, FactBuilder, FactError, FactId, LabelConfig,
        Period, QName, Unit,
    };
    pub use crate::engine::{AspectLabeller, FactSet, FactSetError};
    pub use crate::interfaces::{FactSource, LabelDictionary, LabelResolver, LabelRole, NoLabels};
    pub use crate::numeric::{Decimals, ValueInterval};

    #[cfg(feature = "serde")]
    pub use crate::report::ReportData;
}

#[cfg(all(test, feature = "serde"))]
mod integration_tests {
    use super::prelude::*;
    use rust_decimal::Decimal;

    const REPORT: &str = r#"{
        "prefixes": { "eg": "http://www.example.com" },
        "concepts": {
            "eg:Concept1": { "labels": { "std": { "en": "Concept 1" } } },
            "eg:Concept2": { "labels": { "std": { "en": "Concept 2" } } },
            "eg:Concept4": { "labels": {} },
            "eg:DimensionValue1": { "labels": { "std": { "en": "Dimension Value 1" } } }
        },
        "facts": {
            "f1": { "a": { "c": "eg:Concept1", "p": "2018-01-01" } },
            "f2": { "a": { "c": "eg:Concept2", "p": "2018-01-01" } },
            "f3": { "a": { "c": "eg:Concept2", "p": "2019-01-01" } },
            "f4": { "a": { "c": "eg:Concept1", "p": "2018-01-01", "eg:Dimension1": "eg:DimensionValue1" } },
            "f5": { "a": { "c": "eg:Concept1", "p": "2018-01-01", "eg:Dimension1": "eg:DimensionValue1" } },
            "f6": { "a": { "c": "eg:Concept4", "p": "2018-01-01" } },
            "n1": { "d": -1, "v": 150, "a": { "c": "eg:Concept1", "u": "eg:pure" } },
            "n2": { "d": -2, "v": 200, "a": { "c": "eg:Concept1", "u": "eg:pure" } },
            "n3": { "d": -1, "v": 140, "a": { "c": "eg:Concept1", "u": "eg:pure" } }
        }
    }"#;

    struct Fixture {
        report: ReportData,
        labels: LabelDictionary,
    }

    impl Fixture {
        fn new() -> Self {
            let report = ReportData::from_json(REPORT).unwrap();
            let labels = report.label_dictionary().unwrap();
            Self { report, labels }
        }

        fn fact(&self, id: &str) -> Fact {
            self.report.fact(&FactId::from(id)).unwrap()
        }

        fn labels_for(&self, ids: &[&str]) -> Vec<String> {
            let facts: Vec<Fact> = ids.iter().map(|id| self.fact(id)).collect();
            let labeller = AspectLabeller::with_defaults(&self.labels);
            FactSet::new(&facts).minimally_unique_labels(&labeller)
        }
    }

    #[test]
    fn test_end_to_end_labels() {
        let fx = Fixture::new();

        assert_eq!(fx.labels_for(&["f1", "f2"]), vec!["Concept 1", "Concept 2"]);
        assert_eq!(fx.labels_for(&["f2", "f3"]), vec!["31 Dec 2017", "31 Dec 2018"]);
        assert_eq!(
            fx.labels_for(&["f1", "f2", "f3"]),
            vec![
                "Concept 1, 31 Dec 2017",
                "Concept 2, 31 Dec 2017",
                "Concept 2, 31 Dec 2018"
            ]
        );
        assert_eq!(fx.labels_for(&["f4", "f5"]), vec!["Concept 1", "Concept 1"]);
        assert_eq!(fx.labels_for(&["f1", "f6"]), vec!["Concept 1", "eg:Concept4"]);
        assert_eq!(
            fx.labels_for(&["f4", "f1"]),
            vec!["Concept 1, Dimension Value 1", "Concept 1"]
        );
    }

    #[test]
    fn test_end_to_end_consistency() {
        let fx = Fixture::new();
        let (n1, n2, n3) = (fx.fact("n1"), fx.fact("n2"), fx.fact("n3"));

        let set = FactSet::new([&n1, &n3]);
        assert_eq!(
            set.value_intersection().unwrap(),
            Some(ValueInterval::point(Decimal::from(145)))
        );
        assert!(set.is_consistent().unwrap());

        let set = FactSet::new([&n1, &n2, &n3]);
        assert_eq!(set.value_intersection().unwrap(), None);
        assert!(!set.is_consistent().unwrap());

        // Numeric facts sharing concept and unit get a concept-only label
        let labeller = AspectLabeller::with_defaults(&fx.labels);
        assert_eq!(
            set.minimally_unique_labels(&labeller),
            vec!["Concept 1", "Concept 1", "Concept 1"]
        );
    }

    #[test]
    fn test_mixed_set_consistency_is_rejected() {
        let fx = Fixture::new();
        let (n1, f1) = (fx.fact("n1"), fx.fact("f1"));
        let set = FactSet::new([&n1, &f1]);
        assert_eq!(
            set.is_consistent(),
            Err(FactSetError::NonNumericFact {
                id: FactId::from("f1")
            })
        );
    }
}

#[cfg(test)]
mod property_tests {
    use super::prelude::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::collections::BTreeSet;

    const CONCEPTS: [&str; 3] = ["eg:Concept1", "eg:Concept2", "eg:Concept3"];
    const PERIODS: [&str; 3] = ["2018-01-01", "2019-01-01", "2018-01-01/2019-01-01"];
    const DIMENSIONS: [&str; 2] = ["eg:Dimension2", "eg:Dimension1"];
    const MEMBERS: [&str; 2] = ["eg:Member1", "eg:Member2"];

    /// (concept, period, member of each dimension)
    type Shape = (usize, Option<usize>, Option<usize>, Option<usize>);

    fn arb_shape() -> impl Strategy<Value = Shape> {
        (
            0..CONCEPTS.len(),
            prop::option::of(0..PERIODS.len()),
            prop::option::of(0..MEMBERS.len()),
            prop::option::of(0..MEMBERS.len()),
        )
    }

    fn build(i: usize, shape: &Shape) -> Fact {
        let (concept, period, d0, d1) = *shape;
        let mut b = Fact::builder(format!("f{}", i))
            .aspect("c", CONCEPTS[concept])
            .unwrap();
        if let Some(p) = period {
            b = b.aspect("p", PERIODS[p]).unwrap();
        }
        for (dim, member) in DIMENSIONS.iter().zip([d0, d1]) {
            if let Some(m) = member {
                b = b.aspect(dim, MEMBERS[m]).unwrap();
            }
        }
        b.build().unwrap()
    }

    fn build_all(shapes: &[Shape]) -> Vec<Fact> {
        shapes.iter().enumerate().map(|(i, s)| build(i, s)).collect()
    }

    fn numeric(i: usize, value: i64, decimals: i32) -> Fact {
        Fact::builder(format!("n{}", i))
            .aspect("c", "eg:Concept1")
            .unwrap()
            .value(Decimal::from(value))
            .decimals(Decimals::Finite(decimals))
            .build()
            .unwrap()
    }

    fn pairs(facts: &[Fact]) -> Vec<(&Fact, &Fact)> {
        facts
            .iter()
            .enumerate()
            .flat_map(|(i, x)| facts[i + 1..].iter().map(move |y| (x, y)))
            .collect()
    }

    fn differ(pair: (&Fact, &Fact), aspect: &Aspect) -> bool {
        pair.0.aspect_value(aspect) != pair.1.aspect_value(aspect)
    }

    proptest! {
        #[test]
        fn labels_are_never_empty(shapes in prop::collection::vec(arb_shape(), 0..7)) {
            let facts = build_all(&shapes);
            let set = FactSet::new(&facts);
            let labeller = AspectLabeller::with_defaults(&NoLabels);
            for label in set.minimally_unique_labels(&labeller) {
                prop_assert!(!label.is_empty());
            }
        }

        #[test]
        fn distinct_concepts_select_only_concept(
            shapes in prop::collection::vec(arb_shape(), 1..=3)
        ) {
            let shapes: Vec<Shape> = shapes
                .into_iter()
                .enumerate()
                .map(|(i, (_, p, d0, d1))| (i, p, d0, d1))
                .collect();
            let facts = build_all(&shapes);
            let set = FactSet::new(&facts);
            if facts.len() > 1 {
                prop_assert_eq!(set.selected_aspects(), &[Aspect::Concept]);
            }
        }

        #[test]
        fn all_dimensions_is_union_in_qname_order(
            shapes in prop::collection::vec(arb_shape(), 0..7)
        ) {
            let facts = build_all(&shapes);
            let expected: BTreeSet<Aspect> = facts
                .iter()
                .flat_map(|f| f.aspects())
                .filter(Aspect::is_dimension)
                .collect();

            let forward = FactSet::new(&facts).all_dimensions();
            let backward = FactSet::new(facts.iter().rev()).all_dimensions();
            prop_assert_eq!(&forward, &expected.into_iter().collect::<Vec<_>>());
            prop_assert_eq!(&forward, &backward);
            prop_assert!(forward.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn selected_aspects_follow_priority_order(
            shapes in prop::collection::vec(arb_shape(), 0..7)
        ) {
            let facts = build_all(&shapes);
            let set = FactSet::new(&facts);
            let selected = set.selected_aspects();
            prop_assert!(!selected.is_empty());
            prop_assert!(selected.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn every_selected_aspect_separates_a_new_pair(
            shapes in prop::collection::vec(arb_shape(), 0..7)
        ) {
            let facts = build_all(&shapes);
            let pairs = pairs(&facts);
            let set = FactSet::new(&facts);
            let selected = set.selected_aspects();

            // Each aspect splits a pair its higher-priority predecessors
            // leave together; only a leading concept anchor may not
            for (k, aspect) in selected.iter().enumerate() {
                let earlier = &selected[..k];
                let separates = pairs.iter().any(|&pair| {
                    differ(pair, aspect) && !earlier.iter().any(|e| differ(pair, e))
                });
                prop_assert!(separates || (k == 0 && *aspect == Aspect::Concept));
            }

            // Nothing stays ambiguous that some aspect could separate
            let present: BTreeSet<Aspect> = facts.iter().flat_map(|f| f.aspects()).collect();
            for &pair in &pairs {
                if present.iter().any(|a| differ(pair, a)) {
                    prop_assert!(selected.iter().any(|a| differ(pair, a)));
                }
            }
        }

        #[test]
        fn intersection_ignores_order(
            (values, shuffled) in prop::collection::vec((-2000i64..2000, -3i32..3), 1..6)
                .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
        ) {
            let facts: Vec<Fact> = values
                .iter()
                .enumerate()
                .map(|(i, &(v, d))| numeric(i, v, d))
                .collect();
            let reordered: Vec<Fact> = shuffled
                .iter()
                .enumerate()
                .map(|(i, &(v, d))| numeric(i, v, d))
                .collect();

            let set = FactSet::new(&facts);
            let intersection = set.value_intersection().unwrap();
            prop_assert_eq!(intersection, FactSet::new(&reordered).value_intersection().unwrap());
            prop_assert_eq!(intersection.is_some(), set.is_consistent().unwrap());

            let intervals = set.value_intervals().unwrap();
            let lower = intervals.iter().map(|i| i.a).max().unwrap();
            let upper = intervals.iter().map(|i| i.b).min().unwrap();
            prop_assert_eq!(intersection.is_some(), lower <= upper);
        }
    }
}
