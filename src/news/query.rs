use rand::seq::SliceRandom;
use rand::Rng;

// Sustainability-related search terms
pub const TOPICS: [&str; 6] = [
    "carbon footprint",
    "sustainability",
    "renewable energy",
    "climate change",
    "green technology",
    "environmental impact",
];

const QUALIFIER: &str = "AND (science OR health OR Carbon OR Green Energy)";

pub fn compose_query(topic: &str) -> String {
    format!("{} {}", topic, QUALIFIER)
}

/// Picks one topic uniformly and wraps it in the fixed qualifier clause.
/// `None` only for an empty topic list.
pub fn pick_query<R: Rng + ?Sized>(topics: &[&str], rng: &mut R) -> Option<String> {
    topics.choose(rng).map(|topic| compose_query(topic))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn composes_fixed_template() {
        assert_eq!(
            compose_query("climate change"),
            "climate change AND (science OR health OR Carbon OR Green Energy)"
        );
    }

    #[test]
    fn always_picks_a_listed_topic() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let query = pick_query(&TOPICS, &mut rng).unwrap();
            let topic = query.strip_suffix(&format!(" {}", QUALIFIER)).unwrap();
            assert!(TOPICS.contains(&topic), "unexpected topic {:?}", topic);
            assert!(!topic.is_empty());
        }
    }

    #[test]
    fn every_topic_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<String> = (0..500)
            .filter_map(|_| pick_query(&TOPICS, &mut rng))
            .collect();
        assert_eq!(seen.len(), TOPICS.len());
    }

    #[test]
    fn single_topic_list_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            pick_query(&["solar"], &mut rng).as_deref(),
            Some("solar AND (science OR health OR Carbon OR Green Energy)")
        );
    }

    #[test]
    fn empty_topic_list_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_query(&[], &mut rng), None);
    }
}
