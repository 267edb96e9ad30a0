//! Full pairwise attention over a fixed id set.

use semrank_core::errors::SemrankResult;
use semrank_core::models::Document;
use semrank_core::validation;
use tracing::info;

use crate::aggregator::{resolve, AttentionAggregator};
use crate::hits::AttentionMatrix;

impl AttentionAggregator<'_> {
    /// Row-normalized softmax over exactly `ids` (duplicates collapsed).
    /// No pruning: every row sums to 1.
    pub fn attention_matrix(
        &self,
        ids: &[String],
        temperature: f64,
    ) -> SemrankResult<AttentionMatrix> {
        validation::require_positive_f64("temperature", temperature)?;

        let corpus = self.corpus()?;
        let members: Vec<&Document> = resolve(ids, &corpus)?
            .into_iter()
            .map(|i| &corpus[i])
            .collect();

        let weights = members
            .iter()
            .map(|row| self.attend(row, &members, temperature).map(|p| p.weights))
            .collect::<SemrankResult<Vec<_>>>()?;

        info!(size = members.len(), temperature, "attention matrix complete");
        Ok(AttentionMatrix {
            ids: members.iter().map(|d| d.id.clone()).collect(),
            weights,
        })
    }
}

#[cfg(test)]
mod tests {
    use semrank_core::config::AttentionConfig;
    use semrank_core::constants::SOFTMAX_TOLERANCE;
    use semrank_core::errors::SemrankError;
    use test_fixtures::{doc, planar, store_from};

    use crate::AttentionAggregator;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn rows_sum_to_one_over_the_given_ids_only() {
        let store = store_from(
            2,
            vec![
                doc("a", planar(0.0, 2), 0),
                doc("b", planar(50.0, 2), 1),
                doc("c", planar(100.0, 2), 2),
                doc("outsider", planar(5.0, 2), 3),
            ],
        );
        let agg = AttentionAggregator::new(store.as_ref(), 2, AttentionConfig::default());
        let m = agg.attention_matrix(&ids(&["c", "a", "b", "a"]), 0.5).unwrap();

        assert_eq!(m.ids, vec!["c", "a", "b"]);
        assert_eq!(m.len(), 3);
        for row in &m.weights {
            assert_eq!(row.len(), 3);
            assert!((row.iter().sum::<f64>() - 1.0).abs() < SOFTMAX_TOLERANCE);
        }
        // a is closer to b than to c.
        assert!(m.weight("a", "b").unwrap() > m.weight("a", "c").unwrap());
        assert!(m.row("outsider").is_none());
    }

    #[test]
    fn empty_id_list_is_an_empty_matrix() {
        let store = store_from(2, vec![doc("a", planar(0.0, 2), 0)]);
        let agg = AttentionAggregator::new(store.as_ref(), 2, AttentionConfig::default());
        assert!(agg.attention_matrix(&[], 1.0).unwrap().is_empty());
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = store_from(2, vec![doc("a", planar(0.0, 2), 0)]);
        let agg = AttentionAggregator::new(store.as_ref(), 2, AttentionConfig::default());
        let err = agg.attention_matrix(&ids(&["a", "b"]), 1.0).unwrap_err();
        assert!(matches!(err, SemrankError::NotFound { id } if id == "b"));
    }
}
