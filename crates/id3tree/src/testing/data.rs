use rand::prelude::*;

use crate::data::Dataset;

/// Shape of a random categorical dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomSpec {
    pub rows: usize,
    pub attributes: usize,
    /// Distinct values per attribute.
    pub values: usize,
    /// Distinct outcome labels.
    pub outcomes: usize,
}

impl RandomSpec {
    pub fn new(rows: usize, attributes: usize, values: usize, outcomes: usize) -> Self {
        Self {
            rows,
            attributes,
            values,
            outcomes,
        }
    }
}

fn headers(attributes: usize) -> Vec<String> {
    (0..attributes)
        .map(|a| format!("A{a}"))
        .chain(std::iter::once("Class".to_string()))
        .collect()
}

/// Generate a dataset of uniformly drawn categorical values.
///
/// Attribute `a` takes values `a<a>v<k>` and the outcome `c<k>`, so values of
/// different attributes never collide.
pub fn random_categorical(spec: RandomSpec, seed: u64) -> Dataset {
    assert!(spec.rows > 0 && spec.attributes > 0);
    assert!(spec.values > 0 && spec.outcomes > 0);
    let mut rng = StdRng::seed_from_u64(seed);

    let rows: Vec<Vec<String>> = (0..spec.rows)
        .map(|_| {
            let mut row: Vec<String> = (0..spec.attributes)
                .map(|a| format!("a{a}v{}", rng.gen_range(0..spec.values)))
                .collect();
            row.push(format!("c{}", rng.gen_range(0..spec.outcomes)));
            row
        })
        .collect();

    Dataset::new(headers(spec.attributes), rows).expect("generated rows are rectangular")
}

/// Random features, every row labelled `label`.
pub fn single_outcome(rows: usize, attributes: usize, values: usize, label: &str, seed: u64) -> Dataset {
    assert!(rows > 0 && attributes > 0 && values > 0);
    let mut rng = StdRng::seed_from_u64(seed);

    let rows: Vec<Vec<String>> = (0..rows)
        .map(|_| {
            let mut row: Vec<String> = (0..attributes)
                .map(|a| format!("a{a}v{}", rng.gen_range(0..values)))
                .collect();
            row.push(label.to_string());
            row
        })
        .collect();

    Dataset::new(headers(attributes), rows).expect("generated rows are rectangular")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_dataset() {
        let spec = RandomSpec::new(20, 3, 4, 2);
        let a = random_categorical(spec, 7);
        let b = random_categorical(spec, 7);
        assert_eq!(a.records(), b.records());
        assert_eq!(a.n_rows(), 20);
        assert_eq!(a.n_attributes(), 3);
        assert_eq!(a.outcome_name(), "Class");
    }

    #[test]
    fn single_outcome_has_one_label() {
        let ds = single_outcome(10, 2, 3, "Yes", 1);
        assert_eq!(ds.outcomes(), vec!["Yes"]);
    }
}
