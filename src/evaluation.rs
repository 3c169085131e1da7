use rand::seq::SliceRandom;
use rand::Rng;

use crate::classifier::NaiveBayesClassifier;
use crate::error::Result;

/// Decision threshold for accuracy measurement: at or above counts as spam.
pub const DECISION_THRESHOLD: f64 = 50.0;

/// One labeled example; `is_spam` is the ground-truth class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledMessage {
    pub text: String,
    pub is_spam: bool,
}

impl LabeledMessage {
    pub fn new(text: impl Into<String>, is_spam: bool) -> Self {
        Self {
            text: text.into(),
            is_spam,
        }
    }
}

/// Shuffle `samples` and split them into (train, test) sets, keeping each
/// message paired with its label. `test_size` is the held-out fraction.
pub fn train_test_split<R: Rng>(
    mut samples: Vec<LabeledMessage>,
    test_size: f64,
    rng: &mut R,
) -> (Vec<LabeledMessage>, Vec<LabeledMessage>) {
    samples.shuffle(rng);
    let split_index = (samples.len() as f64 * (1.0 - test_size)).floor() as usize;
    let test = samples.split_off(split_index.min(samples.len()));
    (samples, test)
}

/// Accuracy (%) of the classifier's ≥50 decision rule over a held-out set.
///
/// An empty test set yields 0.0 rather than a division by zero.
pub fn evaluate(classifier: &NaiveBayesClassifier, test_set: &[LabeledMessage]) -> Result<f64> {
    if test_set.is_empty() {
        return Ok(0.0);
    }

    let mut correct = 0usize;
    for sample in test_set {
        let probability = classifier.score_spam_probability(&sample.text)?;
        let predicted_spam = probability >= DECISION_THRESHOLD;
        if predicted_spam == sample.is_spam {
            correct += 1;
        }
    }

    Ok(correct as f64 / test_set.len() as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn labeled_corpus() -> Vec<LabeledMessage> {
        vec![
            LabeledMessage::new("free money now", true),
            LabeledMessage::new("win cash prize", true),
            LabeledMessage::new("claim free prize money", true),
            LabeledMessage::new("cash win today free", true),
            LabeledMessage::new("meeting at noon", false),
            LabeledMessage::new("project update attached", false),
            LabeledMessage::new("lunch plans for noon", false),
            LabeledMessage::new("meeting notes and update", false),
        ]
    }

    #[test]
    fn test_split_preserves_pairing_and_size() {
        let corpus = labeled_corpus();
        let mut rng = StdRng::seed_from_u64(7);
        let (train, test) = train_test_split(corpus.clone(), 0.25, &mut rng);

        assert_eq!(train.len(), 6);
        assert_eq!(test.len(), 2);

        // Every sample survives the shuffle with its label intact
        let mut recombined: Vec<LabeledMessage> =
            train.into_iter().chain(test.into_iter()).collect();
        recombined.sort_by(|a, b| a.text.cmp(&b.text));
        let mut original = corpus;
        original.sort_by(|a, b| a.text.cmp(&b.text));
        assert_eq!(recombined, original);
    }

    #[test]
    fn test_separable_corpus_evaluates_perfectly() {
        let corpus = labeled_corpus();
        let spam: Vec<String> = corpus
            .iter()
            .filter(|s| s.is_spam)
            .map(|s| s.text.clone())
            .collect();
        let ham: Vec<String> = corpus
            .iter()
            .filter(|s| !s.is_spam)
            .map(|s| s.text.clone())
            .collect();

        let mut classifier = NaiveBayesClassifier::new();
        classifier.train(&spam, &ham);

        // Disjoint vocabularies: the model must label its own corpus perfectly
        let accuracy = evaluate(&classifier, &corpus).unwrap();
        assert_eq!(accuracy, 100.0);
    }

    #[test]
    fn test_empty_test_set_is_zero_not_nan() {
        let mut classifier = NaiveBayesClassifier::new();
        classifier.train(
            &["free money".to_string()],
            &["team meeting".to_string()],
        );
        assert_eq!(evaluate(&classifier, &[]).unwrap(), 0.0);
    }

    #[test]
    fn test_evaluation_propagates_classifier_errors() {
        let classifier = NaiveBayesClassifier::new();
        let test_set = vec![LabeledMessage::new("anything", true)];
        assert!(evaluate(&classifier, &test_set).is_err());
    }
}
