use super::*;
use rand::{rngs::StdRng, SeedableRng};
use shared::{domain::Sequence, error::ValidationError};

#[test]
fn parses_comma_separated_values_in_order() {
    let mut store = SequenceStore::new();
    let sequence = store.set_from_text("5, 10, 3").expect("valid input");
    assert_eq!(sequence, &Sequence::from(vec![5, 10, 3]));
}

#[test]
fn tolerates_whitespace_blank_tokens_and_plus_sign() {
    let mut store = SequenceStore::new();
    store.set_from_text("  7 ,, +8 ,\t100 , ").expect("valid input");
    assert_eq!(store.sequence().as_slice(), &[7, 8, 100]);
}

#[test]
fn out_of_range_value_is_rejected_and_store_kept() {
    let mut store = SequenceStore::new();
    store.set_from_text("1, 2").expect("seed");

    let err = store.set_from_text("5, 101, 3").expect_err("101 is too large");
    assert_eq!(err, ValidationError::Range { value: 101 });
    assert_eq!(store.sequence().as_slice(), &[1, 2]);
}

#[test]
fn zero_and_negatives_are_range_errors() {
    let mut store = SequenceStore::new();
    assert_eq!(
        store.set_from_text("0").expect_err("zero"),
        ValidationError::Range { value: 0 }
    );
    assert_eq!(
        store.set_from_text("4, -3").expect_err("negative"),
        ValidationError::Range { value: -3 }
    );
}

#[test]
fn non_numeric_token_is_parse_error() {
    let mut store = SequenceStore::new();
    let err = store.set_from_text("5, abc").expect_err("abc is not a number");
    assert_eq!(
        err,
        ValidationError::Parse {
            token: "abc".to_string()
        }
    );
    assert!(store.sequence().is_empty());
}

#[test]
fn first_offending_token_decides_error() {
    let mut store = SequenceStore::new();
    assert!(matches!(
        store.set_from_text("200, x"),
        Err(ValidationError::Range { value: 200 })
    ));
    assert!(matches!(
        store.set_from_text("x, 200"),
        Err(ValidationError::Parse { .. })
    ));
    assert!(matches!(
        store.set_from_text("99999999999999999999"),
        Err(ValidationError::Parse { .. })
    ));
}

#[test]
fn empty_and_blank_input_is_empty_error() {
    let mut store = SequenceStore::new();
    assert_eq!(store.set_from_text("").expect_err("empty"), ValidationError::Empty);
    assert_eq!(
        store.set_from_text(" , ,  ").expect_err("blank"),
        ValidationError::Empty
    );
}

#[test]
fn randomize_stays_within_length_and_value_bounds() {
    let mut store = SequenceStore::new();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut seen_lengths = std::collections::BTreeSet::new();

    for _ in 0..500 {
        let sequence = store.randomize(&mut rng);
        assert!((10..=15).contains(&sequence.len()), "len {}", sequence.len());
        assert!(sequence.as_slice().iter().all(|v| (5..=99).contains(v)));
        seen_lengths.insert(sequence.len());
    }

    assert_eq!(seen_lengths.len(), 6, "every length in 10..=15 should show up");
}

#[test]
fn randomized_text_reparses_to_same_sequence() {
    let mut store = SequenceStore::new();
    let mut rng = StdRng::seed_from_u64(7);
    let generated = store.randomize(&mut rng).clone();

    let mut other = SequenceStore::new();
    other
        .set_from_text(&generated.to_string())
        .expect("generated text is valid input");
    assert_eq!(other.sequence(), &generated);
}

#[test]
fn clear_empties_the_store() {
    let mut store = SequenceStore::new();
    store.set_from_text("3, 2, 1").expect("valid");
    store.clear();
    assert!(store.sequence().is_empty());
}
