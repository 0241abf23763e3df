use core::cmp::Ordering;

/// Returns the most frequent element of `values`.
///
/// When several elements share the highest count, the smallest of them wins.
/// Returns [`None`] for an empty slice.
pub fn most_frequent<T: Ord + Clone>(values: &[T]) -> Option<T> {
    most_frequent_with_count(values).map(|(value, _)| value)
}

/// Returns the most frequent element of `values` together with its number of occurrences.
///
/// When several elements share the highest count, the smallest of them wins.
/// Returns [`None`] for an empty slice.
pub fn most_frequent_with_count<T: Ord + Clone>(values: &[T]) -> Option<(T, usize)> {
    most_frequent_by(values, Ord::cmp)
}

/// Returns the most frequent `f64` and its number of occurrences.
///
/// # Remarks
///
/// `-0.0` and `0.0` are counted as one value and reported as `0.0`. Every NaN is
/// counted as one value, ordered after all numbers.
pub fn most_frequent_f64(values: &[f64]) -> Option<(f64, usize)> {
    most_frequent_by(values, |a, b| canonical_f64(*a).total_cmp(&canonical_f64(*b)))
        .map(|(value, count)| (canonical_f64(value), count))
}

/// Collapses the representations [`f64::total_cmp`] would otherwise tell apart.
fn canonical_f64(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else if value.is_nan() {
        f64::NAN
    } else {
        value
    }
}

/// Returns the most frequent element under a caller-supplied total order.
///
/// Elements comparing [`Ordering::Equal`] are counted as the same value. Ties on
/// the highest count go to the value that sorts first.
///
/// # Arguments
///
/// * `values` - Input elements, in any order.
/// * `compare` - Total order used to sort and group the elements.
pub fn most_frequent_by<T, F>(values: &[T], mut compare: F) -> Option<(T, usize)>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted: Vec<&T> = values.iter().collect();
    sorted.sort_by(|a, b| compare(*a, *b));

    let mut best: Option<(&T, usize)> = None;
    let mut run_start = 0;
    for index in 1..=sorted.len() {
        let run_ended =
            index == sorted.len() || compare(sorted[run_start], sorted[index]) != Ordering::Equal;
        if !run_ended {
            continue;
        }

        let count = index - run_start;
        // Strictly greater keeps the earliest (smallest) value on ties.
        let improves = match best {
            Some((_, best_count)) => count > best_count,
            None => true,
        };
        if improves {
            best = Some((sorted[run_start], count));
        }
        run_start = index;
    }

    best.map(|(value, count)| (value.clone(), count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::clear_winner(vec![1, 2, 2, 3, 3, 3], 3, 3)]
    #[case::tie_goes_to_smallest(vec![1, 1, 2, 2], 1, 2)]
    #[case::unsorted_tie(vec![9, 4, 9, 4, 7], 4, 2)]
    #[case::single(vec![42], 42, 1)]
    #[case::all_distinct(vec![5, 3, 8], 3, 1)]
    fn finds_mode(#[case] values: Vec<i32>, #[case] value: i32, #[case] count: usize) {
        assert_eq!(most_frequent(&values), Some(value));
        assert_eq!(most_frequent_with_count(&values), Some((value, count)));
    }

    #[test]
    fn empty_input_has_no_mode() {
        let values: [u32; 0] = [];
        assert_eq!(most_frequent(&values), None);
        assert_eq!(most_frequent_with_count(&values), None);
    }

    #[test]
    fn works_on_filter_labels() {
        let filters = ["r", "g", "r", "i", "g", "r"];
        assert_eq!(most_frequent_with_count(&filters), Some(("r", 3)));
    }

    #[test]
    fn float_mode_uses_total_order() {
        let mags = [17.5, 17.25, 17.5, 18.0, 17.25];
        assert_eq!(most_frequent_f64(&mags), Some((17.25, 2)));
    }

    #[rstest]
    #[case::signed_zeros(&[-0.0, 1.0, 0.0, 1.0, -0.0], 0.0, 3)]
    #[case::nan_payloads(&[f64::NAN, -f64::NAN, 2.0], f64::NAN, 2)]
    fn float_mode_merges_equivalent_encodings(
        #[case] values: &[f64],
        #[case] value: f64,
        #[case] count: usize,
    ) {
        let (mode, mode_count) = most_frequent_f64(values).unwrap();
        assert_eq!(mode.to_bits(), value.to_bits());
        assert_eq!(mode_count, count);
    }

    #[test]
    fn custom_order_controls_grouping_and_ties() {
        // Case-insensitive comparison groups "G" with "g".
        let labels = ["G", "r", "g", "R", "i"];
        let mode = most_frequent_by(&labels, |a, b| {
            a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase())
        });
        // Stable sort keeps the first spelling seen.
        assert_eq!(mode, Some(("G", 2)));
    }
}
