use std::cmp::Ordering;

/// Descending order on `f64` with NaN placed after every number.
///
/// `+inf` compares greater than any finite value, so it ranks first.
pub fn descending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

/// Stable descending sort by `key`, truncated to the first `n` items.
///
/// Equal keys keep their input order.
pub fn top_n_by<'a, T, F>(items: impl IntoIterator<Item = &'a T>, n: usize, key: F) -> Vec<&'a T>
where
    T: 'a,
    F: Fn(&T) -> f64,
{
    let mut sorted: Vec<&T> = items.into_iter().collect();
    sorted.sort_by(|a, b| descending_nan_last(key(*a), key(*b)));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_order() {
        let values = [1.0, f64::NAN, 3.0, f64::INFINITY, 2.0];
        let top = top_n_by(values.iter(), 5, |v| *v);
        assert_eq!(*top[0], f64::INFINITY);
        assert_eq!(*top[1], 3.0);
        assert_eq!(*top[2], 2.0);
        assert_eq!(*top[3], 1.0);
        assert!(top[4].is_nan());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = [("a", 5.0), ("b", 7.0), ("c", 5.0), ("d", 5.0)];
        let top = top_n_by(items.iter(), 4, |item| item.1);
        let names: Vec<&str> = top.iter().map(|item| item.0).collect();
        assert_eq!(names, vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_truncation() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(top_n_by(values.iter(), 2, |v| *v).len(), 2);
        assert_eq!(top_n_by(values.iter(), 10, |v| *v).len(), 3);
        assert!(top_n_by(values.iter(), 0, |v| *v).is_empty());
    }
}
