//! Conditional parallel iteration.
//!
//! Uses rayon when the `parallel` feature is enabled and the configuration
//! allows it for the collection size.

use crate::config::MeasuresConfig;

/// Filters and maps items, conditionally using parallel iteration.
///
/// Output order always matches input order.
#[allow(unused_variables)]
pub fn maybe_parallel_filter_map<T, U, F>(items: &[T], config: &MeasuresConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> Option<U> + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items.par_iter().filter_map(f).collect();
        }
    }

    items.iter().filter_map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maybe_parallel_filter_map() {
        let config = MeasuresConfig::sequential();
        let items = vec![1, 2, 3, 4, 5];
        let results: Vec<i32> =
            maybe_parallel_filter_map(&items, &config, |x| if *x > 2 { Some(x * 2) } else { None });
        assert_eq!(results, vec![6, 8, 10]);
    }

    #[test]
    fn test_order_preserved_above_threshold() {
        let config = MeasuresConfig::new().with_threshold(1);
        let items: Vec<usize> = (0..64).collect();
        let results = maybe_parallel_filter_map(&items, &config, |x| Some(*x));
        assert_eq!(results, items);
    }
}
