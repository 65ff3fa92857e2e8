//! Random selection without replacement
//!
//! Both the board columns and the clues inside each column are drawn with
//! [`sample`]. The draw is a partial Fisher-Yates shuffle over positions, so
//! duplicate values in the pool are still treated as distinct elements.

use itertools::Itertools;

use crate::error::Error;

/// Picks `k` elements of `pool` uniformly at random without replacement
///
/// Uses the thread-local generator. The order of the returned elements
/// carries no meaning.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `k` exceeds the pool size.
///
/// # Examples
///
/// ```rust
/// let picked = jeopardy::sample::sample(&[1, 2, 3, 4], 2).unwrap();
/// assert_eq!(picked.len(), 2);
/// ```
pub fn sample<T: Clone>(pool: &[T], k: usize) -> Result<Vec<T>, Error> {
    let mut rng = fastrand::Rng::new();
    sample_with(&mut rng, pool, k)
}

/// Same as [`sample`] but draws from the supplied generator
///
/// A seeded generator makes the draw reproducible.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `k` exceeds the pool size.
pub fn sample_with<T: Clone>(
    rng: &mut fastrand::Rng,
    pool: &[T],
    k: usize,
) -> Result<Vec<T>, Error> {
    if k > pool.len() {
        return Err(Error::InvalidArgument(format!(
            "cannot sample {k} items from a pool of {}",
            pool.len()
        )));
    }

    let mut positions = (0..pool.len()).collect_vec();
    for i in 0..k {
        let j = rng.usize(i..positions.len());
        positions.swap(i, j);
    }

    Ok(positions
        .into_iter()
        .take(k)
        .map(|position| pool[position].clone())
        .collect_vec())
}
