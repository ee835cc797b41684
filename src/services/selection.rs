use rand::{
    seq::{IndexedRandom, SliceRandom},
    Rng,
};

/// Picks `min(count, items.len())` distinct items uniformly at random
///
/// Sampling is without replacement; the picked items are shuffled so their
/// order carries no information about their position in `items`.
pub fn select_random<T, R>(items: &[T], count: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut picked: Vec<T> = items.choose_multiple(rng, count).cloned().collect();
    picked.shuffle(rng);
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn test_selects_count_when_enough_items() {
        let items: Vec<u32> = (0..20).collect();
        let mut rng = StdRng::seed_from_u64(7);

        let picked = select_random(&items, 5, &mut rng);
        assert_eq!(picked.len(), 5);
    }

    #[test]
    fn test_selects_all_when_fewer_items() {
        let items = vec!["a", "b", "c"];
        let mut rng = StdRng::seed_from_u64(7);

        let picked = select_random(&items, 5, &mut rng);
        assert_eq!(picked.len(), 3);

        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique, items.iter().collect());
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<u32> = Vec::new();
        let mut rng = StdRng::seed_from_u64(7);

        assert!(select_random(&items, 5, &mut rng).is_empty());
    }

    #[test]
    fn test_no_duplicates_across_many_seeds() {
        let items: Vec<u32> = (0..8).collect();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = select_random(&items, 5, &mut rng);
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), picked.len(), "duplicate with seed {}", seed);
        }
    }

    #[test]
    fn test_same_seed_same_selection() {
        let items: Vec<u32> = (0..50).collect();

        let first = select_random(&items, 5, &mut StdRng::seed_from_u64(42));
        let second = select_random(&items, 5, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_item_reachable() {
        let items: Vec<u32> = (0..10).collect();
        let mut seen = HashSet::new();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..200 {
            seen.extend(select_random(&items, 1, &mut rng));
        }
        assert_eq!(seen.len(), items.len());
    }
}
