//! Generic in-place sorting over index-based sequences
//!
//! The routines here only talk to a sequence through `len`, `less` and
//! `swap`, so any comparison that is a strict weak ordering can drive them.

/// A sequence that can be sorted in place by index
pub trait SortableSequence {
    /// Number of elements
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True iff element `i` must sort strictly before element `j`
    ///
    /// Panics if either index is out of range.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchange elements `i` and `j`
    ///
    /// Panics if either index is out of range.
    fn swap(&mut self, i: usize, j: usize);
}

/// Unstable heap sort. O(n log n) comparisons and swaps.
pub fn heap_sort<S: SortableSequence + ?Sized>(seq: &mut S) {
    let len = seq.len();
    for root in (0..len / 2).rev() {
        sift_down(seq, root, len);
    }
    for end in (1..len).rev() {
        seq.swap(0, end);
        sift_down(seq, 0, end);
    }
}

fn sift_down<S: SortableSequence + ?Sized>(seq: &mut S, mut root: usize, end: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return;
        }
        if child + 1 < end && seq.less(child, child + 1) {
            child += 1;
        }
        if !seq.less(root, child) {
            return;
        }
        seq.swap(root, child);
        root = child;
    }
}

/// Stable insertion sort. Quadratic, fine for short tag lists.
pub fn insertion_sort<S: SortableSequence + ?Sized>(seq: &mut S) {
    for i in 1..seq.len() {
        let mut j = i;
        while j > 0 && seq.less(j, j - 1) {
            seq.swap(j, j - 1);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Sorts by key only, so equal keys expose stability
    struct Keyed(Vec<(u32, char)>);

    impl SortableSequence for Keyed {
        fn len(&self) -> usize {
            self.0.len()
        }

        fn less(&self, i: usize, j: usize) -> bool {
            self.0[i].0 < self.0[j].0
        }

        fn swap(&mut self, i: usize, j: usize) {
            self.0.swap(i, j);
        }
    }

    fn keys(seq: &Keyed) -> Vec<u32> {
        seq.0.iter().map(|(k, _)| *k).collect()
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![1])]
    #[case(vec![2, 1])]
    #[case(vec![5, 3, 9, 1, 1, 7, 0, 2])]
    #[case(vec![1, 2, 3, 4, 5])]
    #[case(vec![5, 4, 3, 2, 1])]
    fn heap_sort_orders_keys(#[case] input: Vec<u32>) {
        let mut seq = Keyed(input.iter().map(|k| (*k, 'x')).collect());
        heap_sort(&mut seq);

        let mut expected = input;
        expected.sort();
        assert_eq!(keys(&seq), expected);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![3, 1, 2])]
    #[case(vec![5, 3, 9, 1, 1, 7, 0, 2])]
    fn insertion_sort_orders_keys(#[case] input: Vec<u32>) {
        let mut seq = Keyed(input.iter().map(|k| (*k, 'x')).collect());
        insertion_sort(&mut seq);

        let mut expected = input;
        expected.sort();
        assert_eq!(keys(&seq), expected);
    }

    #[test]
    fn insertion_sort_is_stable() {
        let mut seq = Keyed(vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
        insertion_sort(&mut seq);

        assert_eq!(seq.0, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn is_empty_defaults_to_len() {
        assert!(Keyed(vec![]).is_empty());
        assert!(!Keyed(vec![(0, 'a')]).is_empty());
    }
}
