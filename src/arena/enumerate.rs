use crate::graph::Vertex;

/// All `k`-subsets of `0..n`, each ascending, in lexicographic order.
pub fn subsets(n: usize, k: usize) -> Vec<Vec<Vertex>> {
    let free: Vec<Vertex> = (0..n as Vertex).collect();
    let mut out: Vec<Vec<Vertex>> = Vec::new();
    let mut chosen: Vec<Vertex> = Vec::with_capacity(k);
    choose_k(&free, k, 0, &mut chosen, &mut |c| out.push(c.to_vec()));
    out
}

/// Visit every `k`-subset of `free` (kept in `free`'s order).
pub fn choose_k(
    free: &[Vertex],
    k: usize,
    start: usize,
    chosen: &mut Vec<Vertex>,
    cb: &mut impl FnMut(&[Vertex]),
) {
    if chosen.len() == k {
        cb(chosen);
        return;
    }

    // Remaining needed
    let need = k - chosen.len();
    if free.len() < start + need {
        return;
    }

    for i in start..free.len() {
        chosen.push(free[i]);
        choose_k(free, k, i + 1, chosen, cb);
        chosen.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subsets_are_lexicographic() {
        assert_eq!(
            subsets(4, 2),
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }

    #[test]
    fn degenerate_sizes() {
        assert_eq!(subsets(3, 0), vec![Vec::<Vertex>::new()]);
        assert_eq!(subsets(3, 3), vec![vec![0, 1, 2]]);
        assert!(subsets(2, 3).is_empty());
    }
}
