//! Lexicographic k-subset enumeration over `0..n`

/// Iterator over every k-element subset of `0..n`
///
/// Subsets are yielded as ascending index vectors in lexicographic order,
/// so `[0, 1, 2]` comes before `[0, 1, 3]`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            exhausted: k > n,
        }
    }

    /// Advance `indices` to the next subset, returning false when done
    fn advance(&mut self) -> bool {
        let k = self.indices.len();
        let Some(pivot) = (0..k)
            .rev()
            .find(|&i| self.indices[i] != i + self.n - k)
        else {
            return false;
        };

        self.indices[pivot] += 1;
        for j in pivot + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        if !self.started {
            self.started = true;
        } else if !self.advance() {
            self.exhausted = true;
            return None;
        }

        Some(self.indices.clone())
    }
}

/// Binomial coefficient C(n, k)
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}
