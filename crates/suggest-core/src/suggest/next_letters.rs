/// Counts of the letters that continue the typed prefix, indexed by raw
/// code. Codes at or beyond the capacity are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextLetters {
    counts: Vec<u32>,
}

impl NextLetters {
    pub fn new(size: usize) -> Self {
        Self {
            counts: vec![0; size],
        }
    }

    pub fn register(&mut self, code: u16) {
        if let Some(count) = self.counts.get_mut(code as usize) {
            *count = count.saturating_add(1);
        }
    }

    pub fn get(&self, code: u16) -> u32 {
        self.counts.get(code as usize).copied().unwrap_or(0)
    }

    pub fn capacity(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.counts
    }

    /// Non-zero `(code, count)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(code, &c)| (code as u16, c))
    }

    /// Letters ordered by descending count, ties by code.
    pub fn ranked(&self) -> Vec<(char, u32)> {
        let mut letters: Vec<(char, u32)> = self
            .iter()
            .filter_map(|(code, count)| Some((char::from_u32(code as u32)?, count)))
            .collect();
        letters.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        letters
    }

    /// Copy counts into a caller-owned array, truncating to the shorter one.
    pub fn write_to(&self, out: &mut [i32]) {
        for (slot, &count) in out.iter_mut().zip(&self.counts) {
            *slot = i32::try_from(count).unwrap_or(i32::MAX);
        }
    }
}
