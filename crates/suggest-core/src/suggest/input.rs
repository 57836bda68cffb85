use crate::unicode::encode;

/// Typed keystrokes, each with its candidate codes ordered closest key first.
///
/// Stored flat with a fixed stride of `max_alternatives`; unused slots are 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputCodes {
    codes: Vec<u16>,
    max_alternatives: usize,
}

impl InputCodes {
    pub fn new(max_alternatives: usize) -> Self {
        Self {
            codes: Vec::new(),
            max_alternatives: max_alternatives.max(1),
        }
    }

    /// One position per UTF-16 code unit of `typed`, no alternatives.
    pub fn from_typed(typed: &str, max_alternatives: usize) -> Self {
        let mut input = Self::new(max_alternatives);
        for code in encode(typed) {
            input.push(&[code]);
        }
        input
    }

    /// Adopt a flat code array as produced by a keyboard layer:
    /// `codes_size` positions of `max_alternatives` slots each. Slots outside
    /// the 16-bit range count as unused.
    pub fn from_flat(codes: &[i32], codes_size: usize, max_alternatives: usize) -> Self {
        let mut input = Self::new(max_alternatives);
        let stride = input.max_alternatives;
        for chunk in codes.chunks(stride).take(codes_size) {
            let alternatives: Vec<u16> = chunk
                .iter()
                .map(|&c| u16::try_from(c).unwrap_or(0))
                .collect();
            input.push(&alternatives);
        }
        input
    }

    /// Append a position. Extra alternatives beyond the stride are dropped.
    pub fn push(&mut self, alternatives: &[u16]) {
        let start = self.codes.len();
        self.codes.resize(start + self.max_alternatives, 0);
        for (slot, &code) in self.codes[start..].iter_mut().zip(alternatives) {
            *slot = code;
        }
    }

    pub fn len(&self) -> usize {
        self.codes.len() / self.max_alternatives
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn max_alternatives(&self) -> usize {
        self.max_alternatives
    }

    /// Alternatives at `index`, up to the first unused slot.
    pub fn alternatives(&self, index: usize) -> &[u16] {
        let start = index * self.max_alternatives;
        let Some(slots) = self.codes.get(start..start + self.max_alternatives) else {
            return &[];
        };
        let used = slots.iter().position(|&c| c == 0).unwrap_or(slots.len());
        &slots[..used]
    }

    /// The closest key at `index`, 0 when the position is empty.
    pub fn primary(&self, index: usize) -> u16 {
        self.alternatives(index).first().copied().unwrap_or(0)
    }

    /// Whether `word` is the primary codes, code for code.
    pub fn is_typed(&self, word: &[u16]) -> bool {
        word.len() == self.len() && word.iter().enumerate().all(|(i, &c)| self.primary(i) == c)
    }
}
