use super::cursor::ByteCursor;
use super::header::{ADDRESS_MASK, HEADER_SIZE};
use super::DictError;

/// Escape byte: a 16-bit big-endian code follows.
pub(super) const CHAR_ESCAPE: u8 = 0xFF;
pub(super) const FLAG_TERMINAL: u8 = 0x80;
pub(super) const FLAG_ADDRESS: u8 = 0x40;

/// Set on the first byte of every bigram entry; its presence right after a
/// terminal's frequency byte means a chain follows.
pub(super) const BIGRAM_ENTRY: u8 = 0x80;
pub(super) const BIGRAM_CHILDREN: u8 = 0x40;
pub(super) const BIGRAM_CONTINUED: u8 = 0x80;
pub(super) const BIGRAM_FREQ_MASK: u8 = 0x7F;
pub(super) const BIGRAM_ENTRY_SIZE: usize = 4;

/// Where a node's children live.
///
/// The wire format spends three address bytes only on nodes that have a
/// child group; every other node carries a single flags byte and decoding
/// continues with the next sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildLink {
    Leaf,
    At(usize),
}

/// One decoded trie node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Offset of the node's first byte; bigram entries refer to nodes by it.
    pub offset: usize,
    /// Stored code unit, original case.
    pub code: u16,
    pub terminal: bool,
    /// 0 for non-terminal nodes.
    pub frequency: u8,
    pub children: ChildLink,
    /// Offset of the first bigram entry, when the node carries a chain.
    pub bigrams: Option<usize>,
}

impl Node {
    pub fn child_group(&self) -> Option<usize> {
        match self.children {
            ChildLink::Leaf => None,
            ChildLink::At(address) => Some(address),
        }
    }

    /// Decode the node at the cursor and leave the cursor on the next sibling.
    pub fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DictError> {
        let offset = cursor.position();

        let mut code = cursor.read_u8()? as u16;
        if code == CHAR_ESCAPE as u16 {
            code = cursor.read_u16_be()?;
        }

        let flags = cursor.peek()?;
        let terminal = flags & FLAG_TERMINAL != 0;
        let children = if flags & FLAG_ADDRESS != 0 {
            let address = cursor.read_u24_be(ADDRESS_MASK)?;
            if address < HEADER_SIZE || address >= cursor.len() {
                return Err(DictError::BadAddress {
                    node: offset,
                    address,
                });
            }
            ChildLink::At(address)
        } else {
            cursor.skip(1)?;
            ChildLink::Leaf
        };

        let mut frequency = 0;
        let mut bigrams = None;
        if terminal {
            frequency = cursor.read_u8()?;
            if cursor.peek()? & BIGRAM_ENTRY != 0 {
                bigrams = Some(cursor.position());
                skip_bigram_chain(cursor)?;
            } else {
                cursor.skip(1)?;
            }
        }

        Ok(Self {
            offset,
            code,
            terminal,
            frequency,
            children,
            bigrams,
        })
    }
}

fn skip_bigram_chain(cursor: &mut ByteCursor<'_>) -> Result<(), DictError> {
    loop {
        cursor.skip(BIGRAM_ENTRY_SIZE - 1)?;
        if cursor.read_u8()? & BIGRAM_CONTINUED == 0 {
            return Ok(());
        }
    }
}

/// Iterator over the nodes of one sibling group.
///
/// Stops after the first error.
pub struct Siblings<'a> {
    cursor: ByteCursor<'a>,
    remaining: usize,
}

impl<'a> Siblings<'a> {
    /// Position on the group whose count byte is at `address`.
    pub fn at(data: &'a [u8], address: usize) -> Result<Self, DictError> {
        let mut cursor = ByteCursor::new(data, address);
        let remaining = cursor.read_u8()? as usize;
        Ok(Self { cursor, remaining })
    }

    pub fn root(data: &'a [u8]) -> Result<Self, DictError> {
        Self::at(data, HEADER_SIZE)
    }
}

impl Iterator for Siblings<'_> {
    type Item = Result<Node, DictError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let node = Node::decode(&mut self.cursor);
        if node.is_err() {
            self.remaining = 0;
        }
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

/// One entry of a terminal node's bigram chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BigramEntry {
    /// Offset of the following word's terminal node.
    pub target: usize,
    /// 7-bit continuation frequency.
    pub frequency: u8,
    pub target_has_children: bool,
}

/// Iterator over a bigram chain; ends on the entry without the
/// continuation flag, or after the first error.
pub struct BigramEntries<'a> {
    cursor: ByteCursor<'a>,
    done: bool,
}

impl<'a> BigramEntries<'a> {
    pub fn at(data: &'a [u8], offset: usize) -> Self {
        Self {
            cursor: ByteCursor::new(data, offset),
            done: false,
        }
    }

    fn decode(&mut self) -> Result<BigramEntry, DictError> {
        let flags = self.cursor.peek()?;
        let target = self.cursor.read_u24_be(ADDRESS_MASK)?;
        let freq = self.cursor.read_u8()?;
        self.done = freq & BIGRAM_CONTINUED == 0;
        Ok(BigramEntry {
            target,
            frequency: freq & BIGRAM_FREQ_MASK,
            target_has_children: flags & BIGRAM_CHILDREN != 0,
        })
    }
}

impl Iterator for BigramEntries<'_> {
    type Item = Result<BigramEntry, DictError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let entry = self.decode();
        if entry.is_err() {
            self.done = true;
        }
        Some(entry)
    }
}
