use crate::dict::{DictError, Node, Siblings, HEADER_SIZE};
use crate::unicode::fold;

/// Find the terminal node spelling `word`, ignoring case and accents.
///
/// Every sibling is tried since "Polish" and "polish" can both be stored.
pub(crate) fn find_word(data: &[u8], word: &[u16]) -> Result<Option<Node>, DictError> {
    if word.is_empty() {
        return Ok(None);
    }
    find_in_group(data, HEADER_SIZE, word)
}

fn find_in_group(data: &[u8], address: usize, word: &[u16]) -> Result<Option<Node>, DictError> {
    let Some((&first, rest)) = word.split_first() else {
        return Ok(None);
    };
    let wanted = fold(first);
    for node in Siblings::at(data, address)? {
        let node = node?;
        if fold(node.code) != wanted {
            continue;
        }
        if rest.is_empty() {
            if node.terminal {
                return Ok(Some(node));
            }
            continue;
        }
        if let Some(child) = node.child_group() {
            if let Some(found) = find_in_group(data, child, rest)? {
                return Ok(Some(found));
            }
        }
    }
    Ok(None)
}
