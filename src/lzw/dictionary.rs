//! Encoder and decoder dictionaries (components C3, C4).
//!
//! Both sides pre-populate codes `0..256` as single bytes and grow from
//! `FIRST_CODE` (256) up to `DICT_SIZE - 1`. The encoder needs a trie with
//! child lists to find the longest matching prefix of the input; the
//! decoder only ever walks a code's parent chain, so it doesn't need one.

use super::Code;

/// A node in the encoder trie: the string it represents is `prev`'s string
/// followed by `byte`. Root nodes (`0..256`) have `prev == None`.
#[derive(Clone, Copy)]
struct EncNode {
    prev: Option<Code>,
    byte: u8,
    first_child: Option<Code>,
    next_sibling: Option<Code>,
}

pub struct EncoderDict {
    nodes: Vec<EncNode>,
    max: Code,
    dict_size: Code,
}

impl EncoderDict {
    pub fn new(dict_size: Code) -> Self {
        let mut nodes = Vec::with_capacity(dict_size);
        for i in 0..256usize {
            nodes.push(EncNode { prev: None, byte: i as u8, first_child: None, next_sibling: None });
        }
        Self { nodes, max: 255, dict_size }
    }

    pub fn max(&self) -> Code {
        self.max
    }

    /// Reset to the 256 single-byte roots. Codes above 255 become
    /// unreachable garbage because no root's child list points at them
    /// anymore.
    pub fn reset(&mut self) {
        self.nodes.truncate(256);
        for node in &mut self.nodes {
            node.first_child = None;
        }
        self.max = 255;
    }

    /// Linear scan of `parent`'s child list for a child matching `byte`.
    pub fn find_child(&self, parent: Code, byte: u8) -> Option<Code> {
        let mut cur = self.nodes[parent].first_child;
        while let Some(c) = cur {
            let node = &self.nodes[c];
            if node.byte == byte {
                return Some(c);
            }
            cur = node.next_sibling;
        }
        None
    }

    /// Insert `parent . byte` as a new code at the head of `parent`'s child
    /// list. `None` if the dictionary is full.
    pub fn add_child(&mut self, parent: Code, byte: u8) -> Option<Code> {
        if self.max + 1 >= self.dict_size {
            return None;
        }
        let code = self.max + 1;
        let sibling = self.nodes[parent].first_child;
        self.nodes.push(EncNode { prev: Some(parent), byte, first_child: None, next_sibling: sibling });
        self.nodes[parent].first_child = Some(code);
        self.max = code;
        Some(code)
    }
}

pub struct DecoderDict {
    prev: Vec<Option<Code>>,
    byte: Vec<u8>,
    max: Code,
    dict_size: Code,
    /// Scratch buffer for `string_of`, reused across calls. Sized to hold
    /// the longest possible reconstructed string.
    scratch: Vec<u8>,
}

impl DecoderDict {
    pub fn new(dict_size: Code) -> Self {
        let mut prev = Vec::with_capacity(dict_size);
        let mut byte = Vec::with_capacity(dict_size);
        for i in 0..256usize {
            prev.push(None);
            byte.push(i as u8);
        }
        Self { prev, byte, max: 255, dict_size, scratch: vec![0u8; dict_size] }
    }

    pub fn max(&self) -> Code {
        self.max
    }

    pub fn reset(&mut self) {
        self.prev.truncate(256);
        self.byte.truncate(256);
        self.max = 255;
    }

    /// Record a new code `prev . byte`. `None` if the dictionary is full.
    pub fn add(&mut self, prev: Code, byte: u8) -> Option<Code> {
        if self.max + 1 >= self.dict_size {
            return None;
        }
        let code = self.max + 1;
        self.prev.push(Some(prev));
        self.byte.push(byte);
        self.max = code;
        Some(code)
    }

    /// Walk `code`'s parent chain, writing bytes into the scratch buffer
    /// from the tail toward the head. Returns the reconstructed string and
    /// its first byte.
    pub fn string_of(&mut self, mut code: Code) -> (&[u8], u8) {
        let mut tail = self.scratch.len();
        loop {
            tail -= 1;
            self.scratch[tail] = self.byte[code];
            match self.prev[code] {
                Some(p) => code = p,
                None => break,
            }
        }
        let first_byte = self.scratch[tail];
        (&self.scratch[tail..], first_byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roots_are_identity() {
        let dict = EncoderDict::new(1 << 12);
        assert_eq!(dict.max(), 255);
        assert!(dict.find_child(b'A' as Code, b'B').is_none());
    }

    #[test]
    fn insert_then_find() {
        let mut dict = EncoderDict::new(1 << 12);
        let code = dict.add_child(b'A' as Code, b'B').unwrap();
        assert_eq!(code, 256);
        assert_eq!(dict.find_child(b'A' as Code, b'B'), Some(256));
        assert_eq!(dict.find_child(b'A' as Code, b'C'), None);
    }

    #[test]
    fn reset_clears_children_but_not_roots() {
        let mut dict = EncoderDict::new(1 << 12);
        dict.add_child(b'A' as Code, b'B').unwrap();
        dict.reset();
        assert_eq!(dict.max(), 255);
        assert_eq!(dict.find_child(b'A' as Code, b'B'), None);
        // roots are still there, codes 0..256 are the identity mapping
        assert_eq!(dict.nodes[65].byte, b'A');
    }

    #[test]
    fn decoder_string_reconstruction() {
        let mut dict = DecoderDict::new(1 << 12);
        let ab = dict.add(b'A' as Code, b'B').unwrap();
        let abc = dict.add(ab, b'C').unwrap();
        let (s, first) = dict.string_of(abc);
        assert_eq!(s, b"ABC");
        assert_eq!(first, b'A');
    }

    #[test]
    fn decoder_reset_truncates_table() {
        let mut dict = DecoderDict::new(1 << 12);
        dict.add(b'A' as Code, b'B').unwrap();
        dict.reset();
        assert_eq!(dict.max(), 255);
        let (s, _) = dict.string_of(b'Z' as Code);
        assert_eq!(s, b"Z");
    }
}
