#![deny(warnings)]

/// A buffered view over an iterator that can move backwards.
///
/// Items pulled from the source are kept until `ignore`/`extract` drops
/// everything up to the current position, so callers can speculatively
/// scan ahead and backtrack with `set_buffer_pos`.
pub struct Scanner<I: Iterator>
where
    I::Item: Clone,
{
    src: I,
    buf: Vec<I::Item>,
    pos: isize,
}

impl<I> Iterator for Scanner<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.pos += 1;
        self.prep_buffer();
        let blen = self.buf.len() as isize;
        if self.pos >= blen {
            self.pos = blen;
        }
        self.current()
    }
}

impl<I> Scanner<I>
where
    I: Iterator,
    I::Item: Clone,
{
    pub fn new(source: I) -> Scanner<I> {
        Scanner { src: source, buf: Vec::new(), pos: -1 }
    }

    pub fn buffer_pos(&self) -> isize {
        self.pos
    }

    pub fn set_buffer_pos(&mut self, pos: isize) -> bool {
        if pos < -1 || pos > (self.buf.len() as isize) {
            return false;
        }
        self.pos = pos;
        true
    }

    pub fn current(&self) -> Option<I::Item> {
        if self.pos < 0 {
            return None;
        }
        self.buf.get(self.pos as usize).cloned()
    }

    // pull from the source until the buffer covers self.pos
    fn prep_buffer(&mut self) {
        while self.pos >= (self.buf.len() as isize) {
            match self.src.next() {
                Some(item) => self.buf.push(item),
                None => break,
            }
        }
    }

    pub fn prev(&mut self) -> Option<I::Item> {
        if self.pos >= 0 {
            self.pos -= 1;
        }
        self.current()
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    /// Items consumed since the last `ignore`/`extract`.
    pub fn view(&self) -> &[I::Item] {
        let n = (self.pos + 1).max(0) as usize;
        &self.buf[..n.min(self.buf.len())]
    }

    pub fn ignore(&mut self) {
        let n = (self.pos + 1).max(0) as usize;
        self.buf.drain(..n.min(self.buf.len()));
        self.pos = -1;
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let items = self.view().to_vec();
        self.ignore();
        items
    }
}

impl<I> Scanner<I>
where
    I: Iterator,
    I::Item: Clone + PartialEq,
{
    pub fn accept(&mut self, what: &I::Item) -> Option<I::Item> {
        self.accept_any(std::slice::from_ref(what))
    }

    // advance only if the next item is in the 'any' set,
    // self.current() then returns the matched item
    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        let backtrack = self.buffer_pos();
        if let Some(next) = self.next() {
            if any.contains(&next) {
                return Some(next);
            }
        }
        self.set_buffer_pos(backtrack);
        None
    }

    // skip over the 'over' set, returns whether the scanner advanced
    pub fn skip_all(&mut self, over: &[I::Item]) -> bool {
        let mut advanced = false;
        while self.accept_any(over).is_some() {
            advanced = true;
        }
        advanced
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Scanner;

    #[test]
    fn extremes() {
        let mut s = Scanner::new("12+3@".chars());
        assert_eq!(s.prev(), None);
        assert_eq!(s.next(), Some('1'));
        assert_eq!(s.prev(), None);
        while s.next() != Some('@') {}
        assert_eq!(s.current(), Some('@'));
        assert_eq!(s.prev(), Some('3'));
        assert_eq!(s.next(), Some('@'));
        assert_eq!(s.next(), None);
        assert_eq!(s.next(), None);
    }

    #[test]
    fn extract() {
        let mut s = Scanner::new("(1.5)*2".chars());
        for _ in 0..4 {
            assert!(s.next().is_some());
        }
        assert_eq!(s.extract().into_iter().collect::<String>(), "(1.5");
        assert_eq!(s.peek(), Some(')'));
        assert_eq!(s.prev(), None);
        assert_eq!(s.next(), Some(')'));
        assert_eq!(s.view(), &[')']);
    }

    #[test]
    fn accept_and_backtrack() {
        let mut s = Scanner::new("--7".chars());
        assert_eq!(s.accept(&'+'), None);
        assert_eq!(s.buffer_pos(), -1);
        assert!(s.skip_all(&['-']));
        assert_eq!(s.current(), Some('-'));
        assert_eq!(s.accept_any(&['5', '6']), None);
        assert_eq!(s.accept_any(&['6', '7']), Some('7'));
        assert!(!s.set_buffer_pos(10));
        assert!(s.set_buffer_pos(0));
        assert_eq!(s.next(), Some('-'));
    }
}
