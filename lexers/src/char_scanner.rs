#![deny(warnings)]

use crate::scanner::Scanner;

static WHITE: &[char] = &[' ', '\n', '\r', '\t'];
static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
static OPS: &[char] = &['+', '-', '*', '/', '^', '(', ')'];

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    pub fn ignore_ws(&mut self) {
        self.skip_all(WHITE);
        self.ignore();
    }

    // scan unsigned decimals like [0-9]+(\.[0-9]*)? or \.[0-9]+
    pub fn scan_decimal(&mut self) -> Option<String> {
        let backtrack = self.buffer_pos();
        let integral = self.skip_all(DIGITS);
        let point = self.accept(&'.').is_some();
        let fractional = point && self.skip_all(DIGITS);
        if !integral && !fractional {
            self.set_buffer_pos(backtrack);
            return None;
        }
        Some(self.extract_string())
    }

    pub fn scan_arith_op(&mut self) -> Option<String> {
        if self.accept(&'*').is_some() {
            // accept '*', '**'
            self.accept(&'*');
            Some(self.extract_string())
        } else if self.accept_any(OPS).is_some() {
            Some(self.extract_string())
        } else {
            None
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_decimal() {
        let tests = vec!["987", "41.98", "0.5", "7.", ".25", "000.000"];
        for t in tests.iter() {
            let result = Scanner::new(t.chars()).scan_decimal();
            assert_eq!(Some(t.to_string()), result);
        }
    }

    #[test]
    fn scan_decimal_stops() {
        let mut s = Scanner::new("1.2.3".chars());
        assert_eq!(s.scan_decimal(), Some("1.2".to_string()));
        assert_eq!(s.scan_decimal(), Some(".3".to_string()));
        assert_eq!(s.scan_decimal(), None);

        let mut s = Scanner::new(".+".chars());
        assert_eq!(s.scan_decimal(), None);
        assert_eq!(s.next(), Some('.'));
    }

    #[test]
    fn scan_arith_ops() {
        let tests = vec!["+", "-", "*", "**", "/", "^", "(", ")"];
        for t in tests.iter() {
            let result = Scanner::new(t.chars()).scan_arith_op();
            assert_eq!(Some(t.to_string()), result);
        }
        assert_eq!(Scanner::new("%".chars()).scan_arith_op(), None);
    }
}
