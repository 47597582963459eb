//! Print-style concatenation of log operands.
use std::borrow::Cow;
use std::fmt::{self, Display, Write};
use std::{io, path};

/// A value that can be an operand of a print-style log call.
///
/// Text operands are glued to their neighbours as-is, while two adjacent
/// non-text operands get a single space between them.
pub trait Printable: Display {
    fn is_text(&self) -> bool {
        false
    }
}

impl Printable for str {
    fn is_text(&self) -> bool {
        true
    }
}

impl Printable for String {
    fn is_text(&self) -> bool {
        true
    }
}

impl Printable for Cow<'_, str> {
    fn is_text(&self) -> bool {
        true
    }
}

impl Printable for fmt::Arguments<'_> {
    fn is_text(&self) -> bool {
        true
    }
}

impl<T: Printable + ?Sized> Printable for &T {
    fn is_text(&self) -> bool {
        (**self).is_text()
    }
}

impl<T: Printable + ?Sized> Printable for Box<T> {
    fn is_text(&self) -> bool {
        (**self).is_text()
    }
}

/// Any [`Display`] value as a non-text operand.
///
/// ```
/// use tierlog_core::logger::{sprint, Plain};
/// use std::net::Ipv4Addr;
///
/// let addr = Ipv4Addr::LOCALHOST;
/// assert_eq!(sprint(&[&"peer ", &Plain(addr), &Plain(addr)]), "peer 127.0.0.1 127.0.0.1");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Plain<T: Display>(pub T);

impl<T: Display> Display for Plain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: Display> Printable for Plain<T> {}

impl Printable for dyn Display + '_ {}

impl Printable for io::Error {}

impl Printable for path::Display<'_> {}

macro_rules! non_text_printable {
    ($($t:ty),*) => {
        $(impl Printable for $t {})*
    };
}

non_text_printable!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char
);

/// Concatenate `args`, separating adjacent operands with a space when neither is text.
pub fn sprint(args: &[&dyn Printable]) -> String {
    let mut out = String::new();
    let mut prev_is_text = true;
    for (i, arg) in args.iter().enumerate() {
        let is_text = arg.is_text();
        if i > 0 && !is_text && !prev_is_text {
            out.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", arg);
        prev_is_text = is_text;
    }
    out
}
