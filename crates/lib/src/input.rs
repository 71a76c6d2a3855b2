//! Input parser.

mod error;
mod iter;

#[cfg(test)]
mod tests;

use core::mem;
use core::ops;
use std::str::from_utf8;

use arrayvec::ArrayVec;
use bstr::BStr;

pub use self::error::{ErrorKind, IStrError};
pub use self::iter::{Lines, Trim};

pub(self) type Result<T> = std::result::Result<T, IStrError>;

pub(crate) const NL: u8 = b'\n';

/// Helper to parse input.
///
/// Holds a view into the loaded input together with the absolute index of
/// the view, so that errors raised anywhere can be traced back to a line and
/// column in the original file.
#[derive(Debug, Clone, Copy)]
pub struct IStr {
    /// The data being parsed.
    data: &'static [u8],
    /// Absolute index of the data being parsed.
    index: usize,
}

impl IStr {
    /// Construct a new input processor.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::input::IStr;
    ///
    /// let mut input = IStr::new(b"1 2\n3 4\n");
    /// assert_eq!(input.line::<(u32, u32)>()?, (1, 2));
    /// assert_eq!(input.line::<(u32, u32)>()?, (3, 4));
    /// assert!(input.try_line::<(u32, u32)>()?.is_none());
    /// # Ok::<_, lib::input::IStrError>(())
    /// ```
    #[inline]
    pub const fn new(data: &'static [u8]) -> Self {
        Self { data, index: 0 }
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Get remaining binary string of the input.
    #[inline]
    pub fn as_bstr(&self) -> &'static BStr {
        BStr::new(self.data)
    }

    /// Get the remaining input as a string.
    #[inline]
    pub fn as_str(&self) -> Result<&'static str> {
        match from_utf8(self.data) {
            Ok(string) => Ok(string),
            Err(e) => {
                let start = self.index.saturating_add(e.valid_up_to());
                Err(IStrError::new(start..self.end(), ErrorKind::NotUtf8))
            }
        }
    }

    /// Construct an iterator over the lines of the current input.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::input::{IStr, Trim};
    ///
    /// let input = IStr::new(b"  a  \r\nb\n\nc\n");
    ///
    /// let lines = input.lines(Trim::Both).map(|l| l.as_bstr()).collect::<Vec<_>>();
    /// assert_eq!(lines, ["a", "b", "", "c"]);
    ///
    /// let lines = input.lines(Trim::Keep).map(|l| l.as_bstr()).collect::<Vec<_>>();
    /// assert_eq!(lines, ["  a  ", "b", "", "c"]);
    /// ```
    #[inline]
    pub fn lines(self, trim: Trim) -> Lines {
        Lines::new(self, trim)
    }

    /// Split on the given byte, each time producing a new sub-input.
    #[inline]
    pub fn splitn(&mut self, byte: u8) -> impl InputIterator + '_ {
        return Splitter { input: self, byte };

        struct Splitter<'a> {
            input: &'a mut IStr,
            byte: u8,
        }

        impl InputIterator for Splitter<'_> {
            #[inline]
            fn index(&self) -> usize {
                self.input.index
            }

            #[inline]
            fn next(&mut self) -> Option<IStr> {
                self.input.split_once(self.byte)
            }
        }
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// non-whitespace data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the next line as `T`, errors with `Err(IStrError)` if there is
    /// no line or it is not a valid value of type `T`.
    #[inline]
    pub fn line<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        let index = self.index;

        let Some(line) = self.try_line()? else {
            return Err(IStrError::new(index..self.index, ErrorKind::ExpectedLine));
        };

        Ok(line)
    }

    /// Parse the next line as `T`, errors with `Err(IStrError)` if the line
    /// is not a valid value of type `T`, returns `Ok(None)` if there is no
    /// more data to process.
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        let Some(mut line) = self.split_once(NL) else {
            return Ok(None);
        };

        line.trim_cr();
        line.try_next()
    }

    /// Parse the whole input as `T`, erroring if anything but whitespace
    /// remains afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::input::IStr;
    ///
    /// assert_eq!(IStr::new(b" 12 ").parse::<u32>()?, 12);
    /// assert!(IStr::new(b"12 13").parse::<u32>().is_err());
    /// # Ok::<_, lib::input::IStrError>(())
    /// ```
    pub fn parse<T>(mut self) -> Result<T>
    where
        T: FromInput,
    {
        let value = self.next()?;
        self.trim();

        if !self.is_empty() {
            return Err(IStrError::new(self.index..self.end(), ErrorKind::Trailing));
        }

        Ok(value)
    }

    /// Strip leading and trailing ASCII whitespace.
    #[inline]
    pub fn trim(&mut self) {
        let n = self.find(0, |b| !b.is_ascii_whitespace());
        self.advance(n);

        let end = self
            .data
            .iter()
            .rposition(|b| !b.is_ascii_whitespace())
            .map_or(0, |n| n + 1);

        self.data = &self.data[..end];
    }

    /// Strip a single trailing carriage return.
    #[inline]
    pub fn trim_cr(&mut self) {
        if let [rest @ .., b'\r'] = self.data {
            self.data = rest;
        }
    }

    /// Try to parse the next whitespace-delimited word.
    pub fn try_next_word<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        let s = self.find(0, |b| !b.is_ascii_whitespace());
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            return Ok(None);
        }

        let Some(mut word) = self.slice(s..n) else {
            return Ok(None);
        };

        let Some(value) = T::try_from_input(&mut word)? else {
            return Ok(None);
        };

        self.advance(n);
        Ok(Some(value))
    }

    /// Split once at the given byte or until the end of string, returning the
    /// sub-input before the split.
    fn split_once(&mut self, b: u8) -> Option<IStr> {
        if self.data.is_empty() {
            return None;
        }

        let Some(at) = memchr::memchr(b, self.data) else {
            let index = self.index;
            self.index = self.end();
            return Some(IStr::from_parts(mem::take(&mut self.data), index));
        };

        let head = IStr::from_parts(&self.data[..at], self.index);
        self.advance(at + 1);
        Some(head)
    }

    /// Find the first index at or after `n` matching the predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data = &self.data[n..];
        self.index += n;
    }

    #[inline]
    fn end(&self) -> usize {
        self.index.saturating_add(self.data.len())
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: ops::Range<usize>) -> Option<IStr> {
        let index = self.index.checked_add(range.start)?;
        Some(IStr::from_parts(self.data.get(range)?, index))
    }

    #[inline]
    pub(crate) const fn from_parts(data: &'static [u8], index: usize) -> Self {
        Self { data, index }
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Error kind to use when a value is missing.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, returning `Ok(None)` if there is nothing to
    /// parse.
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

/// Iterator over sub-inputs.
pub trait InputIterator {
    /// Current index of the input iterator.
    fn index(&self) -> usize;

    /// Get the next sub-input.
    fn next(&mut self) -> Option<IStr>;
}

/// Parse something from a sequence of sub-inputs.
pub trait FromInputIter: Sized {
    /// Parse one value out of each sub-input.
    fn from_input_iter<I>(inputs: I) -> Result<Option<Self>>
    where
        I: InputIterator;
}

macro_rules! tuple {
    ($num:literal => $first:ident $first_id:ident $(, $rest:ident $rest_id:ident)* $(,)?) => {
        impl<$first, $($rest,)*> FromInput for ($first, $($rest, )*)
        where
            $first: FromInput,
            $($rest: FromInput,)*
        {
            #[inline]
            fn error_kind() -> ErrorKind {
                ErrorKind::ExpectedTuple($num)
            }

            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let Some($first_id) = p.try_next()? else {
                    return Ok(None);
                };

                $(
                    let Some($rest_id) = p.try_next()? else {
                        return Ok(None);
                    };
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }

        impl<$first, $($rest,)*> FromInputIter for ($first, $($rest,)*)
        where
            $first: FromInput,
            $($rest: FromInput,)*
        {
            #[inline]
            fn from_input_iter<I>(mut inputs: I) -> Result<Option<Self>>
            where
                I: InputIterator
            {
                let Some(mut $first_id) = inputs.next() else {
                    return Ok(None);
                };

                let Some($first_id) = <$first>::try_from_input(&mut $first_id)? else {
                    return Ok(None);
                };

                $(
                    let Some(mut $rest_id) = inputs.next() else {
                        return Ok(None);
                    };

                    let Some($rest_id) = <$rest>::try_from_input(&mut $rest_id)? else {
                        return Ok(None);
                    };
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }
    }
}

macro_rules! integer {
    ($ty:ty) => {
        impl FromInput for $ty {
            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let start = p.index + p.find(0, |b| !b.is_ascii_whitespace());

                let Some(string) = p.try_next_word::<&'static str>()? else {
                    return Ok(None);
                };

                match str::parse(string) {
                    Ok(n) => Ok(Some(n)),
                    Err(..) => Err(IStrError::new(start..p.index, ErrorKind::NotInteger(string))),
                }
            }
        }
    };
}

tuple!(1 => A a);
tuple!(2 => A a, B b);
tuple!(3 => A a, B b, C c);
tuple!(4 => A a, B b, C c, D d);
tuple!(5 => A a, B b, C c, D d, E e);
tuple!(6 => A a, B b, C c, D d, E e, F f);

integer!(usize);
integer!(isize);
integer!(u8);
integer!(u16);
integer!(u32);
integer!(u64);
integer!(i8);
integer!(i16);
integer!(i32);
integer!(i64);

impl FromInput for &'static str {
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::NotUtf8
    }

    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let string = p.as_str()?;
        p.advance(p.len());
        Ok(Some(string))
    }
}

impl<T> FromInput for Vec<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let mut output = Vec::new();

        while !p.is_empty() {
            let Some(element) = T::try_from_input(p)? else {
                break;
            };

            output.push(element);
        }

        Ok(Some(output))
    }
}

impl<T> FromInput for Option<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        Ok(Some(T::try_from_input(p)?))
    }
}

/// Split on the character `D`, parsing one value out of each piece.
///
/// # Examples
///
/// ```
/// use lib::input::{IStr, Split};
///
/// let mut input = IStr::new(b"2-4,6-8");
/// let Split((Split((a, b)), Split((c, d)))) =
///     input.next::<Split<',', (Split<'-', (u32, u32)>, Split<'-', (u32, u32)>)>>()?;
/// assert_eq!((a, b, c, d), (2, 4, 6, 8));
/// # Ok::<_, lib::input::IStrError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Split<const D: char, T>(pub T);

impl<const D: char, T> FromInput for Split<D, T>
where
    T: FromInputIter,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let it = p.splitn(D as u8);

        let Some(out) = T::from_input_iter(it)? else {
            return Ok(None);
        };

        Ok(Some(Self(out)))
    }
}

impl<const N: usize, T> FromInputIter for [T; N]
where
    T: FromInput,
{
    #[inline]
    fn from_input_iter<I>(mut it: I) -> Result<Option<Self>>
    where
        I: InputIterator,
    {
        let mut array = ArrayVec::<T, N>::new();

        while !array.is_full() {
            let Some(mut value) = it.next() else {
                return Ok(None);
            };

            let Some(value) = T::try_from_input(&mut value)? else {
                return Ok(None);
            };

            array.push(value);
        }

        Ok(array.into_inner().ok())
    }
}

/// Parse a word of input, which parses until we reach a whitespace character.
pub struct W<T>(pub T);

impl<T> FromInput for W<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        Ok(p.try_next_word()?.map(Self))
    }
}
