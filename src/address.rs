/// A postal address: the rows printed on one label, in order.
///
/// Nothing about the contents is validated; rows that are too long for the
/// template are truncated when the label is formatted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Address {
    pub lines: Vec<String>,
}

impl Address {
    pub fn new<I, S>(lines: I) -> Address
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Address {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Address {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Address::new(iter)
    }
}

impl From<Vec<String>> for Address {
    fn from(lines: Vec<String>) -> Self {
        Address { lines }
    }
}

impl From<&[&str]> for Address {
    fn from(lines: &[&str]) -> Self {
        Address::new(lines.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for Address {
    fn from(lines: [&str; N]) -> Self {
        Address::new(lines)
    }
}

impl AsRef<[String]> for Address {
    fn as_ref(&self) -> &[String] {
        &self.lines
    }
}
