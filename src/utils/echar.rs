use std::fmt::{self, Debug, Display, Formatter};

/// Stack-allocated char-like type, for use with errors.
///
/// This can hold either a single character or a short string. Longer input is cut off, which is
/// fine since it's only ever shown to a human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EChar<const N: usize = 4> {
    buf: [u8; N],
    len: u8,
}
impl<const N: usize> EChar<N> {
    /// Keep at most the first `N` bytes
    pub fn truncated(bytes: &[u8]) -> Self {
        let len = bytes.len().min(N);
        let mut buf = [0u8; N];
        buf[..len].copy_from_slice(&bytes[..len]);
        Self { buf, len: len as _ }
    }
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..(self.len as usize)]
    }
}
impl<const N: usize> Display for EChar<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(bstr::BStr::new(self.as_slice()), f)
    }
}
