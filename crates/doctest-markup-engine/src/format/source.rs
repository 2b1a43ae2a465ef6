/// Anything that can hand over a documentation string.
///
/// Plain strings are their own docstring. Other types expose theirs by
/// implementing `doc`; `None` means there is no docstring at all and renders
/// as an empty string.
pub trait DocSource {
    fn doc(&self) -> Option<&str>;
}

impl DocSource for str {
    fn doc(&self) -> Option<&str> {
        Some(self)
    }
}

impl DocSource for String {
    fn doc(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: DocSource + ?Sized> DocSource for &T {
    fn doc(&self) -> Option<&str> {
        (**self).doc()
    }
}

impl<T: DocSource> DocSource for Option<T> {
    fn doc(&self) -> Option<&str> {
        self.as_ref().and_then(DocSource::doc)
    }
}
