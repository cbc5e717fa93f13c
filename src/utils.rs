pub trait NonBlankExtension<T> {
    fn non_blank(self) -> Option<T>;
}

impl <T: AsRef<str>> NonBlankExtension<T> for Option<T> {
    fn non_blank(self) -> Option<T> {
        match self {
            Some(value) if !value.as_ref().trim().is_empty() => Some(value),
            _ => None,
        }
    }
}
