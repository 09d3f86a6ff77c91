/// Minimal querying/mutation surface over a markup tree.
///
/// The update logic only ever needs to select elements, walk into their
/// descendants, and read or write single attributes, so it is written
/// against this trait rather than a concrete HTML representation.
pub trait DocumentAdapter {
    /// Opaque element handle, stable for the lifetime of the document.
    type Handle: Copy;

    /// All elements matching the selector, in document order.
    fn find_all(&self, selector: &str) -> Vec<Self::Handle>;

    /// First descendant of `element` matching the selector, in document order.
    fn find_first(&self, element: Self::Handle, selector: &str) -> Option<Self::Handle>;

    fn get_attribute(&self, element: Self::Handle, name: &str) -> Option<String>;

    fn set_attribute(&mut self, element: Self::Handle, name: &str, value: &str);
}
