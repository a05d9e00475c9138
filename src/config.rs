
/// Label rendering configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LabelFormat<'a> {
    /// Minimum width of the right-aligned channel number
    pub width: usize,

    /// Separator placed between the number, MHz and standard fields
    pub separator: &'a str,
}

impl <'a> Default for LabelFormat<'a> {
    fn default() -> Self {
        Self {
            width: 3,
            separator: " | ",
        }
    }
}

impl <'a> LabelFormat<'a> {
    pub fn new(width: usize, separator: &'a str) -> Self {
        Self { width, separator }
    }
}
