//! Display text for the two options.

pub const LEFT_TEXT_ATTR: &str = "left_text";
pub const RIGHT_TEXT_ATTR: &str = "right_text";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlideMenuConfig {
    pub left_text: String,
    pub right_text: String,
}

impl SlideMenuConfig {
    pub fn new(left_text: impl Into<String>, right_text: impl Into<String>) -> Self {
        Self {
            left_text: left_text.into(),
            right_text: right_text.into(),
        }
    }

    /// Reads `left_text` and `right_text` from host-declared attributes.
    ///
    /// Unknown names are ignored; a repeated name keeps its last value.
    pub fn from_attributes<'a, I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (name, value) in attributes {
            match name {
                LEFT_TEXT_ATTR => config.left_text = value.to_string(),
                RIGHT_TEXT_ATTR => config.right_text = value.to_string(),
                other => log::trace!("SlideMenu ignoring attribute {other}"),
            }
        }
        config
    }
}
