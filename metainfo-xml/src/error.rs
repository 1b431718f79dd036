/// Errors that can occur while reading or writing AppStream XML.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    XmlAttribute(#[from] quick_xml::events::attributes::AttrError),

    /// The input is not well-formed XML.
    #[error("Could not parse XML: {0}")]
    Malformed(String),

    /// Well-formed XML, but not an AppStream document.
    #[error("{0}")]
    InvalidFormat(String),

    /// A catalog document was handed to the single-component entry point.
    #[error("Unexpected format kind: {0}")]
    UnexpectedFormatKind(String),

    /// A component failed validation; carries its debug rendering.
    #[error("Invalid component: {0}")]
    InvalidComponent(String),
}

impl MetadataError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    pub fn unexpected_format_kind(msg: impl Into<String>) -> Self {
        Self::UnexpectedFormatKind(msg.into())
    }

    pub fn invalid_component(dump: impl Into<String>) -> Self {
        Self::InvalidComponent(dump.into())
    }
}
