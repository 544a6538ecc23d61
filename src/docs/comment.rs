//! Structured documentation model.

/// Description attached to a `<param>` or `<typeparam>` tag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterComment {
    pub name: String,
    pub description: String,
    /// Value of the `example` attribute, if any.
    pub example: Option<String>,
}

/// A documented `<exception>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExceptionComment {
    /// Resolved display name of the exception type.
    pub cref: String,
    pub description: String,
}

/// A documented `<response code="...">`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResponseComment {
    pub code: String,
    pub description: String,
    pub example: Option<String>,
}

/// The parsed form of one declaration's XML documentation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XmlComment {
    pub summary: Option<String>,
    /// Text of `<remarks>`.
    pub description: Option<String>,
    pub value: Option<String>,
    pub returns: Option<String>,
    pub deprecated: bool,
    pub parameters: Vec<ParameterComment>,
    pub type_parameters: Vec<ParameterComment>,
    pub exceptions: Vec<ExceptionComment>,
    pub responses: Vec<ResponseComment>,
    pub examples: Vec<String>,
    pub see_also: Vec<String>,
}

impl XmlComment {
    /// True when no section carries any text.
    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
            && self.description.is_none()
            && self.value.is_none()
            && self.returns.is_none()
            && !self.deprecated
            && self.parameters.is_empty()
            && self.type_parameters.is_empty()
            && self.exceptions.is_empty()
            && self.responses.is_empty()
            && self.examples.is_empty()
            && self.see_also.is_empty()
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterComment> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn type_parameter(&self, name: &str) -> Option<&ParameterComment> {
        self.type_parameters.iter().find(|p| p.name == name)
    }

    pub fn response(&self, code: &str) -> Option<&ResponseComment> {
        self.responses.iter().find(|r| r.code == code)
    }
}
