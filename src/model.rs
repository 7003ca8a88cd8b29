use serde::Serialize;

/// One documented parameter of an endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointParam {
    pub name: String,
    pub r#type: String,
    pub description: String,
    pub is_optional: bool,
}

/// One fully extracted endpoint record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDoc {
    /// Block id attribute; unique across the page and used as the sort key.
    pub name: String,
    pub description: String,
    /// `None` when the block documents no parameters; never an empty list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<EndpointParam>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_desc: Option<String>,
    pub requests: Vec<String>,
    pub responses: Vec<String>,
    pub errors: Vec<String>,
}
