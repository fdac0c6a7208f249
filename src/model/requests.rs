/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Form parameters sent with a call
pub type Params = BTreeMap<String, String>;

/// Operation verb, sent as the `do/<operation>` URI segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Returns the records matching criteria parameters
    Query,
    /// Assigns a record to a user, group or prospect
    Assign,
    /// Removes an assignment
    Unassign,
    /// Creates a record
    Create,
    /// Returns field metadata for an object
    Describe,
    /// Returns a single record
    Read,
    /// Updates a record
    Update,
    /// Updates a record or creates it if it does not exist
    Upsert,
    /// Deletes a record
    Delete,
    /// Restores a deleted record
    Undelete,
    /// Sends an email
    Send,
}

impl Operation {
    /// Every operation the API supports
    pub const ALL: [Operation; 11] = [
        Operation::Query,
        Operation::Assign,
        Operation::Unassign,
        Operation::Create,
        Operation::Describe,
        Operation::Read,
        Operation::Update,
        Operation::Upsert,
        Operation::Delete,
        Operation::Undelete,
        Operation::Send,
    ];

    /// Wire name of the operation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Query => "query",
            Operation::Assign => "assign",
            Operation::Unassign => "unassign",
            Operation::Create => "create",
            Operation::Describe => "describe",
            Operation::Read => "read",
            Operation::Update => "update",
            Operation::Upsert => "upsert",
            Operation::Delete => "delete",
            Operation::Undelete => "undelete",
            Operation::Send => "send",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remote object kind, sent as the first URI segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Login handshake, the only unauthenticated object
    #[serde(rename = "login")]
    Login,
    /// Emails
    #[serde(rename = "email")]
    Email,
    /// Lists
    #[serde(rename = "list")]
    List,
    /// Opportunities
    #[serde(rename = "opportunity")]
    Opportunity,
    /// Prospects
    #[serde(rename = "prospect")]
    Prospect,
    /// Prospect accounts
    #[serde(rename = "prospectAccount")]
    ProspectAccount,
    /// Users
    #[serde(rename = "user")]
    User,
    /// Visits
    #[serde(rename = "visit")]
    Visit,
    /// Visitors
    #[serde(rename = "visitor")]
    Visitor,
}

impl ObjectKind {
    /// Wire name of the object kind
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Login => "login",
            ObjectKind::Email => "email",
            ObjectKind::List => "list",
            ObjectKind::Opportunity => "opportunity",
            ObjectKind::Prospect => "prospect",
            ObjectKind::ProspectAccount => "prospectAccount",
            ObjectKind::User => "user",
            ObjectKind::Visit => "visit",
            ObjectKind::Visitor => "visitor",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field used to address a single record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdField {
    /// Pardot numeric id
    Id,
    /// Email address
    Email,
    /// Id of the prospect the record belongs to
    ProspectId,
    /// Email address of the prospect the record belongs to
    ProspectEmail,
}

impl IdField {
    /// Wire name of the field
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            IdField::Id => "id",
            IdField::Email => "email",
            IdField::ProspectId => "prospect_id",
            IdField::ProspectEmail => "prospect_email",
        }
    }
}

impl fmt::Display for IdField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description of a single API call
///
/// The URI is fully determined by `object`, `operation`, `id_field` and `id`;
/// `params` becomes the form body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiRequest {
    /// Object kind (`prospect`, `visitor`, ...)
    pub object: String,
    /// Operation verb, if any
    pub operation: Option<Operation>,
    /// Identifying field, if any
    pub id_field: Option<String>,
    /// Value of the identifying field, if any
    pub id: Option<String>,
    /// Form parameters
    pub params: Params,
}

impl ApiRequest {
    /// Creates a request for the given object without operation, id or params
    pub fn new(object: &str) -> Self {
        Self {
            object: object.to_string(),
            ..Default::default()
        }
    }

    /// Set the operation
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Set the identifying field and its value
    pub fn with_id(mut self, id_field: &str, id: &str) -> Self {
        self.id_field = Some(id_field.to_string());
        self.id = Some(id.to_string());
        self
    }

    /// Set the identifying field and value when both are known
    pub fn with_optional_id(mut self, id_field: Option<&str>, id: Option<&str>) -> Self {
        self.id_field = id_field.map(str::to_string);
        self.id = id.map(str::to_string);
        self
    }

    /// Replace the form parameters
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Add a single form parameter
    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.params.insert(key.to_string(), value.to_string());
        self
    }

    /// The `<id_field>/<id>` pair, only when both are present and non-empty
    #[must_use]
    pub fn identifier(&self) -> Option<(&str, &str)> {
        match (self.id_field.as_deref(), self.id.as_deref()) {
            (Some(field), Some(id)) if !field.is_empty() && !id.is_empty() => Some((field, id)),
            _ => None,
        }
    }
}
