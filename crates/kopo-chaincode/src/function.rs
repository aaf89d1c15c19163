use std::fmt;

/// Functions a transaction can invoke.
///
/// Routing is closed: names outside this set are answered with a raw
/// `404 Not Found` status rather than a chaincode error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    /// Move an amount from one balance to another.
    Transfer,
    /// Remove a key from world state.
    Delete,
    /// Read a balance.
    Query,
    /// Create or overwrite an annotated record.
    More,
    /// Read an annotated record and walk its history.
    MoreQuery,
    /// Fixed diagnostic payload for exercising the host's response path.
    Error,
}

impl Function {
    pub const ALL: [Function; 6] = [
        Function::Transfer,
        Function::Delete,
        Function::Query,
        Function::More,
        Function::MoreQuery,
        Function::Error,
    ];

    /// Look up a function by its invocation name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "invoke" => Some(Self::Transfer),
            "delete" => Some(Self::Delete),
            "query" => Some(Self::Query),
            "more" => Some(Self::More),
            "morequery" => Some(Self::MoreQuery),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// The name a transaction uses to invoke this function.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Transfer => "invoke",
            Self::Delete => "delete",
            Self::Query => "query",
            Self::More => "more",
            Self::MoreQuery => "morequery",
            Self::Error => "error",
        }
    }

    /// Returns `true` if the function never writes world state.
    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::Query | Self::MoreQuery | Self::Error)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
