// Expressions
//
// The closed set of expression shapes the analyzer understands. Anything the
// hosting engine cannot describe with these shapes arrives as `Other`, which
// every consumer treats as "no static knowledge".

/// One key/value entry of an array literal expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayItem {
    /// String key, when the entry is keyed (`'alias' => ...`).
    pub key: Option<String>,
    pub value: Expr,
}

/// Expression shapes relevant to container access analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A string literal (`'newsletter_manager'`).
    StringLiteral(String),
    /// A compile-time class-name reference (`NewsletterManager::class`),
    /// carrying the fully-qualified name.
    ClassConstRef(String),
    /// An array literal.
    Array(Vec<ArrayItem>),
    /// A property fetch on the enclosing instance (`$this->locator`).
    PropertyFetch(String),
    /// A local variable read. Its value is unknowable statically.
    Variable(String),
    /// Any shape the host did not map onto the above.
    Other,
}

impl Expr {
    pub fn string(value: impl Into<String>) -> Self {
        Expr::StringLiteral(value.into())
    }

    pub fn class_const(fqn: impl Into<String>) -> Self {
        Expr::ClassConstRef(fqn.into())
    }

    pub fn property_fetch(name: impl Into<String>) -> Self {
        Expr::PropertyFetch(name.into())
    }

    /// Name of the fetched property, when this is a property fetch.
    pub fn property_name(&self) -> Option<&str> {
        match self {
            Expr::PropertyFetch(name) => Some(name),
            _ => None,
        }
    }
}
