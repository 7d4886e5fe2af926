// Call Sites
//
// The transient unit of work: one method-call expression plus its lexical
// context, as prepared by the hosting engine. Nothing here is persisted; a
// call site lives for the duration of one rule evaluation.

use crate::reflection::{ClassReflection, Expr, TypeRef};

/// One `receiver.method(args)` expression under analysis.
#[derive(Debug, Clone)]
pub struct CallSite {
    /// Receiver expression the method is invoked on.
    pub receiver: Expr,
    /// Static type of the receiver.
    pub receiver_type: TypeRef,
    /// Invoked method name.
    pub method: String,
    /// Argument expressions, in order.
    pub args: Vec<Expr>,
    /// 1-indexed source line of the call.
    pub line: u32,
    /// Class lexically enclosing the call, when inside one.
    pub enclosing_class: Option<ClassReflection>,
}

impl CallSite {
    pub fn new(receiver: Expr, receiver_type: TypeRef, method: impl Into<String>) -> Self {
        Self {
            receiver,
            receiver_type,
            method: method.into(),
            args: Vec::new(),
            line: 0,
            enclosing_class: None,
        }
    }

    pub fn with_args(mut self, args: Vec<Expr>) -> Self {
        self.args = args;
        self
    }

    pub fn at_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    pub fn in_class(mut self, class: ClassReflection) -> Self {
        self.enclosing_class = Some(class);
        self
    }
}
