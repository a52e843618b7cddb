//! Abstract syntax tree.
//!
//! The parser builds one [`Node`] tree per run, rooted at a
//! [`NodeKind::Block`]. Every node owns its children and records the span
//! of exactly the text it was parsed from, which is what runtime errors
//! underline.
//!
//! Bodies of `if`, `for`, `while` and `func` remember whether they were
//! written inline (`then expr`, `-> expr`) or as a `NEWLINE ... end` block.
//! Inline bodies produce their value; block bodies produce null.

use std::fmt;

use crate::Span;

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

impl Node {
    #[inline]
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Node { kind, span }
    }

    /// Statement list `Block`, or `None` for any other node.
    pub fn as_block(&self) -> Option<&[Node]> {
        match &self.kind {
            NodeKind::Block(stmts) => Some(stmts),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Number(f64),
    Str(String),
    List(Vec<Node>),
    VarAccess(String),
    VarAssign {
        name: String,
        value: Box<Node>,
    },
    BinaryOp {
        left: Box<Node>,
        op: BinaryOp,
        right: Box<Node>,
    },
    UnaryOp {
        op: UnaryOp,
        operand: Box<Node>,
    },
    If {
        cases: Vec<IfCase>,
        else_case: Option<ElseCase>,
    },
    For {
        var_name: String,
        start: Box<Node>,
        end: Box<Node>,
        step: Option<Box<Node>>,
        body: Box<Node>,
        is_block: bool,
    },
    While {
        condition: Box<Node>,
        body: Box<Node>,
        is_block: bool,
    },
    FuncDef {
        name: Option<String>,
        params: Vec<String>,
        body: Box<Node>,
        is_expr_body: bool,
    },
    Call {
        callee: Box<Node>,
        args: Vec<Node>,
    },
    Return(Option<Box<Node>>),
    Break,
    Continue,
    Block(Vec<Node>),
}

/// One `if`/`elif` arm.
#[derive(Clone, Debug, PartialEq)]
pub struct IfCase {
    pub condition: Node,
    pub body: Node,
    pub is_block: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ElseCase {
    pub body: Box<Node>,
    pub is_block: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    And,
    Or,
}

impl BinaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::LtEq => "<=",
            BinaryOp::GtEq => ">=",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `+x`
    Pos,
    /// `-x`
    Neg,
    /// `not x`
    Not,
}

impl UnaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Pos => "+",
            UnaryOp::Neg => "-",
            UnaryOp::Not => "not",
        }
    }
}

/// S-expression rendering, used by `basil --ast`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Number(n) => write!(f, "{n}"),
            NodeKind::Str(s) => write!(f, "{s:?}"),
            NodeKind::List(items) => {
                write!(f, "[")?;
                write_joined(f, items, ", ")?;
                write!(f, "]")
            }
            NodeKind::VarAccess(name) => write!(f, "{name}"),
            NodeKind::VarAssign { name, value } => write!(f, "(var {name} {value})"),
            NodeKind::BinaryOp { left, op, right } => {
                write!(f, "({left} {} {right})", op.as_symbol())
            }
            NodeKind::UnaryOp { op, operand } => write!(f, "({} {operand})", op.as_symbol()),
            NodeKind::If { cases, else_case } => {
                write!(f, "(if")?;
                for case in cases {
                    write!(f, " [{} {}]", case.condition, case.body)?;
                }
                if let Some(else_case) = else_case {
                    write!(f, " [else {}]", else_case.body)?;
                }
                write!(f, ")")
            }
            NodeKind::For {
                var_name,
                start,
                end,
                step,
                body,
                ..
            } => {
                write!(f, "(for {var_name} {start} {end}")?;
                if let Some(step) = step {
                    write!(f, " step {step}")?;
                }
                write!(f, " {body})")
            }
            NodeKind::While {
                condition, body, ..
            } => write!(f, "(while {condition} {body})"),
            NodeKind::FuncDef {
                name, params, body, ..
            } => write!(
                f,
                "(func {} ({}) {body})",
                name.as_deref().unwrap_or("<anonymous>"),
                params.join(" ")
            ),
            NodeKind::Call { callee, args } => {
                write!(f, "(call {callee}")?;
                for arg in args {
                    write!(f, " {arg}")?;
                }
                write!(f, ")")
            }
            NodeKind::Return(Some(value)) => write!(f, "(return {value})"),
            NodeKind::Return(None) => write!(f, "(return)"),
            NodeKind::Break => write!(f, "(break)"),
            NodeKind::Continue => write!(f, "(continue)"),
            NodeKind::Block(stmts) => {
                write!(f, "{{")?;
                write_joined(f, stmts, "; ")?;
                write!(f, "}}")
            }
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, nodes: &[Node], sep: &str) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{node}")?;
    }
    Ok(())
}
