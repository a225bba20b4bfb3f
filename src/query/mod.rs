//! Query-building value types
//!
//! Shared with the query builder; not used when encoding connection strings.

use serde::{Deserialize, Serialize};

/// Sort direction of an `ORDER BY` term
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderDirection {
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl std::fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asc => write!(f, "ASC"),
            Self::Desc => write!(f, "DESC"),
        }
    }
}

/// Boolean connector between conditions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Connector {
    /// Both conditions hold
    #[default]
    And,
    /// Either condition holds
    Or,
}

impl std::fmt::Display for Connector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
        }
    }
}

/// Comparison operator in a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// `IS`
    Is,
    /// `IS NOT`
    IsNot,
    /// `=`
    Equal,
    /// `<>`
    NotEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanOrEqual,
    /// `<`
    LesserThan,
    /// `<=`
    LesserThanOrEqual,
    /// `IN`
    In,
    /// `NOT IN`
    NotIn,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sql = match self {
            Self::Is => "IS",
            Self::IsNot => "IS NOT",
            Self::Equal => "=",
            Self::NotEqual => "<>",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::LesserThan => "<",
            Self::LesserThanOrEqual => "<=",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
        };
        f.write_str(sql)
    }
}
