//! 命令调度统一错误定义
//!
//! 适配器自身只产生参数、类型与取消相关的错误；
//! 处理器返回的错误原样透传给调用方。
//!
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum CommandError {
    #[error("missing dependency: {name}")]
    MissingDependency { name: &'static str },

    #[error("missing argument: {name}")]
    MissingArgument { name: &'static str },

    #[error("type mismatch: argument={name}, expected={expected}, found={found}")]
    TypeMismatch {
        name: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("operation cancelled")]
    Cancelled,

    #[error("validation: {0}")]
    Validation(String),

    #[error("authorization: {0}")]
    Authorization(String),

    #[error("infra: {0}")]
    Infra(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CommandError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, CommandError::Cancelled)
    }
}

/// 统一 Result 类型别名
pub type CommandResult<T> = Result<T, CommandError>;
