//! 命令调度适配层（commander）
//!
//! 将某一具体命令类型绑定到唯一的处理器，并以只关心结果类型的统一接口对外暴露：
//! - `command`：命令标记 trait 及其类型擦除形式；
//! - `command_handler`：处理具体命令的异步能力；
//! - `command_adapter`：参数校验、类型收窄、取消检查与转发；
//! - `error`：统一错误类型。
//!
//! 处理器的查找与注册由外部调度方负责，本 crate 不涉及。
//!
pub mod command;
pub mod command_adapter;
pub mod command_handler;
pub mod error;

pub use command::{AnyCommand, BoxCommand, Command};
pub use command_adapter::{CommandAdapter, DynCommandAdapter};
pub use command_handler::CommandHandler;
pub use error::{CommandError, CommandResult};
pub use tokio_util::sync::CancellationToken;
