use crate::{command::Command, error::CommandResult};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// 命令处理器：执行某一具体命令类型的业务逻辑
///
/// 执行期间的取消由处理器自行响应（`token` 与调用方传入的是同一个）。
#[async_trait]
pub trait CommandHandler<C>: Send + Sync
where
    C: Command,
{
    async fn handle(&self, cmd: C, token: CancellationToken) -> CommandResult<C::Output>;
}
