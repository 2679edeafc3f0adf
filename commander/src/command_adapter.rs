use crate::{
    command::{BoxCommand, Command},
    command_handler::CommandHandler,
    error::{CommandError, CommandResult},
};
use async_trait::async_trait;
use std::any::TypeId;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// 命令适配器（对调度方暴露的统一接口）
///
/// - 只约束结果类型 `R`，因此调度方可以把不同命令的适配器放在同一个集合里；
/// - 每个实现自行校验传入命令的具体类型，拒绝被错误路由过来的命令；
/// - 如何为某条命令挑选适配器由调度方决定。
#[async_trait]
pub trait DynCommandAdapter<R>: Send + Sync {
    /// 绑定命令的稳定名称
    fn command_name(&self) -> &'static str;

    /// 绑定命令的类型标记
    fn command_type_id(&self) -> TypeId;

    /// 校验并执行命令
    ///
    /// 依次检查：命令是否缺失、具体类型是否匹配、`token` 是否已取消；
    /// 全部通过后交给处理器执行，处理器的结果（含错误）原样返回。
    async fn execute(
        &self,
        command: Option<BoxCommand<R>>,
        token: CancellationToken,
    ) -> CommandResult<R>;
}

/// 将一个命令类型 `C` 绑定到一个处理器 `H`
///
/// 适配器只持有处理器的共享引用，构造后不可变，可在多个任务间并发使用。
pub struct CommandAdapter<C, H = dyn CommandHandler<C>>
where
    C: Command,
    H: ?Sized,
{
    handler: Arc<H>,
    _command: PhantomData<fn() -> C>,
}

impl<C, H> CommandAdapter<C, H>
where
    C: Command,
    H: CommandHandler<C> + ?Sized,
{
    pub fn new(handler: Arc<H>) -> Self {
        Self {
            handler,
            _command: PhantomData,
        }
    }

    /// 从可能缺失的处理器构造（例如来自外部容器的查找结果）
    ///
    /// 处理器缺失时立即返回 `MissingDependency`，而不是推迟到首次执行。
    pub fn try_from_handler(handler: Option<Arc<H>>) -> CommandResult<Self> {
        handler
            .map(Self::new)
            .ok_or(CommandError::MissingDependency { name: "handler" })
    }

    pub fn handler(&self) -> &Arc<H> {
        &self.handler
    }

    fn type_mismatch(found: &'static str) -> CommandError {
        CommandError::TypeMismatch {
            name: "command",
            expected: C::NAME,
            found,
        }
    }
}

impl<C, H> CommandAdapter<C, H>
where
    C: Command,
    H: CommandHandler<C> + ?Sized + 'static,
{
    /// 擦除命令类型，交给调度方统一持有
    pub fn into_dyn(self) -> Arc<dyn DynCommandAdapter<C::Output>> {
        Arc::new(self)
    }
}

impl<C, H> Clone for CommandAdapter<C, H>
where
    C: Command,
    H: ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
            _command: PhantomData,
        }
    }
}

impl<C, H> fmt::Debug for CommandAdapter<C, H>
where
    C: Command,
    H: ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandAdapter")
            .field("command", &C::NAME)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<C, H> DynCommandAdapter<C::Output> for CommandAdapter<C, H>
where
    C: Command,
    H: CommandHandler<C> + ?Sized + 'static,
{
    fn command_name(&self) -> &'static str {
        C::NAME
    }

    fn command_type_id(&self) -> TypeId {
        TypeId::of::<C>()
    }

    async fn execute(
        &self,
        command: Option<BoxCommand<C::Output>>,
        token: CancellationToken,
    ) -> CommandResult<C::Output> {
        let Some(command) = command else {
            trace!(command = C::NAME, "rejected: command argument missing");
            return Err(CommandError::MissingArgument { name: "command" });
        };

        let found = command.command_name();
        if command.command_type_id() != TypeId::of::<C>() {
            trace!(command = C::NAME, found, "rejected: command type mismatch");
            return Err(Self::type_mismatch(found));
        }

        // 标记一致时 downcast 不会失败，失败同样按类型不匹配处理
        let Ok(cmd) = command.into_any().downcast::<C>() else {
            trace!(command = C::NAME, found, "rejected: command downcast failed");
            return Err(Self::type_mismatch(found));
        };

        // 已取消则不触碰处理器
        if token.is_cancelled() {
            trace!(command = C::NAME, "cancelled before dispatch");
            return Err(CommandError::Cancelled);
        }

        debug!(command = C::NAME, "dispatching command to handler");
        self.handler.handle(*cmd, token).await
    }
}
