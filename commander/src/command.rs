use std::any::{Any, TypeId};

/// 应用层命令（Command）
///
/// 表达“意图”的写操作请求，由唯一的 [`CommandHandler`](crate::command_handler::CommandHandler) 处理。
/// - 通过关联类型 `Output` 标注该命令期望的执行结果；
/// - 命令由调用方创建，交给适配器后被消费一次；
/// - 建议保持语义化的“动宾结构”命名，如 `CreateUser`、`CloseOrder`。
///
/// 关联常量：
/// - `NAME`：命令的稳定名称，用于日志、追踪与错误信息。避免依赖 `type_name::<T>()`。
pub trait Command: Send + Sync + 'static {
    /// 命令的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;

    /// 命令执行结果
    type Output: Send + 'static;
}

/// 类型擦除后的命令
///
/// 只保留结果类型 `R`，具体命令类型在运行时通过 `command_type_id` 标记。
/// 调度方可以用同一个 `BoxCommand<R>` 承载任意结果为 `R` 的命令，
/// 由适配器负责收窄回具体类型。
pub trait AnyCommand<R>: Send + 'static {
    /// 具体命令的稳定名称
    fn command_name(&self) -> &'static str;

    /// 具体命令的类型标记
    fn command_type_id(&self) -> TypeId;

    /// 转为 `Any` 以便还原具体类型
    fn into_any(self: Box<Self>) -> Box<dyn Any + Send>;
}

impl<C> AnyCommand<C::Output> for C
where
    C: Command,
{
    fn command_name(&self) -> &'static str {
        C::NAME
    }

    fn command_type_id(&self) -> TypeId {
        TypeId::of::<C>()
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send> {
        self
    }
}

pub type BoxCommand<R> = Box<dyn AnyCommand<R>>;
