use async_trait::async_trait;
use commander::{
    BoxCommand, CancellationToken, Command, CommandAdapter, CommandError, CommandHandler,
    CommandResult, DynCommandAdapter,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct CreateUser {
    name: String,
}

impl Command for CreateUser {
    const NAME: &'static str = "user.create";
    type Output = String;
}

struct CreateUserHandler;

#[async_trait]
impl CommandHandler<CreateUser> for CreateUserHandler {
    async fn handle(&self, cmd: CreateUser, _token: CancellationToken) -> CommandResult<String> {
        Ok(format!("user-{}", cmd.name.to_lowercase()))
    }
}

#[derive(Debug)]
struct DeleteUser {
    id: u32,
}

impl Command for DeleteUser {
    const NAME: &'static str = "user.delete";
    type Output = String;
}

struct DeleteUserHandler;

#[async_trait]
impl CommandHandler<DeleteUser> for DeleteUserHandler {
    async fn handle(&self, cmd: DeleteUser, _token: CancellationToken) -> CommandResult<String> {
        Ok(format!("deleted {}", cmd.id))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug 可查看转发日志
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let create = CommandAdapter::<CreateUser, _>::new(Arc::new(CreateUserHandler)).into_dyn();
    let delete = CommandAdapter::<DeleteUser, _>::new(Arc::new(DeleteUserHandler)).into_dyn();
    let token = CancellationToken::new();

    let cmd: BoxCommand<String> = Box::new(CreateUser {
        name: "Alice".into(),
    });
    println!("{}", create.execute(Some(cmd), token.clone()).await?);
    println!(
        "{}",
        delete
            .execute(Some(Box::new(DeleteUser { id: 42 })), token.clone())
            .await?
    );

    // 路由错误 -> TypeMismatch
    if let Err(CommandError::TypeMismatch {
        expected, found, ..
    }) = delete
        .execute(Some(Box::new(CreateUser { name: "Eve".into() })), token.clone())
        .await
    {
        eprintln!("TypeMismatch as expected: expected={expected}, found={found}");
    }

    // 已取消 -> Cancelled，处理器不会被调用
    token.cancel();
    if let Err(err) = create
        .execute(Some(Box::new(CreateUser { name: "Bob".into() })), token)
        .await
    {
        eprintln!("{err}");
    }

    Ok(())
}
