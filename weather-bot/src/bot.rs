use std::sync::Arc;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use weather_core::{WeatherProvider, dispatcher};

/// Provider handle injected into handlers via dptree dependencies.
pub type SharedProvider = Arc<dyn WeatherProvider>;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "начать работу")]
    Start,
    #[command(description = "помощь")]
    Help,
    #[command(description = "погода: /weather [город]")]
    Weather(String),
}

/// Handler tree: recognized commands first, then the free-text fallback.
pub fn schema() -> UpdateHandler<teloxide::RequestError> {
    Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(dptree::endpoint(handle_text))
}

async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    provider: SharedProvider,
) -> ResponseResult<()> {
    let reply = match cmd {
        Command::Start => {
            let first_name = msg
                .from
                .as_ref()
                .map(|user| user.first_name.as_str())
                .unwrap_or("друг");
            dispatcher::start_text(first_name)
        }
        Command::Help => dispatcher::help_text(),
        Command::Weather(argument) => dispatcher::weather_reply(provider.as_ref(), &argument).await,
    };

    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}

async fn handle_text(bot: Bot, msg: Message) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    // Unrecognized commands fall through to this branch; like the free-text
    // filter in the original bot, they get no reply.
    if text.starts_with('/') {
        return Ok(());
    }

    bot.send_message(msg.chat.id, dispatcher::free_text_reply(text))
        .await?;
    Ok(())
}
