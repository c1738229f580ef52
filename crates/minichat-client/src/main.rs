use std::sync::Arc;

use eyre::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;

use minichat_client::api::{ChatApi, HttpChatApi};
use minichat_client::config::ClientConfig;
use minichat_client::identity::LineProfileProvider;
use minichat_client::views::bot::BotView;
use minichat_client::views::peer::{POLL_INTERVAL, PeerView, Poller};
use minichat_client::views::picker;
use minichat_core::models::chat_message::ChatRole;

const HELP: &str = "commands: /bot  /users  /with <n|userId>  /refresh  /quit";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Bot,
    Peer,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ClientConfig::from_env()?;
    let api: Arc<dyn ChatApi> = Arc::new(HttpChatApi::new(&config.api_base));
    let provider = LineProfileProvider::new(
        &config.liff_id,
        config.access_token.clone(),
        config.redirect_uri.clone(),
    );

    let mut bot = BotView::new();
    bot.mount(&provider).await;
    if let Some(login_url) = &bot.login_url {
        println!("Log in with LINE, then set LINE_ACCESS_TOKEN:\n{login_url}");
        return Ok(());
    }
    let Some(me) = bot.user.clone() else {
        eyre::bail!("could not establish identity");
    };

    let peer = Arc::new(Mutex::new(PeerView::new()));
    peer.lock().await.mount(&provider, api.as_ref()).await;

    println!("signed in as {} ({})", me.display_name, me.user_id);
    println!("{HELP}");

    let mut mode = Mode::Bot;
    let mut poller: Option<Poller> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, arg) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "/quit" => break,
            "/bot" => {
                mode = Mode::Bot;
                poller = None;
                peer.lock().await.leave();
                render_bot(&bot);
            }
            "/users" => {
                mode = Mode::Peer;
                let mut view = peer.lock().await;
                view.load_users(api.as_ref()).await;
                render_users(&view);
            }
            "/with" => {
                let mut view = peer.lock().await;
                let Some(partner) = picker::resolve(&view.users, arg).cloned() else {
                    println!("no such user: {arg}");
                    continue;
                };
                mode = Mode::Peer;
                view.select(&partner.user_id);
                view.refresh(api.as_ref()).await;
                println!("chatting with {}", partner.display_name);
                render_thread(&view);
                drop(view);
                poller = Some(Poller::spawn(Arc::clone(&peer), Arc::clone(&api), POLL_INTERVAL));
            }
            "/refresh" => match mode {
                Mode::Bot => render_bot(&bot),
                Mode::Peer => {
                    let mut view = peer.lock().await;
                    view.refresh(api.as_ref()).await;
                    render_thread(&view);
                }
            },
            _ if command.starts_with('/') => println!("{HELP}"),
            _ => match mode {
                Mode::Bot => {
                    bot.input = line.to_string();
                    if let Some(pending) = bot.begin_submit() {
                        println!("you: {}", pending.turn.message);
                        bot.complete(api.as_ref(), pending).await;
                        match bot.messages.last() {
                            Some(reply) if reply.role == ChatRole::Assistant => {
                                println!("bot: {}", reply.message);
                            }
                            _ => println!("(no reply)"),
                        }
                    }
                }
                Mode::Peer => {
                    let mut view = peer.lock().await;
                    if view.partner.is_none() {
                        println!("pick someone first with /with <n|userId>");
                        continue;
                    }
                    view.input = line.to_string();
                    view.send(api.as_ref()).await;
                    render_thread(&view);
                }
            },
        }
    }

    drop(poller);
    Ok(())
}

fn render_bot(view: &BotView) {
    for message in &view.messages {
        println!("[{}] {}: {}", message.timestamp, message.role, message.message);
    }
}

fn render_users(view: &PeerView) {
    if view.users.is_empty() {
        println!("no other users yet");
    }
    for (i, user) in view.users.iter().enumerate() {
        println!("{:>3}. {} ({})", i + 1, user.display_name, user.user_id);
    }
}

fn render_thread(view: &PeerView) {
    for message in &view.messages {
        println!("[{}] {}", message.timestamp, message.message);
    }
}
