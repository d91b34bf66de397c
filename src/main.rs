use anyhow::{Context, Result};
use club_portal::core::config::Config;
use club_portal::core::session::SessionView;
use club_portal::core::startup;
use club_portal::core::state::AppState;
use club_portal::core::tracing_init;
use club_portal::handlers::{join, search, session};
use club_portal::models::club::Club;
use club_portal::storage::local_store::LocalStore;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 1 {
        let path = PathBuf::from(&args[1]);
        Config::from_file(&path).context(format!(
            "Failed to load configuration from '{}'. \
            Copy config.example.toml to config.toml and adjust the values.",
            path.display()
        ))?
    } else {
        let default_path = PathBuf::from("config.toml");
        if default_path.exists() {
            Config::from_file(&default_path)?
        } else {
            Config::default()
        }
    };

    tracing_init::init_tracing(&config.logging);

    info!(
        storage_dir = %config.storage.dir.display(),
        message_ttl_ms = config.ui.message_ttl_ms,
        "Club portal starting"
    );

    let storage = LocalStore::open(config.storage.dir.clone())
        .context("Failed to open durable storage")?;

    let state = AppState::new(config, storage);
    let current_user = startup::restore_state(&state)?;

    info!(
        clubs = state.club_store.len(),
        members = state.membership.len(),
        "State restored"
    );

    let mut view = SessionView::new(current_user);

    println!("University Club Portal");
    print_help();
    render(&state, &view);

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            render(&state, &view);
            continue;
        }

        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "login" => match rest.split_once(char::is_whitespace) {
                Some((name, roll)) => session::login(&state, &mut view, name, roll),
                None => session::login(&state, &mut view, rest, ""),
            },
            "logout" => session::logout(&state, &mut view),
            "search" => {
                search::set_query(&mut view, rest);
                search::search(&state, &mut view);
            }
            "open" => match rest.parse::<u32>() {
                Ok(id) => search::select_club(&state, &mut view, id),
                Err(_) => println!("Usage: open <club id>"),
            },
            "back" => search::deselect(&mut view),
            "join" => {
                let target = if rest.is_empty() {
                    view.selected
                } else {
                    rest.parse::<u32>().ok()
                };
                match target {
                    Some(id) => join::join_club(&state, &mut view, id),
                    None => println!("Usage: join <club id> (or open a club first)"),
                }
            }
            "help" => print_help(),
            "quit" | "exit" => break,
            _ => println!("Unknown command: {} (try 'help')", command),
        }

        render(&state, &view);
    }

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  login <name> <roll>   log in");
    println!("  logout                log out");
    println!("  search [text]         search clubs by name (empty = all)");
    println!("  open <id>             view club details");
    println!("  join [id]             join a club (defaults to the open one)");
    println!("  back                  return to the list");
    println!("  quit                  exit");
}

fn render(state: &AppState, view: &SessionView) {
    if let Some(notice) = view.notice() {
        println!("  [{}]", notice);
    }

    match &view.current_user {
        Some(user) => println!("Logged in as {} ({})", user.name, user.roll),
        None => println!("Not logged in"),
    }

    if let Some(id) = view.selected {
        if let Some(club) = state.club_store.get(id) {
            render_detail(state, view, &club);
        }
        return;
    }

    if view.results.is_empty() {
        return;
    }

    println!("Clubs:");
    for club in &view.results {
        let joined = view
            .current_user
            .as_ref()
            .and_then(|user| state.membership.joined_club(&user.key(), &club.category));
        let marker = if joined == Some(club.id) { "*" } else { " " };
        println!(
            " {} [{}] {} ({}) - {} members",
            marker, club.id, club.name, club.category, club.views
        );
    }
}

fn render_detail(state: &AppState, view: &SessionView, club: &Club) {
    println!("== {} ==", club.name);
    println!("{}", club.bulletin);
    println!("Category: {}", club.category);
    println!("Contact: {}", club.contact);
    println!("{} members", club.views);

    if !club.members.is_empty() {
        println!("Members:");
        for member in &club.members {
            println!("  - {}", member);
        }
    }

    let claimed = view
        .current_user
        .as_ref()
        .and_then(|user| state.membership.joined_club(&user.key(), &club.category));
    match claimed {
        Some(id) if id == club.id => println!("(you are a member)"),
        Some(id) => {
            let name = state.club_store.name_of(id).unwrap_or_default();
            println!("(you already joined {} in this category)", name);
        }
        None => println!("(type 'join' to join this club)"),
    }
}
