use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use userdir_client::UserClient;
use userdir_config::{get_config_path, Config};
use userdir_output::*;
use userdir_types::*;

const MAIN_HELP: &str = r#"userdir is a command line client for the userdir GraphQL server. It lists,
searches, filters, creates, edits and deletes user records held in the
server's memory.

Start the server with `userdir-server` (port 4000 by default, or $PORT),
then point this client at it with --endpoint or $USERDIR_ENDPOINT.

`userdir filter --local` filters the full list on this side instead of
asking the server, and `userdir stats` prints totals, marital split and
age groups."#;

#[derive(Parser)]
#[command(name = "userdir")]
#[command(about = MAIN_HELP)]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "Output as JSON")]
    json: bool,

    #[arg(long, global = true, env = "USERDIR_ENDPOINT", help = "GraphQL endpoint URL")]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "List all users.")]
    List,

    #[command(about = "Show one user by id.")]
    Get {
        #[arg(help = "User id")]
        id: String,
    },

    #[command(about = "Search users by name (case-insensitive substring).")]
    Search {
        #[arg(help = "Search term; blank lists everyone")]
        term: String,
    },

    #[command(about = "Filter users by name, age and marital status.")]
    Filter {
        #[arg(short = 'n', long, help = "Name substring")]
        name: Option<String>,
        #[arg(short = 'b', long, help = "Age band: all, young (18-30), adult (31-50), senior (51+)")]
        band: Option<AgeFilter>,
        #[arg(long, help = "Minimum age (inclusive)")]
        age_from: Option<i32>,
        #[arg(long, help = "Maximum age (inclusive)")]
        age_to: Option<i32>,
        #[arg(long, conflicts_with = "single", help = "Only married users")]
        married: bool,
        #[arg(long, help = "Only single users")]
        single: bool,
        #[arg(long, help = "Filter the full list locally instead of on the server")]
        local: bool,
    },

    #[command(about = "Create a user.")]
    Create {
        #[arg(help = "Name")]
        name: String,
        #[arg(help = "Age", allow_hyphen_values = true)]
        age: i32,
        #[arg(long, help = "Mark the user as married")]
        married: bool,
    },

    #[command(about = "Edit a user; only the given fields change.")]
    Edit {
        #[arg(help = "User id")]
        id: String,
        #[arg(long, help = "New name")]
        name: Option<String>,
        #[arg(long, help = "New age")]
        age: Option<i32>,
        #[arg(long, help = "New marital status (true/false)")]
        married: Option<bool>,
    },

    #[command(about = "Delete a user by id.")]
    Delete {
        #[arg(help = "User id")]
        id: String,
    },

    #[command(about = "Print user statistics.")]
    Stats {
        #[arg(short = 'n', long, help = "Name substring for the shown count")]
        name: Option<String>,
        #[arg(short = 'b', long, help = "Age band for the shown count")]
        band: Option<AgeFilter>,
    },

    #[command(about = "Print config file location and contents.")]
    Config {
        #[arg(long, help = "Write a default config file if none exists")]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let json = cli.json;

    let mut client = match cli.command {
        Commands::Config { init } => return handle_config(init),
        _ => {
            let config = Config::load()?;
            let endpoint = cli.endpoint.unwrap_or(config.client.endpoint);
            UserClient::new(endpoint).with_cache(config.client.cache)
        }
    };

    match cli.command {
        Commands::Config { init } => handle_config(init),
        Commands::List => {
            let users = client.get_users().await?;
            print_users(json, &users)
        }
        Commands::Get { id } => match client.get_user_by_id(&id).await? {
            Some(user) => print_result(json, &user, format_user(&user)),
            None => Err(anyhow!("No user with id {}", id)),
        },
        Commands::Search { term } => {
            let users = client.search_users(&term).await?;
            print_users(json, &users)
        }
        Commands::Filter {
            name,
            band,
            age_from,
            age_to,
            married,
            single,
            local,
        } => {
            let options = FilterOptions {
                search: name.unwrap_or_default(),
                age_filter: band.unwrap_or_default(),
                marriage_filter: marriage_filter(married, single),
            };
            let input = filter_input(&options, age_from, age_to);
            let users = match (local, input == options.to_filter_input()) {
                (true, true) => client.filter_local(&options).await?,
                (true, false) => filter_users(&client.get_users().await?, &input),
                (false, _) => client.filter_users(&input).await?,
            };
            print_users(json, &users)
        }
        Commands::Create { name, age, married } => {
            let user = client
                .create_user(&CreateUserInput {
                    name,
                    age,
                    is_married: married,
                })
                .await?;
            print_result(json, &user, format!("Created {}", format_user(&user)))
        }
        Commands::Edit {
            id,
            name,
            age,
            married,
        } => {
            let input = UpdateUserInput {
                id,
                new_name: name,
                new_age: age,
                is_married_status_changed: married,
            };
            if input.is_empty() {
                return Err(anyhow!("Nothing to change: pass --name, --age or --married"));
            }
            let users = client.edit_user_by_id(&input).await?;
            print_users(json, &users)
        }
        Commands::Delete { id } => {
            let before = client.get_users().await?.len();
            let users = client.delete_user_by_id(&id).await?;
            if !json && users.len() == before {
                eprintln!("No user with id {}; nothing deleted", id);
            }
            print_users(json, &users)
        }
        Commands::Stats { name, band } => {
            let options = FilterOptions {
                search: name.unwrap_or_default(),
                age_filter: band.unwrap_or_default(),
                marriage_filter: MarriageFilter::All,
            };
            let stats = client.stats(&options).await?;
            print_result(json, &stats, format_stats(&stats))
        }
    }
}

/// Explicit `--age-from`/`--age-to` take precedence over the band's bounds.
fn filter_input(
    options: &FilterOptions,
    age_from: Option<i32>,
    age_to: Option<i32>,
) -> FilterUsersInput {
    let mut input = options.to_filter_input();
    input.age_from = age_from.or(input.age_from);
    input.age_to = age_to.or(input.age_to);
    input
}

fn marriage_filter(married: bool, single: bool) -> MarriageFilter {
    match (married, single) {
        (true, _) => MarriageFilter::Married,
        (_, true) => MarriageFilter::Single,
        _ => MarriageFilter::All,
    }
}

fn print_users(json: bool, users: &[User]) -> Result<()> {
    print_result(json, &users, format_users(users))
}

fn print_result<T: Serialize + ?Sized>(json: bool, value: &T, text: String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text);
    }
    Ok(())
}

fn handle_config(init: bool) -> Result<()> {
    let config_path = get_config_path();

    if init && !config_path.exists() {
        let written = Config::default().save()?;
        println!("Wrote default config to {}", written.display());
    }

    println!("Config file: {}", config_path.display());
    println!();

    if config_path.exists() {
        println!("{}", std::fs::read_to_string(&config_path)?);
    } else {
        println!("(file does not exist, using defaults)");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_filter_flags() {
        let cli = Cli::try_parse_from([
            "userdir", "filter", "--band", "senior", "--single", "--local",
        ])
        .unwrap();
        match cli.command {
            Commands::Filter {
                band,
                married,
                single,
                local,
                ..
            } => {
                assert_eq!(band, Some(AgeFilter::Senior));
                assert_eq!(marriage_filter(married, single), MarriageFilter::Single);
                assert!(local);
            }
            _ => panic!("expected filter command"),
        }
    }

    #[test]
    fn test_explicit_ages_override_band_bounds() {
        let cli = Cli::try_parse_from([
            "userdir", "filter", "--band", "adult", "--age-to", "45", "--name", "jo", "--married",
        ])
        .unwrap();
        let Commands::Filter {
            name,
            band,
            age_from,
            age_to,
            married,
            single,
            ..
        } = cli.command
        else {
            panic!("expected filter command");
        };
        let options = FilterOptions {
            search: name.unwrap_or_default(),
            age_filter: band.unwrap_or_default(),
            marriage_filter: marriage_filter(married, single),
        };

        let input = filter_input(&options, age_from, age_to);
        assert_eq!(
            input,
            FilterUsersInput {
                name_search: Some("jo".to_string()),
                age_from: Some(31),
                age_to: Some(45),
                is_married: Some(true),
            }
        );
        assert_ne!(input, options.to_filter_input());

        let users = vec![
            User::new("1", "John Doe", 30, true),
            User::new("2", "Joan Park", 40, true),
            User::new("3", "Jodie Fox", 48, true),
        ];
        let ids: Vec<_> = filter_users(&users, &input).into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_band_alone_lowers_unchanged() {
        let options = FilterOptions {
            age_filter: AgeFilter::Senior,
            ..Default::default()
        };
        let input = filter_input(&options, None, None);
        assert_eq!(input, options.to_filter_input());
        assert_eq!((input.age_from, input.age_to), (Some(51), None));

        let widened = filter_input(&options, Some(60), None);
        assert_eq!((widened.age_from, widened.age_to), (Some(60), None));
    }

    #[test]
    fn test_married_and_single_conflict() {
        assert!(Cli::try_parse_from(["userdir", "filter", "--married", "--single"]).is_err());
    }

    #[test]
    fn test_edit_takes_explicit_bool() {
        let cli = Cli::try_parse_from(["userdir", "edit", "3", "--married", "false"]).unwrap();
        match cli.command {
            Commands::Edit { id, married, name, age } => {
                assert_eq!(id, "3");
                assert_eq!(married, Some(false));
                assert!(name.is_none() && age.is_none());
            }
            _ => panic!("expected edit command"),
        }
    }
}
