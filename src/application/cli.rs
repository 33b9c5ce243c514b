use std::io;
use std::path;

use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgGroup;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use owo_colors::OwoColorize;
use owo_colors::Stream;
use strum::IntoEnumIterator;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::application::pages;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::CameraName;
use crate::domain::models::CarbonRequest;
use crate::domain::models::ChatSession;
use crate::domain::models::Language;
use crate::domain::models::SpeechName;
use crate::domain::models::VehicleType;
use crate::domain::services::Preferences;
use crate::domain::services::Sessions;
use crate::domain::services::Translator;
use crate::infrastructure::storage::StorageManager;

const CHAT_HELP: &str = "CHAT COMMANDS:
- /new        Save the current chat and start a new one.
- /history    List saved chats.
- /load ID    Open a saved chat.
- /delete ID  Delete a saved chat.
- /lang CODE  Switch language (en, hi, ga).
- /voice      Toggle voice input.
- /help       Show the list of commands.
- /quit       Exit.

CHAT HOTKEYS:
- Ctrl+N      Start a new chat.
- Ctrl+L      Toggle voice input.
- Ctrl+U/D    Scroll up or down a page.
- Ctrl+C      Exit.";

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

fn format_session(session: &ChatSession) -> String {
    return format!(
        "- (ID: {}) {}, {} messages, {}",
        session.id,
        session.last_modified.format("%Y-%m-%d %H:%M"),
        session.messages.len(),
        session.title
    );
}

fn sessions() -> Result<Sessions> {
    return Ok(Sessions::new(StorageManager::get()?));
}

fn preferences() -> Result<Preferences> {
    return Ok(Preferences::new(StorageManager::get()?));
}

fn print_sessions_list() -> Result<()> {
    let sessions = sessions()?
        .list()?
        .iter()
        .map(format_session)
        .collect::<Vec<String>>();

    if sessions.is_empty() {
        println!("There are no saved chats yet. Start your first one with `deep-shiva chat`!");
    } else {
        println!("{}", sessions.join("\n"));
    }

    return Ok(());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

fn load_config_from_session(session_id: &str) -> Result<()> {
    let session = sessions()?.load(session_id)?;
    Config::set(ConfigKey::SessionID, &session.id);

    return Ok(());
}

fn load_config_from_session_interactive() -> Result<bool> {
    let sessions = sessions()?.list()?;
    if sessions.is_empty() {
        println!("There are no saved chats yet. Start your first one with `deep-shiva chat`!");
        return Ok(false);
    }

    let session_options = sessions.iter().map(format_session).collect::<Vec<String>>();

    let idx = match Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Which chat would you like to open?")
        .default(0)
        .items(&session_options)
        .interact_opt()?
    {
        Some(idx) => idx,
        None => return Ok(false),
    };

    load_config_from_session(&sessions[idx].id)?;
    return Ok(true);
}

fn select_language_interactive(current: Language) -> Result<Option<Language>> {
    let languages = Language::iter().collect::<Vec<Language>>();
    let options = languages
        .iter()
        .map(|language| return format!("{} ({language})", language.display_name()))
        .collect::<Vec<String>>();
    let default = languages
        .iter()
        .position(|e| return *e == current)
        .unwrap_or_default();

    let idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Which language would you like to use?")
        .default(default)
        .items(&options)
        .interact_opt()?;

    return Ok(idx.map(|idx| return languages[idx]));
}

fn set_language(code: Option<&String>) -> Result<()> {
    let preferences = preferences()?;
    let language = match code {
        Some(code) => Language::parse(code).ok_or_else(|| {
            return anyhow!(format!(
                "Unknown language '{code}'. Possible values are: {}",
                Language::VARIANTS.join(", ")
            ));
        })?,
        None => match select_language_interactive(preferences.language())? {
            Some(language) => language,
            None => return Ok(()),
        },
    };

    preferences.set_language(language)?;
    let translator = Translator::new(language);
    println!(
        "{} {}",
        translator.t("language.changed", None),
        language.display_name()
    );

    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_dashboard() -> Command {
    return Command::new("dashboard")
        .about("Live crowd status at the Char Dham shrines, with an optional carbon footprint estimate.")
        .arg(
            Arg::new("distance")
                .short('d')
                .long("distance")
                .help("Trip distance in kilometres. Enables the carbon footprint estimate.")
                .num_args(1)
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("vehicle")
                .long("vehicle")
                .help(format!(
                    "Vehicle used for the trip. [default: {}]",
                    VehicleType::default()
                ))
                .num_args(1)
                .requires("distance")
                .value_parser(PossibleValuesParser::new(VehicleType::VARIANTS)),
        );
}

fn subcommand_culture() -> Command {
    return Command::new("culture")
        .about("Browse crafts from local artisans.")
        .arg(
            Arg::new("favorite")
                .short('f')
                .long("favorite")
                .help("Product ID to add to or remove from your favourites.")
                .num_args(1)
                .value_parser(value_parser!(u64)),
        );
}

fn subcommand_language() -> Command {
    return Command::new("language")
        .about("Show or change the interface language.")
        .subcommand(
            Command::new("set")
                .about("Change the language. Omit the code to pick one interactively.")
                .arg(
                    Arg::new("code")
                        .help("Language code.")
                        .required(false)
                        .value_parser(PossibleValuesParser::new(Language::VARIANTS)),
                ),
        );
}

fn subcommand_sessions_delete() -> Command {
    return Command::new("delete")
        .about("Delete one or all saved chats.")
        .arg(
            clap::Arg::new("session-id")
                .short('i')
                .long("id")
                .help("Chat ID")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("all")
                .long("all")
                .help("Delete all saved chats.")
                .action(ArgAction::SetTrue),
        )
        .group(
            ArgGroup::new("delete-args")
                .args(["session-id", "all"])
                .required(true),
        );
}

fn subcommand_sessions() -> Command {
    return Command::new("sessions")
        .about("Manage saved chats.")
        .arg_required_else_help(true)
        .subcommand(Command::new("dir").about("Print the directory chats are saved in."))
        .subcommand(Command::new("list").about("List saved chats, most recent first."))
        .subcommand(
            Command::new("open")
                .about("Open a saved chat by ID. Omit the ID to pick one interactively.")
                .arg(
                    clap::Arg::new("session-id")
                        .short('i')
                        .long("id")
                        .help("Chat ID")
                        .required(false),
                ),
        )
        .subcommand(subcommand_sessions_delete());
}

fn arg_global(key: ConfigKey, env: &str, help: String) -> Arg {
    return Arg::new(key.to_string())
        .long(key.to_string())
        .env(env.to_string())
        .num_args(1)
        .help(help)
        .global(true);
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("deep-shiva")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(CHAT_HELP)
        .arg_required_else_help(false)
        .subcommand(Command::new("chat").about("Chat with Deep-Shiva. This is the default command."))
        .subcommand(Command::new("home").about("Overview of what Deep-Shiva can help with."))
        .subcommand(subcommand_dashboard())
        .subcommand(subcommand_culture())
        .subcommand(Command::new("emergency").about("Emergency numbers and an offline first aid guide."))
        .subcommand(Command::new("yoga").about("Capture a frame from the camera and get feedback on your yoga pose."))
        .subcommand(subcommand_language())
        .subcommand(subcommand_sessions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_completions())
        .arg(
            arg_global(
                ConfigKey::ConfigFile,
                "DEEP_SHIVA_CONFIG_FILE",
                format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)),
            )
            .short('c'),
        )
        .arg(arg_global(
            ConfigKey::ApiURL,
            "DEEP_SHIVA_API_URL",
            format!("Deep-Shiva API URL. [default: {}]", Config::default(ConfigKey::ApiURL)),
        ))
        .arg(
            arg_global(
                ConfigKey::Camera,
                "DEEP_SHIVA_CAMERA",
                format!("Camera used by yoga mode. [default: {}]", Config::default(ConfigKey::Camera)),
            )
            .value_parser(PossibleValuesParser::new(CameraName::VARIANTS)),
        )
        .arg(arg_global(
            ConfigKey::CameraCommand,
            "DEEP_SHIVA_CAMERA_COMMAND",
            "Shell command that writes a single JPEG frame to stdout when using the command camera.".to_string(),
        ))
        .arg(arg_global(
            ConfigKey::CameraFile,
            "DEEP_SHIVA_CAMERA_FILE",
            "Path to a JPEG image used as the frame when using the file camera.".to_string(),
        ))
        .arg(arg_global(
            ConfigKey::DataDir,
            "DEEP_SHIVA_DATA_DIR",
            format!("Directory for saved chats and preferences. [default: {}]", Config::default(ConfigKey::DataDir)),
        ))
        .arg(arg_global(
            ConfigKey::SaveDebounce,
            "DEEP_SHIVA_SAVE_DEBOUNCE",
            format!("Time to wait in milliseconds after the last change before saving a chat. [default: {}]", Config::default(ConfigKey::SaveDebounce)),
        ))
        .arg(
            arg_global(
                ConfigKey::Speech,
                "DEEP_SHIVA_SPEECH",
                format!("Speech recognizer used for voice input. [default: {}]", Config::default(ConfigKey::Speech)),
            )
            .value_parser(PossibleValuesParser::new(SpeechName::VARIANTS)),
        )
        .arg(arg_global(
            ConfigKey::SpeechCommand,
            "DEEP_SHIVA_SPEECH_COMMAND",
            "Shell command that prints one transcript per line when using the command speech recognizer. Lines starting with ~ are interim results.".to_string(),
        ))
        .arg(arg_global(
            ConfigKey::UserID,
            "DEEP_SHIVA_USER_ID",
            format!("User ID sent with chat queries. [default: {}]", Config::default(ConfigKey::UserID)),
        ));
}

fn translator() -> Result<Translator> {
    return Ok(Translator::new(preferences()?.language()));
}

async fn run_page(name: &str, page_matches: &ArgMatches) -> Result<()> {
    let translator = translator()?;
    match name {
        "home" => pages::home::run(&translator),
        "dashboard" => {
            let carbon = page_matches
                .get_one::<f64>("distance")
                .map(|distance| {
                    let vehicle_type = page_matches
                        .get_one::<String>("vehicle")
                        .and_then(|e| return VehicleType::parse(e))
                        .unwrap_or_default();
                    return CarbonRequest {
                        distance: *distance,
                        vehicle_type,
                    };
                });
            pages::dashboard::run(&translator, carbon).await;
        }
        "culture" => {
            let favorite = page_matches.get_one::<u64>("favorite").copied();
            pages::culture::run(&translator, &preferences()?, favorite).await?;
        }
        "emergency" => pages::emergency::run(&translator),
        "yoga" => pages::yoga::run(&translator).await?,
        _ => bail!(format!("Unknown page {name}")),
    }

    return Ok(());
}

/// Returns true when the chat UI should start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("chat", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
        }
        Some((
            name @ ("home" | "dashboard" | "culture" | "emergency" | "yoga"),
            subcmd_matches,
        )) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            run_page(name, subcmd_matches).await?;
            return Ok(false);
        }
        Some(("language", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            match subcmd_matches.subcommand() {
                Some(("set", set_matches)) => {
                    set_language(set_matches.get_one::<String>("code"))?;
                }
                _ => {
                    let language = preferences()?.language();
                    let translator = Translator::new(language);
                    println!(
                        "{}: {} ({language})",
                        translator.t("language.title", None),
                        language.display_name()
                    );
                }
            }
            return Ok(false);
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(false);
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("sessions", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            match subcmd_matches.subcommand() {
                Some(("dir", _)) => {
                    println!("{}", Config::get(ConfigKey::DataDir));
                    return Ok(false);
                }
                Some(("list", _)) => {
                    print_sessions_list()?;
                    return Ok(false);
                }
                Some(("open", open_matches)) => {
                    if let Some(session_id) = open_matches.get_one::<String>("session-id") {
                        load_config_from_session(session_id)?;
                    } else if !load_config_from_session_interactive()? {
                        return Ok(false);
                    }
                }
                Some(("delete", delete_matches)) => {
                    if let Some(session_id) = delete_matches.get_one::<String>("session-id") {
                        if sessions()?.delete(session_id)? {
                            println!("Deleted chat {session_id}");
                        } else {
                            println!(
                                "{}",
                                format!("No saved chat with ID {session_id}")
                                    .if_supports_color(Stream::Stdout, |t| return t.yellow())
                            );
                        }
                    } else if delete_matches.get_flag("all") {
                        sessions()?.delete_all()?;
                        println!("Deleted all chats");
                    } else {
                        subcommand_sessions_delete().print_long_help()?;
                    }
                    return Ok(false);
                }
                _ => {
                    subcommand_sessions().print_long_help()?;
                    return Ok(false);
                }
            }
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
