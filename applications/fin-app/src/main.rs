/// Fin Client - command-line front end for the finance API
use clap::{Parser, Subcommand};
use fin_app::{logging, AdminWebClient, AppConfig, ClientContext, MobileClient, TracingNotifier};
use fin_settings::FieldInput;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "fin-client")]
#[command(about = "Finance client: sign in, manage the session, edit admin settings", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "FIN_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the restored session and reachable screens
    Status,
    /// Sign in and remember the session
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Create an account (does not sign in)
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Admin system settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Print the current settings
    Show,
    /// Change one field and save, e.g. `set interestRates.home 9.25`
    Set {
        /// Field path, bare or dotted
        path: String,
        /// New value; `true`/`false` for switches
        value: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    logging::init(&config.logging.filter);

    let context = ClientContext::from_config(&config).await?;
    let notifier = Arc::new(TracingNotifier);

    match cli.command {
        Commands::Status => {
            let session = context.holder.session();
            println!("Screens: {:?}", context.screen_set());
            match session.user {
                Some(user) => println!("User: {} <{}> ({})", user.name, user.email, user.role),
                None => println!("Not signed in"),
            }
        }
        Commands::Login { email, password } => {
            let app = MobileClient::new(context, notifier);
            app.login(&email, &password).await?;
            println!("Signed in, landing on {:?}", app.current_screen());
        }
        Commands::Register {
            name,
            email,
            phone,
            password,
        } => {
            let app = MobileClient::new(context, notifier);
            app.register(&name, &email, &phone, &password).await?;
            println!("Registered {email}; sign in to continue");
        }
        Commands::Logout => {
            MobileClient::new(context, notifier).logout().await;
            println!("Signed out");
        }
        Commands::Settings { action } => {
            let app = AdminWebClient::new(context, notifier);
            let form = app.open_settings().await?;

            match action {
                SettingsCommand::Show => {
                    let settings = form.settings().await;
                    println!("{}", serde_json::to_string_pretty(&settings)?);
                }
                SettingsCommand::Set { path, value } => {
                    let input = match value.as_str() {
                        "true" => FieldInput::Toggle(true),
                        "false" => FieldInput::Toggle(false),
                        _ => FieldInput::Text(value),
                    };
                    form.set_field(&path, input).await?;
                    form.submit().await?;
                    println!("Saved {path}");
                }
            }
        }
    }

    Ok(())
}
