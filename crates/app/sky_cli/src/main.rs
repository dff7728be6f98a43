// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use context::AppContext;
use sky_api_client::endpoints::auth::{self, Credentials};
use sky_core::navigation::Navigator;
use sky_core::routes::Route;

mod cli;
mod context;
mod logging;
mod screens;

/// Exit status when the command needs a session.
const EXIT_LOGIN_REQUIRED: i32 = 2;

fn main() -> Result<()> {
    if let Err(e) = run() {
        std::process::exit(report(&e));
    }
    Ok(())
}

/// Print `e` for the user and return the exit status.
fn report(e: &Error) -> i32 {
    match e {
        Error::LoginRequired => {
            eprintln!("{e}");
            EXIT_LOGIN_REQUIRED
        }
        // No logger to report through.
        Error::FlexiLogger(_) => {
            eprintln!("{e}");
            1
        }
        e => {
            log::error!("{}", e);
            1
        }
    }
}

fn run() -> Result<()> {
    let args = Cli::parse();
    logging::init(args.verbose)?;

    if let Commands::Version = &args.command {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let ctx = AppContext::new(&args)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(execute(&ctx, args.command))
}

async fn execute(ctx: &AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::Login { username, password } => {
            let admin = auth::login(&ctx.client, &Credentials::new(username, password)).await?;
            println!("Logged in as admin {admin}.");
            Ok(())
        }
        Commands::Logout => {
            auth::logout(&ctx.client);
            println!("Logged out.");
            Ok(())
        }
        command => {
            let Some(route) = command.route() else {
                return Ok(());
            };
            match route {
                route if route.is_protected() => render(ctx, route, command).await,
                Route::NotFound { path } => Err(Error::Custom(format!("No such page: {path}"))),
                _ if ctx.session.is_valid() => {
                    println!("Already logged in.");
                    Ok(())
                }
                _ => Err(Error::LoginRequired),
            }
        }
    }
}

/// Show a protected screen behind the route guard.
///
/// Ending on the login route, whether the guard sent us there or a 401 did
/// mid-screen, means the user has to log in again.
async fn render(ctx: &AppContext, route: Route, command: Commands) -> Result<()> {
    ctx.history.push(route);

    let Some(screen) = ctx.guard.render(|| screens::show(ctx, command)) else {
        return Err(Error::LoginRequired);
    };
    let outcome = screen.await;

    if ctx.history.current().is_login() {
        return Err(Error::LoginRequired);
    }
    outcome
}
