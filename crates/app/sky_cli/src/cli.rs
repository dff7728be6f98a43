use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use sky_core::routes::Route;

/// SkyVenda admin panel.
#[derive(Parser)]
#[command(name = "sky_cli", version)]
pub struct Cli {
    /// Backend base URL.
    #[arg(long, env = "SKY_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Directory holding the saved session.
    #[arg(long, env = "SKY_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Keep the session in memory only; nothing is written to disk.
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and save the session.
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "SKY_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Remove the saved session.
    Logout,
    /// Show the logged-in admin and when the session expires.
    Whoami,
    /// System summary.
    Dashboard,
    /// Marketplace users.
    #[command(subcommand)]
    Users(UsersCommand),
    /// Users waiting for document review.
    Pending,
    /// Panel administrators.
    #[command(subcommand)]
    Admins(AdminsCommand),
    /// Product categories.
    #[command(subcommand)]
    Categories(CategoriesCommand),
    /// Marketplace orders.
    #[command(subcommand)]
    Orders(OrdersCommand),
    /// Advertisements.
    #[command(subcommand)]
    Ads(AdsCommand),
    /// Product reports.
    #[command(subcommand)]
    Denuncias(DenunciasCommand),
    /// Panel preferences.
    #[command(subcommand)]
    Settings(SettingsCommand),
    /// Show the screen behind a panel path, e.g. `/user/12` or `/orders`.
    Open { path: String },
    /// Print version.
    Version,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum UserListFilter {
    All,
    Verified,
    Unverified,
    Pending,
}

#[derive(Subcommand)]
pub enum UsersCommand {
    /// List users.
    List {
        #[arg(long, value_enum, default_value_t = UserListFilter::All)]
        filter: UserListFilter,
    },
    /// Show one user.
    Show { id: String },
    /// Identity document links of a user.
    Photos { id: String },
    /// A user's products.
    Products {
        id: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = sky_api_client::endpoints::users::PRODUCTS_PAGE_SIZE)]
        limit: u32,
    },
    /// A user's wallet transactions.
    Transactions { id: String },
    Activate { id: String },
    Deactivate { id: String },
    /// Approve a user's documents.
    Approve { id: String },
    /// Reject a user's documents.
    Reject {
        id: String,
        #[arg(long)]
        reason: String,
    },
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum AdminsCommand {
    /// List the logged-in admin plus known admins.
    List {
        /// Extra admin IDs to include.
        #[arg(long = "id")]
        ids: Vec<String>,
    },
    Show { id: String },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "SKY_NEW_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Edit an admin; omitted fields keep their current value.
    Edit {
        id: String,
        #[command(flatten)]
        fields: AdminFields,
    },
    Delete { id: String },
}

#[derive(Args, Default)]
pub struct AdminFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub username: Option<String>,
}

#[derive(Subcommand)]
pub enum CategoriesCommand {
    List,
    Add { name: String },
    Rename { id: String, name: String },
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum OrdersCommand {
    List {
        #[arg(long, default_value_t = 1)]
        page: u64,
        /// Only orders with this status.
        #[arg(long)]
        status: Option<String>,
        /// Buyer or product name contains this text.
        #[arg(long)]
        search: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum AdsCommand {
    List {
        /// Use the advertisements management listing.
        #[arg(long)]
        managed: bool,
    },
    Show { id: String },
    Review {
        id: String,
        /// aprovado, pendente or rejeitado.
        #[arg(long)]
        status: String,
        #[arg(long, default_value_t = 30)]
        days: u32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        link: Option<String>,
        /// Replacement image file.
        #[arg(long)]
        photo: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum DenunciasCommand {
    List,
    /// Dismiss a report.
    Delete { id: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Show or set the panel theme.
    Theme { value: Option<Theme> },
}

impl Commands {
    /// Panel route a command renders. `None` for commands outside the panel.
    pub fn route(&self) -> Option<Route> {
        let route = match self {
            Commands::Login { .. } | Commands::Logout => Route::Login,
            Commands::Whoami | Commands::Dashboard => Route::Dashboard,
            Commands::Users(cmd) => match cmd {
                UsersCommand::List { filter } => match filter {
                    UserListFilter::All => Route::Users,
                    UserListFilter::Verified => Route::VerifiedUsers,
                    UserListFilter::Unverified => Route::UnverifiedUsers,
                    UserListFilter::Pending => Route::PendingReviews,
                },
                UsersCommand::Photos { id } => Route::UserPhotos {
                    user_id: id.clone(),
                },
                UsersCommand::Approve { id } | UsersCommand::Reject { id, .. } => {
                    Route::UserReview {
                        user_id: id.clone(),
                    }
                }
                UsersCommand::Show { id }
                | UsersCommand::Products { id, .. }
                | UsersCommand::Transactions { id }
                | UsersCommand::Activate { id }
                | UsersCommand::Deactivate { id }
                | UsersCommand::Delete { id } => Route::UserDetails {
                    user_id: id.clone(),
                },
            },
            Commands::Pending => Route::PendingReviews,
            Commands::Admins(cmd) => match cmd {
                AdminsCommand::Create { .. } => Route::CreateAdmin,
                AdminsCommand::Edit { id, .. } => Route::EditAdmin { id: id.clone() },
                AdminsCommand::List { .. }
                | AdminsCommand::Show { .. }
                | AdminsCommand::Delete { .. } => Route::AdminList,
            },
            Commands::Categories(_) => Route::Categories,
            Commands::Orders(_) => Route::Orders,
            Commands::Ads(cmd) => match cmd {
                AdsCommand::List { managed: true } => Route::Advertisements,
                AdsCommand::List { managed: false } => Route::Anuncios,
                AdsCommand::Show { id } | AdsCommand::Review { id, .. } => {
                    Route::ReviewAd { id: id.clone() }
                }
            },
            Commands::Denuncias(_) => Route::Denuncias,
            Commands::Settings(_) => Route::Settings,
            Commands::Open { path } => Route::parse(path),
            Commands::Version => return None,
        };
        Some(route)
    }
}
