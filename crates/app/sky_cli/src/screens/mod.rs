//! Panel screens rendered as text.
//!
//! Every function here runs behind the route guard; none of them checks the
//! session itself.

mod admins;
mod ads;
mod categories;
mod dashboard;
mod denuncias;
mod orders;
mod settings;
mod table;
mod users;

use sky_api_client::endpoints::users::UserFilter;
use sky_core::routes::Route;

use crate::Result;
use crate::cli::{Commands, UserListFilter, UsersCommand};
use crate::context::AppContext;

/// Run a protected command.
pub async fn show(ctx: &AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::Whoami => dashboard::whoami(ctx),
        Commands::Dashboard => dashboard::show(ctx).await,
        Commands::Users(cmd) => users::run(ctx, cmd).await,
        Commands::Pending => {
            let list = UsersCommand::List {
                filter: UserListFilter::Pending,
            };
            users::run(ctx, list).await
        }
        Commands::Admins(cmd) => admins::run(ctx, cmd).await,
        Commands::Categories(cmd) => categories::run(ctx, cmd).await,
        Commands::Orders(cmd) => orders::run(ctx, cmd).await,
        Commands::Ads(cmd) => ads::run(ctx, cmd).await,
        Commands::Denuncias(cmd) => denuncias::run(ctx, cmd).await,
        Commands::Settings(cmd) => settings::run(ctx, cmd),
        Commands::Open { path } => open(ctx, &Route::parse(&path)).await,
        Commands::Login { .. } | Commands::Logout | Commands::Version => Ok(()),
    }
}

/// Default view of a protected route.
async fn open(ctx: &AppContext, route: &Route) -> Result<()> {
    match route {
        Route::Dashboard => dashboard::show(ctx).await,
        Route::Users => users::list(ctx, UserFilter::All).await,
        Route::VerifiedUsers => users::list(ctx, UserFilter::Verified).await,
        Route::UnverifiedUsers => users::list(ctx, UserFilter::Unverified).await,
        Route::PendingReviews => users::list(ctx, UserFilter::Pending).await,
        Route::UserDetails { user_id } | Route::UserReview { user_id } => {
            users::show(ctx, user_id).await
        }
        Route::UserPhotos { user_id } => users::photos(ctx, user_id).await,
        Route::CreateAdmin => {
            println!("sky_cli admins create --name <name> --email <email> --password <password>");
            Ok(())
        }
        Route::AdminList => admins::list(ctx, []).await,
        Route::EditAdmin { id } => admins::show(ctx, id).await,
        Route::Categories => categories::list(ctx).await,
        Route::Orders => orders::list(ctx, 1, None, None).await,
        Route::Advertisements => ads::list(ctx, true).await,
        Route::Anuncios => ads::list(ctx, false).await,
        Route::ReviewAd { id } => ads::show(ctx, id).await,
        Route::Denuncias => denuncias::list(ctx).await,
        Route::Settings => settings::show(ctx),
        // Unprotected; handled before the guard.
        Route::Login | Route::NotFound { .. } => Ok(()),
    }
}
