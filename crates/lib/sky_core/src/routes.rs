//! Panel routes.
//!
//! Every screen of the admin panel has a [`Route`]. All routes except the
//! login screen and the not-found fallback require a valid session.

use std::fmt;

/// Path of the login screen.
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Users,
    UserDetails { user_id: String },
    UserReview { user_id: String },
    UserPhotos { user_id: String },
    PendingReviews,
    VerifiedUsers,
    UnverifiedUsers,
    CreateAdmin,
    AdminList,
    EditAdmin { id: String },
    Categories,
    Orders,
    Advertisements,
    Anuncios,
    ReviewAd { id: String },
    Denuncias,
    Settings,
    NotFound { path: String },
}

impl Route {
    /// Resolve a panel path. Query strings, fragments and a trailing slash
    /// are ignored; unknown paths map to [`Route::NotFound`].
    pub fn parse(path: &str) -> Route {
        let bare = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        let segments: Vec<&str> = bare.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["login"] => Route::Login,
            ["dashboard"] => Route::Dashboard,
            ["users"] => Route::Users,
            ["user", id] => Route::UserDetails {
                user_id: (*id).to_string(),
            },
            ["user", id, "review"] => Route::UserReview {
                user_id: (*id).to_string(),
            },
            ["user", id, "fotos"] => Route::UserPhotos {
                user_id: (*id).to_string(),
            },
            ["pending-reviews"] => Route::PendingReviews,
            ["verifiedUsers"] => Route::VerifiedUsers,
            ["unverifiedUsers"] => Route::UnverifiedUsers,
            ["create-admin"] => Route::CreateAdmin,
            ["admin-list"] => Route::AdminList,
            ["admin", id, "edit"] => Route::EditAdmin {
                id: (*id).to_string(),
            },
            ["categories"] => Route::Categories,
            ["orders"] => Route::Orders,
            ["advertisements"] => Route::Advertisements,
            ["anuncios"] => Route::Anuncios,
            ["anuncio", id, "revisar"] => Route::ReviewAd {
                id: (*id).to_string(),
            },
            ["denuncias"] => Route::Denuncias,
            ["settings"] => Route::Settings,
            _ => Route::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// Canonical path of this route.
    pub fn path(&self) -> String {
        match self {
            Route::Login => LOGIN_PATH.to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Users => "/users".to_string(),
            Route::UserDetails { user_id } => format!("/user/{user_id}"),
            Route::UserReview { user_id } => format!("/user/{user_id}/review"),
            Route::UserPhotos { user_id } => format!("/user/{user_id}/fotos"),
            Route::PendingReviews => "/pending-reviews".to_string(),
            Route::VerifiedUsers => "/verifiedUsers".to_string(),
            Route::UnverifiedUsers => "/unverifiedUsers".to_string(),
            Route::CreateAdmin => "/create-admin".to_string(),
            Route::AdminList => "/admin-list".to_string(),
            Route::EditAdmin { id } => format!("/admin/{id}/edit"),
            Route::Categories => "/categories".to_string(),
            Route::Orders => "/orders".to_string(),
            Route::Advertisements => "/advertisements".to_string(),
            Route::Anuncios => "/anuncios".to_string(),
            Route::ReviewAd { id } => format!("/anuncio/{id}/revisar"),
            Route::Denuncias => "/denuncias".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::NotFound { path } => path.clone(),
        }
    }

    /// Whether rendering this route requires a valid session.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login | Route::NotFound { .. })
    }

    pub fn is_login(&self) -> bool {
        matches!(self, Route::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
