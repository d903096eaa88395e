//! Data structures for the REST API module.

/// Query parameter for API token authentication.
pub mod query_token;

/// Shared data context for API request handlers.
pub mod api_service_data;

/// Body of the user registration endpoint.
pub mod register_payload;

/// Body of the login endpoint.
pub mod login_payload;

/// Body of the profile update endpoint.
pub mod profile_update_payload;

/// Body of the password change endpoint.
pub mod password_change_payload;

/// Body of the role assignment endpoint.
pub mod role_payload;

/// Body of the forum creation endpoint.
pub mod forum_create_payload;

/// Body of the thread creation endpoint.
pub mod thread_create_payload;

/// Body of the post creation endpoint.
pub mod post_create_payload;

/// Query string of the torrent listing endpoint.
pub mod torrent_list_query;

/// Query string of the top torrents endpoint.
pub mod top_query;

/// Query string of the lucky search endpoint.
pub mod lucky_query;

/// Query string of paged listings.
pub mod page_query;

/// Query string of bounded listings.
pub mod limit_query;
