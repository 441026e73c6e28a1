//! Helpers for classifying SQLx errors.

/// Unique constraint on `short_links.short_url`.
pub const SHORT_URL_CONSTRAINT: &str = "short_links_short_url_key";
/// Unique constraint on `short_links.original_url`.
pub const ORIGINAL_URL_CONSTRAINT: &str = "short_links_original_url_key";

/// Returns true if `e` is a unique violation of the named constraint.
pub fn is_unique_violation_on(e: &sqlx::Error, constraint: &str) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.constraint() == Some(constraint)
}
