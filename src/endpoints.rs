//! The URIs served by the web app and the backend paths it consumes.

/// The root route which redirects to the ledger list.
pub const ROOT: &str = "/";
/// The page for creating a new account.
pub const SIGN_UP_VIEW: &str = "/sign_up";
/// The page users land on after signing up.
pub const LOG_IN_VIEW: &str = "/log_in";
/// The page listing income and expense entries.
pub const LIST_VIEW: &str = "/list";
/// The page with the monthly and per-category charts.
pub const CHARTS_VIEW: &str = "/charts";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for submitting the sign-up form.
pub const SIGN_UP_API: &str = "/api/sign_up";
/// The route for validating the sign-up form as the user types.
pub const SIGN_UP_VALIDATE_API: &str = "/api/sign_up/validate";

/// Paths on the ledger backend, relative to its base URL.
pub mod backend {
    /// Income entries with their categories.
    pub const INCOME_LIST: &str = "/check/income/category";
    /// Expense entries with their categories.
    pub const EXPENSE_LIST: &str = "/check/expense/category";
    /// Net totals keyed by month.
    pub const MONTHLY_TOTALS: &str = "/ledger/statistics/monthly";
    /// Income totals keyed by month.
    pub const MONTHLY_INCOME: &str = "/ledger/income/monthly";
    /// Expense totals keyed by month.
    pub const MONTHLY_EXPENSE: &str = "/ledger/expense/monthly";
    /// Expense sums keyed by `"<category>_<id>"`.
    pub const CATEGORY_SHARES: &str = "/check/expense/sum-by-category";
    /// Account creation.
    pub const SIGN_UP: &str = "/auth/signup";
    /// Log-in form target.
    pub const LOG_IN: &str = "/auth/login";
}
